//! Region command handlers.

use std::str::FromStr;

use tabled::Tabled;

use shopdesk_core::model::RegionCategory;
use shopdesk_core::{CategoryOption, Region};

use crate::cli::{GlobalOpts, RegionsArgs, RegionsCommand};
use crate::error::CliError;
use crate::output;

use super::Stores;

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "CODE")]
    code: i64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

fn to_row(region: &Region) -> RegionRow {
    RegionRow {
        id: region.id,
        category: region.category.clone(),
        code: region.code,
        name: region.name.clone(),
        status: output::cell(region.status_desc.as_deref()),
    }
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "VALUE")]
    value: String,
    #[tabled(rename = "NAME")]
    name: String,
}

fn category_row(option: &CategoryOption) -> CategoryRow {
    CategoryRow {
        value: option.value.clone(),
        name: option.name.clone(),
    }
}

pub async fn handle(
    stores: &Stores,
    args: RegionsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RegionsCommand::List { list, category } => {
            // Validate the level name before hitting the network.
            if let Some(ref category) = category {
                RegionCategory::from_str(category).map_err(|_| CliError::Validation {
                    field: "category".into(),
                    reason: format!(
                        "unknown level '{category}' (country, province, city, area, street)"
                    ),
                })?;
            }
            let mut params = super::list_params(&list);
            params.category = category;

            let items = stores.regions.list(&params).await?;
            let rendered =
                output::render_list(&global.output, &items, to_row, |r| r.id.to_string());
            output::print_output(&rendered, global.quiet);
            super::print_total(items.len(), stores.regions.count(), global);
            Ok(())
        }

        RegionsCommand::Get { id } => {
            let region = stores.regions.get_by_id(id).await?;
            let rendered = output::render_single(&global.output, &region, |r| r.id.to_string());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        RegionsCommand::Update { id, json } => {
            stores
                .regions
                .update_by_id(id, super::parse_doc(&json)?)
                .await?;
            if !global.quiet {
                eprintln!("Region {id} updated");
            }
            Ok(())
        }

        RegionsCommand::Categories => {
            let categories = stores.regions.categories().await?;
            let rendered =
                output::render_list(&global.output, categories.as_slice(), category_row, |c| {
                    c.value.clone()
                });
            output::print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
