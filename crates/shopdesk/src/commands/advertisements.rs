//! Advertisement command handlers.

use tabled::Tabled;

use shopdesk_core::{Advertisement, CategoryOption};

use crate::cli::{AdvertisementsArgs, AdvertisementsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::Stores;

#[derive(Tabled)]
struct AdvertisementRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "LINK")]
    link: String,
    #[tabled(rename = "RANK")]
    rank: i32,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "ACTIVE")]
    active: String,
}

fn to_row(ad: &Advertisement) -> AdvertisementRow {
    let active = match (&ad.started_at_desc, &ad.ended_at_desc) {
        (Some(start), Some(end)) => format!("{start} ~ {end}"),
        _ => "-".to_owned(),
    };
    AdvertisementRow {
        id: ad.id,
        category: ad.category.clone(),
        link: ad.link.clone(),
        rank: ad.rank,
        status: output::cell(ad.status_desc.as_deref()),
        active,
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
    args: AdvertisementsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AdvertisementsCommand::List(list) => {
            let items = stores
                .advertisements
                .list(&super::list_params(&list))
                .await?;
            let rendered =
                output::render_list(&global.output, &items, to_row, |a| a.id.to_string());
            output::print_output(&rendered, global.quiet);
            super::print_total(items.len(), stores.advertisements.count(), global);
            Ok(())
        }

        AdvertisementsCommand::Get { id } => {
            let ad = stores.advertisements.get_by_id(id).await?;
            let rendered = output::render_single(&global.output, &ad, |a| a.id.to_string());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        AdvertisementsCommand::Add { json } => {
            let ad = stores.advertisements.add(super::parse_doc(&json)?).await?;
            if !global.quiet {
                eprintln!("Advertisement created (id {})", ad.id);
            }
            Ok(())
        }

        AdvertisementsCommand::Update { id, json } => {
            stores
                .advertisements
                .update_by_id(id, super::parse_doc(&json)?)
                .await?;
            if !global.quiet {
                eprintln!("Advertisement {id} updated");
            }
            Ok(())
        }

        AdvertisementsCommand::Categories => {
            let categories = stores.advertisements.categories().await?;
            let rendered =
                output::render_list(&global.output, categories.as_slice(), category_row, |c| {
                    c.value.clone()
                });
            output::print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
