//! Product category command handlers.

use tabled::Tabled;

use shopdesk_core::ProductCategory;

use crate::cli::{CrudArgs, CrudCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::Stores;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "LEVEL")]
    level: i32,
    #[tabled(rename = "RANK")]
    rank: i32,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "UPDATED")]
    updated: String,
}

fn to_row(category: &ProductCategory) -> CategoryRow {
    CategoryRow {
        id: category.id,
        name: category.name.clone(),
        level: category.level,
        rank: category.rank,
        status: output::cell(category.status_desc.as_deref()),
        updated: output::cell(category.updated_at_desc.as_deref()),
    }
}

pub async fn handle(stores: &Stores, args: CrudArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        CrudCommand::List(list) => {
            let items = stores
                .product_categories
                .list(&super::list_params(&list))
                .await?;
            let rendered =
                output::render_list(&global.output, &items, to_row, |c| c.id.to_string());
            output::print_output(&rendered, global.quiet);
            super::print_total(items.len(), stores.product_categories.count(), global);
            Ok(())
        }

        CrudCommand::Get { id } => {
            let category = stores.product_categories.get_by_id(id).await?;
            let rendered = output::render_single(&global.output, &category, |c| c.id.to_string());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        CrudCommand::Add { json } => {
            let category = stores
                .product_categories
                .add(super::parse_doc(&json)?)
                .await?;
            if !global.quiet {
                eprintln!("Product category {} created (id {})", category.name, category.id);
            }
            Ok(())
        }

        CrudCommand::Update { id, json } => {
            stores
                .product_categories
                .update_by_id(id, super::parse_doc(&json)?)
                .await?;
            if !global.quiet {
                eprintln!("Product category {id} updated");
            }
            Ok(())
        }
    }
}
