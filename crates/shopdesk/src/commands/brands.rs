//! Brand command handlers.

use tabled::Tabled;

use shopdesk_core::Brand;

use crate::cli::{CrudArgs, CrudCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::Stores;

#[derive(Tabled)]
struct BrandRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CATALOG")]
    catalog: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "UPDATED")]
    updated: String,
}

fn to_row(brand: &Brand) -> BrandRow {
    BrandRow {
        id: brand.id,
        name: brand.name.clone(),
        catalog: brand.catalog.clone(),
        status: output::cell(brand.status_desc.as_deref()),
        updated: output::cell(brand.updated_at_desc.as_deref()),
    }
}

pub async fn handle(stores: &Stores, args: CrudArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        CrudCommand::List(list) => {
            let items = stores.brands.list(&super::list_params(&list)).await?;
            let rendered =
                output::render_list(&global.output, &items, to_row, |b| b.id.to_string());
            output::print_output(&rendered, global.quiet);
            super::print_total(items.len(), stores.brands.count(), global);
            Ok(())
        }

        CrudCommand::Get { id } => {
            let brand = stores.brands.get_by_id(id).await?;
            let rendered = output::render_single(&global.output, &brand, |b| b.id.to_string());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        CrudCommand::Add { json } => {
            let brand = stores.brands.add(super::parse_doc(&json)?).await?;
            if !global.quiet {
                eprintln!("Brand {} created (id {})", brand.name, brand.id);
            }
            Ok(())
        }

        CrudCommand::Update { id, json } => {
            stores
                .brands
                .update_by_id(id, super::parse_doc(&json)?)
                .await?;
            if !global.quiet {
                eprintln!("Brand {id} updated");
            }
            Ok(())
        }
    }
}
