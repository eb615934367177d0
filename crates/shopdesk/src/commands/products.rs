//! Product command handlers.

use tabled::Tabled;

use shopdesk_core::Product;

use crate::cli::{CrudArgs, CrudCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::Stores;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PRICE")]
    price: String,
    #[tabled(rename = "UNIT")]
    unit: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "ON SALE")]
    on_sale: String,
}

fn to_row(product: &Product) -> ProductRow {
    let on_sale = match (&product.started_at_desc, &product.ended_at_desc) {
        (Some(start), Some(end)) => format!("{start} ~ {end}"),
        _ => "-".to_owned(),
    };
    ProductRow {
        id: product.id,
        name: product.name.clone(),
        price: format!("{:.2}", product.price),
        unit: format!("{} {}", product.specs, product.unit),
        status: output::cell(product.status_desc.as_deref()),
        on_sale,
    }
}

pub async fn handle(stores: &Stores, args: CrudArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        CrudCommand::List(list) => {
            let items = stores.products.list(&super::list_params(&list)).await?;
            let rendered =
                output::render_list(&global.output, &items, to_row, |p| p.id.to_string());
            output::print_output(&rendered, global.quiet);
            super::print_total(items.len(), stores.products.count(), global);
            Ok(())
        }

        CrudCommand::Get { id } => {
            let product = stores.products.get_by_id(id).await?;
            let rendered = output::render_single(&global.output, &product, |p| p.id.to_string());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        CrudCommand::Add { json } => {
            let product = stores.products.add(super::parse_doc(&json)?).await?;
            if !global.quiet {
                eprintln!("Product {} created (id {})", product.name, product.id);
            }
            Ok(())
        }

        CrudCommand::Update { id, json } => {
            stores
                .products
                .update_by_id(id, super::parse_doc(&json)?)
                .await?;
            if !global.quiet {
                eprintln!("Product {id} updated");
            }
            Ok(())
        }
    }
}
