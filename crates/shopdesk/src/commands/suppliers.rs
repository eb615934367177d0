//! Supplier command handlers.

use tabled::Tabled;

use shopdesk_core::Supplier;

use crate::cli::{CrudArgs, CrudCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::Stores;

#[derive(Tabled)]
struct SupplierRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CONTACT")]
    contact: String,
    #[tabled(rename = "MOBILE")]
    mobile: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "UPDATED")]
    updated: String,
}

fn to_row(supplier: &Supplier) -> SupplierRow {
    SupplierRow {
        id: supplier.id,
        name: supplier.name.clone(),
        contact: supplier.contact.clone(),
        mobile: supplier.mobile.clone(),
        status: output::cell(supplier.status_desc.as_deref()),
        updated: output::cell(supplier.updated_at_desc.as_deref()),
    }
}

pub async fn handle(stores: &Stores, args: CrudArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        CrudCommand::List(list) => {
            let items = stores.suppliers.list(&super::list_params(&list)).await?;
            let rendered =
                output::render_list(&global.output, &items, to_row, |s| s.id.to_string());
            output::print_output(&rendered, global.quiet);
            super::print_total(items.len(), stores.suppliers.count(), global);
            Ok(())
        }

        CrudCommand::Get { id } => {
            let supplier = stores.suppliers.get_by_id(id).await?;
            let rendered = output::render_single(&global.output, &supplier, |s| s.id.to_string());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        CrudCommand::Add { json } => {
            let supplier = stores.suppliers.add(super::parse_doc(&json)?).await?;
            if !global.quiet {
                eprintln!("Supplier {} created (id {})", supplier.name, supplier.id);
            }
            Ok(())
        }

        CrudCommand::Update { id, json } => {
            stores
                .suppliers
                .update_by_id(id, super::parse_doc(&json)?)
                .await?;
            if !global.quiet {
                eprintln!("Supplier {id} updated");
            }
            Ok(())
        }
    }
}
