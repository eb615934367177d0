//! Order command handlers.

use tabled::Tabled;

use shopdesk_core::{Order, Status};

use crate::cli::{GlobalOpts, OrdersArgs, OrdersCommand};
use crate::error::CliError;
use crate::output;

use super::Stores;

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "SN")]
    sn: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "PAID")]
    paid: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "RECEIVER")]
    receiver: String,
    #[tabled(rename = "CREATED")]
    created: String,
}

fn to_row(order: &Order) -> OrderRow {
    OrderRow {
        sn: order.sn.clone(),
        amount: output::cell(order.amount_desc.as_deref()),
        paid: output::cell(order.pay_amount_desc.as_deref()),
        status: output::cell(order.status_desc.as_deref()),
        receiver: order.receiver_name.clone(),
        created: output::cell(order.created_at_desc.as_deref()),
    }
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "VALUE")]
    value: i32,
    #[tabled(rename = "NAME")]
    name: String,
}

fn status_row(status: &Status) -> StatusRow {
    StatusRow {
        value: status.value,
        name: status.name.clone(),
    }
}

pub async fn handle(stores: &Stores, args: OrdersArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        OrdersCommand::List(list) => {
            let items = stores.orders.list(&super::list_params(&list)).await?;
            let rendered = output::render_list(&global.output, &items, to_row, |o| o.sn.clone());
            output::print_output(&rendered, global.quiet);
            super::print_total(items.len(), stores.orders.count(), global);
            Ok(())
        }

        OrdersCommand::Get { sn } => {
            let order = stores.orders.get_by_sn(&sn).await?;
            let rendered = output::render_single(&global.output, &order, |o| o.sn.clone());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        OrdersCommand::Statuses => {
            let statuses = stores.orders.statuses().await?;
            let rendered = output::render_list(&global.output, statuses.as_slice(), status_row, |s| {
                s.name.clone()
            });
            output::print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
