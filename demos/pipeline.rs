//! Reusable Order Pipeline
//!
//! Defines an order-processing chain once and runs it for several orders,
//! including a parser that may panic (captured with `convert`) and a
//! recovery step for orders that exceed the credit limit.
//!
//! Run with: cargo run --example pipeline

use chain_rail::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum OrderError {
    Parse(String),
    ParserCrashed(String),
    OverLimit { total: i64, limit: i64 },
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderError::Parse(reason) => write!(f, "could not parse order: {reason}"),
            OrderError::ParserCrashed(reason) => write!(f, "parser crashed: {reason}"),
            OrderError::OverLimit { total, limit } => write!(f, "total {total} exceeds limit {limit}"),
        }
    }
}

impl std::error::Error for OrderError {}

// "<quantity>x<unit price>", e.g. "3x250"
async fn parse_order(raw: &'static str) -> Result<Record<i64>, String> {
    let (quantity, price) = raw.split_once('x').ok_or_else(|| format!("`{raw}` has no `x`"))?;
    let quantity: i64 = quantity.parse().map_err(|_| format!("bad quantity in `{raw}`"))?;
    if quantity == 0 {
        panic!("zero quantity reached the parser");
    }
    let price: i64 = price.parse().map_err(|_| format!("bad price in `{raw}`"))?;
    Ok(record! { "quantity" => quantity, "price" => price })
}

fn to_order_error(thrown: Thrown<String>) -> OrderError {
    match thrown {
        Thrown::Error(reason) => OrderError::Parse(reason),
        Thrown::Panic(panic) => OrderError::ParserCrashed(panic.to_string()),
    }
}

#[tokio::main]
async fn main() {
    let definition = prepare::<&'static str, Record<i64>, OrderError>()
        .on_success(|raw, _| convert(move || parse_order(raw), to_order_error))
        .add_data(|order, _| {
            let total = order.get("quantity").copied().unwrap_or(0) * order.get("price").copied().unwrap_or(0);
            succeed(record! { "total" => total })
        })
        .pass_through_grouped(|all: Record<i64>| async move {
            let total = all.get("total").copied().unwrap_or(0);
            let limit = all.get("limit").copied().unwrap_or(i64::MAX);
            if total > limit {
                Err(OrderError::OverLimit { total, limit })
            } else {
                Ok(())
            }
        })
        .on_error(|error, context| async move {
            match error {
                OrderError::OverLimit { limit, .. } if context.contains_key("allow_partial") => {
                    Ok(record! { "total" => limit, "partial" => 1 })
                },
                other => Err(other),
            }
        });

    let limits = record! { "limit" => 1_000 };
    let lenient = record! { "limit" => 1_000, "allow_partial" => 1 };

    for (raw, context) in [
        ("3x250", limits.clone()),
        ("5x250", limits.clone()),
        ("5x250", lenient),
        ("0x100", limits.clone()),
        ("three", limits),
    ] {
        match definition.run_async(raw, context).await {
            Ok(order) => println!("{raw}: accepted {order:?}"),
            Err(error) => println!("{raw}: rejected, {error}"),
        }
    }
}
