//! Order summary - turns a JSON document of customer orders into per-order totals.
//!
//! The crate is a single linear transform:
//! 1. Parse the input text into a generic `serde_json::Value`
//! 2. Validate it into typed `OrderDocument` / `Order` / `Item` records
//! 3. Fold each order's items into an exact `rust_decimal::Decimal` total
//! 4. Serialize the resulting `OrderSummary` list back to JSON
//!
//! # Example
//!
//! ```
//! use order_summary::formatting::to_json;
//! use order_summary::summarize::summarize_json;
//!
//! let input = r#"{"orders":[{"order_id":1001,"customer":"Alice","items":[
//!     {"name":"Laptop","price":800,"quantity":1},
//!     {"name":"Mouse","price":20,"quantity":2}]}]}"#;
//!
//! let summaries = summarize_json(input).unwrap();
//! assert_eq!(
//!     to_json(&summaries, false).unwrap(),
//!     r#"[{"order_id":1001,"customer":"Alice","total":840}]"#
//! );
//! ```

pub mod cli;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod parsing;
pub mod summarize;

pub use crate::core::config::{AppConfig, LogFormat};
pub use crate::core::models::{Item, Order, OrderDocument, OrderSummary};
pub use crate::errors::OrderError;
pub use crate::summarize::{summarize, summarize_json};

/// Configure structured logging on stderr.
///
/// `RUST_LOG` controls the level filter (default `info`). Stdout is left
/// untouched so it only ever carries summary output. Calling this more than
/// once is harmless: later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// order_summary::setup_logging(order_summary::LogFormat::Json);
/// ```
pub fn setup_logging(format: LogFormat) {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
        }
        LogFormat::Text => {
            let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
        }
    };

    if let Err(e) = result {
        tracing::debug!("Logging already initialized: {}", e);
    }
}
