use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::core::models::{OrderDocument, OrderSummary};
use crate::errors::OrderError;
#[cfg(feature = "debug-logs")]
use crate::formatting::format_summary_line;
use crate::parsing::parse_document;

/// Two-order document used by `order-summary --sample`.
pub const SAMPLE_DOCUMENT: &str = r#"{
  "orders": [
    {
      "order_id": 1001,
      "customer": "Alice",
      "items": [
        {"name": "Laptop", "price": 800, "quantity": 1},
        {"name": "Mouse", "price": 20, "quantity": 2}
      ]
    },
    {
      "order_id": 1002,
      "customer": "Bob",
      "items": [
        {"name": "Keyboard", "price": 50, "quantity": 1},
        {"name": "Monitor", "price": 150, "quantity": 2}
      ]
    }
  ]
}"#;

/// Produces one summary per order, in document order.
#[must_use]
pub fn summarize(document: &OrderDocument) -> Vec<OrderSummary> {
    document
        .orders
        .iter()
        .map(|order| {
            let summary = OrderSummary::from(order);

            #[cfg(feature = "debug-logs")]
            debug!(items = order.items().len(), "{}", format_summary_line(&summary));

            #[cfg(not(feature = "debug-logs"))]
            debug!(
                order_id = summary.order_id,
                items = order.items().len(),
                "Summarized order [customer masked, enable debug-logs feature to view]"
            );

            summary
        })
        .collect()
}

/// Validates a parsed JSON value and summarizes it.
///
/// # Errors
///
/// Returns `OrderError::ShapeError` if a required field is missing or has the
/// wrong type anywhere in the document.
pub fn summarize_value(value: &Value) -> Result<Vec<OrderSummary>, OrderError> {
    let document = OrderDocument::try_from(value)?;
    Ok(summarize(&document))
}

/// Parses JSON text and summarizes every order in it.
///
/// The call is atomic: any parse or shape failure returns an error and no
/// summaries.
///
/// # Errors
///
/// Returns `OrderError::ParseError` for malformed JSON and
/// `OrderError::ShapeError` for a well-formed document with missing or
/// mistyped fields.
///
/// # Examples
///
/// ```
/// use order_summary::summarize::summarize_json;
/// use rust_decimal::Decimal;
///
/// let text = r#"{"orders":[{"order_id":1001,"customer":"Alice","items":[
///     {"name":"Laptop","price":800,"quantity":1},
///     {"name":"Mouse","price":20,"quantity":2}]}]}"#;
///
/// let summaries = summarize_json(text).unwrap();
/// assert_eq!(summaries.len(), 1);
/// assert_eq!(summaries[0].customer, "Alice");
/// assert_eq!(summaries[0].total, Decimal::from(840));
/// ```
#[instrument(skip_all, fields(input_len = text.len()))]
pub fn summarize_json(text: &str) -> Result<Vec<OrderSummary>, OrderError> {
    let value = parse_document(text)?;
    let summaries = summarize_value(&value)?;
    info!(orders = summaries.len(), "Summarized order document");
    Ok(summaries)
}
