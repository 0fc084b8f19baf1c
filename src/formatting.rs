//! Output formatting for order summaries.
//!
//! Summaries serialize back to the same JSON shape they were read from, with
//! `total` written as an exact JSON number.

use crate::core::models::OrderSummary;
use crate::errors::OrderError;

/// Serialize summaries as a JSON array.
///
/// # Arguments
///
/// * `summaries` - The summaries to write, in output order
/// * `pretty` - Use indented multi-line output instead of a single line
///
/// # Errors
///
/// Returns `OrderError::ShapeError` if serialization fails, which only happens
/// for a total whose text is not a valid JSON number.
///
/// # Examples
///
/// ```
/// use order_summary::core::models::OrderSummary;
/// use order_summary::formatting::to_json;
/// use rust_decimal::Decimal;
///
/// let summaries = vec![OrderSummary {
///     order_id: 1001,
///     customer: "Alice".to_string(),
///     total: Decimal::from(840),
/// }];
///
/// let json = to_json(&summaries, false).unwrap();
/// assert_eq!(json, r#"[{"order_id":1001,"customer":"Alice","total":840}]"#);
/// ```
pub fn to_json(summaries: &[OrderSummary], pretty: bool) -> Result<String, OrderError> {
    let result = if pretty {
        serde_json::to_string_pretty(summaries)
    } else {
        serde_json::to_string(summaries)
    };
    result.map_err(|e| OrderError::ShapeError(format!("Failed to serialize summaries: {e}")))
}

/// Human-readable one-line form of a summary, e.g. `#1001 Alice: 840`.
#[must_use]
pub fn format_summary_line(summary: &OrderSummary) -> String {
    format!(
        "#{} {}: {}",
        summary.order_id,
        summary.customer,
        summary.total.normalize()
    )
}
