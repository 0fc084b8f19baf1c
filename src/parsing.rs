//! JSON text parsing and typed field access over `serde_json::Value`.
//!
//! Every accessor takes the dotted path of the element it reads so that a
//! missing or mistyped field is reported as a `ShapeError` pointing at the
//! exact location, e.g. `orders[1].items[0].quantity`.

use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use std::str::FromStr;

use crate::errors::OrderError;

/// Parses raw text into a generic JSON document.
///
/// # Errors
///
/// Returns `OrderError::ParseError` when the text is not well-formed JSON.
///
/// # Examples
///
/// ```
/// use order_summary::parsing::parse_document;
///
/// let doc = parse_document(r#"{"orders": []}"#).unwrap();
/// assert!(doc.get("orders").is_some());
///
/// assert!(parse_document("{\"orders\": [").unwrap_err().is_parse());
/// ```
pub fn parse_document(text: &str) -> Result<Value, OrderError> {
    serde_json::from_str(text).map_err(OrderError::from)
}

/// Appends an object key to a path.
#[must_use]
pub fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Appends an array index to a path.
#[must_use]
pub fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

pub fn as_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, OrderError> {
    value.as_object().ok_or_else(|| {
        OrderError::shape(
            display_path(path),
            format!("expected object, found {}", kind(value)),
        )
    })
}

/// Looks up a required field on an object.
pub fn field<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Value, OrderError> {
    object
        .get(key)
        .ok_or_else(|| OrderError::shape(&child_path(path, key), "missing required field"))
}

pub fn req_array<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Vec<Value>, OrderError> {
    let value = field(object, key, path)?;
    value
        .as_array()
        .ok_or_else(|| mismatch(&child_path(path, key), "array", value))
}

pub fn req_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a str, OrderError> {
    let value = field(object, key, path)?;
    value
        .as_str()
        .ok_or_else(|| mismatch(&child_path(path, key), "string", value))
}

/// Reads an optional string field; `null` counts as absent.
pub fn opt_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<&'a str>, OrderError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(mismatch(&child_path(path, key), "string", other)),
    }
}

pub fn req_i64(object: &Map<String, Value>, key: &str, path: &str) -> Result<i64, OrderError> {
    let value = field(object, key, path)?;
    value
        .as_i64()
        .ok_or_else(|| mismatch(&child_path(path, key), "integer", value))
}

pub fn req_u64(object: &Map<String, Value>, key: &str, path: &str) -> Result<u64, OrderError> {
    let value = field(object, key, path)?;
    value
        .as_u64()
        .ok_or_else(|| mismatch(&child_path(path, key), "non-negative integer", value))
}

/// Reads a required non-negative number as an exact decimal.
pub fn req_decimal(
    object: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Decimal, OrderError> {
    let field_path = child_path(path, key);
    let value = field(object, key, path)?;
    let Value::Number(number) = value else {
        return Err(mismatch(&field_path, "number", value));
    };
    let decimal = number_to_decimal(number).ok_or_else(|| {
        OrderError::shape(&field_path, format!("number {number} cannot be represented exactly"))
    })?;
    if decimal.is_sign_negative() && !decimal.is_zero() {
        return Err(OrderError::shape(
            &field_path,
            format!("expected non-negative number, found {number}"),
        ));
    }
    Ok(decimal)
}

/// Converts a JSON number to `Decimal` from its source text.
///
/// Returns `None` when the value cannot be held without rounding, either
/// because it is too large or because it has more than 28 fractional digits.
#[must_use]
pub fn number_to_decimal(number: &Number) -> Option<Decimal> {
    let text = number.to_string();
    let plain = if text.contains(['e', 'E']) {
        expand_exponent(&text)?
    } else {
        text
    };
    Decimal::from_str_exact(&plain).ok()
}

/// Rewrites `1.5e-3` style text as plain positional digits (`0.0015`).
/// Returns `None` for text without an exponent, or with an exponent too
/// large for any `Decimal`.
fn expand_exponent(text: &str) -> Option<String> {
    let (mantissa, exponent) = text.split_once(['e', 'E'])?;
    let exponent = exponent.parse::<i64>().ok().filter(|e| e.abs() <= 64)?;
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int_part}{frac_part}");
    let point = int_part.len() as i64 + exponent;
    let len = digits.len() as i64;

    let plain = if point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else if point >= len {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else {
        let (whole, frac) = digits.split_at(point as usize);
        format!("{whole}.{frac}")
    };
    Some(format!("{sign}{plain}"))
}

fn mismatch(path: &str, expected: &str, found: &Value) -> OrderError {
    OrderError::shape(path, format!("expected {expected}, found {}", describe(found)))
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "document" } else { path }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Number(n) => format!("number {n}"),
        other => kind(other).to_string(),
    }
}
