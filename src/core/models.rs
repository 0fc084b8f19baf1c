use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::errors::OrderError;
use crate::parsing::{
    as_object, index_path, opt_str, req_array, req_decimal, req_i64, req_str, req_u64,
};

/// The top-level order document: `{"orders": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderDocument {
    pub orders: Vec<Order>,
}

/// A single customer order. The total is computed once at construction so
/// that a built `Order` can always be summarized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    order_id: i64,
    customer: String,
    items: Vec<Item>,
    total: Decimal,
}

/// A line entry within an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: Option<String>,
    price: Decimal,
    quantity: u64,
    line_total: Decimal,
}

/// Derived per-order output record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub order_id: i64,
    pub customer: String,
    #[serde(serialize_with = "serialize_total")]
    pub total: Decimal,
}

impl OrderDocument {
    #[must_use]
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl TryFrom<&Value> for OrderDocument {
    type Error = OrderError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let root = as_object(value, "")?;
        let orders = req_array(root, "orders", "")?
            .iter()
            .enumerate()
            .map(|(i, order)| Order::from_value(order, &index_path("orders", i)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { orders })
    }
}

impl Order {
    /// Creates an order, summing its line totals.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::ShapeError` if the total does not fit in a
    /// `Decimal` without rounding.
    pub fn new(
        order_id: i64,
        customer: impl Into<String>,
        items: Vec<Item>,
    ) -> Result<Self, OrderError> {
        Self::build(order_id, customer.into(), items, "order")
    }

    fn from_value(value: &Value, path: &str) -> Result<Self, OrderError> {
        let object = as_object(value, path)?;
        let order_id = req_i64(object, "order_id", path)?;
        let customer = req_str(object, "customer", path)?.to_string();
        let items_path = format!("{path}.items");
        let items = req_array(object, "items", path)?
            .iter()
            .enumerate()
            .map(|(i, item)| Item::from_value(item, &index_path(&items_path, i)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::build(order_id, customer, items, path)
    }

    fn build(
        order_id: i64,
        customer: String,
        items: Vec<Item>,
        path: &str,
    ) -> Result<Self, OrderError> {
        let total = items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| exact_add(acc, item.line_total))
            .ok_or_else(|| {
                OrderError::shape(path, "order total cannot be represented exactly")
            })?;
        Ok(Self {
            order_id,
            customer,
            items,
            total,
        })
    }

    #[must_use]
    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    #[must_use]
    pub fn customer(&self) -> &str {
        &self.customer
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of `price * quantity` over all items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }
}

impl Item {
    /// # Errors
    ///
    /// Returns `OrderError::ShapeError` if `price` is negative or
    /// `price * quantity` does not fit in a `Decimal` without rounding.
    pub fn new(name: Option<String>, price: Decimal, quantity: u64) -> Result<Self, OrderError> {
        Self::build(name, price, quantity, "item")
    }

    fn from_value(value: &Value, path: &str) -> Result<Self, OrderError> {
        let object = as_object(value, path)?;
        let name = opt_str(object, "name", path)?.map(str::to_string);
        let price = req_decimal(object, "price", path)?;
        let quantity = req_u64(object, "quantity", path)?;
        Self::build(name, price, quantity, path)
    }

    fn build(
        name: Option<String>,
        price: Decimal,
        quantity: u64,
        path: &str,
    ) -> Result<Self, OrderError> {
        if price.is_sign_negative() && !price.is_zero() {
            return Err(OrderError::shape(path, format!("price {price} is negative")));
        }
        let line_total = price
            .checked_mul(Decimal::from(quantity))
            .filter(|product| product.is_zero() || product.scale() == price.scale())
            .ok_or_else(|| {
                OrderError::shape(path, "price * quantity cannot be represented exactly")
            })?;
        Ok(Self {
            name,
            price,
            quantity,
            line_total,
        })
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.line_total
    }
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id,
            customer: order.customer.clone(),
            total: order.total,
        }
    }
}

/// `checked_add` that also fails when the sum had to drop fractional digits.
/// A zero operand leaves the other side unchanged, whatever the scales.
fn exact_add(a: Decimal, b: Decimal) -> Option<Decimal> {
    a.checked_add(b).filter(|sum| {
        a.is_zero() || b.is_zero() || sum.scale() == a.scale().max(b.scale())
    })
}

/// Writes a decimal as a JSON number using its exact normalized digits.
fn serialize_total<S>(total: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number: serde_json::Number = total
        .normalize()
        .to_string()
        .parse()
        .map_err(<S::Error as serde::ser::Error>::custom)?;
    number.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_item_line_total() {
        let item = Item::new(Some("Mouse".into()), Decimal::from(20), 2).unwrap();
        assert_eq!(item.line_total(), Decimal::from(40));
        assert_eq!(item.name(), Some("Mouse"));
    }

    #[test]
    fn test_item_rejects_negative_price() {
        let err = Item::new(None, Decimal::from(-5), 1).unwrap_err();
        assert!(err.is_shape());
    }

    #[test]
    fn test_order_total_overflow_is_shape_error() {
        let item = Item::new(None, Decimal::MAX, 1).unwrap();
        let err = Order::new(1, "Big", vec![item.clone(), item]).unwrap_err();
        assert!(err.to_string().contains("cannot be represented"), "got: {err}");
    }

    #[test]
    fn test_exact_add() {
        let a = Decimal::from_str("1.5").unwrap();
        let b = Decimal::from_str("0.25").unwrap();
        assert_eq!(exact_add(a, b), Some(Decimal::from_str("1.75").unwrap()));

        let big = Decimal::from_str("7922816251426433759354395033").unwrap();
        assert_eq!(exact_add(big, Decimal::from_str("0.01").unwrap()), None);
        assert_eq!(exact_add(Decimal::from_str("0.000").unwrap(), big), Some(big));
    }

    #[test]
    fn test_zero_quantity_and_zero_price_are_exact() {
        let item = Item::new(None, Decimal::from_str("5.55").unwrap(), 0).unwrap();
        assert!(item.line_total().is_zero());

        let item = Item::new(None, Decimal::from_str("0.00").unwrap(), 3).unwrap();
        assert!(item.line_total().is_zero());
    }

    #[test]
    fn test_summary_total_serializes_as_exact_number() {
        let summary = OrderSummary {
            order_id: 7,
            customer: "Eve".to_string(),
            total: Decimal::from_str("59.970").unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"order_id":7,"customer":"Eve","total":59.97}"#
        );
    }
}
