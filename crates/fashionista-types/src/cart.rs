use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::product::{Product, ProductId};

/// One line of a shopping cart as sent by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// JSON body of `POST /api/checkout`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Vec<CartLine>,
    pub customer_email: Option<String>,
}

/// A cart line resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product: Product,
    pub quantity: u32,
}

impl OrderLine {
    /// Line total in cents, so sums do not accumulate float error.
    pub fn total_cents(&self) -> i64 {
        price_to_cents(self.product.price) * i64::from(self.quantity)
    }
}

/// A priced order ready to be charged.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// UUID v7 (time-sortable).
    pub id: Uuid,
    pub lines: Vec<OrderLine>,
    pub customer_email: Option<String>,
}

impl Order {
    pub fn new(lines: Vec<OrderLine>, customer_email: Option<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            lines,
            customer_email,
        }
    }

    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(OrderLine::total_cents).sum()
    }

    pub fn total(&self) -> f64 {
        cents_to_price(self.total_cents())
    }

    /// Number of units across all lines, saturating at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }
}

/// Confirmation returned by a checkout gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub order_id: Uuid,
    pub amount_cents: i64,
    pub paid_at: DateTime<Utc>,
}

/// Successful response body of `POST /api/checkout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub success: bool,
    pub order_id: Uuid,
    pub total: f64,
    pub item_count: u32,
    pub paid_at: DateTime<Utc>,
}

impl CheckoutResponse {
    pub fn from_receipt(order: &Order, receipt: &PaymentReceipt) -> Self {
        Self {
            success: true,
            order_id: receipt.order_id,
            total: cents_to_price(receipt.amount_cents),
            item_count: order.item_count(),
            paid_at: receipt.paid_at,
        }
    }
}

pub fn price_to_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

pub fn cents_to_price(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Item {id}"),
            description: String::new(),
            price,
            image_url: String::new(),
            category: "Women".to_string(),
            shop_the_look: None,
        }
    }

    #[test]
    fn test_order_total_sums_lines_in_cents() {
        let order = Order::new(
            vec![
                OrderLine { product: product("a", 0.1), quantity: 3 },
                OrderLine { product: product("b", 19.99), quantity: 2 },
            ],
            None,
        );
        assert_eq!(order.total_cents(), 30 + 3998);
        assert_eq!(order.total(), 40.28);
        assert_eq!(order.item_count(), 5);
    }

    #[test]
    fn test_item_count_saturates() {
        let order = Order::new(
            vec![
                OrderLine { product: product("a", 1.0), quantity: u32::MAX },
                OrderLine { product: product("b", 1.0), quantity: 1 },
            ],
            None,
        );
        assert_eq!(order.item_count(), u32::MAX);
    }

    #[test]
    fn test_checkout_request_wire_names() {
        let json = serde_json::json!({
            "items": [{ "productId": 3, "quantity": 2 }],
            "customerEmail": "ana@example.com"
        });
        let req: CheckoutRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.items[0].product_id, ProductId::new("3"));
        assert_eq!(req.items[0].quantity, 2);
        assert_eq!(req.customer_email.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn test_checkout_request_items_default_empty() {
        let req: CheckoutRequest = serde_json::from_str("{}").unwrap();
        assert!(req.items.is_empty());
    }
}
