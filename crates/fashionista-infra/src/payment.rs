//! Simulated payment gateway.
//!
//! Implements `CheckoutGateway` without any payment provider: every charge
//! succeeds after a fixed delay.

use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use fashionista_core::payment::CheckoutGateway;
use fashionista_types::cart::{Order, PaymentReceipt};
use fashionista_types::error::CheckoutError;

pub const DEFAULT_CHECKOUT_LATENCY: Duration = Duration::from_millis(1500);

/// Gateway that approves every order.
pub struct SimulatedCheckout {
    latency: Duration,
}

impl SimulatedCheckout {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedCheckout {
    fn default() -> Self {
        Self::new(DEFAULT_CHECKOUT_LATENCY)
    }
}

impl CheckoutGateway for SimulatedCheckout {
    async fn charge(&self, order: &Order) -> Result<PaymentReceipt, CheckoutError> {
        debug!(order_id = %order.id, "Simulating payment");

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        Ok(PaymentReceipt {
            order_id: order.id,
            amount_cents: order.total_cents(),
            paid_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fashionista_types::cart::OrderLine;

    use crate::catalog::seed_products;

    #[tokio::test]
    async fn test_charge_always_succeeds() {
        let dress = seed_products().remove(0);
        let order = Order::new(vec![OrderLine { product: dress, quantity: 2 }], None);

        let gateway = SimulatedCheckout::new(Duration::ZERO);
        let receipt = gateway.charge(&order).await.unwrap();

        assert_eq!(receipt.order_id, order.id);
        assert_eq!(receipt.amount_cents, 25998);
    }
}
