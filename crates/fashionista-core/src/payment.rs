//! CheckoutGateway trait definition.
//!
//! Payment processing is external; implementations live in fashionista-infra.

use fashionista_types::cart::{Order, PaymentReceipt};
use fashionista_types::error::CheckoutError;

/// Trait for payment backends that charge a priced order.
pub trait CheckoutGateway: Send + Sync {
    fn charge(
        &self,
        order: &Order,
    ) -> impl std::future::Future<Output = Result<PaymentReceipt, CheckoutError>> + Send;
}
