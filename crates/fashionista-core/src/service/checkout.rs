//! Checkout service.
//!
//! Resolves cart lines against the catalog, prices the order, and charges it
//! through a `CheckoutGateway`.

use std::sync::Arc;

use tracing::info;

use fashionista_types::cart::{CheckoutRequest, Order, OrderLine, PaymentReceipt};
use fashionista_types::error::CheckoutError;

use crate::catalog::ProductCatalog;
use crate::payment::CheckoutGateway;

/// Service turning a storefront cart into a paid order.
pub struct CheckoutService<C: ProductCatalog, P: CheckoutGateway> {
    catalog: Arc<C>,
    gateway: P,
}

impl<C: ProductCatalog, P: CheckoutGateway> CheckoutService<C, P> {
    /// Create a new CheckoutService.
    ///
    /// The catalog is shared with the read-only product endpoints.
    pub fn new(catalog: Arc<C>, gateway: P) -> Self {
        Self { catalog, gateway }
    }

    /// Price the cart against current catalog prices.
    ///
    /// Rejects an empty cart, zero quantities and a unit total past `u32::MAX`
    /// before touching the catalog; an unknown product id fails the whole order.
    pub async fn price_cart(&self, request: CheckoutRequest) -> Result<Order, CheckoutError> {
        if request.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let mut units: u32 = 0;
        for line in &request.items {
            if line.quantity == 0 {
                return Err(CheckoutError::InvalidQuantity(line.product_id.clone()));
            }
            units = units
                .checked_add(line.quantity)
                .ok_or(CheckoutError::TooManyItems)?;
        }

        let mut lines = Vec::with_capacity(request.items.len());
        for line in request.items {
            let product = self.catalog.get(&line.product_id).await?;
            lines.push(OrderLine {
                product,
                quantity: line.quantity,
            });
        }

        Ok(Order::new(lines, request.customer_email))
    }

    /// Price and charge the cart.
    pub async fn checkout(
        &self,
        request: CheckoutRequest,
    ) -> Result<(Order, PaymentReceipt), CheckoutError> {
        let order = self.price_cart(request).await?;
        let receipt = self.gateway.charge(&order).await?;

        info!(
            order_id = %order.id,
            amount_cents = receipt.amount_cents,
            items = order.item_count(),
            "Order paid"
        );

        Ok((order, receipt))
    }
}
