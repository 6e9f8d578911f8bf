//! Application state wiring all services together.
//!
//! Services are generic over the collaborator traits in `fashionista-core`;
//! AppState pins them to the concrete infra implementations.

use std::sync::Arc;

use fashionista_core::service::checkout::CheckoutService;
use fashionista_core::service::tryon::TryOnService;
use fashionista_infra::catalog::StaticCatalog;
use fashionista_infra::image::PlaceholderImageGenerator;
use fashionista_infra::payment::SimulatedCheckout;

use crate::config::AppConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteTryOnService = TryOnService<PlaceholderImageGenerator>;

pub type ConcreteCheckoutService = CheckoutService<StaticCatalog, SimulatedCheckout>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers. Everything inside is
/// immutable, so cloning per request is just reference-count bumps.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<StaticCatalog>,
    pub tryon_service: Arc<ConcreteTryOnService>,
    pub checkout_service: Arc<ConcreteCheckoutService>,
}

impl AppState {
    /// Wire the services from configuration. Performs no I/O.
    pub fn init(config: &AppConfig) -> Self {
        let catalog = Arc::new(StaticCatalog::seeded());

        let generator = PlaceholderImageGenerator::new(
            config.generation.placeholder_image_url.clone(),
            config.generation.simulated_latency(),
        );
        let tryon_service = TryOnService::new(generator, config.generation.timeout());

        let gateway = SimulatedCheckout::new(config.checkout.simulated_latency());
        let checkout_service = CheckoutService::new(catalog.clone(), gateway);

        Self {
            catalog,
            tryon_service: Arc::new(tryon_service),
            checkout_service: Arc::new(checkout_service),
        }
    }
}
