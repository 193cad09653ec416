//! Explore Gujarat destination browser and trip planner.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use cache::AppCache;
use catalog::Catalog;
use config::Config;
use pricing::{Currency, PricingRules};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub cache: AppCache,
    pub rules: Arc<PricingRules>,
    pub currency: Currency,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cache: AppCache::new(config.booking_ttl),
            rules: Arc::new(PricingRules::default()),
            currency: config.currency.clone(),
        }
    }
}
