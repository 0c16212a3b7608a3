//! Business logic services

pub mod catalog;
pub mod circulation;

use std::sync::Arc;

use crate::{config::CirculationConfig, repository::Catalogue};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub circulation: circulation::CirculationService,
}

impl Services {
    /// Create all services over the given catalogue
    pub fn new(catalogue: Arc<dyn Catalogue>, policy: CirculationConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(catalogue.clone()),
            circulation: circulation::CirculationService::new(catalogue, policy),
        }
    }
}
