//! Library circulation server
//!
//! Decides whether a patron may borrow, return, or place and cancel a hold
//! on a catalogue item, and applies the resulting state changes. Exposed as
//! a REST JSON API over an in-memory catalogue.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, catalogue: Arc<dyn repository::Catalogue>) -> Self {
        let services = services::Services::new(catalogue, config.circulation.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
