use std::sync::Arc;

use storage::demo::demo_catalog;
use storage::repository::Storage;

use crate::Clock;
use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;

/// Assembles host-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    catalog: Arc<CatalogService>,
}

impl AppServices {
    #[must_use]
    pub fn new(clock: Clock, storage: &Storage) -> Self {
        let catalog = Arc::new(CatalogService::new(clock, Arc::clone(&storage.catalog)));
        Self { clock, catalog }
    }

    /// Build services over the demo catalog, scheduled around `clock.now()`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the demo catalog fails validation.
    pub fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        let repo = demo_catalog(clock.now())?;
        tracing::info!(fixed_clock = clock.is_fixed(), "seeded demo catalog");
        Ok(Self::new(clock, &Storage::from_repository(repo)))
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }
}
