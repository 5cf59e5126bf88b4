use std::sync::Arc;

use uuid::Uuid;

use crate::service::CarService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: CarService,
    base_path: Arc<str>,
}

impl AppState {
    /// `base_path` is the prefix the car routes are mounted under: `""` or a path
    /// like `/api` with a leading and no trailing slash.
    pub fn new(service: CarService, base_path: impl Into<Arc<str>>) -> Self {
        Self {
            service,
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Path of a single car, as sent in `Location` headers.
    pub fn car_location(&self, id: Uuid) -> String {
        format!("{}/cars/{id}", self.base_path)
    }
}
