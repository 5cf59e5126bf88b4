use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::api::AppState;
use crate::car_store;
use crate::repository::{CarRepository, StoreCarRepository};
use crate::service::CarService;

/// Owns the running car store and the layers wired on top of it.
///
/// ```ignore
/// let system = CarSystem::start(car_store::DEFAULT_BUFFER_SIZE);
/// let router = build_router(system.app_state("/api"));
/// // ... serve until shutdown, then drop the router ...
/// system.shutdown().await?;
/// ```
pub struct CarSystem {
    pub service: CarService,

    /// Direct store access, for inspection in tests and tooling.
    pub repository: Arc<dyn CarRepository>,

    handle: JoinHandle<()>,
}

impl CarSystem {
    /// Spawns the car store and wires repository and service to it. Must run inside a Tokio runtime.
    pub fn start(store_buffer: usize) -> Self {
        let (actor, client) = car_store::new(store_buffer);
        let handle = tokio::spawn(actor.run());

        let repository: Arc<dyn CarRepository> = Arc::new(StoreCarRepository::new(client));
        let service = CarService::new(repository.clone());

        info!(store_buffer, "Car system started");
        Self {
            service,
            repository,
            handle,
        }
    }

    /// State for [`build_router`](crate::api::build_router).
    pub fn app_state(&self, base_path: &str) -> AppState {
        AppState::new(self.service.clone(), base_path)
    }

    /// Drops this system's store clients and waits for the store to stop.
    ///
    /// The store stops once the last client is gone, so every router or service clone
    /// handed out earlier must be dropped first or this never returns.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down car system...");

        drop(self.service);
        drop(self.repository);

        if let Err(e) = self.handle.await {
            error!("Car store task failed: {:?}", e);
            return Err(format!("Car store task failed: {:?}", e));
        }

        info!("Car system shutdown complete.");
        Ok(())
    }
}
