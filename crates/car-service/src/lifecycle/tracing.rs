use entity_store::tracing::setup_tracing;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "car_service=info,entity_store=info,tower_http=info";

/// Installs the process-wide subscriber. `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`].
pub fn init_tracing() {
    setup_tracing(DEFAULT_LOG_FILTER);
}
