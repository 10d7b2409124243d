//! Student Service - A small CRUD HTTP service
//!
//! Exposes a single student resource backed by a PostgreSQL table.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod operations;
pub mod seed;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{Result, StudentError};
pub use store::{MemoryStudentStore, PgStudentStore, StudentStore};

/// Default `RUST_LOG` filter for the binaries.
pub const DEFAULT_LOG_FILTER: &str = "student_service=info,seed=info,tower_http=info";

/// Installs the tracing subscriber shared by both binaries.
///
/// Defaults to [`DEFAULT_LOG_FILTER`], overridable with `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
