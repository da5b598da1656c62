//! Application state shared by every request handler.
//!
//! Handlers reach the table only through the [`Catalog`]; the concrete store
//! behind it is selected at compile time via feature flags.

use std::sync::Arc;

use trailhead_core::catalog::Catalog;
use trailhead_core::storage::{EntityRepository, TableStore};

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates state over an arbitrary table store.
    pub fn new(store: Arc<dyn TableStore>, config: Config) -> Self {
        let catalog = Catalog::new(EntityRepository::new(store))
            .with_park_sanitization(config.sanitize_parks);

        Self {
            catalog,
            config: Arc::new(config),
        }
    }

    /// Creates state backed by the in-memory store.
    #[cfg(any(feature = "inmemory", test))]
    pub fn in_memory(config: Config) -> Self {
        use crate::storage::inmemory::InMemoryStore;

        Self::new(Arc::new(InMemoryStore::new()), config)
    }

    /// Creates state backed by DynamoDB.
    ///
    /// The SDK client is built once per process and reused.
    #[cfg(feature = "dynamodb")]
    pub async fn dynamodb(config: Config) -> Self {
        use crate::storage::dynamodb::{shared_client, DynamoDbStore};

        let client = shared_client(&config).await;
        let store = DynamoDbStore::new(client, config.table_name.clone());
        Self::new(Arc::new(store), config)
    }

    /// Creates state for the storage backend selected at compile time.
    pub async fn from_config(config: Config) -> Self {
        #[cfg(feature = "dynamodb")]
        {
            Self::dynamodb(config).await
        }

        #[cfg(not(feature = "dynamodb"))]
        {
            Self::in_memory(config)
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(Config::default())
    }
}
