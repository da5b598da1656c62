//! In-memory storage backend for development and testing.
//!
//! Items live in an ordered map keyed by `(pk, sk)` wrapped in
//! `Arc<RwLock<_>>`. Queries page through it the way DynamoDB does: sort-key
//! order, a page limit and a last-evaluated-key cursor. Data is lost when the
//! store is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use trailhead::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! // Use store for testing...
//! ```

mod store;

pub use store::InMemoryStore;
