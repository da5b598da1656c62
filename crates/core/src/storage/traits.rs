use async_trait::async_trait;

use super::{Item, KeyQuery, Page, Result};

/// Low-level access to the single shared table.
///
/// Implementations perform exactly one store round trip per call and never
/// retry. Single-item writes and deletes are atomic; there are no multi-item
/// transactions.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Unconditionally writes an item, replacing any item with the same keys.
    ///
    /// The item must carry its `pk` and `sk` attributes.
    async fn put_item(&self, item: Item) -> Result<()>;

    /// Deletes the item with the given keys. Deleting a missing item succeeds.
    async fn delete_item(&self, partition_key: &str, sort_key: &str) -> Result<()>;

    /// Reads one page of items matching the query, starting after
    /// `exclusive_start_key` when given.
    async fn query_page(&self, query: &KeyQuery, exclusive_start_key: Option<Item>)
        -> Result<Page>;
}
