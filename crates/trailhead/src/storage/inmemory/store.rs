//! In-memory table store implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use trailhead_core::storage::{
    key_item, Item, KeyQuery, Page, RepositoryError, Result, TableStore, PARTITION_KEY_ATTR,
    SORT_KEY_ATTR,
};

type TableKey = (String, String);

/// In-memory table for development and testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Arc<RwLock<BTreeMap<TableKey, Item>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

/// Reads a key attribute that must be present as a string.
fn key_attr(item: &Item, attr: &str) -> Result<String> {
    match item.get(attr) {
        Some(Value::String(value)) => Ok(value.clone()),
        _ => Err(RepositoryError::InvalidData(format!(
            "item is missing string attribute '{attr}'"
        ))),
    }
}

#[async_trait]
impl TableStore for InMemoryStore {
    async fn put_item(&self, item: Item) -> Result<()> {
        let key = (
            key_attr(&item, PARTITION_KEY_ATTR)?,
            key_attr(&item, SORT_KEY_ATTR)?,
        );
        self.items.write().await.insert(key, item);
        Ok(())
    }

    async fn delete_item(&self, partition_key: &str, sort_key: &str) -> Result<()> {
        self.items
            .write()
            .await
            .remove(&(partition_key.to_string(), sort_key.to_string()));
        Ok(())
    }

    async fn query_page(
        &self,
        query: &KeyQuery,
        exclusive_start_key: Option<Item>,
    ) -> Result<Page> {
        let lower = match exclusive_start_key {
            Some(start) => Bound::Excluded((
                key_attr(&start, PARTITION_KEY_ATTR)?,
                key_attr(&start, SORT_KEY_ATTR)?,
            )),
            None => Bound::Included((query.partition_key.clone(), String::new())),
        };

        let items = self.items.read().await;
        let mut matching = items
            .range((lower, Bound::Unbounded))
            .take_while(|((pk, _), _)| *pk == query.partition_key)
            .filter(|((pk, sk), _)| query.matches(pk, sk))
            .map(|(_, item)| item);

        let page: Vec<Item> = matching.by_ref().take(query.limit).cloned().collect();
        let has_more = matching.next().is_some();

        let last_evaluated_key = match page.last() {
            Some(last) if has_more => Some(key_item(
                &key_attr(last, PARTITION_KEY_ATTR)?,
                &key_attr(last, SORT_KEY_ATTR)?,
            )),
            _ => None,
        };

        Ok(Page {
            items: page,
            last_evaluated_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(pk: &str, sk: &str, name: &str) -> Item {
        let mut item = key_item(pk, sk);
        item.insert("name".to_string(), json!(name));
        item
    }

    async fn seeded() -> InMemoryStore {
        let store = InMemoryStore::new();
        for (pk, sk, name) in [
            ("PARK#acad", "ARTICLE#1", "a1"),
            ("PARK#acad", "CAMPSITE#1", "c1"),
            ("PARK#acad", "CAMPSITE#2", "c2"),
            ("PARK#acad", "CAMPSITE#3", "c3"),
            ("PARK#zion", "CAMPSITE#1", "z1"),
            ("PARK", "PARK#acad", "Acadia"),
        ] {
            store.put_item(item(pk, sk, name)).await.unwrap();
        }
        store
    }

    fn names(page: &Page) -> Vec<&str> {
        page.items
            .iter()
            .map(|i| i["name"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_put_requires_keys() {
        let store = InMemoryStore::new();
        let mut item = Item::new();
        item.insert("pk".to_string(), json!("PARK"));

        let result = store.put_item(item).await;
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_query_by_prefix_stays_in_partition() {
        let store = seeded().await;

        let page = store
            .query_page(&KeyQuery::prefixed("PARK#acad", "CAMPSITE#", 50), None)
            .await
            .unwrap();

        assert_eq!(names(&page), ["c1", "c2", "c3"]);
        assert_eq!(page.last_evaluated_key, None);
    }

    #[tokio::test]
    async fn test_query_pages_with_cursor() {
        let store = seeded().await;
        let query = KeyQuery::prefixed("PARK#acad", "CAMPSITE#", 2);

        let first = store.query_page(&query, None).await.unwrap();
        assert_eq!(names(&first), ["c1", "c2"]);
        let cursor = first.last_evaluated_key.clone().unwrap();
        assert_eq!(cursor, key_item("PARK#acad", "CAMPSITE#2"));

        let second = store.query_page(&query, Some(cursor)).await.unwrap();
        assert_eq!(names(&second), ["c3"]);
        assert_eq!(second.last_evaluated_key, None);
    }

    #[tokio::test]
    async fn test_exact_page_has_no_cursor() {
        let store = seeded().await;

        let page = store
            .query_page(&KeyQuery::prefixed("PARK#acad", "CAMPSITE#", 3), None)
            .await
            .unwrap();

        assert_eq!(page.items.len(), 3);
        assert_eq!(page.last_evaluated_key, None);
    }

    #[tokio::test]
    async fn test_query_whole_partition() {
        let store = seeded().await;

        let page = store
            .query_page(&KeyQuery::partition("PARK#acad", 50), None)
            .await
            .unwrap();

        assert_eq!(names(&page), ["a1", "c1", "c2", "c3"]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = seeded().await;

        store.delete_item("PARK#acad", "ARTICLE#1").await.unwrap();
        store.delete_item("PARK#acad", "ARTICLE#1").await.unwrap();

        assert_eq!(store.len().await, 5);
    }
}
