//! Generic entity repository over a [`TableStore`].
//!
//! Owns key placement on writes and pagination on reads. Reads come back as a
//! lazy sequence of pages that callers drain completely before answering; a
//! failed page ends the sequence with that error and no partial result.

use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;
use tokio_stream::{Stream, StreamExt};

use super::{Item, KeyQuery, Result, TableStore, PARTITION_KEY_ATTR, SORT_KEY_ATTR};

/// Number of items requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// A lazily fetched sequence of query pages.
///
/// Each page is requested only after the previous one has been consumed.
pub type PageStream = Pin<Box<dyn Stream<Item = Result<Vec<Item>>> + Send>>;

/// Create, read and delete operations keyed by partition and sort key.
#[derive(Clone)]
pub struct EntityRepository {
    store: Arc<dyn TableStore>,
    page_size: usize,
}

impl EntityRepository {
    /// Creates a repository on top of the given store.
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            store,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Overrides the page size (minimum 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Unconditional upsert: last write wins.
    pub async fn put(&self, partition_key: &str, sort_key: &str, attributes: Item) -> Result<()> {
        let mut item = attributes;
        item.insert(
            PARTITION_KEY_ATTR.to_string(),
            Value::String(partition_key.to_string()),
        );
        item.insert(SORT_KEY_ATTR.to_string(), Value::String(sort_key.to_string()));

        self.store.put_item(item).await
    }

    /// Unconditional, idempotent delete.
    pub async fn delete(&self, partition_key: &str, sort_key: &str) -> Result<()> {
        self.store.delete_item(partition_key, sort_key).await
    }

    /// Pages over the items of a partition whose sort key starts with `prefix`.
    pub fn query_by_prefix(&self, partition_key: &str, prefix: &str) -> PageStream {
        self.pages(KeyQuery::prefixed(partition_key, prefix, self.page_size))
    }

    /// Pages over every item of a partition, whatever its entity type.
    pub fn query_by_partition(&self, partition_key: &str) -> PageStream {
        self.pages(KeyQuery::partition(partition_key, self.page_size))
    }

    fn pages(&self, query: KeyQuery) -> PageStream {
        let store = Arc::clone(&self.store);

        Box::pin(async_stream::stream! {
            let mut cursor: Option<Item> = None;
            loop {
                match store.query_page(&query, cursor.take()).await {
                    Ok(page) => {
                        let next = page.last_evaluated_key;
                        yield Ok(page.items);

                        match next {
                            Some(key) if !key.is_empty() => cursor = Some(key),
                            _ => break,
                        }
                    }
                    Err(err) => {
                        yield Err(err);
                        break;
                    }
                }
            }
        })
    }
}

/// Consumes every page of a sequence, in order.
///
/// Stops at the first failed page and returns its error; items gathered from
/// earlier pages are discarded.
pub async fn drain(mut pages: PageStream) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    while let Some(page) = pages.next().await {
        items.extend(page?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Mutex;

    use super::*;
    use crate::storage::{key_item, Page, RepositoryError};

    /// Paging store that can be told to fail on the n-th query call.
    #[derive(Default)]
    struct FakeStore {
        items: Mutex<BTreeMap<(String, String), Item>>,
        queries: AtomicUsize,
        fail_on_query: Option<usize>,
    }

    #[async_trait]
    impl TableStore for FakeStore {
        async fn put_item(&self, item: Item) -> Result<()> {
            let pk = item["pk"].as_str().unwrap().to_string();
            let sk = item["sk"].as_str().unwrap().to_string();
            self.items.lock().await.insert((pk, sk), item);
            Ok(())
        }

        async fn delete_item(&self, partition_key: &str, sort_key: &str) -> Result<()> {
            self.items
                .lock()
                .await
                .remove(&(partition_key.to_string(), sort_key.to_string()));
            Ok(())
        }

        async fn query_page(&self, query: &KeyQuery, start: Option<Item>) -> Result<Page> {
            let call = self.queries.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on_query == Some(call) {
                return Err(RepositoryError::QueryFailed(
                    "Throughput exceeded, please retry".to_string(),
                ));
            }

            let after = start.map(|key| key["sk"].as_str().unwrap().to_string());
            let items = self.items.lock().await;
            let matching: Vec<&Item> = items
                .iter()
                .filter(|((pk, sk), _)| query.matches(pk, sk))
                .filter(|((_, sk), _)| after.as_ref().is_none_or(|a| sk > a))
                .map(|(_, item)| item)
                .collect();

            let page: Vec<Item> = matching.iter().take(query.limit).map(|i| (*i).clone()).collect();
            let last_evaluated_key = if matching.len() > query.limit {
                page.last()
                    .map(|i| key_item(i["pk"].as_str().unwrap(), i["sk"].as_str().unwrap()))
            } else {
                None
            };

            Ok(Page {
                items: page,
                last_evaluated_key,
            })
        }
    }

    fn attrs(name: &str) -> Item {
        json!({ "name": name, "entity": "campsite" })
            .as_object()
            .unwrap()
            .clone()
    }

    async fn seeded(store: FakeStore, count: usize) -> (Arc<FakeStore>, EntityRepository) {
        let store = Arc::new(store);
        let repo = EntityRepository::new(store.clone()).with_page_size(2);
        for i in 0..count {
            repo.put("PARK#acad", &format!("CAMPSITE#{i:02}"), attrs(&format!("Site {i}")))
                .await
                .unwrap();
        }
        (store, repo)
    }

    #[tokio::test]
    async fn test_put_adds_keys_to_item() {
        let (store, _) = seeded(FakeStore::default(), 1).await;

        let items = store.items.lock().await;
        let item = items.values().next().unwrap();
        assert_eq!(item["pk"], "PARK#acad");
        assert_eq!(item["sk"], "CAMPSITE#00");
        assert_eq!(item["name"], "Site 0");
    }

    #[tokio::test]
    async fn test_drain_reads_every_page() {
        let (store, repo) = seeded(FakeStore::default(), 5).await;

        let items = drain(repo.query_by_prefix("PARK#acad", "CAMPSITE#"))
            .await
            .unwrap();

        assert_eq!(items.len(), 5);
        assert_eq!(store.queries.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_pages_are_fetched_lazily() {
        let (store, repo) = seeded(FakeStore::default(), 5).await;

        let mut pages = repo.query_by_prefix("PARK#acad", "CAMPSITE#");
        assert_eq!(store.queries.load(Ordering::SeqCst), 0);

        let first = pages.next().await.unwrap().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(store.queries.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_partition_drains_to_empty_vec() {
        let (_, repo) = seeded(FakeStore::default(), 0).await;

        let items = drain(repo.query_by_partition("PARK#none")).await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_failed_page_discards_partial_results() {
        let store = FakeStore {
            fail_on_query: Some(2),
            ..Default::default()
        };
        let (store, repo) = seeded(store, 5).await;

        let result = drain(repo.query_by_partition("PARK#acad")).await;

        assert_eq!(
            result,
            Err(RepositoryError::QueryFailed(
                "Throughput exceeded, please retry".to_string()
            ))
        );
        // No retry and no further pages after the failure
        assert_eq!(store.queries.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_put_overwrites_same_key() {
        let (store, repo) = seeded(FakeStore::default(), 1).await;

        repo.put("PARK#acad", "CAMPSITE#00", attrs("Renamed"))
            .await
            .unwrap();

        let items = store.items.lock().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items.values().next().unwrap()["name"], "Renamed");
    }

    #[tokio::test]
    async fn test_delete_missing_item_succeeds() {
        let (_, repo) = seeded(FakeStore::default(), 0).await;

        assert!(repo.delete("USER#1", "FAV_SITE#2").await.is_ok());
    }
}
