//! Catalog operations composed from the entity repository.
//!
//! Reads drain every page before ordering, so a failure on any page fails the
//! whole operation and no partial collection escapes.

use super::assemble::{partition_featured, sort_by_field, Featured};
use super::requests::{
    AddFavoriteRequest, CampsiteQuery, CreateArticleRequest, CreateCampsiteRequest,
    CreateParkRequest, FavoritesQuery, ParkCodeQuery, Record, RemoveFavoriteRequest,
};
use crate::storage::{drain, keys, EntityRepository, Item, Result};

/// Read and write operations over parks, articles, campsites and favorites.
#[derive(Clone)]
pub struct Catalog {
    repository: EntityRepository,
    sanitize_parks: bool,
}

impl Catalog {
    /// Creates a catalog that sanitizes every entity type.
    pub fn new(repository: EntityRepository) -> Self {
        Self {
            repository,
            sanitize_parks: true,
        }
    }

    /// Turns sanitization of park records on or off.
    pub fn with_park_sanitization(mut self, enabled: bool) -> Self {
        self.sanitize_parks = enabled;
        self
    }

    async fn store<R: Record + Sync>(&self, record: &R, sanitize: bool) -> Result<()> {
        let attributes = record.attributes(sanitize)?;
        self.repository
            .put(&record.partition_key(), &record.sort_key(), attributes)
            .await
    }

    pub async fn create_park(&self, request: &CreateParkRequest) -> Result<()> {
        self.store(request, self.sanitize_parks).await
    }

    pub async fn create_article(&self, request: &CreateArticleRequest) -> Result<()> {
        self.store(request, true).await
    }

    pub async fn create_campsite(&self, request: &CreateCampsiteRequest) -> Result<()> {
        self.store(request, true).await
    }

    pub async fn add_favorite(&self, request: &AddFavoriteRequest) -> Result<()> {
        self.store(request, true).await
    }

    /// Removing a favorite that does not exist succeeds.
    pub async fn remove_favorite(&self, request: &RemoveFavoriteRequest) -> Result<()> {
        self.repository
            .delete(&request.partition_key(), &request.sort_key())
            .await
    }

    /// Every park, ordered by `name`.
    pub async fn list_parks(&self) -> Result<Vec<Item>> {
        let items = drain(
            self.repository
                .query_by_prefix(keys::park_partition(), keys::park_sort_prefix()),
        )
        .await?;
        Ok(sort_by_field(items, "name"))
    }

    /// Articles of a park, ordered by `title`.
    pub async fn list_articles(&self, query: &ParkCodeQuery) -> Result<Vec<Item>> {
        let items = drain(
            self.repository
                .query_by_prefix(&query.partition_key(), keys::article_sort_prefix()),
        )
        .await?;
        Ok(sort_by_field(items, "title"))
    }

    /// Campsites of a park, ordered by `name`.
    pub async fn list_campsites(&self, query: &CampsiteQuery) -> Result<Vec<Item>> {
        let items = drain(
            self.repository
                .query_by_prefix(&query.partition_key(), keys::campsite_sort_prefix()),
        )
        .await?;
        Ok(sort_by_field(items, "name"))
    }

    /// Favorites of a user, ordered by `campgroundName`.
    pub async fn list_favorites(&self, query: &FavoritesQuery) -> Result<Vec<Item>> {
        let items = drain(
            self.repository
                .query_by_prefix(&query.partition_key(), keys::favorite_sort_prefix()),
        )
        .await?;
        Ok(sort_by_field(items, "campgroundName"))
    }

    /// Articles and campgrounds of a park from one partition-wide query.
    pub async fn featured(&self, query: &ParkCodeQuery) -> Result<Featured> {
        let items = drain(self.repository.query_by_partition(&query.partition_key())).await?;
        Ok(partition_featured(items))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::{json, Value};
    use tokio::sync::Mutex;

    use super::*;
    use crate::storage::{key_item, KeyQuery, Page, TableStore};

    /// Single-page table keyed by (pk, sk).
    #[derive(Default)]
    struct MemoryTable {
        items: Mutex<BTreeMap<(String, String), Item>>,
    }

    #[async_trait]
    impl TableStore for MemoryTable {
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

        async fn query_page(&self, query: &KeyQuery, _start: Option<Item>) -> Result<Page> {
            let items = self
                .items
                .lock()
                .await
                .iter()
                .filter(|((pk, sk), _)| query.matches(pk, sk))
                .map(|(_, item)| item.clone())
                .collect();
            Ok(Page {
                items,
                last_evaluated_key: None,
            })
        }
    }

    fn catalog() -> (Arc<MemoryTable>, Catalog) {
        let table = Arc::new(MemoryTable::default());
        let catalog = Catalog::new(EntityRepository::new(table.clone()));
        (table, catalog)
    }

    fn park_code(code: &str) -> ParkCodeQuery {
        ParkCodeQuery {
            park_code: code.to_string(),
        }
    }

    fn campsite(id: &str, name: &str) -> CreateCampsiteRequest {
        let body = json!({ "id": id, "parkCode": "acad", "name": name }).to_string();
        CreateCampsiteRequest::from_body(Some(&body)).unwrap()
    }

    fn park(name: &str, code: &str) -> CreateParkRequest {
        let body = json!({
            "description": "<em>Rocky</em> coast",
            "designation": "National Park",
            "directionsInfo": "Route 3",
            "directionsUrl": "https://example.com/directions",
            "email": "info@example.com",
            "fullName": format!("{name} National Park"),
            "id": "6da17c86-088e-4b4d-b862-7c1bd5cf236b",
            "latitude": 44.4,
            "longitude": -68.2,
            "name": name,
            "parkCode": code,
            "phoneNumber": "2072883338",
            "url": "https://example.com",
            "weatherInfo": "Cold"
        })
        .to_string();
        CreateParkRequest::from_body(Some(&body)).unwrap()
    }

    fn names(items: &[Item], field: &str) -> Vec<String> {
        items
            .iter()
            .map(|i| i[field].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_campsites_listed_by_name() {
        let (_, catalog) = catalog();
        catalog
            .create_campsite(&campsite("c6f0e6a3-56b6-4bb2-a3a4-6a0d3d3f9c55", "Zion Base"))
            .await
            .unwrap();
        catalog
            .create_campsite(&campsite("1d2f7a9e-0c4b-4e8a-9f3d-5a6b7c8d9e0f", "Acadia Base"))
            .await
            .unwrap();

        let query = CampsiteQuery {
            park_code: "acad".to_string(),
        };
        let items = catalog.list_campsites(&query).await.unwrap();
        assert_eq!(names(&items, "name"), ["Acadia Base", "Zion Base"]);
    }

    #[tokio::test]
    async fn test_parks_sanitized_by_default() {
        let (_, catalog) = catalog();
        catalog.create_park(&park("Zion", "zion")).await.unwrap();
        catalog.create_park(&park("Acadia", "acad")).await.unwrap();

        let items = catalog.list_parks().await.unwrap();
        assert_eq!(names(&items, "name"), ["Acadia", "Zion"]);
        assert_eq!(items[0]["description"], "&lt;em&gt;Rocky&lt;/em&gt; coast");
        assert_eq!(items[0]["entity"], "park");
    }

    #[tokio::test]
    async fn test_park_sanitization_can_be_disabled() {
        let (_, catalog) = catalog();
        let catalog = catalog.with_park_sanitization(false);
        catalog.create_park(&park("Acadia", "acad")).await.unwrap();

        let items = catalog.list_parks().await.unwrap();
        assert_eq!(items[0]["description"], "<em>Rocky</em> coast");
    }

    #[tokio::test]
    async fn test_featured_splits_park_partition() {
        let (table, catalog) = catalog();
        let article = json!({
            "parkCode": "acad",
            "id": "0b5c5a6e-3f7a-4d55-9a8a-2f0a5b1c9d11",
            "url": "https://example.com/a",
            "title": "Trail Guide",
            "listingDescription": "Where to hike"
        })
        .to_string();
        catalog
            .create_article(&CreateArticleRequest::from_body(Some(&article)).unwrap())
            .await
            .unwrap();
        catalog
            .create_campsite(&campsite("c6f0e6a3-56b6-4bb2-a3a4-6a0d3d3f9c55", "Lake View"))
            .await
            .unwrap();

        let mut stray = key_item("PARK#acad", "EVENT#1");
        stray.insert("entity".to_string(), Value::String("event".to_string()));
        stray.insert("title".to_string(), Value::String("Ranger Talk".to_string()));
        table.put_item(stray).await.unwrap();

        let featured = catalog.featured(&park_code("acad")).await.unwrap();
        assert_eq!(names(&featured.articles, "title"), ["Trail Guide"]);
        assert_eq!(names(&featured.campgrounds, "name"), ["Lake View"]);
    }

    #[tokio::test]
    async fn test_favorites_roundtrip_and_idempotent_remove() {
        let (_, catalog) = catalog();
        let favorite = json!({
            "userId": "u1",
            "campgroundId": "c6f0e6a3-56b6-4bb2-a3a4-6a0d3d3f9c55",
            "parkId": "p1",
            "campgroundName": "Blackwoods",
            "parkName": "Acadia"
        })
        .to_string();
        catalog
            .add_favorite(&AddFavoriteRequest::from_body(Some(&favorite)).unwrap())
            .await
            .unwrap();

        let query = FavoritesQuery::from_params(&HashMap::from([(
            "userId".to_string(),
            "u1".to_string(),
        )]))
        .unwrap();
        assert_eq!(catalog.list_favorites(&query).await.unwrap().len(), 1);

        let remove = RemoveFavoriteRequest {
            campground_id: "c6f0e6a3-56b6-4bb2-a3a4-6a0d3d3f9c55".to_string(),
            user_id: "u1".to_string(),
        };
        catalog.remove_favorite(&remove).await.unwrap();
        catalog.remove_favorite(&remove).await.unwrap();
        assert!(catalog.list_favorites(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_articles_of_other_parks_not_listed() {
        let (_, catalog) = catalog();
        catalog
            .create_campsite(&campsite("c6f0e6a3-56b6-4bb2-a3a4-6a0d3d3f9c55", "Lake View"))
            .await
            .unwrap();

        assert!(catalog
            .list_articles(&park_code("acad"))
            .await
            .unwrap()
            .is_empty());
        assert!(catalog.featured(&park_code("zion")).await.unwrap().articles.is_empty());
    }
}
