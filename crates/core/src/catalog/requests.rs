//! Typed request records, produced only when validation succeeds.
//!
//! Following the Functional Core pattern these are pure data types. Each
//! create request knows the keys it is stored under and how to render itself
//! as stored attributes.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::sanitize::{sanitize_map, sanitize_str};
use crate::serde::{deserialize_lenient_string, deserialize_number, deserialize_trimmed_string};
use crate::storage::{keys, Item, RepositoryError};
use crate::validation::{
    add_favorite_schema, article_schema, campsite_query_schema, campsite_schema,
    favorites_query_schema, is_valid_park_code, park_schema, remove_favorite_schema,
    validate_body, ObjectSchema, ValidationError,
};

/// Name of the discriminator attribute carried by every stored item.
pub const ENTITY_ATTR: &str = "entity";

/// A free-form nested sub-document, validated by shape and sanitised as a whole.
pub type Document = Map<String, Value>;

/// Validates a raw body against `schema` and decodes it into `T`.
fn decode_body<T: DeserializeOwned>(
    body: Option<&str>,
    schema: &ObjectSchema,
) -> Result<T, ValidationError> {
    let value = validate_body(body, schema)?;
    serde_json::from_value(value).map_err(|e| ValidationError::new(e.to_string()).in_body())
}

/// Query-string parameters as a JSON object, for the schema validator.
fn params_value(params: &HashMap<String, String>) -> Value {
    Value::Object(
        params
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect(),
    )
}

/// Validates query parameters against `schema`, reporting `message` on any
/// violation, and decodes them into `T`.
fn decode_params<T: DeserializeOwned>(
    params: &HashMap<String, String>,
    schema: &ObjectSchema,
    message: &str,
) -> Result<T, ValidationError> {
    let value = params_value(params);
    schema
        .validate(&value)
        .map_err(|_| ValidationError::new(message))?;
    serde_json::from_value(value).map_err(|_| ValidationError::new(message))
}

// ============================================================================
// Stored records
// ============================================================================

/// A create request that persists as one item.
pub trait Record: Serialize {
    /// Discriminator value written to [`ENTITY_ATTR`].
    const ENTITY: &'static str;

    fn partition_key(&self) -> String;

    fn sort_key(&self) -> String;

    /// Renders the record as stored attributes, discriminator included.
    ///
    /// With `sanitize` set every string reachable from the record is escaped.
    fn attributes(&self, sanitize: bool) -> Result<Item, RepositoryError> {
        let Value::Object(mut item) = serde_json::to_value(self)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?
        else {
            return Err(RepositoryError::Serialization(format!(
                "{} did not serialize to an object",
                Self::ENTITY
            )));
        };

        if sanitize {
            item = sanitize_map(&item);
        }
        item.insert(ENTITY_ATTR.to_string(), Value::String(Self::ENTITY.to_string()));
        Ok(item)
    }
}

/// Request payload for creating a park.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParkRequest {
    pub description: String,
    pub designation: String,
    pub directions_info: String,
    pub directions_url: String,
    pub email: String,
    #[serde(default)]
    pub ext: String,
    pub full_name: String,
    pub id: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub latitude: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub longitude: f64,
    pub name: String,
    pub park_code: String,
    pub phone_number: String,
    pub url: String,
    pub weather_info: String,
}

impl CreateParkRequest {
    pub fn from_body(body: Option<&str>) -> Result<Self, ValidationError> {
        decode_body(body, &park_schema())
    }
}

impl Record for CreateParkRequest {
    const ENTITY: &'static str = "park";

    fn partition_key(&self) -> String {
        keys::park_partition().to_string()
    }

    fn sort_key(&self) -> String {
        keys::park_sort(&self.park_code)
    }
}

/// Request payload for creating an article attached to a park.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub park_code: String,
    pub id: String,
    pub url: String,
    pub title: String,
    pub listing_description: String,
    #[serde(default)]
    pub listing_image_url: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub latitude: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub longitude: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub credit: String,
}

impl CreateArticleRequest {
    pub fn from_body(body: Option<&str>) -> Result<Self, ValidationError> {
        decode_body(body, &article_schema())
    }
}

impl Record for CreateArticleRequest {
    const ENTITY: &'static str = "article";

    fn partition_key(&self) -> String {
        keys::park_scoped_partition(&sanitize_str(&self.park_code))
    }

    fn sort_key(&self) -> String {
        keys::article_sort(&sanitize_str(&self.id))
    }
}

/// Request payload for creating a campsite attached to a park.
///
/// Top-level scalars are typed; the nested sub-documents keep their
/// validated shape and are omitted from storage when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampsiteRequest {
    pub id: String,
    pub park_code: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub reservation_info: String,
    #[serde(default)]
    pub reservation_url: String,
    #[serde(default)]
    pub regulations_url: String,
    #[serde(default)]
    pub regulations_overview: String,
    #[serde(default)]
    pub directions_overview: String,
    #[serde(default)]
    pub directions_url: String,
    #[serde(default)]
    pub weather_overview: String,
    #[serde(default)]
    pub number_of_sites_reservable: String,
    #[serde(default)]
    pub number_of_sites_first_come_first_serve: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub directions_info: String,
    #[serde(default)]
    pub ext: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub weather_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<Vec<Document>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<Vec<Document>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Document>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Document>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campsites: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Document>,
}

impl CreateCampsiteRequest {
    pub fn from_body(body: Option<&str>) -> Result<Self, ValidationError> {
        decode_body(body, &campsite_schema())
    }
}

impl Record for CreateCampsiteRequest {
    const ENTITY: &'static str = "campsite";

    fn partition_key(&self) -> String {
        keys::park_scoped_partition(&sanitize_str(&self.park_code))
    }

    fn sort_key(&self) -> String {
        keys::campsite_sort(&sanitize_str(&self.id))
    }
}

/// Request payload for adding a campground to a user's favorites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub user_id: String,
    pub campground_id: String,
    pub park_id: String,
    pub campground_name: String,
    #[serde(default)]
    pub campground_image_alt_text: String,
    #[serde(default)]
    pub campground_image_url: String,
    #[serde(default)]
    pub campground_url: String,
    pub park_name: String,
}

impl AddFavoriteRequest {
    pub fn from_body(body: Option<&str>) -> Result<Self, ValidationError> {
        decode_body(body, &add_favorite_schema())
    }
}

impl Record for AddFavoriteRequest {
    const ENTITY: &'static str = "favorite";

    fn partition_key(&self) -> String {
        keys::user_partition(&sanitize_str(&self.user_id))
    }

    fn sort_key(&self) -> String {
        keys::favorite_sort(&sanitize_str(&self.campground_id))
    }
}

/// Request payload for removing a favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFavoriteRequest {
    pub campground_id: String,
    pub user_id: String,
}

impl RemoveFavoriteRequest {
    pub fn from_body(body: Option<&str>) -> Result<Self, ValidationError> {
        decode_body(body, &remove_favorite_schema())
    }

    pub fn partition_key(&self) -> String {
        keys::user_partition(&sanitize_str(&self.user_id))
    }

    pub fn sort_key(&self) -> String {
        keys::favorite_sort(&sanitize_str(&self.campground_id))
    }
}

// ============================================================================
// List queries
// ============================================================================

/// Message reported when the `parkCode` predicate rejects a value.
pub const INVALID_PARK_CODE: &str =
    "Invalid parameter: 'parkCode' must be a string of exactly 4 lowercase alphabetic characters.";

/// `parkCode` query of the article list and the featured view.
///
/// Checked with the dedicated park-code predicate; other parameters are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkCodeQuery {
    pub park_code: String,
}

impl ParkCodeQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let park_code = params.get("parkCode").map(String::as_str).unwrap_or("");
        if !is_valid_park_code(park_code) {
            return Err(ValidationError::new(INVALID_PARK_CODE));
        }
        Ok(Self {
            park_code: park_code.to_string(),
        })
    }

    pub fn partition_key(&self) -> String {
        keys::park_scoped_partition(&self.park_code)
    }
}

/// `parkCode` query of the campsite list.
///
/// Checked by the schema validator for length only, so digits pass. The
/// value is trimmed after validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampsiteQuery {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub park_code: String,
}

impl CampsiteQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ValidationError> {
        decode_params(
            params,
            &campsite_query_schema(),
            "Missing required parameter: parkCode",
        )
    }

    pub fn partition_key(&self) -> String {
        keys::park_scoped_partition(&self.park_code)
    }
}

/// `userId` query of the favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesQuery {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub user_id: String,
}

impl FavoritesQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ValidationError> {
        decode_params(
            params,
            &favorites_query_schema(),
            "Missing required parameter: userId",
        )
    }

    pub fn partition_key(&self) -> String {
        keys::user_partition(&sanitize_str(&self.user_id))
    }
}
