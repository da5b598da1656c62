//! DynamoDB table store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use trailhead_core::storage::{
    Item, KeyQuery, Page, Result, TableStore, PARTITION_KEY_ATTR, SORT_KEY_ATTR,
};

use super::conversions::{attributes_to_item, item_to_attributes};
use super::error::{map_delete_item_error, map_put_item_error, map_query_error};

const PARTITION_ONLY: &str = "#pk = :pk";
const PARTITION_AND_PREFIX: &str = "#pk = :pk AND begins_with(#sk, :sk)";

/// DynamoDB-backed table store.
///
/// Every call is a single SDK request; retries beyond the SDK's own are not
/// attempted.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl TableStore for DynamoDbStore {
    async fn put_item(&self, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(&item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete_item(&self, partition_key: &str, sort_key: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY_ATTR, AttributeValue::S(partition_key.to_string()))
            .key(SORT_KEY_ATTR, AttributeValue::S(sort_key.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn query_page(
        &self,
        query: &KeyQuery,
        exclusive_start_key: Option<Item>,
    ) -> Result<Page> {
        let mut request = self
            .client
            .query()
            .table_name(&self.table_name)
            .limit(i32::try_from(query.limit).unwrap_or(i32::MAX))
            .expression_attribute_names("#pk", PARTITION_KEY_ATTR)
            .expression_attribute_values(":pk", AttributeValue::S(query.partition_key.clone()));

        request = match &query.sort_key_prefix {
            Some(prefix) => request
                .key_condition_expression(PARTITION_AND_PREFIX)
                .expression_attribute_names("#sk", SORT_KEY_ATTR)
                .expression_attribute_values(":sk", AttributeValue::S(prefix.clone())),
            None => request.key_condition_expression(PARTITION_ONLY),
        };

        if let Some(start) = exclusive_start_key {
            request = request.set_exclusive_start_key(Some(item_to_attributes(&start)));
        }

        let result = request.send().await.map_err(map_query_error)?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(attributes_to_item)
            .collect::<Result<Vec<_>>>()?;

        let last_evaluated_key = match result.last_evaluated_key {
            Some(key) if !key.is_empty() => Some(attributes_to_item(&key)?),
            _ => None,
        };

        Ok(Page {
            items,
            last_evaluated_key,
        })
    }
}
