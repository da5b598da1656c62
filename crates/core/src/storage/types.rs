use serde_json::{Map, Value};

/// Attribute name holding the partition key of every stored item.
pub const PARTITION_KEY_ATTR: &str = "pk";
/// Attribute name holding the sort key of every stored item.
pub const SORT_KEY_ATTR: &str = "sk";

/// A stored item: an attribute map in the shape clients read it back.
pub type Item = Map<String, Value>;

/// Key condition for one paginated query against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyQuery {
    pub partition_key: String,
    /// When set, only items whose sort key begins with this prefix match.
    pub sort_key_prefix: Option<String>,
    /// Maximum number of items per page.
    pub limit: usize,
}

impl KeyQuery {
    /// Query every item in a partition.
    pub fn partition(partition_key: impl Into<String>, limit: usize) -> Self {
        Self {
            partition_key: partition_key.into(),
            sort_key_prefix: None,
            limit,
        }
    }

    /// Query the items of a partition whose sort key starts with `prefix`.
    pub fn prefixed(
        partition_key: impl Into<String>,
        prefix: impl Into<String>,
        limit: usize,
    ) -> Self {
        Self {
            partition_key: partition_key.into(),
            sort_key_prefix: Some(prefix.into()),
            limit,
        }
    }

    /// Returns true if the given keys satisfy this query's key condition.
    pub fn matches(&self, partition_key: &str, sort_key: &str) -> bool {
        self.partition_key == partition_key
            && self
                .sort_key_prefix
                .as_deref()
                .is_none_or(|prefix| sort_key.starts_with(prefix))
    }
}

/// One page of query results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<Item>,
    /// Key of the last item read; `None` when the query is exhausted.
    pub last_evaluated_key: Option<Item>,
}

/// Builds the key-only attribute map used as a pagination cursor.
pub fn key_item(partition_key: &str, sort_key: &str) -> Item {
    let mut key = Item::new();
    key.insert(
        PARTITION_KEY_ATTR.to_string(),
        Value::String(partition_key.to_string()),
    );
    key.insert(SORT_KEY_ATTR.to_string(), Value::String(sort_key.to_string()));
    key
}
