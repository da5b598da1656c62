//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the
//! [`TableStore`](trailhead_core::storage::TableStore) trait using
//! `aws-sdk-dynamodb`. The table has a string partition key `pk` and a string
//! sort key `sk`.

mod client;
mod conversions;
mod error;
mod store;

pub use client::shared_client;
pub use store::DynamoDbStore;
