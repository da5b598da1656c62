//! Process-wide DynamoDB client.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use tokio::sync::OnceCell;

use crate::config::Config;

static CLIENT: OnceCell<Client> = OnceCell::const_new();

/// Returns the shared client, building it on first use.
///
/// Uses the AWS SDK default credential chain. The client is never torn down.
pub async fn shared_client(config: &Config) -> Client {
    CLIENT
        .get_or_init(|| build_client(config))
        .await
        .clone()
}

async fn build_client(config: &Config) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()));
    if let Some(endpoint) = &config.aws_endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    tracing::info!(
        region = %config.aws_region,
        endpoint = ?config.aws_endpoint_url,
        table = %config.table_name,
        "Initialized DynamoDB client"
    );
    Client::new(&sdk_config)
}
