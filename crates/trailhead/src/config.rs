use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the single shared table (default: "trailhead")
    pub table_name: String,
    /// AWS region of the table (default: "us-east-1")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_region: String,
    /// Endpoint override, e.g. a local DynamoDB (default: none)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_endpoint_url: Option<String>,
    /// Request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,
    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,
    /// Whether park records are sanitized like every other entity (default: true)
    pub sanitize_parks: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMO_TABLE_NAME` - Table name (default: "trailhead")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Optional endpoint override
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 30)
    /// - `CORS_ORIGINS` - Comma-separated allowed origins (default: any)
    /// - `SANITIZE_PARKS` - "false" or "0" stores parks verbatim (default: true)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("DYNAMO_TABLE_NAME").unwrap_or_else(|_| "trailhead".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            sanitize_parks: env::var("SANITIZE_PARKS")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: "trailhead".to_string(),
            aws_region: "us-east-1".to_string(),
            aws_endpoint_url: None,
            request_timeout_seconds: 30,
            cors_origins: Vec::new(),
            sanitize_parks: true,
        }
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

/// Anything other than an explicit "false"/"0"/"no"/"off" counts as enabled.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            request_timeout_seconds: 5,
            ..Config::default()
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.table_name, "trailhead");
        assert_eq!(config.aws_region, "us-east-1");
        assert_eq!(config.aws_endpoint_url, None);
        assert_eq!(config.request_timeout_seconds, 30);
        assert!(config.cors_origins.is_empty());
        assert!(config.sanitize_parks);
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("https://a.example.com, https://b.example.com,,"),
            ["https://a.example.com", "https://b.example.com"]
        );
        assert!(parse_origins(" ").is_empty());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
    }
}
