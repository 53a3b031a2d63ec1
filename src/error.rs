use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a dashboard run.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to write dashboard to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors for a single feed source. These never abort the run; the feed's
/// card is rendered as unavailable instead.
#[derive(Debug, Error)]
pub enum FeedFetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("unparsable feed: {0}")]
    Parse(#[from] feed_rs::parser::ParseFeedError),
}
