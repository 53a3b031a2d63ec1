use std::time::Duration;

use feed_rs::model::Entry;
use feed_rs::parser;
use reqwest::Client;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::config::FeedConfig;
use crate::error::{DashboardError, FeedFetchError};

/// Maximum number of headlines rendered per feed card.
pub const MAX_HEADLINES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    Ok,
    Unavailable(String),
}

/// Everything needed to render one feed's card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCard {
    pub name: String,
    pub headlines: Vec<Headline>,
    pub status: FeedStatus,
}

impl FeedCard {
    pub fn unavailable(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            headlines: Vec::new(),
            status: FeedStatus::Unavailable(reason.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == FeedStatus::Ok
    }
}

#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self, DashboardError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("MorningDashboard/1.0 (RSS Headlines)")
            .build()
            .map_err(DashboardError::HttpClient)?;

        Ok(Self { client })
    }

    /// Fetch every feed concurrently. Cards come back in the same order as
    /// `feeds`, regardless of which request finishes first.
    pub async fn fetch_all(&self, feeds: &[FeedConfig]) -> Vec<FeedCard> {
        info!("Fetching {} feeds", feeds.len());

        let mut tasks = JoinSet::new();
        for (index, feed) in feeds.iter().cloned().enumerate() {
            let fetcher = self.clone();
            tasks.spawn(async move { (index, fetcher.fetch_card(&feed).await) });
        }

        let mut slots: Vec<Option<FeedCard>> = vec![None; feeds.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, card)) => slots[index] = Some(card),
                Err(e) => error!("Feed task failed: {}", e),
            }
        }

        feeds
            .iter()
            .zip(slots)
            .map(|(feed, slot)| {
                slot.unwrap_or_else(|| FeedCard::unavailable(&feed.name, "fetch task failed"))
            })
            .collect()
    }

    /// Fetch one feed, turning any failure into an unavailable card.
    pub async fn fetch_card(&self, feed: &FeedConfig) -> FeedCard {
        match self.fetch_headlines(feed).await {
            Ok(headlines) => {
                info!("Got {} headlines for feed '{}'", headlines.len(), feed.name);
                FeedCard {
                    name: feed.name.clone(),
                    headlines,
                    status: FeedStatus::Ok,
                }
            }
            Err(e) => {
                warn!("Failed to fetch feed '{}': {}", feed.name, e);
                FeedCard::unavailable(&feed.name, e.to_string())
            }
        }
    }

    pub async fn fetch_headlines(&self, feed: &FeedConfig) -> Result<Vec<Headline>, FeedFetchError> {
        debug!("Fetching feed: {} ({})", feed.name, feed.url);

        let response = self.client.get(&feed.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedFetchError::Status(status));
        }
        let bytes = response.bytes().await?;

        Self::parse_headlines(&bytes, MAX_HEADLINES)
    }

    /// Parse an RSS, Atom or JSON feed document and keep the first `limit`
    /// usable entries in feed order.
    pub fn parse_headlines(bytes: &[u8], limit: usize) -> Result<Vec<Headline>, FeedFetchError> {
        let parsed = parser::parse(bytes)?;

        Ok(parsed
            .entries
            .iter()
            .filter_map(Self::headline_from_entry)
            .take(limit)
            .collect())
    }

    pub fn headline_from_entry(entry: &Entry) -> Option<Headline> {
        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Untitled".to_string());

        // Alternate (or unlabelled) link first, then whatever comes first.
        let link = entry
            .links
            .iter()
            .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
            .or_else(|| entry.links.first())
            .map(|l| l.href.trim().to_string())
            .unwrap_or_default();

        if link.is_empty() {
            warn!("Skipping entry with no link: {}", title);
            return None;
        }

        Some(Headline { title, link })
    }
}
