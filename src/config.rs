use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;

use crate::error::DashboardError;

/// The dashboard configuration compiled into the binary.
const BUILTIN_CONFIG: &str = include_str!("../dashboard.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    pub quotes: Vec<String>,
    pub weather: WeatherConfig,
    pub feeds: Vec<FeedConfig>,
    #[serde(default)]
    pub quick_links: Vec<QuickLink>,
}

fn default_title() -> String {
    "Morning Dashboard".to_string()
}

fn default_output_path() -> String {
    "index.html".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    pub location: String,
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuickLink {
    pub label: String,
    pub url: String,
}

impl Config {
    /// The fixed configuration embedded from `dashboard.toml`.
    pub fn builtin() -> Result<Self, DashboardError> {
        Self::from_str(BUILTIN_CONFIG)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> Result<Self, DashboardError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Reject configurations that cannot produce a complete dashboard.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.quotes.is_empty() {
            return Err(DashboardError::Configuration(
                "quote list is empty".to_string(),
            ));
        }
        if self.feeds.is_empty() {
            return Err(DashboardError::Configuration(
                "feed list is empty".to_string(),
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(DashboardError::Configuration(
                "fetch_timeout_secs must be greater than zero".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for feed in &self.feeds {
            if feed.name.trim().is_empty() {
                return Err(DashboardError::Configuration(format!(
                    "feed with url '{}' has no name",
                    feed.url
                )));
            }
            if feed.url.trim().is_empty() {
                return Err(DashboardError::Configuration(format!(
                    "feed '{}' has no url",
                    feed.name
                )));
            }
            if !seen.insert(feed.name.as_str()) {
                return Err(DashboardError::Configuration(format!(
                    "duplicate feed name '{}'",
                    feed.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        quotes = ["Q1"]

        [weather]
        location = "Somewhere"
        url = "https://weather.example.com"

        [[feeds]]
        name = "Test Feed"
        url = "https://example.com/feed.xml"
    "#;

    #[test]
    fn test_builtin_config_is_valid() {
        let config = Config::builtin().unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.title, "Morning Dashboard");
        assert_eq!(config.output_path, "index.html");
        assert_eq!(config.quotes.len(), 6);
        assert_eq!(config.quick_links.len(), 5);
        assert_eq!(config.weather.location, "Guyton, GA");
    }

    #[test]
    fn test_builtin_feed_order() {
        let config = Config::builtin().unwrap();
        let names: Vec<&str> = config.feeds.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["The Verge", "Techmeme", "Business Insider", "Fortune"]
        );
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_str(MINIMAL).unwrap();

        assert_eq!(config.title, "Morning Dashboard");
        assert_eq!(config.output_path, "index.html");
        assert_eq!(config.fetch_timeout_secs, 10);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
        assert!(config.quick_links.is_empty());
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_str("this is not valid toml {{{");
        assert!(matches!(result, Err(DashboardError::ConfigParse(_))));
    }

    #[test]
    fn test_missing_required_fields() {
        let content = r#"
            quotes = ["Q1"]

            [[feeds]]
            name = "Test Feed"
            url = "https://example.com/feed.xml"
        "#;

        // No [weather] table
        assert!(Config::from_str(content).is_err());
    }

    mod validate_tests {
        use super::*;

        fn minimal() -> Config {
            Config::from_str(MINIMAL).unwrap()
        }

        #[test]
        fn test_minimal_is_valid() {
            assert!(minimal().validate().is_ok());
        }

        #[test]
        fn test_empty_quotes() {
            let mut config = minimal();
            config.quotes.clear();

            let err = config.validate().unwrap_err();
            assert!(matches!(err, DashboardError::Configuration(_)));
            assert!(err.to_string().contains("quote"));
        }

        #[test]
        fn test_empty_feeds() {
            let mut config = minimal();
            config.feeds.clear();

            let err = config.validate().unwrap_err();
            assert!(matches!(err, DashboardError::Configuration(_)));
            assert!(err.to_string().contains("feed list"));
        }

        #[test]
        fn test_zero_fetch_timeout() {
            let mut config = minimal();
            config.fetch_timeout_secs = 0;

            let err = config.validate().unwrap_err();
            assert!(matches!(err, DashboardError::Configuration(_)));
            assert!(err.to_string().contains("fetch_timeout_secs"));
        }

        #[test]
        fn test_one_second_fetch_timeout_is_valid() {
            let mut config = minimal();
            config.fetch_timeout_secs = 1;

            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_duplicate_feed_names() {
            let mut config = minimal();
            config.feeds.push(FeedConfig {
                name: "Test Feed".to_string(),
                url: "https://example.org/other.xml".to_string(),
            });

            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("duplicate feed name 'Test Feed'"));
        }

        #[test]
        fn test_blank_feed_name() {
            let mut config = minimal();
            config.feeds[0].name = "   ".to_string();

            assert!(config.validate().is_err());
        }

        #[test]
        fn test_blank_feed_url() {
            let mut config = minimal();
            config.feeds[0].url = String::new();

            assert!(config.validate().is_err());
        }
    }
}
