use std::path::Path;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::info;

use crate::config::Config;
use crate::error::DashboardError;
use crate::fetcher::Fetcher;
use crate::render::render_dashboard;

/// Pick one quote uniformly at random.
pub fn pick_quote<'a, R: Rng + ?Sized>(
    quotes: &'a [String],
    rng: &mut R,
) -> Result<&'a str, DashboardError> {
    quotes
        .choose(rng)
        .map(String::as_str)
        .ok_or_else(|| DashboardError::Configuration("quote list is empty".to_string()))
}

/// Build the complete dashboard document.
///
/// Configuration problems abort before any feed is fetched. Individual feed
/// failures do not abort; those feeds render as unavailable cards.
pub async fn build_dashboard<R: Rng + ?Sized>(
    config: &Config,
    fetcher: &Fetcher,
    rng: &mut R,
) -> Result<String, DashboardError> {
    config.validate()?;

    let quote = pick_quote(&config.quotes, rng)?;
    let cards = fetcher.fetch_all(&config.feeds).await;

    let available = cards.iter().filter(|c| c.is_available()).count();
    info!("{} of {} feeds available", available, cards.len());

    Ok(render_dashboard(config, quote, &cards))
}

/// Write the document, replacing whatever was at `path`.
pub async fn write_dashboard(path: &Path, html: &str) -> Result<(), DashboardError> {
    tokio::fs::write(path, html)
        .await
        .map_err(|source| DashboardError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}
