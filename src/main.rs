use std::path::Path;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use morning_dashboard::config::Config;
use morning_dashboard::dashboard::{build_dashboard, write_dashboard};
use morning_dashboard::fetcher::Fetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "morning_dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::builtin()?;
    info!(
        "Loaded {} feeds and {} quotes",
        config.feeds.len(),
        config.quotes.len()
    );

    let fetcher = Fetcher::new(config.fetch_timeout())?;
    let html = build_dashboard(&config, &fetcher, &mut rand::rng()).await?;

    write_dashboard(Path::new(&config.output_path), &html).await?;

    Ok(())
}
