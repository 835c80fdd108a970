// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod config;
pub mod notify;
pub mod report;
pub mod scrape;

// ---- Re-exports for stable public API ----
pub use crate::config::{AppConfig, SmtpConfig, SourceConfig};
pub use crate::notify::{EmailNotifier, MailTransport, SmtpSecret};
pub use crate::report::{render, NotificationBody};
pub use crate::scrape::types::{FuelType, PriceReading, PriceSource, SourceReport};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

/// Fetch every configured source sequentially, one report per source, in
/// declaration order. Any fetch or extraction failure aborts the run: a
/// half-empty price mail is worse than a loud failure.
pub async fn collect_reports(
    client: &reqwest::Client,
    sources: &[Box<dyn PriceSource>],
) -> Result<Vec<SourceReport>> {
    let mut reports = Vec::with_capacity(sources.len());
    for source in sources {
        info!(station = source.station_name(), "fetching prices");
        let readings = source
            .fetch_prices(client)
            .await
            .with_context(|| format!("collecting prices for {}", source.station_name()))?;
        reports.push(SourceReport {
            station: source.station_name().to_string(),
            readings,
        });
    }
    Ok(reports)
}

/// One full run: scrape all sources, render the two-part body, deliver it.
pub async fn run(config: &AppConfig, password: SmtpSecret) -> Result<()> {
    let client = reqwest::Client::new();
    let sources = scrape::build_sources(&config.sources);

    let reports = collect_reports(&client, &sources).await?;
    let body = report::render(&reports);

    let subject = format!("Prezzi Carburante del {}", Local::now().format("%d/%m/%Y"));
    let notifier = EmailNotifier::from_config(&config.smtp, password)?;
    notifier.send_report(&subject, &body).await?;

    info!("price report delivered");
    Ok(())
}
