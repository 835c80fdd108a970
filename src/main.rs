//! Prezzi Carburante — binary entrypoint.
//! One linear run: scrape the configured station pages, render the price
//! summary, mail it over authenticated STARTTLS SMTP.

use anyhow::Result;
use prezzi_carburante::{AppConfig, SmtpSecret};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("prezzi_carburante=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local runs; no-op when the vars come from the environment.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = AppConfig::load_default()?;
    let password = SmtpSecret::from_env()?;

    prezzi_carburante::run(&config, password).await
}
