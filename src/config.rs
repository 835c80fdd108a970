// src/config.rs
use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "CARBURANTE_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/carburante.toml";

fn default_smtp_port() -> u16 {
    587
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Stations to scrape; mail sections keep this order.
    pub sources: Vec<SourceConfig>,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// A station page on the Prezzi Benzina portal.
    PrezziBenzina {
        name: String,
        url: String,
        /// Label of the service row carrying the wanted price (e.g. "Self").
        price_description: String,
    },
    /// A Conad store page with its simple price boxes.
    Conad { name: String, url: String },
}

impl SourceConfig {
    pub fn name(&self) -> &str {
        match self {
            SourceConfig::PrezziBenzina { name, .. } => name,
            SourceConfig::Conad { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Sender mailbox, e.g. `Prezzi Carburante <prezzi@example.com>`.
    /// Its address doubles as the SMTP login user.
    pub sender: String,
    pub recipients: Vec<String>,
}

impl AppConfig {
    pub fn load_from(path: &Path) -> Result<AppConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config from {}", path.display()))?;
        ensure!(!config.sources.is_empty(), "no sources configured");
        ensure!(!config.smtp.recipients.is_empty(), "no recipients configured");
        Ok(config)
    }

    /// Load using $CARBURANTE_CONFIG_PATH, falling back to `config/carburante.toml`.
    ///
    /// The SMTP password deliberately never appears here; it is read from the
    /// `PW_CARBURANTE` env var and injected as a [`crate::notify::SmtpSecret`].
    pub fn load_default() -> Result<AppConfig> {
        let path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[sources]]
        kind = "conad"
        name = "DISTRIBUTORE CITTÀ FIERA"
        url = "https://www.conad.it/ricerca-negozi/negozio.050404.html"

        [[sources]]
        kind = "prezzi_benzina"
        name = "Esso Tavagnacco"
        url = "https://www.prezzibenzina.it/distributori/12345"
        price_description = "Self"

        [smtp]
        host = "smtp.example.com"
        sender = "Prezzi Carburante <prezzi@example.com>"
        recipients = ["a@example.com", "b@example.com"]
    "#;

    #[test]
    fn parses_sources_in_declaration_order() {
        let config: AppConfig = toml::from_str(SAMPLE).unwrap();
        let names: Vec<_> = config.sources.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["DISTRIBUTORE CITTÀ FIERA", "Esso Tavagnacco"]);
    }

    #[test]
    fn smtp_port_defaults_to_submission() {
        let config: AppConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.smtp.port, 587);
        assert_eq!(config.smtp.recipients.len(), 2);
    }

    #[test]
    fn prezzi_benzina_source_requires_a_price_description() {
        let broken = SAMPLE.replace("price_description = \"Self\"\n", "");
        assert!(toml::from_str::<AppConfig>(&broken).is_err());
    }
}
