// src/scrape/types.rs
use anyhow::Result;
use std::fmt;

/// Fuel kinds tracked by the configured stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelType {
    Diesel,
    Benzina,
}

impl FuelType {
    /// Uppercase label used in the mail body ("DIESEL: 1,739").
    pub fn label(self) -> &'static str {
        match self {
            FuelType::Diesel => "DIESEL",
            FuelType::Benzina => "BENZINA",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One extracted price: fuel kind, price text as shown on the page
/// (comma decimal separator), and the "as of" date `dd/mm/YYYY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceReading {
    pub fuel: FuelType,
    pub price: String,
    pub updated: String,
}

/// All readings scraped from one station, in fuel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub station: String,
    pub readings: Vec<PriceReading>,
}

#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the station page and extract one reading per tracked fuel.
    /// Network errors and structural misses both surface here; a missing
    /// price is a hard failure, not a skipped station.
    async fn fetch_prices(&self, client: &reqwest::Client) -> Result<Vec<PriceReading>>;

    fn station_name(&self) -> &str;
}
