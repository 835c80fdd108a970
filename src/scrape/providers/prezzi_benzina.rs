// src/scrape/providers/prezzi_benzina.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use scraper::Html;

use crate::scrape::extract::{DocumentIndex, PriceLocator};
use crate::scrape::types::{FuelType, PriceReading, PriceSource};

/// Diesel before benzina, the order the mail sections list them in.
const FUEL_MARKERS: [(FuelType, &str); 2] = [
    (FuelType::Diesel, "diesel_label"),
    (FuelType::Benzina, "benzina_label"),
];

/// A station page on the Prezzi Benzina portal. Each fuel has a labelled
/// report block with one row per service ("Self", "Servito", ...); the
/// configured `price_description` picks which service's price to read.
pub struct PrezziBenzinaSource {
    station: String,
    url: String,
    price_description: String,
}

impl PrezziBenzinaSource {
    pub fn new(station: String, url: String, price_description: String) -> Self {
        Self {
            station,
            url,
            price_description,
        }
    }

    /// Pure extraction, so fixtures can drive it offline.
    pub fn parse_readings(&self, html: &str) -> Result<Vec<PriceReading>> {
        let doc = Html::parse_document(html);
        let index = DocumentIndex::new(&doc);

        let mut readings = Vec::with_capacity(FUEL_MARKERS.len());
        for (fuel, marker) in FUEL_MARKERS {
            let locator = PriceLocator {
                fuel_marker: &["st_reports_fuel", marker],
                service_class: "st_reports_service",
                service_label: &self.price_description,
                price_class: "st_reports_price",
                updated_class: "st_reports_data",
            };
            let entry = index.resolve(&locator).with_context(|| {
                format!(
                    "{}: extracting {} price for service {:?}",
                    self.station, fuel, self.price_description
                )
            })?;
            readings.push(PriceReading {
                fuel,
                // The portal prints a dot decimal separator; the mail uses commas.
                price: entry.price.replace('.', ","),
                updated: strip_time_of_day(&entry.updated).to_string(),
            });
        }
        Ok(readings)
    }
}

/// Report timestamps read "12/05/2024 18:32"; the mail only carries the day.
fn strip_time_of_day(updated: &str) -> &str {
    match updated.rsplit_once(' ') {
        Some((date, time)) if time.contains(':') => date,
        _ => updated,
    }
}

#[async_trait]
impl PriceSource for PrezziBenzinaSource {
    async fn fetch_prices(&self, client: &reqwest::Client) -> Result<Vec<PriceReading>> {
        let body = client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("fetching {}", self.url))?
            .error_for_status()
            .with_context(|| format!("fetching {}", self.url))?
            .text()
            .await
            .with_context(|| format!("reading body of {}", self.url))?;
        self.parse_readings(&body)
    }

    fn station_name(&self) -> &str {
        &self.station
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_time_of_day_from_report_timestamp() {
        assert_eq!(strip_time_of_day("12/05/2024 18:32"), "12/05/2024");
    }

    #[test]
    fn keeps_date_only_timestamps_as_is() {
        assert_eq!(strip_time_of_day("12/05/2024"), "12/05/2024");
    }
}
