// src/scrape/providers/conad.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use scraper::{Html, Selector};

use crate::scrape::extract::element_text;
use crate::scrape::types::{FuelType, PriceReading, PriceSource};

/// The store page lists one plain price box per fuel, with the diesel box
/// LAST. Boxes are consumed from the tail of the list in this order.
const FUEL_ORDER: [FuelType; 2] = [FuelType::Diesel, FuelType::Benzina];

/// A Conad store page. It carries no update timestamp, so readings are
/// stamped with the day of the run.
pub struct ConadSource {
    station: String,
    url: String,
}

impl ConadSource {
    pub fn new(station: String, url: String) -> Self {
        Self { station, url }
    }

    /// Pure extraction; `as_of` stamps the readings (today's date in a live run).
    pub fn parse_readings(&self, html: &str, as_of: NaiveDate) -> Result<Vec<PriceReading>> {
        let box_selector = Selector::parse("div.box.box-price-simple").unwrap();
        let price_selector = Selector::parse("p").unwrap();

        let doc = Html::parse_document(html);
        let mut boxes: Vec<_> = doc.select(&box_selector).collect();
        let updated = as_of.format("%d/%m/%Y").to_string();

        let mut readings = Vec::with_capacity(FUEL_ORDER.len());
        for fuel in FUEL_ORDER {
            let price_box = boxes
                .pop()
                .with_context(|| format!("{}: no price box left for {}", self.station, fuel))?;
            let price = price_box
                .select(&price_selector)
                .next()
                .map(|p| element_text(&p))
                .with_context(|| format!("{}: price box for {} has no text", self.station, fuel))?;
            readings.push(PriceReading {
                fuel,
                price,
                updated: updated.clone(),
            });
        }
        Ok(readings)
    }
}

#[async_trait]
impl PriceSource for ConadSource {
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
        self.parse_readings(&body, Local::now().date_naive())
    }

    fn station_name(&self) -> &str {
        &self.station
    }
}
