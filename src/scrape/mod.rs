// src/scrape/mod.rs
pub mod extract;
pub mod providers;
pub mod types;

use crate::config::SourceConfig;
use providers::{ConadSource, PrezziBenzinaSource};
use types::PriceSource;

/// Instantiate one provider per configured source, in declaration order.
/// The mail sections come out in this same order.
pub fn build_sources(configs: &[SourceConfig]) -> Vec<Box<dyn PriceSource>> {
    configs
        .iter()
        .map(|config| match config {
            SourceConfig::PrezziBenzina {
                name,
                url,
                price_description,
            } => Box::new(PrezziBenzinaSource::new(
                name.clone(),
                url.clone(),
                price_description.clone(),
            )) as Box<dyn PriceSource>,
            SourceConfig::Conad { name, url } => {
                Box::new(ConadSource::new(name.clone(), url.clone()))
            }
        })
        .collect()
}
