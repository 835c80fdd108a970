// src/scrape/extract.rs
//
// Declarative extraction over a parsed page. A `PriceLocator` names the
// markup a price lives in (fuel marker classes, service row label, price and
// date cell classes); resolving it against a `DocumentIndex` yields a typed
// entry or an error saying which piece of markup was missing. Page-shape
// assumptions stay here instead of leaking into the providers' control flow.

use anyhow::{bail, Result};
use scraper::{ElementRef, Html};

/// Where one price lives on a report page.
///
/// Resolution order mirrors how the listings are laid out: the fuel marker
/// opens a block, the wanted service row follows it, the price cell follows
/// the service row and the update date precedes it.
#[derive(Debug, Clone)]
pub struct PriceLocator<'a> {
    /// Classes identifying the fuel block marker, e.g. `["st_reports_fuel", "diesel_label"]`.
    pub fuel_marker: &'a [&'a str],
    /// Class of the service rows under a fuel block.
    pub service_class: &'a str,
    /// Exact text of the wanted service row (e.g. "Self").
    pub service_label: &'a str,
    /// Class of the price cell after the service row.
    pub price_class: &'a str,
    /// Class of the update-date cell before the service row.
    pub updated_class: &'a str,
}

/// Raw strings pulled from the page, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPriceEntry {
    pub price: String,
    pub updated: String,
}

/// Elements of a parsed document in document order, so locators can scan
/// forward and backward from a marker the way the listings are read.
pub struct DocumentIndex<'a> {
    elements: Vec<ElementRef<'a>>,
}

impl<'a> DocumentIndex<'a> {
    pub fn new(doc: &'a Html) -> Self {
        let elements = doc
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .collect();
        Self { elements }
    }

    pub fn resolve(&self, locator: &PriceLocator<'_>) -> Result<RawPriceEntry> {
        let Some(marker) = self
            .elements
            .iter()
            .position(|el| has_classes(el, locator.fuel_marker))
        else {
            bail!("fuel marker {:?} not found", locator.fuel_marker);
        };

        // First matching service row after the fuel marker.
        let Some(service) = (marker + 1..self.elements.len()).find(|&i| {
            let el = &self.elements[i];
            has_classes(el, &[locator.service_class])
                && element_text(el) == locator.service_label
        }) else {
            bail!(
                "service row {:?} not found after fuel marker {:?}",
                locator.service_label,
                locator.fuel_marker
            );
        };

        let Some(price) = (service + 1..self.elements.len())
            .find(|&i| has_classes(&self.elements[i], &[locator.price_class]))
        else {
            bail!("price cell missing for service row {:?}", locator.service_label);
        };

        let Some(updated) = (0..service)
            .rev()
            .find(|&i| has_classes(&self.elements[i], &[locator.updated_class]))
        else {
            bail!("update date missing for service row {:?}", locator.service_label);
        };

        Ok(RawPriceEntry {
            price: element_text(&self.elements[price]),
            updated: element_text(&self.elements[updated]),
        })
    }
}

fn has_classes(el: &ElementRef<'_>, wanted: &[&str]) -> bool {
    wanted
        .iter()
        .all(|class| el.value().classes().any(|c| c == *class))
}

/// Concatenated text of an element, whitespace-collapsed and trimmed.
pub fn element_text(el: &ElementRef<'_>) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
