use prezzi_carburante::scrape::providers::PrezziBenzinaSource;
use prezzi_carburante::FuelType;
use std::fs;

fn fixture() -> String {
    fs::read_to_string("tests/fixtures/prezzi_benzina.html")
        .expect("missing tests/fixtures/prezzi_benzina.html")
}

fn station(price_description: &str) -> PrezziBenzinaSource {
    PrezziBenzinaSource::new(
        "Esso Tavagnacco".to_string(),
        "https://www.prezzibenzina.it/distributori/12345".to_string(),
        price_description.to_string(),
    )
}

#[test]
fn fixture_yields_diesel_then_benzina_with_exact_strings() {
    let readings = station("Self").parse_readings(&fixture()).expect("parse ok");

    assert_eq!(readings.len(), 2);

    assert_eq!(readings[0].fuel, FuelType::Diesel);
    assert_eq!(readings[0].price, "1,749");
    assert_eq!(readings[0].updated, "12/05/2024");

    assert_eq!(readings[1].fuel, FuelType::Benzina);
    assert_eq!(readings[1].price, "1,815");
    assert_eq!(readings[1].updated, "11/05/2024");
}

#[test]
fn service_label_selects_the_matching_row() {
    let readings = station("Servito").parse_readings(&fixture()).expect("parse ok");
    assert_eq!(readings[0].price, "1,829");
    assert_eq!(readings[1].price, "1,915");
}

#[test]
fn unknown_service_label_is_a_hard_failure() {
    let err = station("Opt").parse_readings(&fixture()).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("Esso Tavagnacco"), "error names the station: {chain}");
}

#[test]
fn page_without_report_markup_is_a_hard_failure() {
    let err = station("Self")
        .parse_readings("<html><body><p>manutenzione in corso</p></body></html>")
        .unwrap_err();
    assert!(format!("{err:#}").contains("DIESEL"));
}
