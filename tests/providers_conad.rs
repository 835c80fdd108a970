use chrono::NaiveDate;
use prezzi_carburante::scrape::providers::ConadSource;
use prezzi_carburante::FuelType;
use std::fs;

fn fixture() -> String {
    fs::read_to_string("tests/fixtures/conad.html").expect("missing tests/fixtures/conad.html")
}

fn station() -> ConadSource {
    ConadSource::new(
        "DISTRIBUTORE CITTÀ FIERA".to_string(),
        "https://www.conad.it/ricerca-negozi/negozio.050404.html".to_string(),
    )
}

#[test]
fn boxes_are_consumed_tail_first_in_fuel_order() {
    let as_of = NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
    let readings = station().parse_readings(&fixture(), as_of).expect("parse ok");

    assert_eq!(readings.len(), 2);

    // The diesel box is last on the page, so it is read first.
    assert_eq!(readings[0].fuel, FuelType::Diesel);
    assert_eq!(readings[0].price, "1,739");
    assert_eq!(readings[1].fuel, FuelType::Benzina);
    assert_eq!(readings[1].price, "1,899");

    // No timestamp on the page: readings carry the day of the run.
    assert!(readings.iter().all(|r| r.updated == "12/05/2024"));
}

#[test]
fn too_few_price_boxes_is_a_hard_failure() {
    let html = r#"
        <div class="box box-price-simple"><h3>Gasolio</h3><p>1,739</p></div>
    "#;
    let as_of = NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
    let err = station().parse_readings(html, as_of).unwrap_err();
    assert!(format!("{err:#}").contains("BENZINA"));
}
