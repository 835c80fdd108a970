// src/report.rs
//
// The Formatter: pure string assembly, no I/O. One section per station, in
// the order the stations were configured, rendered twice — a plain-text body
// and an HTML body carrying the same price/date pairs.

use crate::scrape::types::SourceReport;

/// The two-part mail body. The plain text is the fallback for clients that
/// do not render HTML; both carry the same information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationBody {
    pub plain: String,
    pub html: String,
}

pub fn render(reports: &[SourceReport]) -> NotificationBody {
    let mut plain = String::new();
    let mut html = String::new();

    for report in reports {
        plain.push_str(&report.station);
        plain.push('\n');
        html.push_str("<h2>");
        html.push_str(&html_escape::encode_text(&report.station));
        html.push_str("</h2><p style=\"font-size:15px\">");

        for reading in &report.readings {
            let line = format!(
                "{}: {}\nUltimo aggiornamento: {}\n",
                reading.fuel, reading.price, reading.updated
            );
            plain.push_str(&line);
            html.push_str(&html_escape::encode_text(&line).replace('\n', "<br>"));
        }

        plain.push('\n');
        html.push_str("</p>");
    }

    NotificationBody {
        plain,
        html: format!("<html><body>{html}</body></html>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::types::{FuelType, PriceReading};

    fn report(station: &str) -> SourceReport {
        SourceReport {
            station: station.to_string(),
            readings: vec![PriceReading {
                fuel: FuelType::Diesel,
                price: "1,749".to_string(),
                updated: "12/05/2024".to_string(),
            }],
        }
    }

    #[test]
    fn one_section_per_station_in_order() {
        let body = render(&[report("Alpha"), report("Beta")]);
        let alpha = body.plain.find("Alpha").unwrap();
        let beta = body.plain.find("Beta").unwrap();
        assert!(alpha < beta);
        assert_eq!(body.html.matches("<h2>").count(), 2);
    }

    #[test]
    fn station_names_are_html_escaped() {
        let body = render(&[report("Q8 <easy>")]);
        assert!(body.html.contains("Q8 &lt;easy&gt;"));
        assert!(!body.html.contains("<easy>"));
    }

    #[test]
    fn empty_run_renders_an_empty_shell() {
        let body = render(&[]);
        assert_eq!(body.plain, "");
        assert_eq!(body.html, "<html><body></body></html>");
    }
}
