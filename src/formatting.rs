use std::fmt::Write as FmtWrite;

use aisweb_lib::{AerodromeInfo, Icao};
use chrono::Local;

/// Run header printed before any scraping starts.
pub fn banner() -> String {
    format!(
        "AISWEB scraper\nDate: {} / Time: {}\n",
        Local::now().format("%d/%m/%Y"),
        Local::now().format("%H:%M:%S")
    )
}

/// Console report: sun times, weather and the enumerated chart list.
pub fn render_report(icao: &Icao, info: &AerodromeInfo, charts: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Aerodrome: {}", icao);
    let _ = writeln!(out, "Sunrise: {}", field(&info.sunrise));
    let _ = writeln!(out, "Sunset: {}", field(&info.sunset));
    let _ = writeln!(out, "METAR: {}", field(&info.metar));
    let _ = writeln!(out, "TAF: {}", field(&info.taf));
    let _ = writeln!(out);
    if charts.is_empty() {
        let _ = writeln!(out, "No charts available.");
    } else {
        let _ = writeln!(out, "Available charts:");
        for (i, chart) in charts.iter().enumerate() {
            let _ = writeln!(out, "{} - {}", i + 1, chart);
        }
    }
    out
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("not available")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icao() -> Icao {
        "SBSP".parse().expect("valid icao")
    }

    #[test]
    fn report_enumerates_charts_in_order() {
        let info = AerodromeInfo {
            metar: Some("METAR SBSP 221700Z 10005KT CAVOK 24/12 Q1021=".to_string()),
            taf: Some("TAF SBSP 221530Z 2218/2318 09008KT CAVOK=".to_string()),
            sunrise: Some("06:21".to_string()),
            sunset: Some("17:54".to_string()),
        };
        let charts = vec!["SID-01".to_string(), "STAR-02".to_string()];

        let report = render_report(&icao(), &info, &charts);
        assert!(report.contains("Aerodrome: SBSP"));
        assert!(report.contains("Sunrise: 06:21"));
        assert!(report.contains("Sunset: 17:54"));
        assert!(report.contains("METAR: METAR SBSP"));
        assert!(report.contains("1 - SID-01"));
        assert!(report.contains("2 - STAR-02"));
        let sid = report.find("1 - SID-01").unwrap();
        let star = report.find("2 - STAR-02").unwrap();
        assert!(sid < star);
    }

    #[test]
    fn report_handles_missing_fields_and_empty_charts() {
        let report = render_report(&icao(), &AerodromeInfo::default(), &[]);
        assert!(report.contains("METAR: not available"));
        assert!(report.contains("No charts available."));
    }

    #[test]
    fn banner_carries_date_and_time() {
        let banner = banner();
        assert!(banner.starts_with("AISWEB scraper"));
        assert!(banner.contains("Date: "));
        assert!(banner.contains("Time: "));
    }
}
