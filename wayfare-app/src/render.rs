//! Human-facing output: preview text, saved file names.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use wayfare_http::FetchError;
use wayfare_web::{ExtractionReport, TourRecord};

/// Tour pages this tool understands. Other URLs are attempted anyway.
pub const TOUR_URL_PREFIX: &str = "https://tours.flightcentre.com.au/";

pub const EXAMPLE_URLS: [&str; 3] = [
    "https://tours.flightcentre.com.au/t/1842",
    "https://tours.flightcentre.com.au/t/5578",
    "https://tours.flightcentre.com.au/t/2156",
];

pub const FETCH_HINT: &str =
    "Please check the URL and try again. Make sure it's a valid Flight Centre tour page.";

/// Wrap a failed scrape for `main` to report; the cause is printed once, as
/// part of the returned chain.
pub fn scrape_failure(err: FetchError) -> anyhow::Error {
    anyhow::Error::new(err).context("tour extraction failed")
}

pub fn is_tour_url(url: &str) -> bool {
    url.starts_with(TOUR_URL_PREFIX)
}

/// `tour_data_<last path segment>.json`, segment taken verbatim.
pub fn download_file_name(url: &str) -> String {
    let last = url.rsplit('/').next().unwrap_or_default();
    format!("tour_data_{last}.json")
}

pub fn preview(record: &TourRecord, report: Option<&ExtractionReport>) -> String {
    let mut out = String::new();
    let summary = record.summary_text();

    let _ = writeln!(out, "Days found: {}", record.itinerary.len());
    let _ = writeln!(out, "Summary length: {}", summary.chars().count());

    out.push_str("\nSummary\n");
    if summary.is_empty() {
        out.push_str("No summary found\n");
    } else {
        let _ = writeln!(out, "{summary}");
    }

    out.push_str("\nItinerary\n");
    for day in &record.itinerary {
        let _ = writeln!(out, "Day {}: {}", day.day, day.title);
        let _ = writeln!(out, "    {}", day.body);
    }

    if let Some(report) = report {
        let _ = writeln!(
            out,
            "\nCandidates: {} kept, {} without title, {} not a day, {} empty",
            report.kept, report.missing_title, report.not_a_day, report.empty_fields
        );
    }
    out
}

pub fn write_json(path: &Path, json: &str) -> anyhow::Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path.to_path_buf())
}
