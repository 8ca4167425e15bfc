//! Fetch-then-extract entry points.

use wayfare_http::{FetchError, MarkupSource};

use crate::html::HtmlDocument;
use crate::itinerary::extract_days_with_report;
use crate::model::{ExtractionReport, TourRecord};
use crate::summary::extract_summary;

/// Build a [`TourRecord`] from page markup. Never fails.
pub fn extract_tour(markup: &str) -> TourRecord {
    extract_tour_with_report(markup).0
}

pub fn extract_tour_with_report(markup: &str) -> (TourRecord, ExtractionReport) {
    let doc = HtmlDocument::parse(markup);
    let root = doc.root();

    let summary = extract_summary(root);
    let (itinerary, report) = extract_days_with_report(root);

    tracing::debug!(
        summary_chars = summary.first().map_or(0, |s| s.chars().count()),
        candidates = report.candidates,
        kept = report.kept,
        discarded = report.discarded(),
        "tour.extracted"
    );

    (TourRecord { summary, itinerary }, report)
}

/// Fetch `url` through `source` and extract it.
///
/// A fetch failure aborts the call; there is no partial record.
pub async fn scrape_tour(source: &dyn MarkupSource, url: &str) -> Result<TourRecord, FetchError> {
    scrape_tour_with_report(source, url)
        .await
        .map(|(record, _)| record)
}

pub async fn scrape_tour_with_report(
    source: &dyn MarkupSource,
    url: &str,
) -> Result<(TourRecord, ExtractionReport), FetchError> {
    let markup = source.fetch_markup(url).await?;
    let (record, report) = extract_tour_with_report(&markup);
    tracing::info!(
        url,
        days = record.itinerary.len(),
        has_summary = !record.summary_text().is_empty(),
        "tour.scraped"
    );
    Ok((record, report))
}
