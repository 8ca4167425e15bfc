use std::sync::LazyLock;

use regex::Regex;

use crate::model::{DayEntry, Discard, ExtractionReport};
use crate::normalize::normalize;
use crate::query::{QueryNode, markers};

static DAY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Day (\d+):\s*").expect("day prefix pattern compiles"));

/// Extract the day-by-day itinerary in document order.
///
/// Candidates that are not day rows are dropped silently; see
/// [`extract_days_with_report`] for the counts.
pub fn extract_days<N: QueryNode>(root: N) -> Vec<DayEntry> {
    extract_days_with_report(root).0
}

/// Same as [`extract_days`], plus per-reason discard counts.
pub fn extract_days_with_report<N: QueryNode>(root: N) -> (Vec<DayEntry>, ExtractionReport) {
    let mut report = ExtractionReport::default();

    let Some(section) = root.find_first(&markers::ITINERARY_SECTION) else {
        tracing::debug!("itinerary.section_missing");
        return (Vec::new(), report);
    };

    let candidates = section.find_all(&markers::DAY_ITEM);
    report.candidates = candidates.len();

    let mut days = Vec::with_capacity(candidates.len());
    for (index, item) in candidates.into_iter().enumerate() {
        match parse_day_item(item) {
            Ok(day) => days.push(day),
            Err(discard) => {
                tracing::debug!(index, reason = ?discard, "itinerary.candidate_discarded");
                report.record(discard);
            }
        }
    }
    report.kept = days.len();

    (days, report)
}

fn parse_day_item<N: QueryNode>(item: N) -> Result<DayEntry, Discard> {
    let mut entry = DayEntry::default();

    let title_node = item
        .find_first(&markers::DAY_TITLE)
        .ok_or(Discard::MissingTitle)?;
    let title_text = clean_title(title_node);

    let caps = DAY_PREFIX.captures(&title_text).ok_or(Discard::NotADay)?;
    entry.day = caps[1].to_string();
    entry.title = title_text[caps.get(0).map_or(0, |m| m.end())..].to_string();

    entry.body = day_body(item);

    if entry.title.is_empty() || entry.body.is_empty() {
        return Err(Discard::EmptyFields);
    }
    Ok(entry)
}

/// Title text with the arrow decoration's text removed once, trimmed and
/// normalized.
///
/// The removal is substring based: if the arrow text also appears earlier in
/// the title, that earlier occurrence is the one removed.
fn clean_title<N: QueryNode>(title_node: N) -> String {
    let mut text = title_node.stripped_text();
    if let Some(arrow) = title_node.find_first(&markers::TITLE_ARROW) {
        let arrow_text = arrow.stripped_text();
        if !arrow_text.is_empty() {
            text = text.replacen(&arrow_text, "", 1);
        }
    }
    normalize(text.trim()).into_owned()
}

fn day_body<N: QueryNode>(item: N) -> String {
    let Some(content) = item.find_first(&markers::DAY_CONTENT) else {
        return String::new();
    };

    let paragraphs = content.find_all(&markers::PARAGRAPH);
    let raw = if paragraphs.is_empty() {
        content.stripped_text()
    } else {
        paragraphs
            .iter()
            .map(|p| p.stripped_text())
            .collect::<Vec<_>>()
            .join(" ")
    };
    normalize(&raw).into_owned()
}
