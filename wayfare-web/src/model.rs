use serde::{Deserialize, Serialize};

/// One itinerary day.
///
/// `icon` and `image` are reserved and always empty. `day` keeps the digits
/// exactly as the page declares them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub icon: String,
    pub day: String,
    pub title: String,
    pub image: String,
    pub body: String,
}

/// Everything extracted from one tour page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourRecord {
    /// Always exactly one element; empty string when the page has no description.
    pub summary: Vec<String>,
    /// Days in document order.
    pub itinerary: Vec<DayEntry>,
}

impl TourRecord {
    pub fn summary_text(&self) -> &str {
        self.summary.first().map(String::as_str).unwrap_or_default()
    }

    /// Two-space indented JSON with non-ASCII characters written literally.
    ///
    /// ```
    /// use wayfare_web::TourRecord;
    ///
    /// let record = TourRecord { summary: vec!["Phở tour".into()], itinerary: vec![] };
    /// let json = record.to_pretty_json().unwrap();
    /// assert_eq!(json, "{\n  \"summary\": [\n    \"Phở tour\"\n  ],\n  \"itinerary\": []\n}");
    /// ```
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Why a candidate accordion item did not become a [`DayEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discard {
    MissingTitle,
    NotADay,
    EmptyFields,
}

/// Diagnostic counts from one itinerary pass. Never serialized into the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    pub candidates: usize,
    pub kept: usize,
    pub missing_title: usize,
    pub not_a_day: usize,
    pub empty_fields: usize,
}

impl ExtractionReport {
    pub fn record(&mut self, discard: Discard) {
        match discard {
            Discard::MissingTitle => self.missing_title += 1,
            Discard::NotADay => self.not_a_day += 1,
            Discard::EmptyFields => self.empty_fields += 1,
        }
    }

    pub fn discarded(&self) -> usize {
        self.missing_title + self.not_a_day + self.empty_fields
    }
}
