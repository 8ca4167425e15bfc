use crate::normalize::normalize;
use crate::query::{QueryNode, markers};

/// Extract the itinerary description as a one-element sequence.
///
/// Sentences are split on `.`, trimmed, emptied fragments dropped and the
/// rest rejoined with `". "`. The last sentence loses its full stop; that
/// exact shape is what consumers of the JSON expect.
pub fn extract_summary<N: QueryNode>(root: N) -> Vec<String> {
    let Some(container) = root.find_first(&markers::DESCRIPTION) else {
        return vec![String::new()];
    };

    let collapsed = container
        .stripped_text()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let text = normalize(&collapsed);

    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    vec![sentences.join(". ")]
}
