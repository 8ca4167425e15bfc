//! Tour page acquisition and itinerary extraction.
//!
//! - Text normalisation of typographic punctuation (`normalize`)
//! - Structural-marker queries over a parsed document (`query`, `html`)
//! - Summary and day-by-day extraction (`summary`, `itinerary`)
//! - Fetch-then-extract orchestration (`tour`)
//!
//! Extraction never fails once markup is in hand: missing markup regions
//! degrade to empty fields or an empty itinerary.
//!
//! ```rust
//! let html = r#"
//! <div class="ao-clp-custom-tdp-itinerary__description">Visit Hanoi. See the lake.</div>
//! <section class="ao-clp-custom-tdp-itinerary"><ul>
//!   <li class="js-ao-common-accordion">
//!     <div class="js-ao-common-accordion__title">Day 1: Hanoi</div>
//!     <div class="ao-common-accordion__bottom-content"><p>Arrive in Hanoi.</p></div>
//!   </li>
//! </ul></section>"#;
//!
//! let record = wayfare_web::extract_tour(html);
//! assert_eq!(record.summary, vec!["Visit Hanoi. See the lake".to_string()]);
//! assert_eq!(record.itinerary[0].day, "1");
//! assert_eq!(record.itinerary[0].title, "Hanoi");
//! ```

pub mod html;
pub mod itinerary;
pub mod model;
pub mod normalize;
pub mod query;
pub mod summary;
pub mod tour;

pub use html::{HtmlDocument, HtmlNode};
pub use itinerary::{extract_days, extract_days_with_report};
pub use model::{DayEntry, ExtractionReport, TourRecord};
pub use normalize::normalize;
pub use query::{Marker, QueryNode};
pub use summary::extract_summary;
pub use tour::{extract_tour, extract_tour_with_report, scrape_tour, scrape_tour_with_report};
