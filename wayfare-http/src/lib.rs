//! Polite single-page HTTP fetcher.
//!
//! - [`BrowserProfile`]: static desktop-browser header set sent with every request
//! - [`Politeness`]: randomized courtesy delays before the robots probe and the page request
//! - [`PageSession`]: caller-owned transport session; one `fetch` per page
//! - [`MarkupSource`]: the seam extraction code depends on instead of a concrete client
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), wayfare_http::FetchError> {
//! use wayfare_http::{BrowserProfile, FetchSettings, PageSession};
//!
//! let session = PageSession::new(BrowserProfile::default(), FetchSettings::default())?;
//! let html = session.fetch("https://tours.flightcentre.com.au/t/1842").await?;
//! assert!(!html.is_empty());
//! # Ok(()) }
//! ```
//!
//! There is no retry and no backoff: a failed page request surfaces a
//! [`FetchError`] immediately. The robots probe is advisory and its failures
//! are only logged.

mod error;
mod politeness;
mod profile;
mod session;

pub use error::FetchError;
pub use politeness::{DelayRange, Politeness};
pub use profile::BrowserProfile;
pub use reqwest::{StatusCode, Url};
pub use session::{FetchSettings, MarkupSource, PageSession};
