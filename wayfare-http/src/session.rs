use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use crate::{BrowserProfile, FetchError, Politeness};

// ==============================
// Settings
// ==============================

/// Timeouts and courtesy policy for a [`PageSession`].
///
/// ```
/// use std::time::Duration;
/// use wayfare_http::FetchSettings;
///
/// let settings = FetchSettings::default();
/// assert_eq!(settings.page_timeout, Duration::from_secs(30));
/// assert_eq!(settings.robots_timeout, Duration::from_secs(10));
/// assert!(settings.check_robots);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// Upper bound on waiting for the page response.
    pub page_timeout: Duration,
    /// Upper bound on the robots probe.
    pub robots_timeout: Duration,
    pub connect_timeout: Duration,
    /// Probe `<origin>/robots.txt` before the page request.
    pub check_robots: bool,
    pub politeness: Politeness,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            page_timeout: Duration::from_secs(30),
            robots_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
            check_robots: true,
            politeness: Politeness::default(),
        }
    }
}

// ==============================
// Markup source seam
// ==============================

/// Anything that can turn a URL into page markup.
#[async_trait]
pub trait MarkupSource: Send + Sync {
    async fn fetch_markup(&self, url: &str) -> Result<String, FetchError>;
}

// ==============================
// Session
// ==============================

/// Caller-owned transport session.
///
/// Headers are fixed at construction from a [`BrowserProfile`] and never
/// mutated afterwards. Sessions are cheap to clone; concurrent callers that
/// want independent connection state should each build their own.
#[derive(Clone)]
pub struct PageSession {
    inner: Client,
    settings: FetchSettings,
}

impl PageSession {
    pub fn new(profile: BrowserProfile, settings: FetchSettings) -> Result<Self, FetchError> {
        let inner = Client::builder()
            .default_headers(profile.header_map()?)
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|e| FetchError::Build(e.to_string()))?;
        Ok(Self { inner, settings })
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Probe the origin's crawling policy.
    ///
    /// Best effort only: every failure is logged and swallowed, and the
    /// answer is always "proceed". A `200` response earns an extra courtesy
    /// delay.
    pub async fn probe_robots(&self, page: &Url) -> bool {
        let Some(robots_url) = robots_url(page) else {
            tracing::debug!(url = %page, "http.robots.skip_opaque_origin");
            return true;
        };

        let t0 = Instant::now();
        match self
            .inner
            .get(robots_url.clone())
            .timeout(self.settings.robots_timeout)
            .send()
            .await
        {
            Ok(resp) => {
                let status = resp.status();
                tracing::debug!(
                    url = %robots_url,
                    %status,
                    duration_ms = t0.elapsed().as_millis() as u64,
                    "http.robots.response"
                );
                if status == StatusCode::OK {
                    Politeness::pause(self.settings.politeness.robots, "robots").await;
                }
            }
            Err(err) => {
                tracing::debug!(url = %robots_url, error = %err, "http.robots.ignored_error");
            }
        }
        true
    }

    /// Fetch one page and return its body as text.
    ///
    /// Runs the robots probe (when enabled), waits the page courtesy delay,
    /// then issues exactly one GET. Non-success statuses and transport errors
    /// are returned as [`FetchError`] without retrying.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::Url(format!("{url}: {e}")))?;

        if self.settings.check_robots {
            self.probe_robots(&parsed).await;
        }

        Politeness::pause(self.settings.politeness.page, "page").await;

        let timeout = self.settings.page_timeout;
        tracing::info!(
            host_path = %format!("{}{}", parsed.host_str().unwrap_or("-"), parsed.path()),
            timeout_ms = timeout.as_millis() as u64,
            "http.page.start"
        );

        let t0 = Instant::now();
        let resp = self
            .inner
            .get(parsed)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url, error = %e, "http.page.network_error");
                FetchError::from_reqwest(url, timeout, e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url, %status, "http.page.error_status");
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::warn!(url, error = %e, "http.page.body_error");
            FetchError::from_reqwest(url, timeout, e)
        })?;

        tracing::info!(
            %status,
            duration_ms = t0.elapsed().as_millis() as u64,
            body_len = body.len(),
            "http.page.done"
        );
        Ok(body)
    }
}

#[async_trait]
impl MarkupSource for PageSession {
    async fn fetch_markup(&self, url: &str) -> Result<String, FetchError> {
        self.fetch(url).await
    }
}

/// `<scheme>://<host>[:port]/robots.txt` for the page's origin.
fn robots_url(page: &Url) -> Option<Url> {
    let origin = page.origin();
    if !origin.is_tuple() {
        return None;
    }
    Url::parse(&origin.ascii_serialization())
        .and_then(|o| o.join("/robots.txt"))
        .ok()
}
