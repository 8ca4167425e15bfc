use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

/// Inclusive range a courtesy delay is drawn from, uniformly, at millisecond
/// granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min: Duration,
    pub max: Duration,
}

impl DelayRange {
    pub const ZERO: Self = Self::from_millis(0, 0);

    pub const fn from_millis(min: u64, max: u64) -> Self {
        Self {
            min: Duration::from_millis(min),
            max: Duration::from_millis(max),
        }
    }

    /// Draw one delay. A degenerate range (`max <= min`) always yields `min`.
    ///
    /// ```
    /// use std::time::Duration;
    /// use wayfare_http::DelayRange;
    ///
    /// let range = DelayRange::from_millis(1000, 2000);
    /// let d = range.sample();
    /// assert!(d >= Duration::from_secs(1) && d <= Duration::from_secs(2));
    /// assert_eq!(DelayRange::ZERO.sample(), Duration::ZERO);
    /// ```
    pub fn sample(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let lo = self.min.as_millis() as u64;
        let hi = self.max.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(lo..=hi))
    }
}

/// Fixed courtesy policy applied around network requests.
///
/// This is not adaptive: the same ranges apply to every request regardless
/// of how the server responds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Politeness {
    /// Extra pause after a successful robots probe.
    pub robots: DelayRange,
    /// Pause before every page request.
    pub page: DelayRange,
}

impl Default for Politeness {
    fn default() -> Self {
        Self {
            robots: DelayRange::from_millis(1_000, 3_000),
            page: DelayRange::from_millis(1_000, 2_000),
        }
    }
}

impl Politeness {
    /// No delays at all; for tests and local fixtures.
    pub const fn none() -> Self {
        Self {
            robots: DelayRange::ZERO,
            page: DelayRange::ZERO,
        }
    }

    pub(crate) async fn pause(range: DelayRange, reason: &'static str) {
        // Sampled before the await so the thread-local rng never crosses it.
        let delay = range.sample();
        if delay.is_zero() {
            return;
        }
        tracing::debug!(delay_ms = delay.as_millis() as u64, reason, "http.politeness.delay");
        sleep(delay).await;
    }
}
