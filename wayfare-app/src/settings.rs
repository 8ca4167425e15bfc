//! Config file values → fetcher types.

use std::time::Duration;

use wayfare_config::{DelayConfig, FetchConfig};
use wayfare_http::{BrowserProfile, DelayRange, FetchError, FetchSettings, PageSession, Politeness};

pub fn browser_profile(cfg: &FetchConfig) -> BrowserProfile {
    let mut profile = BrowserProfile::default();
    let overrides = [
        (&cfg.user_agent, &mut profile.user_agent),
        (&cfg.accept, &mut profile.accept),
        (&cfg.accept_language, &mut profile.accept_language),
        (&cfg.accept_encoding, &mut profile.accept_encoding),
    ];
    for (value, slot) in overrides {
        if let Some(value) = value {
            *slot = value.clone();
        }
    }
    profile
}

fn delay_range(cfg: DelayConfig) -> DelayRange {
    DelayRange::from_millis(cfg.min, cfg.max)
}

pub fn fetch_settings(cfg: &FetchConfig) -> FetchSettings {
    FetchSettings {
        page_timeout: Duration::from_secs(cfg.page_timeout_secs),
        robots_timeout: Duration::from_secs(cfg.robots_timeout_secs),
        connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
        check_robots: cfg.check_robots,
        politeness: Politeness {
            robots: delay_range(cfg.robots_delay_ms),
            page: delay_range(cfg.page_delay_ms),
        },
    }
}

pub fn build_session(cfg: &FetchConfig) -> Result<PageSession, FetchError> {
    PageSession::new(browser_profile(cfg), fetch_settings(cfg))
}
