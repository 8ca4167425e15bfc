use std::sync::OnceLock;

use wayfare_common::observability::{LogConfig, LogFormat};

static INIT_PATH: OnceLock<std::path::PathBuf> = OnceLock::new();

pub const TOUR_1842: &str = include_str!("../fixtures/tour_1842.html");

pub fn init_test_tracing() {
    let _ = INIT_PATH.get_or_init(|| {
        let config = LogConfig {
            app_name: "wayfare-tests",
            emit_stderr: true,
            format: if std::env::var("WAYFARE_LOG_FORMAT")
                .map(|raw| raw.trim().eq_ignore_ascii_case("json"))
                .unwrap_or(false)
            {
                LogFormat::Json
            } else {
                LogFormat::Text
            },
            default_filter: "debug",
            ..LogConfig::default()
        };

        wayfare_common::observability::init_logging(config).unwrap_or_default()
    });
}
