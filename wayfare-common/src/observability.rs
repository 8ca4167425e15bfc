//! Logging setup shared by the `wayfare` binary and integration tests.
//!
//! [`init_logging`] installs a single global subscriber that writes into a
//! daily rolling file and, optionally, mirrors events to `stderr`. Calling it
//! again is a no-op that hands back the path resolved by the first call.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_DIR_ENV: &str = "WAYFARE_LOG_DIR";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Output encoding for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Configuration passed to [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Component name, used for the file name and the default directory.
    pub app_name: &'static str,
    /// Explicit log directory. Falls back to `WAYFARE_LOG_DIR`, then
    /// `~/.local/share/<app_name>`.
    pub log_dir: Option<PathBuf>,
    /// Mirror events to `stderr` as well as the file sink.
    pub emit_stderr: bool,
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: &'static str,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            app_name: "wayfare",
            log_dir: None,
            emit_stderr: false,
            format: LogFormat::Text,
            default_filter: "info",
        }
    }
}

/// Install the global `tracing` subscriber and return today's log file path.
pub fn init_logging(config: LogConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = LOG_PATH.get() {
        return Ok(path.clone());
    }

    let dir = resolve_log_dir(config.app_name, config.log_dir.as_deref());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory: {}", dir.display()))?;

    let file_name = format!("{}.log", config.app_name);
    let today = Local::now().format("%Y-%m-%d").to_string();
    let full_path = daily_log_path(&dir, &file_name, &today);

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, file_name));
    let _ = LOG_GUARD.set(guard);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_filter));

    let file_layer = match config.format {
        LogFormat::Text => fmt::layer().with_writer(writer).with_ansi(false).boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
    };
    let stderr_layer = config.emit_stderr.then(|| match config.format {
        LogFormat::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    let _ = LOG_PATH.set(full_path.clone());
    Ok(full_path)
}

/// Where `rolling::daily` puts the file for `day`: `<dir>/<file_name>.<day>`.
fn daily_log_path(dir: &Path, file_name: &str, day: &str) -> PathBuf {
    dir.join(format!("{file_name}.{day}"))
}

fn resolve_log_dir(app_name: &str, explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return expand_home(dir);
    }

    if let Ok(env_dir) = std::env::var(LOG_DIR_ENV) {
        return expand_home(Path::new(&env_dir));
    }

    default_data_dir(app_name)
}

fn expand_home(path: &Path) -> PathBuf {
    match (
        path.to_str().and_then(|s| s.strip_prefix("~/")),
        std::env::var("HOME"),
    ) {
        (Some(rest), Ok(home)) => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}

fn default_data_dir(app_name: &str) -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".local").join("share").join(app_name),
        Err(_) => PathBuf::from(".").join(app_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_path_matches_rolling_appender_naming() {
        let path = daily_log_path(Path::new("/var/log/wayfare"), "wayfare.log", "2026-10-19");
        assert_eq!(path, PathBuf::from("/var/log/wayfare/wayfare.log.2026-10-19"));
    }

    #[test]
    fn explicit_dir_wins_over_env() {
        temp_env::with_var(LOG_DIR_ENV, Some("/tmp/from-env"), || {
            let dir = resolve_log_dir("wayfare", Some(Path::new("/var/log/wayfare")));
            assert_eq!(dir, PathBuf::from("/var/log/wayfare"));
        });
    }

    #[test]
    fn env_dir_is_used_and_home_expanded() {
        temp_env::with_vars(
            [(LOG_DIR_ENV, Some("~/logs")), ("HOME", Some("/home/tester"))],
            || {
                let dir = resolve_log_dir("wayfare", None);
                assert_eq!(dir, PathBuf::from("/home/tester/logs"));
            },
        );
    }

    #[test]
    fn falls_back_to_local_share() {
        temp_env::with_vars(
            [(LOG_DIR_ENV, None), ("HOME", Some("/home/tester"))],
            || {
                let dir = resolve_log_dir("wayfare", None);
                assert_eq!(dir, PathBuf::from("/home/tester/.local/share/wayfare"));
            },
        );
    }
}
