//! Settings for the `wayfare` command-line shell.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults (identical to the fetcher's fixed policy)
//! 2. an optional YAML file, `wayfare.yaml` unless told otherwise
//! 3. `WAYFARE__`-prefixed environment variables, `__` between path segments
//!    (`WAYFARE__FETCH__PAGE_TIMEOUT_SECS=45`)
//!
//! String values may reference other environment variables as `${VAR}`;
//! references are expanded after merging.
//!
//! The extraction core reads none of this. Only the binary does.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "wayfare.yaml";

const ENV_PREFIX: &str = "WAYFARE";
const MAX_EXPANSION_DEPTH: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WayfareConfig {
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

/// Overrides for the page fetcher. Header fields left unset keep the
/// built-in browser profile values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: Option<String>,
    pub accept: Option<String>,
    pub accept_language: Option<String>,
    pub accept_encoding: Option<String>,
    pub page_timeout_secs: u64,
    pub robots_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub check_robots: bool,
    pub page_delay_ms: DelayConfig,
    pub robots_delay_ms: DelayConfig,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            accept: None,
            accept_language: None,
            accept_encoding: None,
            page_timeout_secs: 30,
            robots_timeout_secs: 10,
            connect_timeout_secs: 10,
            check_robots: true,
            page_delay_ms: DelayConfig { min: 1_000, max: 2_000 },
            robots_delay_ms: DelayConfig { min: 1_000, max: 3_000 },
        }
    }
}

/// Millisecond bounds for one courtesy delay. Either bound may be given on
/// its own; the other keeps its built-in value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayConfig {
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the saved JSON file is written to.
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

/// Expand `${VAR}` / `$VAR` in every string, following chains of references
/// up to a fixed depth. Unknown variables are left verbatim.
fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) if s.contains('$') => {
            let mut cur = std::mem::take(s);
            for _ in 0..MAX_EXPANSION_DEPTH {
                let next = shellexpand::env(&cur)
                    .map(|cow| cow.into_owned())
                    .unwrap_or_else(|_| cur.clone());
                if next == cur {
                    break;
                }
                cur = next;
            }
            *s = cur;
        }
        Value::Array(items) => items.iter_mut().for_each(expand_env_in_value),
        Value::Object(fields) => fields.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Overlay `patch` onto `base`, descending into objects so a partial table
/// only replaces the keys it names.
fn merge_into(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base_fields), Value::Object(patch_fields)) => {
            for (key, value) in patch_fields {
                match base_fields.get_mut(&key) {
                    Some(slot) => merge_into(slot, value),
                    None => {
                        base_fields.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Builder over the `config` crate: files, inline YAML, env overrides.
pub struct WayfareConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env: Environment,
}

impl Default for WayfareConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl WayfareConfigLoader {
    /// Defaults plus `WAYFARE__` environment overrides; no file yet.
    ///
    /// ```
    /// use wayfare_config::WayfareConfigLoader;
    ///
    /// let cfg = WayfareConfigLoader::new()
    ///     .with_yaml_str("fetch:\n  page_timeout_secs: 45")
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert_eq!(cfg.fetch.page_timeout_secs, 45);
    /// assert_eq!(cfg.fetch.robots_timeout_secs, 10);
    /// ```
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
            env: Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        }
    }

    /// Add a required config file; format is inferred from the extension.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Add a config file that may be absent.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Merge an inline YAML snippet.
    ///
    /// ```
    /// use wayfare_config::WayfareConfigLoader;
    ///
    /// let cfg = WayfareConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// fetch:
    ///   check_robots: false
    ///   page_delay_ms: { min: 0, max: 0 }
    /// output:
    ///   dir: "exports"
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert!(!cfg.fetch.check_robots);
    /// assert_eq!(cfg.fetch.page_delay_ms.max, 0);
    /// assert_eq!(cfg.output.dir, std::path::PathBuf::from("exports"));
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, FileFormat::Yaml));
        self
    }

    /// Merge all sources (env last, so it wins) over the built-in defaults,
    /// expand `${VAR}` references and deserialize.
    pub fn load(self) -> Result<WayfareConfig, ConfigError> {
        let cfg = self.builder.add_source(self.env).build()?;

        let mut v = serde_json::to_value(WayfareConfig::default())
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        merge_into(&mut v, cfg.try_deserialize()?);
        expand_env_in_value(&mut v);

        serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))
    }
}
