use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;
use wayfare_config::{DelayConfig, WayfareConfig, WayfareConfigLoader};

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn empty_sources_give_builtin_defaults() {
    let config = WayfareConfigLoader::new().load().expect("defaults load");
    assert_eq!(config, WayfareConfig::default());
    assert_eq!(config.fetch.page_delay_ms, DelayConfig { min: 1_000, max: 2_000 });
    assert_eq!(config.fetch.robots_delay_ms, DelayConfig { min: 1_000, max: 3_000 });
}

#[test]
#[serial]
fn missing_optional_file_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let config = WayfareConfigLoader::new()
        .with_optional_file(tmp.path().join("absent.yaml"))
        .load()
        .expect("optional file may be absent");
    assert!(config.fetch.check_robots);
}

#[test]
#[serial]
fn missing_required_file_fails() {
    let tmp = TempDir::new().unwrap();
    let result = WayfareConfigLoader::new()
        .with_file(tmp.path().join("absent.yaml"))
        .load();
    assert!(result.is_err());
}

#[test]
#[serial]
fn file_values_and_env_expansion_apply() {
    let tmp = TempDir::new().unwrap();
    let file_yaml = r#"
fetch:
  user_agent: "${WAYFARE_TEST_UA}"
  accept_language: "en-AU,en;q=0.5"
  page_timeout_secs: 20
  check_robots: false
  page_delay_ms:
    min: 0
    max: 250
output:
  dir: "exports"
"#;
    let p = write_yaml(&tmp, "wayfare.yaml", file_yaml);

    temp_env::with_var("WAYFARE_TEST_UA", Some("TourBot/2.0"), || {
        let config = WayfareConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load file config");

        assert_eq!(config.fetch.user_agent.as_deref(), Some("TourBot/2.0"));
        assert_eq!(config.fetch.accept_language.as_deref(), Some("en-AU,en;q=0.5"));
        assert_eq!(config.fetch.page_timeout_secs, 20);
        assert_eq!(config.fetch.robots_timeout_secs, 10);
        assert!(!config.fetch.check_robots);
        assert_eq!(config.fetch.page_delay_ms, DelayConfig { min: 0, max: 250 });
        assert_eq!(config.output.dir, PathBuf::from("exports"));
    });
}

#[test]
#[serial]
fn environment_overrides_file() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(&tmp, "wayfare.yaml", "fetch:\n  page_timeout_secs: 20\n");

    temp_env::with_vars(
        [
            ("WAYFARE__FETCH__PAGE_TIMEOUT_SECS", Some("45")),
            ("WAYFARE__FETCH__CHECK_ROBOTS", Some("false")),
        ],
        || {
            let config = WayfareConfigLoader::new()
                .with_file(&p)
                .load()
                .expect("load with env overrides");
            assert_eq!(config.fetch.page_timeout_secs, 45);
            assert!(!config.fetch.check_robots);
        },
    );
}

#[test]
#[serial]
fn single_delay_bound_keeps_the_other_default() {
    let config = WayfareConfigLoader::new()
        .with_yaml_str("fetch:\n  page_delay_ms: { min: 0 }\n  robots_delay_ms: { max: 5000 }\n")
        .load()
        .expect("partial delay bounds load");

    assert_eq!(config.fetch.page_delay_ms, DelayConfig { min: 0, max: 2_000 });
    assert_eq!(config.fetch.robots_delay_ms, DelayConfig { min: 1_000, max: 5_000 });
    assert_eq!(config.fetch.page_timeout_secs, 30);
}
