//! Environment overrides. Single test: env vars are process-wide.

use rafiq_core::Config;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn from_env_overrides_and_falls_back() {
    std::env::set_var("RAFIQ_THEME_KEY", "custom-theme");
    std::env::set_var("RAFIQ_SUBMIT_DELAY_MS", "5");
    std::env::set_var("RAFIQ_DATA_DIR", "/tmp/rafiq-test");
    let config = Config::from_env().unwrap();
    assert_eq!(config.theme_key, "custom-theme");
    assert_eq!(config.submit_delay, Duration::from_millis(5));
    assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/rafiq-test")));

    std::env::set_var("RAFIQ_THEME_KEY", "");
    std::env::set_var("RAFIQ_SUBMIT_DELAY_MS", "soon");
    std::env::remove_var("RAFIQ_DATA_DIR");
    let config = Config::from_env().unwrap();
    assert_eq!(config.theme_key, "rafiq-theme");
    assert_eq!(config.submit_delay, Duration::from_secs(2));
    assert_eq!(config.data_dir, Config::default().data_dir);
}
