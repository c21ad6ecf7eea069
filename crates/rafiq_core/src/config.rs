use crate::storage::FileStore;
use crate::submit::DEFAULT_SUBMIT_DELAY;
use crate::theme::DEFAULT_THEME_KEY;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub theme_key: String,
    pub submit_delay: Duration,
    /// Where native builds keep `settings.json`. `None` when the platform has no data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_string(),
            submit_delay: DEFAULT_SUBMIT_DELAY,
            data_dir: FileStore::default_dir(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            theme_key: env::var("RAFIQ_THEME_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .unwrap_or(defaults.theme_key),
            submit_delay: env::var("RAFIQ_SUBMIT_DELAY_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.submit_delay),
            data_dir: env::var("RAFIQ_DATA_DIR")
                .ok()
                .filter(|d| !d.is_empty())
                .map(PathBuf::from)
                .or(defaults.data_dir),
        })
    }
}
