use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub debounce_ms: u64,
    pub show_banner: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            show_banner: true,
            log_file: None,
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("npmx");
        path.push("config.toml");
        path
    })
}

pub fn get_default_log_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".cache");
        path.push("npmx");
        path.push("npmx.log");
        path
    })
}

impl Config {
    /// Loads `~/.config/npmx/config.toml`. On first run the defaults are
    /// written there so the keys are easy to find.
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) => Self::load_or_init(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::default();
        // Best effort; a read-only home still gets the defaults.
        let _ = config.save_to(path);
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }

    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url).with_context(|| format!("invalid base_url {:?}", self.base_url))
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(get_default_log_path)
    }
}
