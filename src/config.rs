//! Engine configuration: page size and colour table overrides.

use std::num::NonZeroUsize;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::chips::{ColorOverride, Palette};
use crate::error::{HistoryError, HistoryResult};
use crate::pagination::DEFAULT_PAGE_SIZE;

const ENV_PAGE_SIZE: &str = "HISTORY_PAGE_SIZE";


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub page_size: NonZeroUsize,
    pub colors: Vec<ColorOverride>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            colors: Vec::new(),
        }
    }
}

impl HistoryConfig {
    pub fn from_file(path: &Path) -> HistoryResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw).map_err(|e| {
            HistoryError::Config(format!("{}: {}", path.display(), e))
        })?;
        info!("Loaded history config from {}", path.display());
        Ok(config)
    }

    /// Optional file, then `HISTORY_PAGE_SIZE` from the environment
    pub fn load(path: Option<&Path>) -> HistoryResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let env_value = std::env::var(ENV_PAGE_SIZE).ok();
        config.with_page_size_override(env_value.as_deref())
    }

    pub fn with_page_size_override(mut self, value: Option<&str>) -> HistoryResult<Self> {
        if let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.page_size = raw.parse::<NonZeroUsize>().map_err(|e| {
                HistoryError::Config(format!(
                    "{} must be a positive integer: {}",
                    ENV_PAGE_SIZE, e
                ))
            })?;
        }
        Ok(self)
    }

    pub fn palette(&self) -> Palette {
        Palette::default().with_overrides(&self.colors)
    }
}
