//! Optional RON settings file.
//!
//! ```ron
//! (
//!     selectors: (primary: "ol.ranking > li", fallback: "li"),
//!     fetch: (request_timeout_secs: Some(30), max_bytes: 5242880),
//! )
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracker_engine::{SelectorSettings, TrackerConfig};
use tracker_logging::tracker_info;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    selectors: SelectorSettings,
    fetch: FetchOverrides,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FetchOverrides {
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
    redirect_limit: Option<usize>,
    max_bytes: Option<u64>,
    user_agent: Option<String>,
}

impl SettingsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings: Self = ron::from_str(&content)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        tracker_info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn apply(self, config: &mut TrackerConfig) {
        config.selectors = self.selectors;
        let fetch = self.fetch;
        if let Some(secs) = fetch.connect_timeout_secs {
            config.fetch.connect_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(secs) = fetch.request_timeout_secs {
            config.fetch.request_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(limit) = fetch.redirect_limit {
            config.fetch.redirect_limit = limit;
        }
        if let Some(max_bytes) = fetch.max_bytes {
            config.fetch.max_bytes = max_bytes;
        }
        if let Some(agent) = fetch.user_agent {
            config.fetch.user_agent = agent;
        }
    }
}
