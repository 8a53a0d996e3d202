use std::path::PathBuf;

use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;

use crate::fetch::FetchSettings;

pub const DEFAULT_PAGE_URL: &str = "https://example.com/ranking";
pub const DEFAULT_OUTPUT_DIR: &str = "out";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {field} selector {selector:?}: {message}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        message: String,
    },
}

/// CSS selectors describing the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectorSettings {
    /// Item nodes on the expected markup.
    pub primary: String,
    /// Looser item query used when `primary` matches nothing.
    pub fallback: String,
    /// Child holding the display name; the link text is used otherwise.
    pub title: String,
    /// Child whose text carries the points.
    pub score_label: String,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            primary: "ol.ranking > li, ul.ranking > li, .ranking-item".to_string(),
            fallback: "li".to_string(),
            title: r#"[class*="title"]"#.to_string(),
            score_label: r#"[class*="point"], [class*="score"]"#.to_string(),
        }
    }
}

/// Everything one run needs, resolved once before the run starts.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub page_url: String,
    pub output_path: PathBuf,
    pub selectors: SelectorSettings,
    pub fetch: FetchSettings,
}

impl TrackerConfig {
    /// Fills unset locations with the defaults. The default output file is
    /// named after the year of `started_at`.
    pub fn resolve(
        page_url: Option<String>,
        output_path: Option<PathBuf>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            page_url: page_url.unwrap_or_else(|| DEFAULT_PAGE_URL.to_string()),
            output_path: output_path.unwrap_or_else(|| default_output_path(started_at)),
            selectors: SelectorSettings::default(),
            fetch: FetchSettings::default(),
        }
    }
}

pub fn default_output_path(started_at: DateTime<Utc>) -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR).join(format!("{}.json", started_at.year()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn defaults_use_start_year() {
        let started = Utc.with_ymd_and_hms(2031, 12, 31, 23, 59, 59).unwrap();
        let config = TrackerConfig::resolve(None, None, started);
        assert_eq!(config.page_url, DEFAULT_PAGE_URL);
        assert_eq!(config.output_path, PathBuf::from("out").join("2031.json"));
    }

    #[test]
    fn explicit_values_win() {
        let started = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let config = TrackerConfig::resolve(
            Some("https://other.example/list".into()),
            Some(PathBuf::from("data/history.json")),
            started,
        );
        assert_eq!(config.page_url, "https://other.example/list");
        assert_eq!(config.output_path, PathBuf::from("data/history.json"));
    }
}
