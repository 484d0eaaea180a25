//! Site-wide settings consumed by selection and feeds.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::{VisibilityPolicy, DEFAULT_SCHEDULED_POST_MARGIN_MS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub website: String,

    /// Scheduled posts show up this many milliseconds early.
    pub scheduled_post_margin_ms: i64,

    /// Development builds list scheduled posts regardless of their date.
    pub dev_mode: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            website: "https://example.com/".to_string(),
            scheduled_post_margin_ms: DEFAULT_SCHEDULED_POST_MARGIN_MS,
            dev_mode: false,
        }
    }
}

impl SiteConfig {
    /// Load from a JSON file. Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SiteConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), dev_mode = config.dev_mode, "loaded site config");
        Ok(config)
    }

    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    pub fn visibility(&self) -> VisibilityPolicy {
        VisibilityPolicy::new(self.scheduled_post_margin_ms, self.dev_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{ "title": "Notes" }"#).unwrap();
        assert_eq!(config.title, "Notes");
        assert_eq!(config.scheduled_post_margin_ms, 15 * 60 * 1000);
        assert!(!config.dev_mode);
    }

    #[test]
    fn visibility_carries_margin_and_mode() {
        let config: SiteConfig =
            serde_json::from_str(r#"{ "scheduledPostMarginMs": 0, "devMode": true }"#).unwrap();
        assert_eq!(config.visibility(), VisibilityPolicy::new(0, true));
    }

    #[test]
    fn serializes_only_fields_the_crate_reads() {
        let json = serde_json::to_value(SiteConfig::default()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 5, "unexpected config keys: {keys:?}");
        assert!(json.get("author").is_none());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SiteConfig::load(Path::new("/nonexistent/site.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
