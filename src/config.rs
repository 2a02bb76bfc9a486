use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::data::loader::drive_url;

/// Drive file holding the shared job postings.
pub const DEFAULT_FILE_ID: &str = "15Z43942G9E9IWRtaULNhkCGGZBqUqOeC";

/// Looked up in the working directory at startup.
pub const CONFIG_FILE: &str = "job-finder.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Startup settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Google Drive id of the CSV to load.
    pub file_id: String,
    /// Explicit CSV URL; wins over `file_id` when set.
    pub url: Option<String>,
    /// Initial window size in points.
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_id: DEFAULT_FILE_ID.to_string(),
            url: None,
            window_size: [1200.0, 800.0],
        }
    }
}

impl Config {
    /// URL the dataset is fetched from.
    pub fn csv_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => drive_url(&self.file_id),
        }
    }

    /// Read `path`; `Ok(None)` when it does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
    }

    /// [`CONFIG_FILE`] from the working directory, falling back to defaults.
    pub fn load_or_default() -> Self {
        match Self::load(Path::new(CONFIG_FILE)) {
            Ok(Some(config)) => {
                log::info!("Loaded settings from {CONFIG_FILE}");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("job-finder-{}-{name}", std::process::id()))
    }

    #[test]
    fn default_url_points_at_drive_file() {
        assert_eq!(
            Config::default().csv_url(),
            format!("https://drive.google.com/uc?id={DEFAULT_FILE_ID}")
        );
    }

    #[test]
    fn explicit_url_wins() {
        let config = Config {
            url: Some("https://example.com/jobs.csv".to_string()),
            ..Config::default()
        };
        assert_eq!(config.csv_url(), "https://example.com/jobs.csv");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_path("partial.json");
        std::fs::write(&path, r#"{ "file_id": "abc" }"#).unwrap();

        let config = Config::load(&path).unwrap().unwrap();
        assert_eq!(config.file_id, "abc");
        assert_eq!(config.url, None);
        assert_eq!(config.window_size, [1200.0, 800.0]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_not_an_error() {
        assert!(Config::load(&temp_path("absent.json")).unwrap().is_none());
    }

    #[test]
    fn malformed_file_is_reported() {
        let path = temp_path("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Json { .. })));
        std::fs::remove_file(&path).unwrap();
    }
}
