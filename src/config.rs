//! Recorder configuration.
//!
//! One flat JSON file; every field has a default so an empty file and a
//! missing file both yield a usable configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use recording_authority::AuthorityConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Directory holding the persisted recording collection.
    pub data_dir: PathBuf,
    /// Directory download artifacts are written into.
    pub export_dir: PathBuf,
    /// Quiet period closing a typing burst.
    pub typing_timeout_ms: u64,
    /// Key the recording collection lives under in the store.
    pub storage_key: String,
    /// Capacity of the state broadcast bus.
    pub bus_capacity: usize,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".flowrec"),
            export_dir: PathBuf::from("downloads"),
            typing_timeout_ms: 1_000,
            storage_key: "recordings".into(),
            bus_capacity: 32,
        }
    }
}

impl RecorderConfig {
    /// Load from `path`; a missing file falls back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("recordings.json")
    }

    pub fn authority_config(&self) -> AuthorityConfig {
        AuthorityConfig {
            typing_timeout: Duration::from_millis(self.typing_timeout_ms),
            storage_key: self.storage_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = RecorderConfig::load(Path::new("/nonexistent/flowrec.json")).unwrap();
        assert_eq!(config.typing_timeout_ms, 1_000);
        assert_eq!(config.storage_key, "recordings");
    }

    #[test]
    fn partial_file_keeps_defaults_for_omitted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flowrec.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{{\"typing_timeout_ms\": 250}}").unwrap();

        let config = RecorderConfig::load(&path).unwrap();
        assert_eq!(config.typing_timeout_ms, 250);
        assert_eq!(config.bus_capacity, 32);
        assert_eq!(
            config.authority_config().typing_timeout,
            Duration::from_millis(250)
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flowrec.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            RecorderConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
