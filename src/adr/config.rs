//! # Configuration
//!
//! Settings live in an optional `adr.json`. Resolution, highest priority first:
//!
//! 1. `--dir` on the command line (applied by the binary)
//! 2. `ADR_DIR` environment variable
//! 3. `./adr.json` in the working directory
//! 4. `adr.json` in the user config directory (via `directories`)
//! 5. Compiled defaults
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `dir` | `docs/adr` | Record directory, relative to the working directory |
//! | `number_width` | `3` | Zero padding for record numbers |

use crate::error::{AdrError, Result};
use crate::model::DEFAULT_NUMBER_WIDTH;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "adr.json";
pub const DIR_ENV: &str = "ADR_DIR";
const DEFAULT_DIR: &str = "docs/adr";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdrConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_number_width")]
    pub number_width: usize,
}

fn default_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DIR)
}

fn default_number_width() -> usize {
    DEFAULT_NUMBER_WIDTH
}

impl Default for AdrConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            number_width: default_number_width(),
        }
    }
}

impl AdrConfig {
    /// Load `adr.json` from the given directory, if there is one.
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Option<Self>> {
        let path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AdrError::Config(format!("{}: {}", path.display(), e)))?;
        let config: AdrConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Resolve the effective configuration for a working directory.
    pub fn resolve(cwd: &Path, dir_override: Option<&str>) -> Result<Self> {
        let mut config = match Self::load_from(cwd)? {
            Some(config) => config,
            None => match global_config_dir() {
                Some(dir) => Self::load_from(dir)?.unwrap_or_default(),
                None => Self::default(),
            },
        };

        if let Some(dir) = dir_override.filter(|d| !d.is_empty()) {
            config.dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    /// The store directory, anchored at `cwd` when relative.
    pub fn store_dir(&self, cwd: &Path) -> PathBuf {
        if self.dir.is_absolute() {
            self.dir.clone()
        } else {
            cwd.join(&self.dir)
        }
    }

    fn validate(&self) -> Result<()> {
        if self.number_width == 0 || self.number_width > 9 {
            return Err(AdrError::Config(format!(
                "number_width must be between 1 and 9, got {}",
                self.number_width
            )));
        }
        Ok(())
    }
}

fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "adr").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AdrConfig::default();
        assert_eq!(config.dir, PathBuf::from("docs/adr"));
        assert_eq!(config.number_width, 3);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        assert_eq!(AdrConfig::load_from(temp.path()).unwrap(), None);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"dir": "decisions"}"#).unwrap();

        let config = AdrConfig::load_from(temp.path()).unwrap().unwrap();
        assert_eq!(config.dir, PathBuf::from("decisions"));
        assert_eq!(config.number_width, 3);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            AdrConfig::load_from(temp.path()),
            Err(AdrError::Serialization(_))
        ));
    }

    #[test]
    fn test_zero_width_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"number_width": 0}"#).unwrap();
        assert!(matches!(
            AdrConfig::load_from(temp.path()),
            Err(AdrError::Config(_))
        ));
    }

    #[test]
    fn test_project_file_and_override() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"dir": "decisions", "number_width": 4}"#,
        )
        .unwrap();

        let config = AdrConfig::resolve(temp.path(), None).unwrap();
        assert_eq!(config.dir, PathBuf::from("decisions"));
        assert_eq!(config.number_width, 4);

        let config = AdrConfig::resolve(temp.path(), Some("other")).unwrap();
        assert_eq!(config.dir, PathBuf::from("other"));
        assert_eq!(config.number_width, 4);
    }

    #[test]
    fn test_store_dir_anchoring() {
        let config = AdrConfig::default();
        let cwd = Path::new("/work");
        assert_eq!(config.store_dir(cwd), PathBuf::from("/work/docs/adr"));

        let absolute = AdrConfig {
            dir: PathBuf::from("/srv/adr"),
            ..Default::default()
        };
        assert_eq!(absolute.store_dir(cwd), PathBuf::from("/srv/adr"));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = AdrConfig {
            dir: PathBuf::from("x/y"),
            number_width: 5,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AdrConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
