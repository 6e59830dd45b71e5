use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Per-directory override file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".notion.toml";

/// Pins a directory to a saved profile or to a literal token, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl LocalConfig {
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(LOCAL_CONFIG_FILE)
    }

    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::path_in(dir))
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let local: LocalConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if local.profile.is_some() && local.token.is_some() {
            return Err(ConfigError::InvalidLocalConfig {
                config_path: config_path.to_path_buf(),
                reason: "cannot specify both \"profile\" and \"token\"".to_string(),
            });
        }

        Ok(Some(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_local(dir: &TempDir, content: &str) {
        std::fs::write(LocalConfig::path_in(dir.path()), content).unwrap();
    }

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(LocalConfig::load_from_dir(dir.path()).unwrap(), None);
    }

    #[test]
    fn loads_profile_reference() {
        let dir = TempDir::new().unwrap();
        write_local(&dir, "profile = \"work\"\n");

        let local = LocalConfig::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(local.profile.as_deref(), Some("work"));
        assert_eq!(local.token, None);
    }

    #[test]
    fn loads_direct_token() {
        let dir = TempDir::new().unwrap();
        write_local(&dir, "token = \"secret_local\"\n");

        let local = LocalConfig::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(local.token.as_deref(), Some("secret_local"));
    }

    #[test]
    fn rejects_profile_and_token_together() {
        let dir = TempDir::new().unwrap();
        write_local(&dir, "profile = \"work\"\ntoken = \"secret\"\n");

        let err = LocalConfig::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLocalConfig { .. }));
        assert!(err.to_string().contains("both"));
    }

    #[test]
    fn rejects_invalid_toml() {
        let dir = TempDir::new().unwrap();
        write_local(&dir, "profile = ");

        let err = LocalConfig::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }
}
