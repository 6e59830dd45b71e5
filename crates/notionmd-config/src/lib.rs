use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod local;
pub mod token;

pub use local::{LOCAL_CONFIG_FILE, LocalConfig};
pub use token::{TOKEN_ENV_VAR, TokenResult, TokenSource, resolve_token, resolve_token_in};

const APP_DIR: &str = "notionmd";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {config_path}: {source}")]
    ConfigWriteError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid local config at {config_path}: {reason}")]
    InvalidLocalConfig { config_path: PathBuf, reason: String },

    #[error("Profile not found: {0}")]
    UnknownProfile(String),

    #[error("No authentication token found (set {} or add a profile)", token::TOKEN_ENV_VAR)]
    NoToken,
}

/// One saved workspace login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl Profile {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            workspace_name: None,
            workspace_id: None,
        }
    }
}

/// The global config file: named profiles and which one is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_profile: Option<String>,
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Config {
    /// A missing file is an empty config, not an error.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })
    }

    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Writes `<path>.tmp` next to the target and renames it into place.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        let write_error = |source| ConfigError::ConfigWriteError {
            config_path: config_path.to_path_buf(),
            source,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = toml::to_string_pretty(self)?;

        let mut tmp_path = config_path.as_os_str().to_owned();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        std::fs::write(&tmp_path, content).map_err(write_error)?;
        restrict_permissions(&tmp_path).map_err(write_error)?;
        std::fs::rename(&tmp_path, config_path).map_err(write_error)?;
        log::debug!("saved config to {}", config_path.display());
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// `$XDG_CONFIG_HOME/notionmd/config.toml`, else `~/.config/notionmd/config.toml`.
    pub fn config_path() -> PathBuf {
        let xdg = std::env::var("XDG_CONFIG_HOME").ok();
        Self::config_path_from(xdg.as_deref())
    }

    fn config_path_from(xdg_config_home: Option<&str>) -> PathBuf {
        let base = match xdg_config_home {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(shellexpand::tilde("~/.config").as_ref()),
        };
        base.join(APP_DIR).join(CONFIG_FILE)
    }

    pub fn active(&self) -> Option<(&str, &Profile)> {
        let name = self.active_profile.as_deref()?;
        self.profiles.get(name).map(|profile| (name, profile))
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active_profile.as_deref() == Some(name)
    }

    /// Profile names in sorted order.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Adds or replaces a profile. The first profile saved becomes active.
    pub fn set_profile(&mut self, name: impl Into<String>, profile: Profile) {
        let name = name.into();
        if self.active_profile.is_none() {
            self.active_profile = Some(name.clone());
        }
        self.profiles.insert(name, profile);
    }

    pub fn use_profile(&mut self, name: &str) -> Result<(), ConfigError> {
        if !self.profiles.contains_key(name) {
            return Err(ConfigError::UnknownProfile(name.to_string()));
        }
        self.active_profile = Some(name.to_string());
        Ok(())
    }

    /// Removing the active profile leaves no profile active.
    pub fn remove_profile(&mut self, name: &str) -> Result<Profile, ConfigError> {
        let profile = self
            .profiles
            .remove(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))?;
        if self.is_active(name) {
            self.active_profile = None;
        }
        Ok(profile)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_config() -> Config {
        let mut config = Config::default();
        config.set_profile(
            "work",
            Profile {
                token: "secret_work".to_string(),
                workspace_name: Some("Acme".to_string()),
                workspace_id: None,
            },
        );
        config.set_profile("home", Profile::new("secret_home"));
        config
    }

    #[test]
    fn test_config_path_prefers_xdg() {
        assert_eq!(
            Config::config_path_from(Some("/xdg")),
            PathBuf::from("/xdg/notionmd/config.toml")
        );
    }

    #[test]
    fn test_config_path_falls_back_to_home() {
        let config_path = Config::config_path_from(None);
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/notionmd/config.toml"));
        assert_eq!(Config::config_path_from(Some("")), config_path);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = sample_config();

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_parse_handwritten_config() {
        let config: Config = toml::from_str(
            r#"
active_profile = "work"

[profiles.work]
token = "secret_abc"
workspace_name = "Acme"
"#,
        )
        .unwrap();

        let (name, profile) = config.active().unwrap();
        assert_eq!(name, "work");
        assert_eq!(profile.token, "secret_abc");
        assert_eq!(profile.workspace_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert_eq!(result, Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "active_profile = [").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");
        let test_config = sample_config();

        test_config.save_to_path(&config_file).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap();
        assert_eq!(loaded_config, test_config);
        assert!(!temp_dir.path().join("nested/dir/config.toml.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_config_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        sample_config().save_to_path(&config_file).unwrap();

        let mode = std::fs::metadata(&config_file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_first_profile_becomes_active() {
        let config = sample_config();
        assert_eq!(config.active_profile.as_deref(), Some("work"));
        assert_eq!(config.profile_names().collect::<Vec<_>>(), vec!["home", "work"]);
    }

    #[test]
    fn test_use_profile() {
        let mut config = sample_config();
        config.use_profile("home").unwrap();
        assert!(config.is_active("home"));

        let err = config.use_profile("missing").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile(name) if name == "missing"));
        assert!(config.is_active("home"));
    }

    #[test]
    fn test_remove_active_profile_clears_active() {
        let mut config = sample_config();
        let removed = config.remove_profile("work").unwrap();
        assert_eq!(removed.token, "secret_work");
        assert_eq!(config.active_profile, None);

        assert!(config.remove_profile("work").is_err());
    }

    #[test]
    fn test_remove_inactive_profile_keeps_active() {
        let mut config = sample_config();
        config.remove_profile("home").unwrap();
        assert!(config.is_active("work"));
    }
}
