use std::fmt;
use std::path::Path;

use crate::local::{LOCAL_CONFIG_FILE, LocalConfig};
use crate::{Config, ConfigError};

pub const TOKEN_ENV_VAR: &str = "NOTION_API_TOKEN";

const PREVIEW_CHARS: usize = 10;

/// Where a resolved token came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Env,
    LocalFile,
    Profile(String),
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Env => f.write_str(TOKEN_ENV_VAR),
            TokenSource::LocalFile => f.write_str(LOCAL_CONFIG_FILE),
            TokenSource::Profile(name) => write!(f, "profile: {name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResult {
    pub token: String,
    pub source: TokenSource,
}

impl TokenResult {
    /// First characters of the token followed by `...`, safe to print.
    pub fn preview(&self) -> String {
        let head: String = self.token.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}

/// Resolves the API token from, in order: the environment variable, the
/// local file's `token`, the local file's `profile`, the global active profile.
///
/// Empty values count as absent. A local profile name that does not exist
/// falls through to the active profile.
pub fn resolve_token(
    env_token: Option<&str>,
    local: Option<&LocalConfig>,
    global: &Config,
) -> Result<TokenResult, ConfigError> {
    if let Some(token) = env_token.filter(|t| !t.is_empty()) {
        return Ok(found(token, TokenSource::Env));
    }

    if let Some(local) = local {
        if let Some(token) = local.token.as_deref().filter(|t| !t.is_empty()) {
            return Ok(found(token, TokenSource::LocalFile));
        }
        if let Some(name) = local.profile.as_deref() {
            match profile_token(global, name) {
                Some(token) => return Ok(found(token, TokenSource::Profile(name.to_string()))),
                None => log::debug!("local profile `{name}` has no usable token"),
            }
        }
    }

    if let Some(name) = global.active_profile.as_deref()
        && let Some(token) = profile_token(global, name)
    {
        return Ok(found(token, TokenSource::Profile(name.to_string())));
    }

    Err(ConfigError::NoToken)
}

/// [`resolve_token`] against the real environment: the env var, the local
/// file in `dir`, and the global config file.
pub fn resolve_token_in(dir: &Path) -> Result<TokenResult, ConfigError> {
    let env_token = std::env::var(TOKEN_ENV_VAR).ok();
    let local = LocalConfig::load_from_dir(dir)?;
    let global = Config::load()?;
    resolve_token(env_token.as_deref(), local.as_ref(), &global)
}

fn profile_token<'a>(config: &'a Config, name: &str) -> Option<&'a str> {
    config
        .profiles
        .get(name)
        .map(|profile| profile.token.as_str())
        .filter(|token| !token.is_empty())
}

fn found(token: &str, source: TokenSource) -> TokenResult {
    log::debug!("using token from {source}");
    TokenResult {
        token: token.to_string(),
        source,
    }
}
