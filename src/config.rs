//! Per-invocation configuration.
//!
//! Built once in `main` from the command-line flags and an environment
//! snapshot, then passed by reference to whatever needs it.

use crate::error::{Error, Result};
use crate::shared::env_var::EnvVars;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    /// Empty when `GITHUB_AUTH_TOKEN` is unset; GitHub answers such requests
    /// with 401, which surfaces as an API error.
    pub token: String,
    pub editor: String,
    pub api_base_url: String,
}

impl Config {
    pub fn new(owner: Option<&str>, repo: Option<&str>, env: EnvVars) -> Result<Self> {
        let owner = required("--owner", owner)?;
        let repo = required("--repo", repo)?;

        Ok(Self {
            owner,
            repo,
            token: env.auth_token.unwrap_or_default(),
            editor: env.editor.unwrap_or_else(|| default_editor().to_string()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        })
    }

    /// `owner/repo`, for messages.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"<redacted>")
            .field("editor", &self.editor)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn required(flag: &str, value: Option<&str>) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(Error::Config(format!(
            "{flag} must be passed (usage: issuectl --owner <org> --repo <name> <command>)"
        ))),
    }
}

/// Editor used when `EDITOR` is not set.
pub fn default_editor() -> &'static str {
    if cfg!(windows) { "notepad" } else { "vi" }
}
