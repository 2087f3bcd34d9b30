//! Centralized reader for the environment variables issuectl consults.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const AUTH_TOKEN: &str = "GITHUB_AUTH_TOKEN";
const EDITOR: &str = "EDITOR";
const LOG_FORMAT: &str = "ISSUECTL_LOG_FORMAT";

/// Snapshot of the relevant environment variables at load time.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct EnvVars {
    /// Bearer token for the GitHub API.
    pub auth_token: Option<String>,

    /// Editor command used for create/edit; may include arguments.
    pub editor: Option<String>,

    /// Log output format: "json" or unset (human readable).
    pub log_format: Option<String>,
}

impl std::fmt::Debug for EnvVars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvVars")
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("editor", &self.editor)
            .field("log_format", &self.log_format)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read the environment variables from the current process.
    pub fn load() -> Self {
        Self {
            auth_token: non_empty_var(AUTH_TOKEN),
            editor: non_empty_var(EDITOR),
            log_format: non_empty_var(LOG_FORMAT),
        }
    }

    pub fn json_logs(&self) -> bool {
        self.log_format
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}
