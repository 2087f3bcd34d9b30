//! GitHub API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Request to GitHub failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Issue #{number} not found (HTTP 404)")]
    NotFound { number: u64, body: String },

    #[error("{}", format_api_error(.status, .body))]
    Api { status: u16, body: String },
}

impl GitHubError {
    /// HTTP status of the response that caused the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Decode { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;

/// Build a readable message from a GitHub error response body, falling back to
/// the raw body when it is not the usual `{"message": ..., "errors": [...]}`.
fn format_api_error(status: &u16, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|m| m.as_str());

    match message {
        Some(message) => {
            let details = parsed
                .as_ref()
                .and_then(|v| v.get("errors"))
                .and_then(|e| e.as_array())
                .map(|errors| format_error_details(errors))
                .unwrap_or_default();
            format!("GitHub API error: {message} (HTTP {status}){details}")
        }
        None => format!("Unexpected response status: {status}\nresponse body: {body}"),
    }
}

/// Format error details from GitHub API errors array.
/// Returns a formatted string like "[field1 is code1, field2 is code2]" or empty string.
fn format_error_details(errors: &[serde_json::Value]) -> String {
    let error_details: Vec<String> = errors
        .iter()
        .filter_map(|e| {
            let field = e.get("field").and_then(|v| v.as_str());
            let code = e.get("code").and_then(|v| v.as_str());
            match (field, code) {
                (Some(f), Some(c)) => Some(format!("{f} is {c}")),
                (Some(f), None) => Some(f.to_string()),
                (None, Some(c)) => Some(c.to_string()),
                (None, None) => None,
            }
        })
        .collect();

    if error_details.is_empty() {
        String::new()
    } else {
        format!(" [{}]", error_details.join(", "))
    }
}
