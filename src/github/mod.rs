//! GitHub issues REST API client.
//!
//! All operations target `{api}/repos/{owner}/{repo}/issues[/{number}]` and
//! authenticate with a bearer token.

mod client;
mod error;
#[cfg(test)]
pub mod mock;
mod models;

pub use client::IssueClient;
pub use error::{GitHubError, Result};
pub use models::{Issue, IssueRequest, IssueSummary, Label, Milestone, User};
