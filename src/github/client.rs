//! Issue API client over reqwest.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::error::{GitHubError, Result};
use super::models::{Issue, IssueRequest, IssueSummary};
use crate::config::Config;

const USER_AGENT: &str = concat!("issuectl/", env!("CARGO_PKG_VERSION"));

/// Everything but RFC 3986 unreserved characters is escaped in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Entry of the list response. The issues endpoint also returns pull
/// requests, which carry a `pull_request` key.
#[derive(Debug, Deserialize)]
struct ListEntry {
    number: u64,
    title: String,
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

/// Client for the issues of one repository.
pub struct IssueClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl IssueClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let endpoint = format!(
            "{}/repos/{}/{}/issues",
            config.api_base_url.trim_end_matches('/'),
            utf8_percent_encode(&config.owner, PATH_SEGMENT),
            utf8_percent_encode(&config.repo, PATH_SEGMENT)
        );
        Ok(Self {
            http,
            endpoint,
            token: config.token.clone(),
        })
    }

    /// List the issues on the first page returned by GitHub.
    pub async fn list_issues(&self) -> Result<Vec<IssueSummary>> {
        let (status, body) = self.send(self.request(Method::GET, &self.endpoint)).await?;
        if !status.is_success() {
            return Err(api_error(status, body));
        }

        let entries: Vec<ListEntry> = decode("issue list", &body)?;
        Ok(entries
            .into_iter()
            .filter(|e| e.pull_request.is_none())
            .map(|e| IssueSummary {
                number: e.number,
                title: e.title,
            })
            .collect())
    }

    pub async fn get_issue(&self, number: u64) -> Result<Issue> {
        let url = self.issue_url(number);
        let (status, body) = self.send(self.request(Method::GET, &url)).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(GitHubError::NotFound { number, body });
        }
        if !status.is_success() {
            return Err(api_error(status, body));
        }

        decode("issue", &body)
    }

    /// Create an issue. Anything but `201 Created` is an error.
    ///
    /// The status alone decides success. The returned summary is `None` when
    /// the response body does not describe an issue.
    pub async fn create_issue(&self, req: &IssueRequest) -> Result<Option<IssueSummary>> {
        let request = self.request(Method::POST, &self.endpoint).json(req);
        let (status, body) = self.send(request).await?;
        if status != StatusCode::CREATED {
            return Err(api_error(status, body));
        }

        let created = summary("created issue", &body);
        info!(number = created.as_ref().map(|c| c.number), "issue created");
        Ok(created)
    }

    /// Update an issue. Anything but `200 OK` is an error; as with
    /// [`Self::create_issue`], the summary is best-effort.
    pub async fn update_issue(
        &self,
        number: u64,
        req: &IssueRequest,
    ) -> Result<Option<IssueSummary>> {
        let url = self.issue_url(number);
        let (status, body) = self
            .send(self.request(Method::PATCH, &url).json(req))
            .await?;
        if status == StatusCode::NOT_FOUND {
            return Err(GitHubError::NotFound { number, body });
        }
        if status != StatusCode::OK {
            return Err(api_error(status, body));
        }

        let updated = summary("updated issue", &body);
        info!(number, "issue updated");
        Ok(updated)
    }

    fn issue_url(&self, number: u64) -> String {
        format!("{}/{}", self.endpoint, number)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/vnd.github+json")
    }

    /// Send the request and read the whole response body as text.
    async fn send(&self, builder: RequestBuilder) -> Result<(StatusCode, String)> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http.execute(request).await?;
        let status = response.status();
        debug!(%method, %url, %status, "github request");

        let body = response.text().await?;
        Ok((status, body))
    }
}

fn api_error(status: StatusCode, body: String) -> GitHubError {
    GitHubError::Api {
        status: status.as_u16(),
        body,
    }
}

fn decode<T: DeserializeOwned>(context: &'static str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| GitHubError::Decode { context, source })
}

/// Decode the summary of an accepted write; the change has already happened,
/// so a body that fails to decode is only logged.
fn summary(context: &'static str, body: &str) -> Option<IssueSummary> {
    decode(context, body)
        .inspect_err(|e| warn!(error = %e, "response of an accepted request was not decoded"))
        .ok()
}
