//! wiremock-based GitHub mock server for testing.
//!
//! Use the builder pattern via `mock.repo(owner, repo)`:
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//! let ctx = mock.repo("owner", "repo");
//!
//! ctx.list(&[(1, "First")]).await;
//! ctx.issue(123).title("Custom").labels(&["bug"]).get().await;
//! ctx.issue(123).get_not_found().await;
//! ctx.issue(123).update().await;
//! ctx.create(124, "New").await;
//! ctx.create_failure(422, r#"{"message":"Validation Failed"}"#).await;
//! ```

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::IssueClient;
use crate::config::Config;

fn mock_user(login: &str) -> serde_json::Value {
    json!({
        "login": login,
        "id": 1,
        "node_id": "U_test",
        "html_url": format!("https://github.com/{}", login),
        "type": "User",
        "site_admin": false
    })
}

fn mock_label(name: &str) -> serde_json::Value {
    json!({
        "id": 1,
        "node_id": "LA_test",
        "name": name,
        "color": "d73a4a",
        "default": false
    })
}

fn mock_milestone(number: u64) -> serde_json::Value {
    json!({
        "id": 1,
        "number": number,
        "title": format!("Milestone {}", number),
        "state": "open"
    })
}

pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// A configuration pointing at this mock server.
    pub fn config(&self, owner: &str, repo: &str) -> Config {
        Config {
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: "test-token".to_string(),
            editor: "true".to_string(),
            api_base_url: self.server.uri(),
        }
    }

    pub fn client(&self, owner: &str, repo: &str) -> IssueClient {
        IssueClient::new(&self.config(owner, repo)).unwrap()
    }

    pub fn repo<'a>(&'a self, owner: &'a str, repo: &'a str) -> MockRepoContext<'a> {
        MockRepoContext {
            server: &self.server,
            owner,
            repo,
        }
    }

    /// Number of requests the server has seen.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

// ============ Builder Pattern API ============

pub struct MockRepoContext<'a> {
    server: &'a MockServer,
    owner: &'a str,
    repo: &'a str,
}

impl<'a> MockRepoContext<'a> {
    fn issues_path(&self) -> String {
        format!("/repos/{}/{}/issues", self.owner, self.repo)
    }

    pub fn issue(&self, number: u64) -> MockIssueBuilder<'_> {
        MockIssueBuilder {
            ctx: self,
            number,
            title: "Test Issue",
            body: Some("Test body"),
            milestone: None,
            labels: &[],
            assignees: &[],
        }
    }

    /// Mock GET .../issues returning the given (number, title) pairs.
    pub async fn list(&self, issues: &[(u64, &str)]) {
        let items: Vec<_> = issues
            .iter()
            .map(|(number, title)| {
                json!({
                    "number": number,
                    "title": title,
                    "state": "open",
                    "user": mock_user("testuser"),
                    "labels": [],
                    "assignees": [],
                    "milestone": null
                })
            })
            .collect();
        Mock::given(method("GET"))
            .and(path(self.issues_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(items))
            .mount(self.server)
            .await;
    }

    /// Mock GET .../issues with an arbitrary status and body.
    pub async fn list_raw(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(self.issues_path()))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(self.server)
            .await;
    }

    /// Mock a successful POST .../issues.
    pub async fn create(&self, number: u64, title: &str) {
        Mock::given(method("POST"))
            .and(path(self.issues_path()))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({
                    "number": number,
                    "title": title,
                    "state": "open",
                    "user": mock_user("testuser")
                })),
            )
            .mount(self.server)
            .await;
    }

    /// Mock POST .../issues answering with `status` and a raw body.
    pub async fn create_failure(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(self.issues_path()))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(self.server)
            .await;
    }
}

pub struct MockIssueBuilder<'a> {
    ctx: &'a MockRepoContext<'a>,
    number: u64,
    title: &'a str,
    body: Option<&'a str>,
    milestone: Option<u64>,
    labels: &'a [&'a str],
    assignees: &'a [&'a str],
}

impl<'a> MockIssueBuilder<'a> {
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn body(mut self, body: &'a str) -> Self {
        self.body = Some(body);
        self
    }

    pub fn no_body(mut self) -> Self {
        self.body = None;
        self
    }

    pub fn milestone(mut self, number: u64) -> Self {
        self.milestone = Some(number);
        self
    }

    pub fn labels(mut self, labels: &'a [&'a str]) -> Self {
        self.labels = labels;
        self
    }

    pub fn assignees(mut self, assignees: &'a [&'a str]) -> Self {
        self.assignees = assignees;
        self
    }

    fn path(&self) -> String {
        format!("{}/{}", self.ctx.issues_path(), self.number)
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "id": 1,
            "node_id": "I_test",
            "number": self.number,
            "state": "open",
            "title": self.title,
            "body": self.body,
            "user": mock_user("testuser"),
            "labels": self.labels.iter().map(|l| mock_label(l)).collect::<Vec<_>>(),
            "assignees": self.assignees.iter().map(|a| mock_user(a)).collect::<Vec<_>>(),
            "milestone": self.milestone.map(mock_milestone),
            "locked": false,
            "comments": 0,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        })
    }

    /// Mock GET .../issues/{number}.
    pub async fn get(self) {
        Mock::given(method("GET"))
            .and(path(self.path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(self.to_json()))
            .mount(self.ctx.server)
            .await;
    }

    /// Mock GET .../issues/{number} returning 404.
    pub async fn get_not_found(self) {
        Mock::given(method("GET"))
            .and(path(self.path()))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest/issues/issues#get-an-issue"
            })))
            .mount(self.ctx.server)
            .await;
    }

    /// Mock PATCH .../issues/{number}, answering with the builder's issue.
    pub async fn update(self) {
        Mock::given(method("PATCH"))
            .and(path(self.path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(self.to_json()))
            .mount(self.ctx.server)
            .await;
    }
}
