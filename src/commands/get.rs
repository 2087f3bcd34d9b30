use clap::Args;

use super::common::parse_issue_number;
use crate::config::Config;
use crate::error::Result;
use crate::github::{Issue, IssueClient, IssueSummary};
use crate::shared::table::Table;

const TITLE_MAX_WIDTH: usize = 72;

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct GetArgs {
    /// Issue number; lists all issues when omitted
    pub id: Option<String>,
}

pub async fn run(args: &GetArgs, config: &Config) -> Result<()> {
    let client = IssueClient::new(config)?;
    let output = run_with_client(args, &client).await?;
    print!("{output}");
    Ok(())
}

/// Internal implementation that returns the rendered table for testability.
pub(crate) async fn run_with_client(args: &GetArgs, client: &IssueClient) -> Result<String> {
    match args.id.as_deref() {
        Some(id) => {
            let number = parse_issue_number(id)?;
            let issue = client.get_issue(number).await?;
            Ok(format_issue(&issue))
        }
        None => {
            let issues = client.list_issues().await?;
            Ok(format_issue_list(&issues))
        }
    }
}

fn format_issue_list(issues: &[IssueSummary]) -> String {
    let mut table = Table::new(["Number", "Title"]).max_width(1, TITLE_MAX_WIDTH);
    for issue in issues {
        table.push_row([issue.number.to_string(), issue.title.clone()]);
    }
    table.render()
}

fn format_issue(issue: &Issue) -> String {
    let mut table = Table::new(["Number", "Title", "Milestone", "Labels", "Assignees"])
        .max_width(1, TITLE_MAX_WIDTH);
    table.push_row([
        issue.number.to_string(),
        issue.title.clone(),
        issue
            .milestone
            .as_ref()
            .map(|m| m.number.to_string())
            .unwrap_or_default(),
        issue.label_names().join(","),
        issue.assignee_logins().join(","),
    ]);
    table.render()
}
