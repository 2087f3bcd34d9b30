use clap::Args;

use super::common::parse_issue_number;
use crate::config::Config;
use crate::error::Result;
use crate::form::{self, EditableForm};
use crate::github::IssueClient;
use crate::shared::editor::{ExternalEditor, TextEditor};

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct EditArgs {
    /// Issue number
    pub id: String,
}

pub async fn run(args: &EditArgs, config: &Config) -> Result<()> {
    let client = IssueClient::new(config)?;
    let editor = ExternalEditor::new(&config.editor);
    let message = run_with(args, &client, &editor).await?;
    println!("{message}");
    Ok(())
}

/// Fetch the issue, let the user edit its fields, then PATCH the result.
pub(crate) async fn run_with(
    args: &EditArgs,
    client: &IssueClient,
    editor: &impl TextEditor,
) -> Result<String> {
    let number = parse_issue_number(&args.id)?;
    let issue = client.get_issue(number).await?;

    let text = editor.edit(&EditableForm::from_issue(&issue).render())?;
    let req = form::parse(&text)?;
    let title = client
        .update_issue(number, &req)
        .await?
        .map_or(req.title, |updated| updated.title);

    Ok(format!("Updated issue #{number}: {title}"))
}
