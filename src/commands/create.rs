use crate::config::Config;
use crate::error::Result;
use crate::form::{self, EditableForm};
use crate::github::IssueClient;
use crate::shared::editor::{ExternalEditor, TextEditor};

pub async fn run(config: &Config) -> Result<()> {
    let client = IssueClient::new(config)?;
    let editor = ExternalEditor::new(&config.editor);
    let message = run_with(&client, &editor).await?;
    println!("{message}");
    Ok(())
}

/// Open a blank form, then submit whatever the user saved.
pub(crate) async fn run_with(client: &IssueClient, editor: &impl TextEditor) -> Result<String> {
    let text = editor.edit(&EditableForm::default().render())?;
    let req = form::parse(&text)?;
    let message = match client.create_issue(&req).await? {
        Some(created) => format!("Created issue #{}: {}", created.number, created.title),
        None => format!("Created issue: {}", req.title),
    };
    Ok(message)
}
