use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Editor command is empty")]
    EmptyCommand,

    #[error("Failed to launch editor '{editor}': {source}")]
    Launch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor '{editor}' exited with status: {status}")]
    Exited { editor: String, status: ExitStatus },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EditorError>;

/// Something that lets the user edit a piece of text.
pub trait TextEditor {
    /// Present `initial` for editing and return the saved text.
    /// Blocks until the user is done.
    fn edit(&self, initial: &str) -> Result<String>;
}

/// Edits text in an external editor program through a temporary file.
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    /// `command` may carry arguments, e.g. `code --wait`.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl TextEditor for ExternalEditor {
    fn edit(&self, initial: &str) -> Result<String> {
        let mut file = tempfile::Builder::new()
            .prefix("issuectl-")
            .suffix(".txt")
            .tempfile()?;
        file.write_all(initial.as_bytes())?;
        file.flush()?;

        // Close our handle so the editor can replace the file; the path is
        // still removed on drop, whichever way this function returns.
        let path = file.into_temp_path();
        debug!(path = %path.display(), editor = %self.command, "opening editor");

        let status = run_editor(&self.command, &path)?;
        if !status.success() {
            return Err(EditorError::Exited {
                editor: self.command.clone(),
                status,
            });
        }

        Ok(std::fs::read_to_string(&path)?)
    }
}

/// Launch an editor on `file_path` and wait for it to exit.
///
/// The editor command is split shell-style, so `EDITOR="code --wait"` works.
pub fn run_editor(editor_command: &str, file_path: &Path) -> Result<ExitStatus> {
    let parts = shlex::split(editor_command).ok_or(EditorError::EmptyCommand)?;
    let (program, args) = parts.split_first().ok_or(EditorError::EmptyCommand)?;

    Command::new(program)
        .args(args)
        .arg(file_path)
        .status()
        .map_err(|source| EditorError::Launch {
            editor: editor_command.to_string(),
            source,
        })
}
