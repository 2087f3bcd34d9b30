use thiserror::Error;

use crate::form::FormError;
use crate::github::GitHubError;
use crate::shared::editor::EditorError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    GitHub(#[from] GitHubError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

pub type Result<T> = std::result::Result<T, Error>;
