//! Subcommand dispatch.

mod common;
pub mod create;
pub mod edit;
pub mod get;
#[cfg(test)]
mod test_helpers;

use clap::Subcommand;

use crate::config::Config;
use crate::error::Result;

#[derive(Subcommand, Clone, PartialEq, Eq, Debug)]
pub enum Commands {
    /// List issues, or show one issue when an ID is given
    Get(get::GetArgs),

    /// Create an issue by filling in a form in $EDITOR
    Create,

    /// Edit an issue's title, body, milestone, labels and assignees in $EDITOR
    Edit(edit::EditArgs),
}

impl Commands {
    pub async fn run(&self, config: &Config) -> Result<()> {
        match self {
            Self::Get(args) => get::run(args, config).await,
            Self::Create => create::run(config).await,
            Self::Edit(args) => edit::run(args, config).await,
        }
    }
}
