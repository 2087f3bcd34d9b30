use clap::Parser;

use crate::commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "issuectl",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Repository owner (user or organization)
    #[arg(long, global = true)]
    pub owner: Option<String>,

    /// Repository name
    #[arg(long, global = true)]
    pub repo: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}
