use clap::Parser;
use tracing_subscriber::EnvFilter;

use issuectl::cli::Cli;
use issuectl::config::Config;
use issuectl::shared::env_var::EnvVars;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let env = EnvVars::load();
    init_tracing(&env);

    let Cli {
        owner,
        repo,
        command,
    } = Cli::parse();
    let config = Config::new(owner.as_deref(), repo.as_deref(), env)?;
    tracing::debug!(?config, "starting");

    command.run(&config).await?;
    Ok(())
}

/// Logs go to stderr; stdout carries tables and confirmations only.
fn init_tracing(env: &EnvVars) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if env.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}
