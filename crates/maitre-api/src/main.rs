//! maitre chat widget entry point.
//!
//! Binary name: `maitre`
//!
//! Parses CLI arguments, installs the tracing subscriber, loads the
//! widget configuration, and runs the terminal chat loop.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,maitre_core=debug,maitre_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = maitre_infra::config::load_widget_config(&cli.config).await;
    if config.webhook_url.is_empty() {
        anyhow::bail!(
            "no webhook_url configured; create {} with at least a webhook_url entry",
            cli.config.display()
        );
    }

    cli::chat::run_chat_loop(config).await
}
