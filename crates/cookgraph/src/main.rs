//! cookgraph CLI binary.

use anyhow::Result;
use cookgraph::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the cookgraph CLI.
///
/// The dataset is read once per invocation, so a current-thread runtime is
/// enough; table parsing fans out on rayon's pool instead.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=cookgraph=debug,cookgraph_csv=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cookgraph=info,cookgraph_csv=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting cookgraph CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("cookgraph CLI completed successfully");
    Ok(())
}
