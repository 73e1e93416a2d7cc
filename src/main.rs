// src/main.rs
// =============================================================================
// This is the entry point of release-notifier.
//
// What happens here:
// 1. Parse command-line arguments / environment variables using clap
// 2. Set up logging (tracing, to stderr)
// 3. Validate the configuration
// 4. Run the pipeline: fetch release -> convert -> build blocks -> post
// 5. Exit with a proper code (0 = posted, 1 = any error)
//
// Errors are printed as a GitHub Actions annotation ("::error::<message>") on
// stdout, so a failing run shows up in the workflow summary.
// =============================================================================

mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - validated settings
mod error; // src/error.rs - error taxonomy
mod github; // src/github/ - release URL parsing and fetching
mod notify; // src/notify.rs - the pipeline
mod slack; // src/slack/ - mrkdwn conversion, blocks, webhook

use anyhow::Result;
use config::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let exit_code = exit_code(run().await);
    std::process::exit(exit_code);
}

// Prints the failure as an annotation and picks the process status
fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            println!("{}", annotation(&e));
            1
        }
    }
}

fn annotation(err: &anyhow::Error) -> String {
    format!("::error::{}", err)
}

async fn run() -> Result<()> {
    let cli = cli::parse_args(std::env::args_os())?;
    init_logging(&cli.log_level);

    let config = Config::from_cli(&cli)?;
    debug!(?config, "configuration loaded");

    let client = notify::http_client(config.timeout)?;

    if config.dry_run {
        let payload = notify::prepare(&client, &config).await?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    notify::notify(&client, &config).await?;
    Ok(())
}

// RUST_LOG wins over --log-level when both are set
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
