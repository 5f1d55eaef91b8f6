use anyhow::Result;
use clap::Parser;

mod cache;
mod cli;
mod cluster;
mod commands;
mod config;
mod error;
mod helm;
mod target;

use cli::{Cli, Commands};
use commands::{purge, resolve};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with LOGGING env var support
    // LOGGING=debug,info,warn,error or just LOGGING=debug
    let log_level = std::env::var("LOGGING")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| {
            if cli.verbose {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .init();

    match cli.command {
        Commands::Resolve {
            selector,
            label_selector,
            namespace,
            pod,
            container,
            pick,
        } => {
            resolve::execute(
                &cli.config,
                resolve::ResolveArgs {
                    selector,
                    label_selector,
                    namespace,
                    pod,
                    container,
                    pick,
                },
            )
            .await?;
        }
        Commands::Purge { deployment } => {
            purge::execute(&cli.config, deployment).await?;
        }
    }

    Ok(())
}
