//! CLI definitions for tether
//!
//! This module contains all CLI argument parsing structures using clap.

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(
    name = "tether",
    version,
    about = "Development tether for Kubernetes workloads",
    long_about = "Resolves dev/exec targets by precedence across command overrides,\ndeclarative config and named selectors, and tears down Helm releases."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the tether config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the effective namespace, label selector, pod and container
    Resolve {
        /// Named selector to resolve through the registry
        #[arg(short, long)]
        selector: Option<String>,

        /// Label selector override, used verbatim (e.g. "app=backend,tier=web")
        #[arg(short = 'l', long)]
        label_selector: Option<String>,

        /// Namespace override
        #[arg(short, long)]
        namespace: Option<String>,

        /// Pod name override
        #[arg(long)]
        pod: Option<String>,

        /// Container name override
        #[arg(short, long)]
        container: Option<String>,

        /// Pick interactively when several pods match
        #[arg(long)]
        pick: bool,
    },

    /// Delete Helm releases and drop them from the deployment cache
    Purge {
        /// Deployment to purge (default: all configured deployments)
        #[arg(long)]
        deployment: Option<String>,
    },
}
