//! # Tether Configuration
//!
//! Declarative configuration loaded from `tether.yaml`:
//!
//! - `dev.selectors` — named, reusable targeting declarations
//!   (namespace + label selector) referenced by name from deployments
//!   or from the command line.
//! - `deployments` — the releases tether manages, with their Helm settings.
//!
//! ## Example
//!
//! ```yaml
//! version: v1
//! dev:
//!   selectors:
//!     - name: backend
//!       namespace: myapp-staging
//!       labelSelector:
//!         app: backend
//! deployments:
//!   - name: backend
//!     helm:
//!       chart: ./charts/backend
//! ```

mod deployment;
mod selector;
mod terminal;

pub use deployment::{DeploymentConfig, HelmConfig};
pub use selector::SelectorConfig;
pub use terminal::TerminalConfig;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::error::SelectorError;

/// Default config file name, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "tether.yaml";

/// Root configuration document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevConfig {
    /// Config format version (informational for now)
    #[serde(default)]
    pub version: Option<String>,

    /// Development section: named selectors
    #[serde(default)]
    pub dev: DevSection,

    /// Deployments managed by tether
    #[serde(default)]
    pub deployments: Vec<DeploymentConfig>,
}

/// The `dev:` section of the config
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevSection {
    /// Named selector registry
    #[serde(default)]
    pub selectors: Vec<SelectorConfig>,

    /// Targeting defaults for dev/exec sessions
    #[serde(default)]
    pub terminal: Option<TerminalConfig>,
}

impl DevConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Look up a named selector in the registry
    ///
    /// Fails if the name is unknown — a config referencing a selector that
    /// does not exist is a configuration error, not a soft miss.
    pub fn get_selector(&self, name: &str) -> Result<&SelectorConfig, SelectorError> {
        self.dev
            .selectors
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SelectorError::UnknownSelector {
                name: name.to_string(),
            })
    }

    /// Look up a deployment by name
    pub fn get_deployment(&self, name: &str) -> Option<&DeploymentConfig> {
        self.deployments.iter().find(|d| d.name == name)
    }
}
