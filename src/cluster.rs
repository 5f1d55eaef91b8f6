//! Kubernetes cluster client.

use anyhow::{Context, Result};
use kube::{Client, Config};
use tracing::debug;

/// A connected cluster client plus the ambient namespace from the
/// active kubeconfig context. The ambient namespace is the final
/// fallback for target resolution and the default backend namespace.
#[derive(Clone)]
pub struct ClusterClient {
    pub client: Client,
    pub namespace: String,
}

impl ClusterClient {
    /// Connect using the inferred kubeconfig (KUBECONFIG, then in-cluster)
    pub async fn connect() -> Result<Self> {
        let config = Config::infer()
            .await
            .context("Failed to infer kubeconfig")?;

        let namespace = config.default_namespace.clone();
        debug!("Using ambient namespace: {}", namespace);

        let client = Client::try_from(config).context("Failed to create Kubernetes client")?;

        Ok(Self { client, namespace })
    }
}
