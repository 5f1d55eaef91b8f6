//! Release teardown.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cache::DeploymentCache;
use crate::config::DeploymentConfig;
use crate::helm::{HelmClient, ReleaseBackend};

/// Deletes a Helm-managed release and drops it from the deployment cache.
///
/// The release client is constructed lazily on first use and reused for
/// further calls. Instances are meant for single-threaded, sequential use
/// per cache.
pub struct HelmDeployment {
    backend: Box<dyn ReleaseBackend>,
    helm: Option<Box<dyn HelmClient>>,
    release_name: String,
    tiller_namespace: String,
}

impl HelmDeployment {
    /// Create a teardown handle for one deployment.
    ///
    /// The backend namespace is the deployment's `helm.tillerNamespace`,
    /// falling back to the cluster's ambient namespace.
    pub fn new(
        backend: Box<dyn ReleaseBackend>,
        deployment: &DeploymentConfig,
        ambient_namespace: &str,
    ) -> Self {
        let tiller_namespace = deployment
            .helm
            .as_ref()
            .and_then(|helm| helm.tiller_namespace.clone())
            .unwrap_or_else(|| ambient_namespace.to_string());

        Self {
            backend,
            helm: None,
            release_name: deployment.name.clone(),
            tiller_namespace,
        }
    }

    /// The namespace the release backend is probed in
    pub fn tiller_namespace(&self) -> &str {
        &self.tiller_namespace
    }

    /// Delete the release and remove it from the cache.
    ///
    /// Deleting a release whose backend is absent is an idempotent no-op.
    /// All revisions of the release are purged. The cache entry is only
    /// removed after the backend confirmed the deletion.
    pub async fn delete(&mut self, cache: &mut DeploymentCache) -> Result<()> {
        if !self.backend.is_deployed(&self.tiller_namespace).await {
            debug!(
                "No release backend in namespace '{}', nothing to delete for '{}'",
                self.tiller_namespace, self.release_name
            );
            return Ok(());
        }

        if self.helm.is_none() {
            let client = self
                .backend
                .connect(&self.tiller_namespace)
                .await
                .context("new helm client")?;
            self.helm = Some(client);
        }

        if let Some(helm) = &self.helm {
            let released = helm.delete_release(&self.release_name, true)?;
            info!("Deleted release '{}'", released.name);
        }

        cache.remove(&self.release_name);
        Ok(())
    }
}
