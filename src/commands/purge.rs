//! Tear down Helm releases for configured deployments.

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn};

use crate::cache::{DeploymentCache, DeploymentRecord};
use crate::cluster::ClusterClient;
use crate::config::DevConfig;
use crate::helm::{HelmDeployment, TillerBackend};

pub async fn execute(config_path: &str, deployment: Option<String>) -> Result<()> {
    let config = DevConfig::load(config_path)?;
    let cluster = ClusterClient::connect().await?;

    let targets: Vec<_> = match &deployment {
        Some(name) => {
            let target = config.get_deployment(name).ok_or_else(|| {
                anyhow!("Deployment '{}' not found in {}", name, config_path)
            })?;
            vec![target]
        }
        None => config.deployments.iter().collect(),
    };

    if targets.is_empty() {
        warn!("No deployments configured, nothing to purge");
        return Ok(());
    }

    // Seed the cache from the configured deployments. Persistence of the
    // cache across invocations is out of scope.
    let mut cache = DeploymentCache::new();
    for dep in &config.deployments {
        cache.insert(
            dep.name.as_str(),
            DeploymentRecord {
                chart: dep.helm.as_ref().and_then(|helm| helm.chart.clone()),
                revision: None,
            },
        );
    }

    for dep in targets {
        let backend = Box::new(TillerBackend::new(cluster.clone()));
        let mut teardown = HelmDeployment::new(backend, dep, &cluster.namespace);
        info!(
            "Purging release '{}' (backend namespace '{}')",
            dep.name,
            teardown.tiller_namespace()
        );
        teardown
            .delete(&mut cache)
            .await
            .with_context(|| format!("Failed to purge release '{}'", dep.name))?;
    }

    info!("Cache now tracks {} deployment(s)", cache.len());
    Ok(())
}
