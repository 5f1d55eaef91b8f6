//! Helm release management
//!
//! The release backend is split behind two traits so the deconfigurator can
//! be exercised against stub implementations:
//!
//! - [`ReleaseBackend`] — probes whether the backend is active in a
//!   namespace and constructs release clients scoped to it.
//! - [`HelmClient`] — the per-namespace release client itself.
//!
//! The production backend is [`TillerBackend`]: it probes for the
//! `tiller-deploy` Deployment through the Kubernetes API and drives the
//! system `helm` binary for release operations.

mod deconfigure;

pub use deconfigure::HelmDeployment;

use anyhow::Result;
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use kube::Api;
use std::process::Command;
use tracing::debug;

use crate::cluster::ClusterClient;
use crate::error::HelmError;

/// Name of the Deployment the release backend runs as
const TILLER_DEPLOYMENT: &str = "tiller-deploy";

/// Info about a deleted release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub name: String,
}

/// A release client scoped to one backend namespace
pub trait HelmClient: Send + Sync {
    /// Delete the named release. With `purge`, all historical revisions
    /// are removed, not just the latest.
    fn delete_release(&self, name: &str, purge: bool) -> Result<ReleaseInfo, HelmError>;
}

/// Probe and client factory for a release backend
#[async_trait]
pub trait ReleaseBackend: Send + Sync {
    /// Whether the backend is active in the given namespace.
    ///
    /// A failed probe is indistinguishable from "not deployed": both
    /// report `false`. Teardown is best-effort cleanup, not a strict
    /// precondition check.
    async fn is_deployed(&self, namespace: &str) -> bool;

    /// Construct a release client scoped to the given namespace
    async fn connect(&self, namespace: &str) -> Result<Box<dyn HelmClient>>;
}

/// The production backend: Tiller in-cluster, helm binary on the path
pub struct TillerBackend {
    cluster: ClusterClient,
}

impl TillerBackend {
    pub fn new(cluster: ClusterClient) -> Self {
        Self { cluster }
    }
}

#[async_trait]
impl ReleaseBackend for TillerBackend {
    async fn is_deployed(&self, namespace: &str) -> bool {
        let deployments: Api<Deployment> = Api::namespaced(self.cluster.client.clone(), namespace);
        match deployments.get(TILLER_DEPLOYMENT).await {
            Ok(_) => true,
            Err(err) => {
                debug!(
                    "Release backend not found in namespace '{}': {}",
                    namespace, err
                );
                false
            }
        }
    }

    async fn connect(&self, namespace: &str) -> Result<Box<dyn HelmClient>> {
        let client = HelmCli::new(namespace)?;
        Ok(Box::new(client))
    }
}

/// Release client driving the system `helm` binary
pub struct HelmCli {
    tiller_namespace: String,
}

impl HelmCli {
    /// Verify the helm binary is usable and scope a client to the
    /// backend namespace.
    pub fn new(tiller_namespace: &str) -> Result<Self, HelmError> {
        let output = Command::new("helm")
            .args(["version", "--client", "--short"])
            .output()
            .map_err(|err| HelmError::BinaryUnavailable {
                message: err.to_string(),
            })?;

        if !output.status.success() {
            return Err(HelmError::BinaryUnavailable {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(Self {
            tiller_namespace: tiller_namespace.to_string(),
        })
    }
}

impl HelmClient for HelmCli {
    fn delete_release(&self, name: &str, purge: bool) -> Result<ReleaseInfo, HelmError> {
        let mut args = vec!["delete", name, "--tiller-namespace", &self.tiller_namespace];
        if purge {
            args.push("--purge");
        }

        debug!("Running helm {}", args.join(" "));

        let output = Command::new("helm")
            .args(&args)
            .output()
            .map_err(|err| HelmError::BinaryUnavailable {
                message: err.to_string(),
            })?;

        if !output.status.success() {
            return Err(HelmError::DeleteFailed {
                release: name.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(ReleaseInfo {
            name: name.to_string(),
        })
    }
}
