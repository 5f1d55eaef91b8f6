//! Per-deployment configuration including Helm settings.

use serde::Deserialize;

/// A deployment managed by tether. The name doubles as the Helm
/// release name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    /// Deployment / release name
    pub name: String,

    /// Helm settings for this deployment (absent for non-Helm deployments)
    #[serde(default)]
    pub helm: Option<HelmConfig>,
}

/// The `helm:` section of a deployment
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelmConfig {
    /// Chart path or reference
    #[serde(default)]
    pub chart: Option<String>,

    /// Namespace the release backend runs in. Falls back to the
    /// cluster client's ambient namespace when unset.
    #[serde(default)]
    pub tiller_namespace: Option<String>,
}
