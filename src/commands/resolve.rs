//! Resolve the effective target for a dev/exec operation.

use anyhow::Result;
use tracing::debug;

use crate::cluster::ClusterClient;
use crate::config::DevConfig;
use crate::target::{CmdParameters, ConfigParameters, TargetParameters};

/// Command-line overrides for a resolution
pub struct ResolveArgs {
    pub selector: Option<String>,
    pub label_selector: Option<String>,
    pub namespace: Option<String>,
    pub pod: Option<String>,
    pub container: Option<String>,
    pub pick: bool,
}

pub async fn execute(config_path: &str, args: ResolveArgs) -> Result<()> {
    let config = DevConfig::load(config_path)?;
    let cluster = ClusterClient::connect().await?;

    let mut config_params = config
        .dev
        .terminal
        .as_ref()
        .map(ConfigParameters::from)
        .unwrap_or_default();

    // A selector named on the command line replaces the configured one
    // before resolution starts.
    if args.selector.is_some() {
        config_params.selector = args.selector.clone();
    }

    let params = TargetParameters {
        cmd: CmdParameters {
            selector: args.selector,
            label_selector: args.label_selector,
            namespace: args.namespace,
            container_name: args.container,
            pod_name: args.pod,
            pick: Some(args.pick),
        },
        config: config_params,
    };

    let namespace = params.resolve_namespace(&config, &cluster.namespace)?;
    let label_selector = params.resolve_label_selector(&config)?;
    debug!("Resolved target in namespace '{}'", namespace);

    println!("namespace: {}", namespace);
    println!(
        "labelSelector: {}",
        label_selector.as_deref().unwrap_or("<none>")
    );
    println!("pod: {}", params.pod_name().unwrap_or("<none>"));
    println!("container: {}", params.container_name().unwrap_or("<none>"));
    if params.cmd.pick == Some(true) && params.pod_name().is_none() {
        println!("pick: interactive pod selection requested");
    }

    Ok(())
}
