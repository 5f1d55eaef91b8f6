//! Target selector resolution
//!
//! Computes the effective namespace, label selector, pod name and container
//! name for a dev/exec operation. Each field is resolved independently by its
//! own priority chain: command-line override first, then the deployment's
//! config parameters, then the named selector registry, then a final
//! fallback. The first source that yields a value wins; partial values from
//! different sources are never merged.

use std::collections::BTreeMap;

use crate::config::{DevConfig, TerminalConfig};
use crate::error::SelectorError;

/// Parameters supplied on the command line. Highest priority.
#[derive(Debug, Clone, Default)]
pub struct CmdParameters {
    pub selector: Option<String>,
    pub label_selector: Option<String>,
    pub namespace: Option<String>,
    pub container_name: Option<String>,
    pub pod_name: Option<String>,
    pub pick: Option<bool>,
}

/// Parameters sourced from the deployment's declarative config.
/// Medium priority.
#[derive(Debug, Clone, Default)]
pub struct ConfigParameters {
    pub selector: Option<String>,
    pub label_selector: Option<BTreeMap<String, String>>,
    pub namespace: Option<String>,
    pub container_name: Option<String>,
}

impl From<&TerminalConfig> for ConfigParameters {
    fn from(terminal: &TerminalConfig) -> Self {
        Self {
            selector: terminal.selector.clone(),
            label_selector: terminal.label_selector.clone(),
            namespace: terminal.namespace.clone(),
            container_name: terminal.container_name.clone(),
        }
    }
}

/// Layered targeting information for a single operation.
///
/// All resolution methods are pure functions over the parameters, the
/// config's selector registry and the ambient namespace; they hold no state
/// and are re-evaluated on every call.
#[derive(Debug, Clone, Default)]
pub struct TargetParameters {
    pub cmd: CmdParameters,
    pub config: ConfigParameters,
}

impl TargetParameters {
    /// Resolve the namespace to target.
    ///
    /// Priority: command override, config namespace, the named selector's
    /// namespace, then the cluster's ambient namespace. Referencing an
    /// unknown selector is fatal.
    pub fn resolve_namespace(
        &self,
        config: &DevConfig,
        default_namespace: &str,
    ) -> Result<String, SelectorError> {
        if let Some(namespace) = non_empty(self.cmd.namespace.as_deref()) {
            return Ok(namespace.to_string());
        }
        if let Some(namespace) = non_empty(self.config.namespace.as_deref()) {
            return Ok(namespace.to_string());
        }
        if let Some(name) = non_empty(self.config.selector.as_deref()) {
            let selector = config.get_selector(name)?;
            if let Some(namespace) = non_empty(selector.namespace.as_deref()) {
                return Ok(namespace.to_string());
            }
        }

        Ok(default_namespace.to_string())
    }

    /// Resolve the label selector string to filter workloads by.
    ///
    /// Priority: command override (used verbatim), config label map, the
    /// named selector's label map, then — if exactly one selector is
    /// declared globally and it carries labels — that single selector.
    /// `None` means no filtering.
    pub fn resolve_label_selector(
        &self,
        config: &DevConfig,
    ) -> Result<Option<String>, SelectorError> {
        if let Some(labels) = non_empty(self.cmd.label_selector.as_deref()) {
            return Ok(Some(labels.to_string()));
        }
        if let Some(labels) = &self.config.label_selector {
            return Ok(Some(label_selector_to_string(labels)));
        }
        if let Some(name) = non_empty(self.config.selector.as_deref()) {
            let selector = config.get_selector(name)?;
            if let Some(labels) = &selector.label_selector {
                return Ok(Some(label_selector_to_string(labels)));
            }
        }

        // Single-selector convenience default
        let selectors = &config.dev.selectors;
        if selectors.len() == 1 {
            if let Some(labels) = &selectors[0].label_selector {
                return Ok(Some(label_selector_to_string(labels)));
            }
        }

        Ok(None)
    }

    /// The pod name to target, if one was given on the command line.
    /// There is no config-level pod name.
    pub fn pod_name(&self) -> Option<&str> {
        non_empty(self.cmd.pod_name.as_deref())
    }

    /// The container name to target: command override, else config value.
    pub fn container_name(&self) -> Option<&str> {
        non_empty(self.cmd.container_name.as_deref())
            .or_else(|| non_empty(self.config.container_name.as_deref()))
    }
}

/// Serialize a label map into a Kubernetes selector string.
///
/// Pairs are joined as `key=value,key=value` in ascending key order, so the
/// same map always produces the same string.
pub fn label_selector_to_string(labels: &BTreeMap<String, String>) -> String {
    labels
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(",")
}

// Treat empty strings from the CLI the same as absent values.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DevConfig, DevSection, SelectorConfig};

    fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn registry(selectors: Vec<SelectorConfig>) -> DevConfig {
        DevConfig {
            version: None,
            dev: DevSection {
                selectors,
                terminal: None,
            },
            deployments: Vec::new(),
        }
    }

    fn selector(
        name: &str,
        namespace: Option<&str>,
        label_pairs: Option<&[(&str, &str)]>,
    ) -> SelectorConfig {
        SelectorConfig {
            name: name.to_string(),
            namespace: namespace.map(|n| n.to_string()),
            label_selector: label_pairs.map(labels),
        }
    }

    #[test]
    fn test_cmd_namespace_always_wins() {
        let config = registry(vec![selector("backend", Some("ns1"), None)]);
        let params = TargetParameters {
            cmd: CmdParameters {
                namespace: Some("cmd-ns".to_string()),
                ..Default::default()
            },
            config: ConfigParameters {
                namespace: Some("config-ns".to_string()),
                selector: Some("backend".to_string()),
                ..Default::default()
            },
        };

        let resolved = params.resolve_namespace(&config, "default").unwrap();
        assert_eq!(resolved, "cmd-ns");
    }

    #[test]
    fn test_config_namespace_beats_selector_and_fallback() {
        let config = registry(vec![selector("backend", Some("ns1"), None)]);
        let params = TargetParameters {
            config: ConfigParameters {
                namespace: Some("config-ns".to_string()),
                selector: Some("backend".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let resolved = params.resolve_namespace(&config, "default").unwrap();
        assert_eq!(resolved, "config-ns");
    }

    #[test]
    fn test_namespace_falls_back_to_ambient() {
        let config = registry(Vec::new());
        let params = TargetParameters::default();

        let resolved = params.resolve_namespace(&config, "default").unwrap();
        assert_eq!(resolved, "default");
    }

    #[test]
    fn test_selector_without_namespace_falls_through() {
        let config = registry(vec![selector("backend", None, Some(&[("app", "backend")]))]);
        let params = TargetParameters {
            config: ConfigParameters {
                selector: Some("backend".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let resolved = params.resolve_namespace(&config, "ambient").unwrap();
        assert_eq!(resolved, "ambient");
    }

    #[test]
    fn test_cmd_label_selector_verbatim() {
        let config = registry(Vec::new());
        let params = TargetParameters {
            cmd: CmdParameters {
                label_selector: Some("app=cli,tier=web".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let resolved = params.resolve_label_selector(&config).unwrap();
        assert_eq!(resolved.as_deref(), Some("app=cli,tier=web"));
    }

    #[test]
    fn test_config_label_map_serialized_sorted() {
        let config = registry(Vec::new());
        let params = TargetParameters {
            config: ConfigParameters {
                label_selector: Some(labels(&[("tier", "web"), ("app", "x")])),
                ..Default::default()
            },
            ..Default::default()
        };

        let resolved = params.resolve_label_selector(&config).unwrap();
        assert_eq!(resolved.as_deref(), Some("app=x,tier=web"));
    }

    #[test]
    fn test_single_global_selector_default() {
        let config = registry(vec![selector("only", None, Some(&[("app", "x")]))]);
        let params = TargetParameters::default();

        let resolved = params.resolve_label_selector(&config).unwrap();
        assert_eq!(resolved.as_deref(), Some("app=x"));
    }

    #[test]
    fn test_multiple_selectors_no_default() {
        let config = registry(vec![
            selector("a", None, Some(&[("app", "a")])),
            selector("b", None, Some(&[("app", "b")])),
        ]);
        let params = TargetParameters::default();

        let resolved = params.resolve_label_selector(&config).unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_named_selector_scenario() {
        // config selector "backend" → {namespace: ns1, labels: {app: backend}}
        let config = registry(vec![selector(
            "backend",
            Some("ns1"),
            Some(&[("app", "backend")]),
        )]);
        let params = TargetParameters {
            config: ConfigParameters {
                selector: Some("backend".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(params.resolve_namespace(&config, "default").unwrap(), "ns1");
        assert_eq!(
            params.resolve_label_selector(&config).unwrap().as_deref(),
            Some("app=backend")
        );
    }

    #[test]
    fn test_unknown_selector_fails_both_resolutions() {
        let config = registry(Vec::new());
        let params = TargetParameters {
            config: ConfigParameters {
                selector: Some("ghost".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            params.resolve_namespace(&config, "default"),
            Err(SelectorError::UnknownSelector { ref name }) if name == "ghost"
        ));
        assert!(matches!(
            params.resolve_label_selector(&config),
            Err(SelectorError::UnknownSelector { ref name }) if name == "ghost"
        ));
    }

    #[test]
    fn test_pod_name_cmd_only() {
        let params = TargetParameters {
            cmd: CmdParameters {
                pod_name: Some("backend-5f6d".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(params.pod_name(), Some("backend-5f6d"));

        assert_eq!(TargetParameters::default().pod_name(), None);
    }

    #[test]
    fn test_container_name_falls_back_to_config() {
        let params = TargetParameters {
            config: ConfigParameters {
                container_name: Some("web".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(params.container_name(), Some("web"));

        let overridden = TargetParameters {
            cmd: CmdParameters {
                container_name: Some("sidecar".to_string()),
                ..Default::default()
            },
            ..params
        };
        assert_eq!(overridden.container_name(), Some("sidecar"));
    }

    #[test]
    fn test_empty_cmd_strings_treated_as_unset() {
        let config = registry(Vec::new());
        let params = TargetParameters {
            cmd: CmdParameters {
                namespace: Some(String::new()),
                label_selector: Some(String::new()),
                pod_name: Some(String::new()),
                container_name: Some(String::new()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            params.resolve_namespace(&config, "ambient").unwrap(),
            "ambient"
        );
        assert_eq!(params.resolve_label_selector(&config).unwrap(), None);
        assert_eq!(params.pod_name(), None);
        assert_eq!(params.container_name(), None);
    }

    #[test]
    fn test_label_serialization_deterministic() {
        let map = labels(&[("b", "2"), ("a", "1")]);
        let first = label_selector_to_string(&map);
        let second = label_selector_to_string(&map);
        assert_eq!(first, "a=1,b=2");
        assert_eq!(first, second);

        // Round-trips to the same key/value pairs
        let parsed: BTreeMap<String, String> = first
            .split(',')
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap();
                (k.to_string(), v.to_string())
            })
            .collect();
        assert_eq!(parsed, map);
    }
}
