//! Terminal/exec targeting defaults.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Declarative targeting defaults for dev/exec sessions, consulted after
/// command-line overrides. Either points at a named selector or carries
/// inline targeting fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalConfig {
    /// Named selector to resolve through the registry
    #[serde(default)]
    pub selector: Option<String>,

    /// Inline label constraints
    #[serde(default)]
    pub label_selector: Option<BTreeMap<String, String>>,

    /// Inline namespace
    #[serde(default)]
    pub namespace: Option<String>,

    /// Container to attach to
    #[serde(default)]
    pub container_name: Option<String>,
}
