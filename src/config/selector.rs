//! Named selector declarations.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A named, reusable declaration of namespace + label selector
/// used to target workloads.
///
/// Label selectors are kept in a `BTreeMap` so that serialized selector
/// strings always list keys in ascending order, independent of the order
/// they appear in the YAML document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorConfig {
    /// Selector name, referenced from deployments and the command line
    pub name: String,

    /// Namespace to target (optional)
    #[serde(default)]
    pub namespace: Option<String>,

    /// Label constraints to match workloads (optional)
    #[serde(default)]
    pub label_selector: Option<BTreeMap<String, String>>,
}
