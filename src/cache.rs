//! In-memory record of previously applied releases.
//!
//! Tracks which releases tether has deployed so teardown knows what to
//! remove. The cache is plain in-process state; callers that run deletions
//! concurrently against the same cache must serialize access themselves.

use std::collections::HashMap;

/// Metadata remembered for a deployed release
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentRecord {
    /// Chart reference the release was deployed from
    pub chart: Option<String>,
    /// Release revision reported by the backend
    pub revision: Option<i32>,
}

/// Mapping of release name → deployment metadata
#[derive(Debug, Default)]
pub struct DeploymentCache {
    deployments: HashMap<String, DeploymentRecord>,
}

impl DeploymentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, release_name: impl Into<String>, record: DeploymentRecord) {
        self.deployments.insert(release_name.into(), record);
    }

    pub fn contains(&self, release_name: &str) -> bool {
        self.deployments.contains_key(release_name)
    }

    /// Remove a release's entry. Removing a missing key is a no-op.
    pub fn remove(&mut self, release_name: &str) {
        self.deployments.remove(release_name);
    }

    pub fn len(&self) -> usize {
        self.deployments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deployments.is_empty()
    }
}
