//! Centralized error types for tether
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// Target selector resolution errors
#[derive(Error, Debug)]
pub enum SelectorError {
    #[error("Selector '{name}' not found in configuration. Check the dev.selectors section of tether.yaml")]
    UnknownSelector { name: String },
}

/// Helm release management errors
#[derive(Error, Debug)]
pub enum HelmError {
    #[error("Helm binary not found or not executable: {message}")]
    BinaryUnavailable { message: String },

    #[error("Failed to delete release '{release}': {message}")]
    DeleteFailed { release: String, message: String },
}
