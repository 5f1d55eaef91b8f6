//! Command implementations.

pub mod purge;
pub mod resolve;
