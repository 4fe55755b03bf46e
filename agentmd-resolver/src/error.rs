//! Error types for the resolver's collaborators.
//!
//! These surface only at the trait boundary; the resolver converts every
//! failure into "no value at this tier" plus a log entry.

use thiserror::Error;

/// Errors from a view-mode registry backend.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The entity type is not known to the display system.
    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),

    /// Any other backend failure.
    #[error("registry backend error: {0}")]
    Backend(String),
}

/// Errors from a bundle configuration source.
#[derive(Debug, Error)]
pub enum BundleConfigError {
    /// The bundle record exists but could not be loaded.
    #[error("bundle config load error: {0}")]
    Load(String),
}
