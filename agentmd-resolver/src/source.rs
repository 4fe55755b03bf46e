//! Collaborator traits consumed by the resolver.
//!
//! Narrow, dependency-injected seams: the host framework implements these
//! over its display and bundle-config storage.

use crate::{BundleConfigError, RegistryError};
use agentmd_model::{BundleOverride, ViewMode};

/// Enumerates the view modes actually configured for an (entity type,
/// bundle) pair.
pub trait ViewModeRegistry: Send + Sync {
    /// Identifiers of every view mode with a display configured for the
    /// pair, including `full` when it is configured.
    fn view_modes(&self, entity_type: &str, bundle: &str) -> Result<Vec<ViewMode>, RegistryError>;
}

/// Reads the per-bundle third-party settings record.
pub trait BundleConfigSource: Send + Sync {
    /// The override record for `bundle`, or `Ok(None)` when the entity type
    /// has no bundle-config concept or no record exists. Both cases mean
    /// "no override".
    fn bundle_override(
        &self,
        entity_type: &str,
        bundle: &str,
    ) -> Result<Option<BundleOverride>, BundleConfigError>;
}
