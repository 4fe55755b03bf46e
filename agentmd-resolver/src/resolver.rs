use crate::{BundleConfigSource, ViewModeRegistry};
use agentmd_model::{ConverterSettings, EntityHandle, ViewMode};
use std::sync::Arc;
use tracing::{error, warn};

/// Resolves the view mode to use when converting an entity to Markdown.
///
/// Resolution is total: a misconfigured or failing tier degrades to the next
/// one, and the hard-coded `full` fallback always applies. All reads are
/// scoped to the entity at hand; one resolver serves any number of requests.
pub struct ViewModeResolver {
    registry: Arc<dyn ViewModeRegistry>,
    bundles: Arc<dyn BundleConfigSource>,
    settings: ConverterSettings,
}

impl ViewModeResolver {
    pub fn new(
        registry: Arc<dyn ViewModeRegistry>,
        bundles: Arc<dyn BundleConfigSource>,
        settings: ConverterSettings,
    ) -> Self {
        Self {
            registry,
            bundles,
            settings,
        }
    }

    /// Picks the view mode for `entity`. Never fails.
    pub fn resolve(&self, entity: &dyn EntityHandle) -> ViewMode {
        let entity_type = entity.entity_type_id();
        let bundle = entity.bundle();

        if let Some(mode) = self.bundle_override(entity_type, bundle) {
            return mode;
        }
        if let Some(mode) = self.type_default(entity_type, bundle) {
            return mode;
        }
        ViewMode::full()
    }

    /// Tier 1: the bundle's own override, when enabled and valid.
    fn bundle_override(&self, entity_type: &str, bundle: &str) -> Option<ViewMode> {
        let record = match self.bundles.bundle_override(entity_type, bundle) {
            Ok(record) => record?,
            Err(e) => {
                error!(
                    entity_type = %entity_type,
                    bundle = %bundle,
                    error = %e,
                    "Bundle config lookup failed; skipping bundle override"
                );
                return None;
            }
        };
        if !record.enabled {
            return None;
        }
        if self.is_valid(entity_type, bundle, &record.view_mode) {
            Some(record.view_mode)
        } else {
            warn!(
                entity_type = %entity_type,
                bundle = %bundle,
                view_mode = %record.view_mode,
                "Bundle override names a view mode that is not configured; falling through"
            );
            None
        }
    }

    /// Tier 2: the converter-wide default for the entity type.
    ///
    /// A stored default of exactly `full` is indistinguishable from an unset
    /// one and falls through to the fallback tier.
    fn type_default(&self, entity_type: &str, bundle: &str) -> Option<ViewMode> {
        let mode = self.settings.default_for(entity_type)?;
        if mode.is_full() {
            return None;
        }
        if self.is_valid(entity_type, bundle, mode) {
            Some(mode.clone())
        } else {
            warn!(
                entity_type = %entity_type,
                bundle = %bundle,
                view_mode = %mode,
                "Entity-type default names a view mode that is not configured; falling through"
            );
            None
        }
    }

    /// Whether `mode` is among the view modes configured for the pair.
    /// Registry failures count as "not valid" so resolution can degrade.
    fn is_valid(&self, entity_type: &str, bundle: &str, mode: &ViewMode) -> bool {
        match self.registry.view_modes(entity_type, bundle) {
            Ok(modes) => modes.iter().any(|m| m == mode),
            Err(e) => {
                error!(
                    entity_type = %entity_type,
                    bundle = %bundle,
                    view_mode = %mode,
                    error = %e,
                    "View mode enumeration failed; treating mode as invalid"
                );
                false
            }
        }
    }
}
