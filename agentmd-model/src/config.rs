use crate::ViewMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-bundle third-party settings: an opt-in flag plus the view mode to use
/// when converting entities of that bundle to Markdown.
///
/// Both fields default so a partially-populated settings blob deserializes;
/// a missing flag means the override is off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleOverride {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub view_mode: ViewMode,
}

impl BundleOverride {
    /// Shorthand for an active override using `view_mode`.
    pub fn active(view_mode: impl Into<String>) -> Self {
        Self {
            enabled: true,
            view_mode: ViewMode::new(view_mode),
        }
    }

    /// Shorthand for a record whose flag is off (stored but inert).
    pub fn inactive(view_mode: impl Into<String>) -> Self {
        Self {
            enabled: false,
            view_mode: ViewMode::new(view_mode),
        }
    }
}

/// Global settings of the Markdown converter. Only the per-entity-type view
/// mode defaults live here; everything else about the converter is external.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterSettings {
    /// Default view mode per entity-type id.
    #[serde(default)]
    pub view_modes: BTreeMap<String, ViewMode>,
}

impl ConverterSettings {
    /// Builder-style shorthand: adds a default view mode for an entity type.
    #[must_use]
    pub fn with_default(mut self, entity_type: impl Into<String>, mode: impl Into<String>) -> Self {
        self.view_modes
            .insert(entity_type.into(), ViewMode::new(mode));
        self
    }

    /// The configured default view mode for `entity_type`, if any.
    ///
    /// Returns the raw configured value; callers decide how to treat `full`.
    #[must_use]
    pub fn default_for(&self, entity_type: &str) -> Option<&ViewMode> {
        self.view_modes.get(entity_type)
    }
}
