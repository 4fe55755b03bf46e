//! Core types for the agentmd Markdown delivery layer.
//!
//! Defines the vocabulary shared by the view-mode resolver and the
//! canonical-link layer:
//! - [`ViewMode`] — identifier of a named rendering configuration
//! - [`EntityHandle`] — the capability set a renderable content item exposes
//! - [`Node`] — a minimal concrete content item
//! - [`BundleOverride`] / [`ConverterSettings`] — the two configuration
//!   records consulted when picking a view mode
//!
//! No behavior lives here beyond accessors; precedence and validation are
//! the resolver's job.

mod config;
mod entity;
mod view_mode;

pub use config::{BundleOverride, ConverterSettings};
pub use entity::{EntityHandle, Node};
pub use view_mode::ViewMode;
