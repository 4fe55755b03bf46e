//! Three-tier view-mode resolution for Markdown rendering.
//!
//! Given a content entity, [`ViewModeResolver::resolve`] picks the view mode
//! to render it with, layering:
//! 1. the bundle's own override (third-party settings), over
//! 2. the converter's per-entity-type default, over
//! 3. the hard-coded `full` fallback.
//!
//! Every configured candidate is validated against the view modes actually
//! configured for the entity's (type, bundle) pair; misconfiguration is
//! logged and skipped, never surfaced. `resolve` is total — it always yields
//! a usable view mode and never fails.

mod error;
mod resolver;
mod source;

pub use error::{BundleConfigError, RegistryError};
pub use resolver::ViewModeResolver;
pub use source::{BundleConfigSource, ViewModeRegistry};
