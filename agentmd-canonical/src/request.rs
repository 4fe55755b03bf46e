//! Request-scoped values the host router places in axum request extensions.

use agentmd_model::Node;
use std::sync::Arc;

/// The node a request resolved to. Routing may have kept only the raw id or
/// may carry the loaded entity; either form works.
#[derive(Debug, Clone)]
pub enum ResolvedNode {
    Id(u64),
    Entity(Arc<Node>),
}

impl ResolvedNode {
    /// Numeric node id, when one is available. Unsaved entities have none.
    #[must_use]
    pub fn node_id(&self) -> Option<u64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Entity(node) => node.nid,
        }
    }
}

/// Active language of the request (a langcode such as `en`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Langcode(pub String);

impl Langcode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}
