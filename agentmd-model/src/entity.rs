use serde::{Deserialize, Serialize};

/// Capability set the resolver needs from a renderable content item.
///
/// Any concrete type exposing an entity-type id, a bundle, and (optionally)
/// a numeric id is acceptable; no common base type is required.
pub trait EntityHandle: Send + Sync {
    /// Machine name of the entity type (e.g. `"node"`, `"taxonomy_term"`).
    fn entity_type_id(&self) -> &str;

    /// Bundle (sub-type) of the entity, e.g. a content-type name. Entity
    /// types without bundles conventionally return the entity-type id.
    fn bundle(&self) -> &str;

    /// Numeric id, if the entity has been saved.
    fn id(&self) -> Option<u64>;
}

/// A minimal content item of the `node` entity type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub nid: Option<u64>,
    pub bundle: String,
    pub title: String,
}

impl Node {
    /// Creates a saved node with the given id.
    pub fn new(nid: u64, bundle: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            nid: Some(nid),
            bundle: bundle.into(),
            title: title.into(),
        }
    }

    /// Creates a node that has not been saved yet (no id).
    pub fn unsaved(bundle: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            nid: None,
            bundle: bundle.into(),
            title: title.into(),
        }
    }
}

impl EntityHandle for Node {
    fn entity_type_id(&self) -> &str {
        "node"
    }

    fn bundle(&self) -> &str {
        &self.bundle
    }

    fn id(&self) -> Option<u64> {
        self.nid
    }
}
