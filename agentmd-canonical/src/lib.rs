//! Canonical-link decoration for Markdown HTTP responses.
//!
//! [`canonical_link`] is an axum middleware that runs after normal response
//! generation. When the response is Markdown and the request resolved to a
//! node, it stamps a `Link: <url>; rel="canonical"` header pointing at the
//! node's human-readable alias (falling back to the `/node/{id}` system
//! path). Everything else passes through untouched — this is best-effort
//! decoration with no failure path.

mod alias;
mod layer;
mod request;

pub use alias::AliasRepository;
pub use layer::{canonical_link, CanonicalLinkState};
pub use request::{Langcode, ResolvedNode};
