use crate::{AliasRepository, Langcode, ResolvedNode};
use axum::{
    extract::{Request, State},
    http::header::{HeaderValue, CONTENT_TYPE, HOST, LINK},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

const MARKDOWN_MEDIA_TYPE: &str = "text/markdown";

/// Collaborators and defaults for the canonical-link layer.
#[derive(Clone)]
pub struct CanonicalLinkState {
    aliases: Arc<dyn AliasRepository>,
    default_langcode: String,
}

impl CanonicalLinkState {
    pub fn new(aliases: Arc<dyn AliasRepository>, default_langcode: impl Into<String>) -> Self {
        Self {
            aliases,
            default_langcode: default_langcode.into(),
        }
    }
}

/// Stamps `Link: <url>; rel="canonical"` onto Markdown responses for
/// requests that resolved to a node; a no-op for everything else.
///
/// Register with `axum::middleware::from_fn_with_state`, inside whatever
/// layer resolves the node into request extensions. The URL scheme follows
/// `x-forwarded-proto` when a proxy terminated TLS, defaulting to `https`;
/// the host comes from the `Host` header. Without a host no absolute URL can
/// be built and the response is returned unchanged.
pub async fn canonical_link(
    State(state): State<CanonicalLinkState>,
    request: Request,
    next: Next,
) -> Response {
    // Captured before delegating: the inner service consumes the request.
    let node = request.extensions().get::<ResolvedNode>().cloned();
    let langcode = request.extensions().get::<Langcode>().cloned();
    let host = request
        .headers()
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let scheme = request
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("https")
        .to_owned();

    let mut response = next.run(request).await;

    if !is_markdown(&response) {
        return response;
    }
    let Some(id) = node.and_then(|n| n.node_id()) else {
        return response;
    };
    let Some(host) = host else {
        return response;
    };

    let system_path = format!("/node/{id}");
    let langcode = langcode.map_or(state.default_langcode.clone(), |l| l.0);
    let path = state
        .aliases
        .alias(&system_path, &langcode)
        .unwrap_or(system_path);

    let url = format!("{scheme}://{host}{path}");
    match HeaderValue::from_str(&format!("<{url}>; rel=\"canonical\"")) {
        Ok(value) => {
            // Overwrites any Link header the handler may have set.
            response.headers_mut().insert(LINK, value);
        }
        Err(_) => {
            debug!(url = %url, "Canonical URL is not a valid header value; skipping");
        }
    }
    response
}

fn is_markdown(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains(MARKDOWN_MEDIA_TYPE))
}
