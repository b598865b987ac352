use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::db::HistoryKey;

/// Header the storefront client sends its session id in
pub const SESSION_ID_HEADER: &str = "x-session-id";

/// Browsing session a request belongs to
///
/// Handlers read it from the request extensions; search history is keyed by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Starts a fresh session
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Session named by the request headers, if it names a valid one
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let raw = headers.get(SESSION_ID_HEADER)?.to_str().ok()?;
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }

    pub fn history_key(&self) -> HistoryKey {
        HistoryKey::new(self.to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolves the session of every request
///
/// Clients without a usable `x-session-id` are handed a new one in the
/// response so later requests share the same search history.
pub async fn session_middleware(mut request: Request, next: Next) -> Response {
    // invalid ids are replaced, not rejected
    let session_id = SessionId::from_headers(request.headers()).unwrap_or_default();
    request.extensions_mut().insert(session_id);

    let mut response = next.run(request).await;

    // a hyphenated uuid is always a valid header value
    if let Ok(value) = HeaderValue::from_str(&session_id.to_string()) {
        response.headers_mut().insert(SESSION_ID_HEADER, value);
    }

    response
}

/// Request span for `TraceLayer`, tagged with the resolved session
pub fn make_span_with_session_id(request: &Request<Body>) -> tracing::Span {
    let session_id = request
        .extensions()
        .get::<SessionId>()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string());

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        session_id = %session_id,
    )
}
