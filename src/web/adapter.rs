//! Request adapter for mapping HTTP requests to the authorization core.

use std::collections::HashMap;

use super::InboundRequest;

/// Owned, framework-agnostic snapshot of the request parts the guard reads.
///
/// # Design Notes
///
/// This type intentionally contains simple, owned data to avoid coupling
/// to any specific framework's request types. Framework-specific code
/// should implement `From<FrameworkRequest>` for `RequestAdapter`, or
/// implement [`InboundRequest`] directly.
///
/// Header names are matched case-insensitively. Cookies come either from
/// [`add_cookie`](Self::add_cookie) or from a raw `Cookie` header.
///
/// # Examples
///
/// ```
/// use waf_authz::web::{InboundRequest, RequestAdapter};
///
/// let mut adapter = RequestAdapter::new("req-12345".to_string());
/// adapter.add_header("Authorization".to_string(), "Bearer abc.def.ghi".to_string());
/// adapter.add_header("Cookie".to_string(), "theme=dark; jwt_token=xyz".to_string());
/// adapter.add_path_param("id".to_string(), "10".to_string());
///
/// assert_eq!(adapter.header("authorization"), Some("Bearer abc.def.ghi"));
/// assert_eq!(adapter.cookie("jwt_token"), Some("xyz"));
/// assert_eq!(adapter.path_param("id"), Some("10"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestAdapter {
    /// Unique request identifier (required)
    request_id: String,
    /// Request headers, keyed by lowercase name
    headers: HashMap<String, String>,
    /// Cookies supplied explicitly by the integration
    cookies: HashMap<String, String>,
    /// Path parameters from routing
    path_params: HashMap<String, String>,
}

impl RequestAdapter {
    /// Creates a new request adapter with the given request ID.
    ///
    /// All other fields are initialized as empty.
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            headers: HashMap::new(),
            cookies: HashMap::new(),
            path_params: HashMap::new(),
        }
    }

    /// Adds a header, replacing any previous value under the same name.
    pub fn add_header(&mut self, key: String, value: String) {
        self.headers.insert(key.to_ascii_lowercase(), value);
    }

    /// Adds a cookie.
    pub fn add_cookie(&mut self, key: String, value: String) {
        self.cookies.insert(key, value);
    }

    /// Adds a path parameter.
    pub fn add_path_param(&mut self, key: String, value: String) {
        self.path_params.insert(key, value);
    }
}

impl InboundRequest for RequestAdapter {
    fn request_id(&self) -> &str {
        &self.request_id
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.cookies.get(name) {
            return Some(value);
        }
        self.header("cookie")?
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| unquote(value))
    }

    fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }
}

/// Strips the optional DQUOTE pair allowed around a cookie value (RFC 6265 §4.1.1).
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
