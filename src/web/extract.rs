//! Extraction boundary trait for web integration.
//!
//! This module defines the only view of an HTTP request the authorization
//! core needs.

/// Read access to an inbound request.
///
/// Framework integrations implement this for their own request type, or
/// copy the relevant parts into a [`RequestAdapter`](super::RequestAdapter).
///
/// # Design Notes
///
/// This trait intentionally does NOT:
/// - Verify anything (that's the token verifier's job)
/// - Parse identifiers (that's [`params`](super::params)' job)
///
/// It ONLY maps framework types to plain strings.
///
/// # Examples
///
/// ```
/// use waf_authz::web::InboundRequest;
///
/// struct MyFrameworkRequest {
///     auth: Option<String>,
/// }
///
/// impl InboundRequest for MyFrameworkRequest {
///     fn request_id(&self) -> &str {
///         "req-1"
///     }
///     fn header(&self, name: &str) -> Option<&str> {
///         if name.eq_ignore_ascii_case("authorization") {
///             self.auth.as_deref()
///         } else {
///             None
///         }
///     }
///     fn cookie(&self, _name: &str) -> Option<&str> {
///         None
///     }
///     fn path_param(&self, _name: &str) -> Option<&str> {
///         None
///     }
/// }
/// ```
pub trait InboundRequest {
    /// Correlation identifier used in every log line for this request.
    fn request_id(&self) -> &str;

    /// Looks up a header by name. Names compare case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;

    /// Looks up a cookie by exact name.
    fn cookie(&self, name: &str) -> Option<&str>;

    /// Looks up a routing parameter (`id`, `ruleId`) by exact name.
    fn path_param(&self, name: &str) -> Option<&str>;
}
