//! Credential extraction.
//!
//! Pulls the bearer token out of a request. Precedence, first match wins:
//! 1. `Authorization: Bearer <token>` (exactly two whitespace-separated parts)
//! 2. the session cookie
//!
//! Absence is a normal outcome, not an error.

use std::fmt;

use crate::secret::Secret;
use crate::web::InboundRequest;

/// Header consulted first.
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Scheme name required in the `Authorization` header.
pub const BEARER_SCHEME: &str = "Bearer";

/// Where a credential was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// `Authorization` header
    Header,
    /// Session cookie
    Cookie,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Header => write!(f, "header"),
            CredentialSource::Cookie => write!(f, "cookie"),
        }
    }
}

/// An opaque signed token presented by the client.
///
/// The raw token never appears in `Debug` output.
#[derive(Debug)]
pub struct Credential {
    token: Secret<String>,
    source: CredentialSource,
}

impl Credential {
    /// Wraps a raw token.
    pub fn new(token: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            token: Secret::new(token.into()),
            source,
        }
    }

    /// Returns the raw token for verification.
    pub fn expose_token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Returns where the token was found.
    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

/// Extracts the session credential from a request.
///
/// # Examples
///
/// ```
/// use waf_authz::web::RequestAdapter;
/// use waf_authz::{extract_credential, CredentialSource};
///
/// let mut adapter = RequestAdapter::new("req-1".to_string());
/// adapter.add_cookie("jwt_token".to_string(), "from-cookie".to_string());
/// adapter.add_header("Authorization".to_string(), "Bearer from-header".to_string());
///
/// let credential = extract_credential(&adapter, "jwt_token").unwrap();
/// assert_eq!(credential.expose_token(), "from-header");
/// assert_eq!(credential.source(), CredentialSource::Header);
/// ```
pub fn extract_credential<R: InboundRequest + ?Sized>(
    request: &R,
    cookie_name: &str,
) -> Option<Credential> {
    if let Some(token) = request.header(AUTHORIZATION_HEADER).and_then(bearer_token) {
        return Some(Credential::new(token, CredentialSource::Header));
    }

    request
        .cookie(cookie_name)
        .filter(|value| !value.is_empty())
        .map(|value| Credential::new(value, CredentialSource::Cookie))
}

fn bearer_token(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) => Some(token),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::RequestAdapter;

    fn request() -> RequestAdapter {
        RequestAdapter::new("req-cred".to_string())
    }

    #[test]
    fn no_header_no_cookie_is_none() {
        assert!(extract_credential(&request(), "jwt_token").is_none());
    }

    #[test]
    fn bearer_header_is_used() {
        let mut req = request();
        req.add_header("authorization".to_string(), "Bearer abc".to_string());

        let credential = extract_credential(&req, "jwt_token").unwrap();
        assert_eq!(credential.expose_token(), "abc");
        assert_eq!(credential.source(), CredentialSource::Header);
    }

    #[test]
    fn header_requires_exact_scheme_and_two_parts() {
        for value in ["bearer abc", "Basic abc", "Bearer", "Bearer a b", "Bearerabc", ""] {
            let mut req = request();
            req.add_header("Authorization".to_string(), value.to_string());
            assert!(
                extract_credential(&req, "jwt_token").is_none(),
                "accepted {:?}",
                value
            );
        }
    }

    #[test]
    fn extra_whitespace_between_parts_is_tolerated() {
        let mut req = request();
        req.add_header("Authorization".to_string(), "  Bearer \t abc ".to_string());

        let credential = extract_credential(&req, "jwt_token").unwrap();
        assert_eq!(credential.expose_token(), "abc");
    }

    #[test]
    fn malformed_header_falls_back_to_cookie() {
        let mut req = request();
        req.add_header("Authorization".to_string(), "Token abc".to_string());
        req.add_cookie("jwt_token".to_string(), "from-cookie".to_string());

        let credential = extract_credential(&req, "jwt_token").unwrap();
        assert_eq!(credential.expose_token(), "from-cookie");
        assert_eq!(credential.source(), CredentialSource::Cookie);
    }

    #[test]
    fn empty_cookie_is_absent() {
        let mut req = request();
        req.add_cookie("jwt_token".to_string(), String::new());
        assert!(extract_credential(&req, "jwt_token").is_none());
    }

    #[test]
    fn cookie_name_is_configurable() {
        let mut req = request();
        req.add_cookie("jwt_token".to_string(), "ignored".to_string());
        req.add_cookie("session".to_string(), "used".to_string());

        let credential = extract_credential(&req, "session").unwrap();
        assert_eq!(credential.expose_token(), "used");
    }

    #[test]
    fn debug_does_not_leak_token() {
        let credential = Credential::new("super.secret.token", CredentialSource::Cookie);
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("super.secret.token"));
        assert!(debug.contains("Cookie"));
    }
}
