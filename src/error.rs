//! Error taxonomy for the authorization core.
//!
//! None of these errors leave the crate through [`PageGuard`](crate::PageGuard):
//! the guard folds each of them into an [`Outcome`](crate::Outcome). They are
//! public so that hosts can drive the individual components directly.
//!
//! # Security Note
//! Display strings are safe to log. They never contain token material or
//! the identifiers of resources the caller failed to prove access to.

use thiserror::Error;

/// Why a presented credential was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// Not a parseable three-part token, or the payload is not valid claims
    Malformed,
    /// Signature does not match the configured secret
    BadSignature,
    /// Header names an algorithm other than the configured one
    WrongAlgorithm,
    /// The `exp` claim lies in the past
    Expired,
    /// The payload carries no `exp` claim
    MissingExpiry,
}

impl std::fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenRejection::Malformed => write!(f, "malformed"),
            TokenRejection::BadSignature => write!(f, "bad signature"),
            TokenRejection::WrongAlgorithm => write!(f, "wrong algorithm"),
            TokenRejection::Expired => write!(f, "expired"),
            TokenRejection::MissingExpiry => write!(f, "missing expiry"),
        }
    }
}

/// A credential failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid token: {reason}")]
pub struct InvalidToken {
    /// The rejection reason
    pub reason: TokenRejection,
}

impl InvalidToken {
    /// Creates a new rejection.
    pub fn new(reason: TokenRejection) -> Self {
        Self { reason }
    }
}

/// A persistence lookup failed for a reason other than absence.
///
/// Transient by nature (connectivity, timeouts). Must never be reported to
/// callers as not-found or forbidden.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("store unavailable: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    /// Creates a new store error.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure to turn verified claims into a stored principal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// No principal identifier in the claims, or it is not an integer
    #[error("claims carry no usable principal identifier")]
    MissingSubject,

    /// No principal with the claimed identifier exists
    #[error("principal not found")]
    NotFound,

    /// The principal store failed
    #[error(transparent)]
    Unavailable(#[from] StoreError),
}

/// Access to a loaded resource was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Denial {
    /// Principal is neither the owner nor an admin
    #[error("permission denied")]
    PermissionDenied,

    /// A WAF rule was addressed through a site it does not belong to
    #[error("rule does not belong to the addressed site")]
    CrossResourceMismatch,
}

/// A path parameter could not be read as a resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The route did not supply the parameter
    #[error("missing path parameter '{0}'")]
    Missing(&'static str),

    /// The parameter is not a decimal integer
    #[error("path parameter '{0}' is not a valid identifier")]
    Invalid(&'static str),
}

impl ParamError {
    /// Returns the name of the offending parameter.
    pub fn param(&self) -> &'static str {
        match self {
            ParamError::Missing(name) | ParamError::Invalid(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_token_display_names_reason() {
        let err = InvalidToken::new(TokenRejection::Expired);
        assert_eq!(err.to_string(), "invalid token: expired");
    }

    #[test]
    fn identity_error_wraps_store_error() {
        let err: IdentityError = StoreError::new("connection refused").into();
        assert_eq!(err, IdentityError::Unavailable(StoreError::new("connection refused")));
        assert_eq!(err.to_string(), "store unavailable: connection refused");
    }

    #[test]
    fn denial_messages_do_not_name_the_parent() {
        let msg = Denial::CrossResourceMismatch.to_string();
        assert!(!msg.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn param_error_reports_name() {
        assert_eq!(ParamError::Invalid("ruleId").param(), "ruleId");
        assert_eq!(
            ParamError::Missing("id").to_string(),
            "missing path parameter 'id'"
        );
    }
}
