//! Session token verification.
//!
//! Tokens are compact JWS strings (`header.payload.signature`) signed with
//! HMAC-SHA256. Only that algorithm is accepted, whatever the token header
//! claims. The payload must carry `exp`; the principal identifier is kept
//! raw here and interpreted by the identity resolver.

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{AuthConfig, MAX_LEEWAY_SECS};
use crate::credential::Credential;
use crate::error::{InvalidToken, TokenRejection};

/// The only accepted signing algorithm.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Decoded token payload.
///
/// Fields not listed here (a role hint, for instance) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Principal identifier, as found in the payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<serde_json::Value>,
    /// Expiry, seconds since the Unix epoch
    #[serde(default)]
    pub exp: i64,
    /// Issue time, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Returns the principal identifier if it is representable as an `i64`.
    ///
    /// Integral floats (`42.0`) are accepted since some issuers encode all
    /// numbers as doubles. Strings, fractions, and out-of-range values are not.
    pub fn principal_id(&self) -> Option<i64> {
        let number = match self.user_id.as_ref()? {
            serde_json::Value::Number(n) => n,
            _ => return None,
        };
        number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        })
    }

    /// Returns the expiry as a timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Verifies session tokens against one HMAC secret.
///
/// Constructed once at startup and shared read-only.
///
/// # Examples
///
/// ```
/// use waf_authz::{Credential, CredentialSource, TokenVerifier, TokenRejection};
///
/// let verifier = TokenVerifier::new("signing-key");
/// let credential = Credential::new("not-a-token", CredentialSource::Header);
///
/// let err = verifier.verify(&credential).unwrap_err();
/// assert_eq!(err.reason, TokenRejection::Malformed);
/// ```
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a verifier for the given secret with zero leeway.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            key: DecodingKey::from_secret(secret.as_ref()),
            validation,
        }
    }

    /// Creates a verifier from the process configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.jwt_secret.expose_secret()).with_leeway(config.leeway_secs)
    }

    /// Sets the tolerated clock skew on `exp`, in seconds.
    ///
    /// Capped at [`MAX_LEEWAY_SECS`]; `jsonwebtoken` subtracts the leeway
    /// from the current Unix time and must not underflow.
    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.validation.leeway = leeway_secs.min(MAX_LEEWAY_SECS);
        self
    }

    /// Verifies a credential and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidToken`] when the token is malformed, signed with
    /// another secret or algorithm, lacks `exp`, or has expired.
    pub fn verify(&self, credential: &Credential) -> Result<Claims, InvalidToken> {
        decode::<Claims>(credential.expose_token(), &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| InvalidToken::new(rejection_for(e.kind())))
    }
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("algorithm", &SIGNING_ALGORITHM)
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}

fn rejection_for(kind: &ErrorKind) -> TokenRejection {
    match kind {
        ErrorKind::InvalidSignature => TokenRejection::BadSignature,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            TokenRejection::WrongAlgorithm
        }
        ErrorKind::ExpiredSignature => TokenRejection::Expired,
        ErrorKind::MissingRequiredClaim(claim) if claim == "exp" => TokenRejection::MissingExpiry,
        _ => TokenRejection::Malformed,
    }
}
