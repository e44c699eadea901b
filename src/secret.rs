use std::fmt;

use serde::{Deserialize, Deserializer};

/// A wrapper that keeps sensitive values out of logs.
///
/// Used for the token-signing secret and for raw credentials. The wrapped
/// value is only reachable through [`expose_secret`](Self::expose_secret).
///
/// # Security Properties
///
/// - Does NOT implement `Deref`, `AsRef`, `Borrow`, `Clone`, or `Copy`
/// - Debug and Display output is always `[REDACTED]`
/// - Deserializes transparently, so configuration can hold it directly
///
/// # Examples
///
/// ```
/// use waf_authz::Secret;
///
/// let signing_key = Secret::new("jwt-signing-key".to_string());
///
/// assert_eq!(format!("{:?}", signing_key), "[REDACTED]");
/// assert_eq!(signing_key.expose_secret(), "jwt-signing-key");
/// ```
// Do NOT derive Clone, Copy, or Default: duplicating the secret must stay explicit.
pub struct Secret<T> {
    // Must remain private (CWE-532).
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Explicitly exposes the secret value.
    ///
    /// # Security Warning
    ///
    /// Do not log or display the returned reference.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }
}

impl<T> fmt::Debug for Secret<T> {
    /// Must unconditionally print `[REDACTED]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    /// Must unconditionally print `[REDACTED]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Secret<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Secret::new)
    }
}
