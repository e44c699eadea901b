//! Identity resolution.
//!
//! Turns verified claims into the stored principal. The role always comes
//! from storage: tokens are not re-issued when a role changes.

use crate::error::IdentityError;
use crate::request::Principal;
use crate::store::PrincipalStore;
use crate::token::Claims;

/// Loads the principal referenced by a claim set.
///
/// # Examples
///
/// ```
/// use waf_authz::{Claims, IdentityError, IdentityResolver, MemoryStore};
///
/// let store = MemoryStore::new();
/// let claims = Claims { user_id: None, exp: 0, iat: None };
///
/// let resolver = IdentityResolver::new(&store);
/// assert_eq!(resolver.resolve(&claims), Err(IdentityError::MissingSubject));
/// ```
#[derive(Debug)]
pub struct IdentityResolver<'a, P: ?Sized> {
    store: &'a P,
}

impl<'a, P: PrincipalStore + ?Sized> IdentityResolver<'a, P> {
    /// Creates a resolver over the given store.
    pub fn new(store: &'a P) -> Self {
        Self { store }
    }

    /// Resolves claims to a principal.
    ///
    /// # Errors
    ///
    /// - [`IdentityError::MissingSubject`] if the claims carry no integer `user_id`
    /// - [`IdentityError::NotFound`] if no such principal is stored
    /// - [`IdentityError::Unavailable`] if the store failed
    pub fn resolve(&self, claims: &Claims) -> Result<Principal, IdentityError> {
        let id = claims.principal_id().ok_or(IdentityError::MissingSubject)?;
        self.store
            .load_principal(id)?
            .ok_or(IdentityError::NotFound)
    }
}
