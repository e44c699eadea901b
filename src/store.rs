//! Persistence collaborators.
//!
//! The authorization core only reads from storage. Lookups are synchronous
//! and are never retried here: `Ok(None)` means the record does not exist,
//! `Err` means the store could not answer.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::request::Principal;
use crate::resource::{Certificate, Site, WafRule};

/// Read-only access to dashboard users.
pub trait PrincipalStore {
    /// Loads the principal with the given identifier.
    fn load_principal(&self, id: i64) -> Result<Option<Principal>, StoreError>;
}

/// Read-only access to protected resources.
pub trait ResourceStore {
    /// Loads the site with the given identifier.
    fn load_site(&self, id: i64) -> Result<Option<Site>, StoreError>;

    /// Loads the WAF rule with the given identifier.
    fn load_waf_rule(&self, id: i64) -> Result<Option<WafRule>, StoreError>;

    /// Loads the certificate with the given identifier.
    fn load_certificate(&self, id: i64) -> Result<Option<Certificate>, StoreError>;
}

impl<T: PrincipalStore + ?Sized> PrincipalStore for &T {
    fn load_principal(&self, id: i64) -> Result<Option<Principal>, StoreError> {
        (**self).load_principal(id)
    }
}

impl<T: ResourceStore + ?Sized> ResourceStore for &T {
    fn load_site(&self, id: i64) -> Result<Option<Site>, StoreError> {
        (**self).load_site(id)
    }

    fn load_waf_rule(&self, id: i64) -> Result<Option<WafRule>, StoreError> {
        (**self).load_waf_rule(id)
    }

    fn load_certificate(&self, id: i64) -> Result<Option<Certificate>, StoreError> {
        (**self).load_certificate(id)
    }
}

/// In-memory fixture implementing both store traits.
///
/// Intended as a test double. [`set_unavailable`](Self::set_unavailable)
/// makes every lookup fail, simulating a lost database connection.
///
/// # Examples
///
/// ```
/// use waf_authz::{MemoryStore, Principal, PrincipalStore, Role};
///
/// let store = MemoryStore::new().with_principal(Principal {
///     id: 42,
///     username: "alice".to_string(),
///     email: "alice@example.com".to_string(),
///     role: Role::Standard,
/// });
///
/// assert!(store.load_principal(42).unwrap().is_some());
/// assert!(store.load_principal(7).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    principals: HashMap<i64, Principal>,
    sites: HashMap<i64, Site>,
    rules: HashMap<i64, WafRule>,
    certificates: HashMap<i64, Certificate>,
    unavailable: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a principal.
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.insert_principal(principal);
        self
    }

    /// Adds a site.
    pub fn with_site(mut self, site: Site) -> Self {
        self.sites.insert(site.id, site);
        self
    }

    /// Adds a WAF rule.
    pub fn with_waf_rule(mut self, rule: WafRule) -> Self {
        self.rules.insert(rule.id, rule);
        self
    }

    /// Adds a certificate.
    pub fn with_certificate(mut self, cert: Certificate) -> Self {
        self.certificates.insert(cert.id, cert);
        self
    }

    /// Inserts or replaces a principal (e.g. to change its role).
    pub fn insert_principal(&mut self, principal: Principal) {
        self.principals.insert(principal.id, principal);
    }

    /// Makes every subsequent lookup fail (or succeed again).
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable {
            Err(StoreError::new("memory store marked unavailable"))
        } else {
            Ok(())
        }
    }
}

impl PrincipalStore for MemoryStore {
    fn load_principal(&self, id: i64) -> Result<Option<Principal>, StoreError> {
        self.check_available()?;
        Ok(self.principals.get(&id).cloned())
    }
}

impl ResourceStore for MemoryStore {
    fn load_site(&self, id: i64) -> Result<Option<Site>, StoreError> {
        self.check_available()?;
        Ok(self.sites.get(&id).cloned())
    }

    fn load_waf_rule(&self, id: i64) -> Result<Option<WafRule>, StoreError> {
        self.check_available()?;
        Ok(self.rules.get(&id).cloned())
    }

    fn load_certificate(&self, id: i64) -> Result<Option<Certificate>, StoreError> {
        self.check_available()?;
        Ok(self.certificates.get(&id).cloned())
    }
}
