//! Protected entities addressed by dashboard URLs.
//!
//! Every resource has exactly one owning principal. A WAF rule additionally
//! belongs to exactly one site.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A site protected by the firewall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Site identifier
    pub id: i64,
    /// Owning principal
    pub owner_id: i64,
    /// Display name
    pub name: String,
    /// Hostname being protected
    pub domain: String,
    /// Attached TLS certificate, if any
    pub certificate_id: Option<i64>,
}

impl Site {
    /// Returns true if a certificate is attached to the site.
    pub fn has_certificate(&self) -> bool {
        self.certificate_id.is_some()
    }
}

/// A firewall rule attached to a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WafRule {
    /// Rule identifier
    pub id: i64,
    /// Parent site
    pub site_id: i64,
    /// Owning principal
    pub owner_id: i64,
    /// Display name
    pub name: String,
}

/// An uploaded TLS certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Certificate identifier
    pub id: i64,
    /// Owning principal
    pub owner_id: i64,
    /// Display name
    pub name: String,
    /// Subject common name
    pub domain: String,
}

/// The kinds of resource a page can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A protected site
    Site,
    /// A WAF rule, addressed under its site
    WafRule,
    /// A TLS certificate
    Certificate,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Site => write!(f, "site"),
            ResourceKind::WafRule => write!(f, "waf_rule"),
            ResourceKind::Certificate => write!(f, "certificate"),
        }
    }
}

/// A loaded resource of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// A protected site
    Site(Site),
    /// A WAF rule
    WafRule(WafRule),
    /// A TLS certificate
    Certificate(Certificate),
}

impl Resource {
    /// Returns the identifier of the owning principal.
    pub fn owner_id(&self) -> i64 {
        match self {
            Resource::Site(site) => site.owner_id,
            Resource::WafRule(rule) => rule.owner_id,
            Resource::Certificate(cert) => cert.owner_id,
        }
    }

    /// Returns the resource's own identifier.
    pub fn id(&self) -> i64 {
        match self {
            Resource::Site(site) => site.id,
            Resource::WafRule(rule) => rule.id,
            Resource::Certificate(cert) => cert.id,
        }
    }

    /// Returns the kind of this resource.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Site(_) => ResourceKind::Site,
            Resource::WafRule(_) => ResourceKind::WafRule,
            Resource::Certificate(_) => ResourceKind::Certificate,
        }
    }
}

impl From<Site> for Resource {
    fn from(site: Site) -> Self {
        Resource::Site(site)
    }
}

impl From<WafRule> for Resource {
    fn from(rule: WafRule) -> Self {
        Resource::WafRule(rule)
    }
}

impl From<Certificate> for Resource {
    fn from(cert: Certificate) -> Self {
        Resource::Certificate(cert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_exposes_owner_and_kind() {
        let rule = Resource::from(WafRule {
            id: 3,
            site_id: 5,
            owner_id: 42,
            name: "block-sqli".to_string(),
        });
        assert_eq!(rule.owner_id(), 42);
        assert_eq!(rule.id(), 3);
        assert_eq!(rule.kind(), ResourceKind::WafRule);
        assert_eq!(rule.kind().to_string(), "waf_rule");
    }

    #[test]
    fn site_certificate_flag() {
        let mut site = Site {
            id: 10,
            owner_id: 42,
            name: "shop".to_string(),
            domain: "shop.example.com".to_string(),
            certificate_id: None,
        };
        assert!(!site.has_certificate());
        site.certificate_id = Some(7);
        assert!(site.has_certificate());
    }
}
