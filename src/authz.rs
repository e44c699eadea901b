//! Resource authorization.
//!
//! One predicate decides every access: admins may manage anything, everyone
//! else only what they own. All functions here are pure and total.

use crate::error::Denial;
use crate::request::{Principal, Role};
use crate::resource::{Resource, WafRule};

/// Returns true if the role grants blanket access.
fn grants_everything(role: Role) -> bool {
    matches!(role, Role::Admin)
}

/// Decides whether a principal may view or mutate a resource.
///
/// # Examples
///
/// ```
/// use waf_authz::{can_manage, Principal, Resource, Role, Site};
///
/// let owner = Principal {
///     id: 42,
///     username: "alice".to_string(),
///     email: "alice@example.com".to_string(),
///     role: Role::Standard,
/// };
/// let site = Resource::Site(Site {
///     id: 10,
///     owner_id: 42,
///     name: "shop".to_string(),
///     domain: "shop.example.com".to_string(),
///     certificate_id: None,
/// });
///
/// assert!(can_manage(&owner, &site));
/// ```
pub fn can_manage(principal: &Principal, resource: &Resource) -> bool {
    grants_everything(principal.role) || resource.owner_id() == principal.id
}

/// Decides whether a principal may open admin-only pages.
pub fn can_administer(principal: &Principal) -> bool {
    grants_everything(principal.role)
}

/// Checks that a rule belongs to the site named in the same URL.
///
/// Applies to admins as well: a mismatch is a malformed or tampered
/// address, not a permission question.
pub fn check_rule_binding(rule: &WafRule, path_site_id: i64) -> Result<(), Denial> {
    if rule.site_id == path_site_id {
        Ok(())
    } else {
        Err(Denial::CrossResourceMismatch)
    }
}

/// Full access decision for a loaded resource.
///
/// `path_site_id` is the site named in the URL when the resource is a WAF
/// rule addressed under a site; the binding is checked before ownership.
///
/// # Errors
///
/// - [`Denial::CrossResourceMismatch`] if a rule is addressed through the wrong site
/// - [`Denial::PermissionDenied`] if [`can_manage`] is false
pub fn authorize(
    principal: &Principal,
    resource: &Resource,
    path_site_id: Option<i64>,
) -> Result<(), Denial> {
    if let (Resource::WafRule(rule), Some(site_id)) = (resource, path_site_id) {
        check_rule_binding(rule, site_id)?;
    }

    if can_manage(principal, resource) {
        Ok(())
    } else {
        Err(Denial::PermissionDenied)
    }
}
