//! The dashboard's page catalog.
//!
//! Each page maps to one [`PageSpec`]; handlers call
//! [`PageGuard::guard_page`](crate::PageGuard::guard_page) with their variant
//! and never assemble access checks themselves.

use std::fmt;

use crate::guard::{Access, PageSpec};
use crate::resource::ResourceKind;

/// Pages served by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Page {
    Login,
    Register,
    /// Shows the caller's identity when one is present
    Dashboard,
    UserProfile,
    /// Admin-only
    UserList,
    SiteList,
    SiteCreate,
    SiteDetail,
    SiteEdit,
    CertificateList,
    CertificateUpload,
    CertificateDetail,
    /// Rules of the site named by `:id`
    WafRuleList,
    WafRuleDetail,
    WafRuleEdit,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Page; 15] = [
        Page::Login,
        Page::Register,
        Page::Dashboard,
        Page::UserProfile,
        Page::UserList,
        Page::SiteList,
        Page::SiteCreate,
        Page::SiteDetail,
        Page::SiteEdit,
        Page::CertificateList,
        Page::CertificateUpload,
        Page::CertificateDetail,
        Page::WafRuleList,
        Page::WafRuleDetail,
        Page::WafRuleEdit,
    ];

    /// Stable identifier used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Register => "register",
            Page::Dashboard => "dashboard",
            Page::UserProfile => "user_profile",
            Page::UserList => "user_list",
            Page::SiteList => "site_list",
            Page::SiteCreate => "site_create",
            Page::SiteDetail => "site_detail",
            Page::SiteEdit => "site_edit",
            Page::CertificateList => "certificate_list",
            Page::CertificateUpload => "certificate_upload",
            Page::CertificateDetail => "certificate_detail",
            Page::WafRuleList => "waf_rule_list",
            Page::WafRuleDetail => "waf_rule_detail",
            Page::WafRuleEdit => "waf_rule_edit",
        }
    }

    /// Route pattern; `:id` is the site or certificate, `:ruleId` the rule.
    pub fn path(self) -> &'static str {
        match self {
            Page::Login => "/auth/login",
            Page::Register => "/auth/register",
            Page::Dashboard => "/dashboard",
            Page::UserProfile => "/user/profile",
            Page::UserList => "/users",
            Page::SiteList => "/sites",
            Page::SiteCreate => "/sites/create",
            Page::SiteDetail => "/sites/:id",
            Page::SiteEdit => "/sites/:id/edit",
            Page::CertificateList => "/certificates",
            Page::CertificateUpload => "/certificates/upload",
            Page::CertificateDetail => "/certificates/:id",
            Page::WafRuleList => "/sites/:id/rules",
            Page::WafRuleDetail => "/sites/:id/rules/:ruleId",
            Page::WafRuleEdit => "/sites/:id/rules/:ruleId/edit",
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Register => "Register",
            Page::Dashboard => "Dashboard",
            Page::UserProfile => "User Profile",
            Page::UserList => "User Management",
            Page::SiteList => "Protected Sites",
            Page::SiteCreate => "Add New Site",
            Page::SiteDetail => "Site Details",
            Page::SiteEdit => "Edit Site",
            Page::CertificateList => "SSL Certificates",
            Page::CertificateUpload => "Upload Certificate",
            Page::CertificateDetail => "Certificate Details",
            Page::WafRuleList => "WAF Rules",
            Page::WafRuleDetail => "WAF Rule Details",
            Page::WafRuleEdit => "Edit WAF Rule",
        }
    }

    /// Access requirement for this page.
    pub fn access(self) -> Access {
        match self {
            Page::Login | Page::Register => Access::Public,
            Page::Dashboard => Access::Optional,
            Page::UserProfile
            | Page::SiteList
            | Page::SiteCreate
            | Page::CertificateList
            | Page::CertificateUpload => Access::Authenticated,
            Page::UserList => Access::AdminOnly,
            Page::SiteDetail | Page::SiteEdit | Page::WafRuleList => {
                Access::Resource(ResourceKind::Site)
            }
            Page::CertificateDetail => Access::Resource(ResourceKind::Certificate),
            Page::WafRuleDetail | Page::WafRuleEdit => Access::Resource(ResourceKind::WafRule),
        }
    }

    /// Guard descriptor for this page.
    ///
    /// Rule pages answer forbidden access as not-found, so that a foreign
    /// rule looks the same whether or not it is addressed under its own site.
    pub fn spec(self) -> PageSpec {
        let spec = PageSpec::page(self.name(), self.access());
        match self.access() {
            Access::Resource(ResourceKind::WafRule) => spec.concealing(),
            _ => spec,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::ResponseMode;
    use std::collections::HashSet;

    #[test]
    fn names_and_paths_are_unique() {
        let names: HashSet<_> = Page::ALL.iter().map(|p| p.name()).collect();
        let paths: HashSet<_> = Page::ALL.iter().map(|p| p.path()).collect();
        assert_eq!(names.len(), Page::ALL.len());
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn resource_pages_name_their_ids_in_the_path() {
        for page in Page::ALL {
            match page.access() {
                Access::Resource(ResourceKind::WafRule) => {
                    assert!(page.path().contains(":id"), "{page}");
                    assert!(page.path().contains(":ruleId"), "{page}");
                }
                Access::Resource(_) => assert!(page.path().contains(":id"), "{page}"),
                _ => assert!(!page.path().contains(':'), "{page}"),
            }
        }
    }

    #[test]
    fn only_user_list_is_admin_only() {
        let admin_pages: Vec<_> = Page::ALL
            .into_iter()
            .filter(|p| p.access() == Access::AdminOnly)
            .collect();
        assert_eq!(admin_pages, vec![Page::UserList]);
    }

    #[test]
    fn all_pages_use_page_mode() {
        for page in Page::ALL {
            assert_eq!(page.spec().mode, ResponseMode::Page);
        }
    }

    #[test]
    fn rule_pages_conceal_existence() {
        assert!(Page::WafRuleDetail.spec().conceal_existence);
        assert!(Page::WafRuleEdit.spec().conceal_existence);
        assert!(!Page::SiteDetail.spec().conceal_existence);
        assert!(!Page::WafRuleList.spec().conceal_existence);
    }
}
