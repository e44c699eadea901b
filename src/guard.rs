//! The page guard.
//!
//! One parameterized pipeline replaces the per-handler authentication
//! blocks: every page entry point describes what it needs with a
//! [`PageSpec`] and receives a terminal [`Outcome`].
//!
//! ```text
//! extract credential ──none──────────────────────────▶ Unauthenticated
//!   │ verify token ──invalid──────────────────────────▶ Unauthenticated
//!   │ resolve identity ──missing/not found────────────▶ Unauthenticated
//!   │                  ──store failure────────────────▶ Unavailable
//!   ├─ no resource named ─(admin-only and not admin)──▶ Forbidden
//!   │                    ─────────────────────────────▶ Authenticated
//!   └─ resource named
//!        parse path ids ──bad id──────────────────────▶ InvalidIdentifier
//!        load resource ──absent───────────────────────▶ NotFound
//!                      ──store failure────────────────▶ Unavailable
//!        rule/site binding ──mismatch─────────────────▶ CrossResourceMismatch
//!        can_manage ──false───────────────────────────▶ Forbidden
//!                   ──true────────────────────────────▶ Authorized
//! ```
//!
//! The guard holds no per-request state and caches nothing between requests.

use crate::audit::{AuditEvent, AuditEventKind, AuditOutcome};
use crate::authz::{authorize, can_administer};
use crate::config::{AuthConfig, ConfigError};
use crate::credential::extract_credential;
use crate::error::{Denial, IdentityError, ParamError, StoreError};
use crate::identity::IdentityResolver;
use crate::logging::RequestLog;
use crate::pages::Page;
use crate::request::Principal;
use crate::resource::{Resource, ResourceKind};
use crate::store::{PrincipalStore, ResourceStore};
use crate::token::TokenVerifier;
use crate::web::params::{require_id, ID_PARAM, RULE_ID_PARAM};
use crate::web::InboundRequest;

/// What a page requires before it may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No identity needed; the guard does not look for one
    Public,
    /// Identity used when present, anonymous otherwise
    Optional,
    /// Any authenticated principal
    Authenticated,
    /// Admin principals only
    AdminOnly,
    /// A resource named in the path, managed by the principal
    Resource(ResourceKind),
}

/// How the caller expects failures to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Browser page: failures redirect where possible
    Page,
    /// Machine-readable endpoint: failures are status codes
    Api,
}

/// Per-page descriptor handed to [`PageGuard::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    /// Stable name used in logs and audit events
    pub name: &'static str,
    /// Access requirement
    pub access: Access,
    /// Failure reporting style
    pub mode: ResponseMode,
    /// Answer forbidden access as not-found
    pub conceal_existence: bool,
}

impl PageSpec {
    /// Describes an HTML page.
    pub const fn page(name: &'static str, access: Access) -> Self {
        Self {
            name,
            access,
            mode: ResponseMode::Page,
            conceal_existence: false,
        }
    }

    /// Describes a machine-readable endpoint.
    pub const fn api(name: &'static str, access: Access) -> Self {
        Self {
            name,
            access,
            mode: ResponseMode::Api,
            conceal_existence: false,
        }
    }

    /// Reports forbidden access as not-found.
    pub const fn concealing(mut self) -> Self {
        self.conceal_existence = true;
        self
    }
}

/// Terminal result of guarding one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No valid credential, or it names no stored principal
    Unauthenticated,
    /// Public or optional-identity page without an identity
    Anonymous,
    /// Identity established; no resource involved
    Authenticated(Principal),
    /// Identity established and the named resource may be managed
    Authorized(Principal, Resource),
    /// Identity established but access refused
    Forbidden,
    /// The named resource does not exist
    NotFound,
    /// A WAF rule was addressed through a site it does not belong to
    CrossResourceMismatch,
    /// A path parameter is missing or not a decimal integer
    InvalidIdentifier(&'static str),
    /// Storage failed; no decision could be made
    Unavailable,
}

/// What the rendering layer should do with an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Render the page
    Proceed,
    /// Send the client elsewhere (302)
    Redirect(String),
    /// Answer with this status code
    Status(u16),
}

/// HTTP status used for redirects.
pub const STATUS_FOUND: u16 = 302;
/// Malformed path identifier.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// Missing or invalid credential on an API request.
pub const STATUS_UNAUTHORIZED: u16 = 401;
/// Access refused.
pub const STATUS_FORBIDDEN: u16 = 403;
/// Resource absent, concealed, or addressed through the wrong parent.
pub const STATUS_NOT_FOUND: u16 = 404;
/// Storage failure.
pub const STATUS_UNAVAILABLE: u16 = 503;

impl Disposition {
    /// Returns the HTTP status code to send.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Disposition::Proceed => None,
            Disposition::Redirect(_) => Some(STATUS_FOUND),
            Disposition::Status(code) => Some(*code),
        }
    }
}

impl Outcome {
    /// Returns true if the page may render.
    pub fn is_allowed(&self) -> bool {
        matches!(
            self,
            Outcome::Anonymous | Outcome::Authenticated(_) | Outcome::Authorized(..)
        )
    }

    /// Returns the resolved principal, if any.
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Outcome::Authenticated(principal) | Outcome::Authorized(principal, _) => {
                Some(principal)
            }
            _ => None,
        }
    }

    /// Returns the authorized resource, if any.
    pub fn resource(&self) -> Option<&Resource> {
        match self {
            Outcome::Authorized(_, resource) => Some(resource),
            _ => None,
        }
    }

    /// Maps the outcome to a response for the given page.
    ///
    /// Admin-only pages redirect forbidden callers to their own dashboard
    /// instead of confirming that the page exists.
    pub fn disposition(&self, spec: &PageSpec, config: &AuthConfig) -> Disposition {
        match self {
            Outcome::Anonymous | Outcome::Authenticated(_) | Outcome::Authorized(..) => {
                Disposition::Proceed
            }
            Outcome::Unauthenticated => match spec.mode {
                ResponseMode::Page => Disposition::Redirect(config.login_path.clone()),
                ResponseMode::Api => Disposition::Status(STATUS_UNAUTHORIZED),
            },
            Outcome::Forbidden => {
                if spec.mode == ResponseMode::Page && spec.access == Access::AdminOnly {
                    Disposition::Redirect(config.dashboard_path.clone())
                } else if spec.conceal_existence {
                    Disposition::Status(STATUS_NOT_FOUND)
                } else {
                    Disposition::Status(STATUS_FORBIDDEN)
                }
            }
            Outcome::NotFound | Outcome::CrossResourceMismatch => {
                Disposition::Status(STATUS_NOT_FOUND)
            }
            Outcome::InvalidIdentifier(_) => Disposition::Status(STATUS_BAD_REQUEST),
            Outcome::Unavailable => Disposition::Status(STATUS_UNAVAILABLE),
        }
    }
}

/// Why authentication did not produce a principal.
enum AuthFailure {
    Unauthenticated(&'static str),
    Unavailable(StoreError),
}

/// Composes credential extraction, token verification, identity resolution,
/// and resource authorization for every page request.
///
/// # Examples
///
/// ```
/// use waf_authz::web::RequestAdapter;
/// use waf_authz::{AuthConfig, Disposition, MemoryStore, Outcome, Page, PageGuard};
///
/// let guard = PageGuard::new(AuthConfig::new("signing-key"), MemoryStore::new())?;
/// let request = RequestAdapter::new("req-1".to_string());
///
/// let outcome = guard.guard_page(&request, Page::SiteList);
/// assert_eq!(outcome, Outcome::Unauthenticated);
/// assert_eq!(
///     guard.disposition(&outcome, &Page::SiteList.spec()),
///     Disposition::Redirect("/auth/login".to_string())
/// );
/// # Ok::<(), waf_authz::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct PageGuard<S> {
    config: AuthConfig,
    verifier: TokenVerifier,
    store: S,
}

impl<S: PrincipalStore + ResourceStore> PageGuard<S> {
    /// Creates a guard. The verifier is derived from `config` once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails [`AuthConfig::validate`];
    /// an empty signing secret would otherwise accept forged tokens.
    pub fn new(config: AuthConfig, store: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let verifier = TokenVerifier::from_config(&config);
        Ok(Self {
            config,
            verifier,
            store,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Returns the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Guards one of the dashboard's pages.
    pub fn guard_page<R: InboundRequest + ?Sized>(&self, request: &R, page: Page) -> Outcome {
        self.evaluate(request, &page.spec())
    }

    /// Maps an outcome to a response using this guard's configuration.
    pub fn disposition(&self, outcome: &Outcome, spec: &PageSpec) -> Disposition {
        outcome.disposition(spec, &self.config)
    }

    /// Runs the full pipeline for one request.
    pub fn evaluate<R: InboundRequest + ?Sized>(&self, request: &R, spec: &PageSpec) -> Outcome {
        let log = RequestLog::new(request.request_id());

        let kind = match spec.access {
            Access::Public => return Outcome::Anonymous,
            Access::Resource(kind) => Some(kind),
            Access::Optional | Access::Authenticated | Access::AdminOnly => None,
        };

        let principal = match self.authenticate(request, log) {
            Ok(principal) => principal,
            Err(AuthFailure::Unauthenticated(reason)) => {
                if spec.access == Access::Optional {
                    log.debug(format_args!("{}: anonymous ({})", spec.name, reason));
                    return Outcome::Anonymous;
                }
                return self.finish(log, spec, Outcome::Unauthenticated, None, None, reason);
            }
            Err(AuthFailure::Unavailable(e)) => {
                log.warn(format_args!("{}: principal lookup failed: {}", spec.name, e));
                return self.finish(
                    log,
                    spec,
                    Outcome::Unavailable,
                    None,
                    None,
                    "store unavailable",
                );
            }
        };

        match kind {
            Some(kind) => self.authorize_resource(request, spec, log, principal, kind),
            None if spec.access == Access::AdminOnly && !can_administer(&principal) => {
                let id = principal.id;
                self.finish(log, spec, Outcome::Forbidden, Some(id), None, "admin required")
            }
            None => {
                let id = principal.id;
                self.finish(log, spec, Outcome::Authenticated(principal), Some(id), None, "ok")
            }
        }
    }

    fn authenticate<R: InboundRequest + ?Sized>(
        &self,
        request: &R,
        log: RequestLog<'_>,
    ) -> Result<Principal, AuthFailure> {
        let credential = extract_credential(request, &self.config.cookie_name)
            .ok_or(AuthFailure::Unauthenticated("no credential"))?;
        log.trace(format_args!("credential found in {}", credential.source()));

        let claims = self.verifier.verify(&credential).map_err(|e| {
            log.debug(format_args!("{} credential rejected: {}", credential.source(), e));
            AuthFailure::Unauthenticated("invalid token")
        })?;

        IdentityResolver::new(&self.store)
            .resolve(&claims)
            .map_err(|e| match e {
                IdentityError::MissingSubject => AuthFailure::Unauthenticated("missing subject"),
                IdentityError::NotFound => AuthFailure::Unauthenticated("unknown principal"),
                IdentityError::Unavailable(store_err) => AuthFailure::Unavailable(store_err),
            })
    }

    fn authorize_resource<R: InboundRequest + ?Sized>(
        &self,
        request: &R,
        spec: &PageSpec,
        log: RequestLog<'_>,
        principal: Principal,
        kind: ResourceKind,
    ) -> Outcome {
        let principal_id = principal.id;

        let (resource_id, path_site_id) = match resource_address(request, kind) {
            Ok(address) => address,
            Err(e) => {
                log.debug(format_args!("{}: {}", spec.name, e));
                return self.finish(
                    log,
                    spec,
                    Outcome::InvalidIdentifier(e.param()),
                    Some(principal_id),
                    None,
                    "invalid identifier",
                );
            }
        };
        let target = Some((kind, resource_id));

        let resource = match self.load_resource(kind, resource_id) {
            Ok(Some(resource)) => resource,
            Ok(None) => {
                return self.finish(
                    log,
                    spec,
                    Outcome::NotFound,
                    Some(principal_id),
                    target,
                    "not found",
                );
            }
            Err(e) => {
                log.warn(format_args!("{}: {} lookup failed: {}", spec.name, kind, e));
                return self.finish(
                    log,
                    spec,
                    Outcome::Unavailable,
                    Some(principal_id),
                    target,
                    "store unavailable",
                );
            }
        };

        match authorize(&principal, &resource, path_site_id) {
            Ok(()) => self.finish(
                log,
                spec,
                Outcome::Authorized(principal, resource),
                Some(principal_id),
                target,
                "ok",
            ),
            Err(Denial::PermissionDenied) => self.finish(
                log,
                spec,
                Outcome::Forbidden,
                Some(principal_id),
                target,
                "permission denied",
            ),
            Err(Denial::CrossResourceMismatch) => self.finish(
                log,
                spec,
                Outcome::CrossResourceMismatch,
                Some(principal_id),
                target,
                "cross-resource mismatch",
            ),
        }
    }

    fn load_resource(&self, kind: ResourceKind, id: i64) -> Result<Option<Resource>, StoreError> {
        Ok(match kind {
            ResourceKind::Site => self.store.load_site(id)?.map(Resource::from),
            ResourceKind::WafRule => self.store.load_waf_rule(id)?.map(Resource::from),
            ResourceKind::Certificate => self.store.load_certificate(id)?.map(Resource::from),
        })
    }

    fn finish(
        &self,
        log: RequestLog<'_>,
        spec: &PageSpec,
        outcome: Outcome,
        principal_id: Option<i64>,
        resource: Option<(ResourceKind, i64)>,
        reason: &str,
    ) -> Outcome {
        let (kind, result) = audit_class(spec, &outcome, principal_id.is_some());
        let mut event = AuditEvent::new(log.request_id(), kind, result)
            .with_page(spec.name)
            .with_reason(reason);
        if let Some(id) = principal_id {
            event = event.with_principal(id);
        }
        if let Some((resource_kind, resource_id)) = resource {
            event = event.with_resource(resource_kind, resource_id);
        }
        event.emit();
        outcome
    }
}

/// Reads the resource id (and, for rules, the parent site id) from the path.
fn resource_address<R: InboundRequest + ?Sized>(
    request: &R,
    kind: ResourceKind,
) -> Result<(i64, Option<i64>), ParamError> {
    match kind {
        ResourceKind::Site | ResourceKind::Certificate => {
            Ok((require_id(request, ID_PARAM)?, None))
        }
        ResourceKind::WafRule => {
            let site_id = require_id(request, ID_PARAM)?;
            let rule_id = require_id(request, RULE_ID_PARAM)?;
            Ok((rule_id, Some(site_id)))
        }
    }
}

fn audit_class(
    spec: &PageSpec,
    outcome: &Outcome,
    identified: bool,
) -> (AuditEventKind, AuditOutcome) {
    let kind = match outcome {
        Outcome::Unauthenticated | Outcome::Anonymous => AuditEventKind::Authentication,
        Outcome::Authenticated(_) if spec.access != Access::AdminOnly => {
            AuditEventKind::Authentication
        }
        Outcome::Unavailable if !identified => AuditEventKind::Authentication,
        _ => AuditEventKind::Authorization,
    };
    let result = match outcome {
        Outcome::Anonymous | Outcome::Authenticated(_) | Outcome::Authorized(..) => {
            AuditOutcome::Success
        }
        Outcome::Unauthenticated
        | Outcome::Forbidden
        | Outcome::NotFound
        | Outcome::CrossResourceMismatch => AuditOutcome::Denied,
        Outcome::InvalidIdentifier(_) | Outcome::Unavailable => AuditOutcome::Error,
    };
    (kind, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Role;
    use crate::resource::{Certificate, Site, WafRule};
    use crate::store::MemoryStore;
    use crate::web::RequestAdapter;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    const SECRET: &str = "guard-test-secret";

    fn token_for(user_id: i64) -> String {
        encode(
            &Header::default(),
            &json!({ "user_id": user_id, "exp": Utc::now().timestamp() + 3600 }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn principal(id: i64, role: Role) -> Principal {
        Principal {
            id,
            username: format!("user-{id}"),
            email: format!("user{id}@example.com"),
            role,
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_principal(principal(42, Role::Standard))
            .with_principal(principal(7, Role::Standard))
            .with_principal(principal(1, Role::Admin))
            .with_site(Site {
                id: 10,
                owner_id: 42,
                name: "shop".to_string(),
                domain: "shop.example.com".to_string(),
                certificate_id: None,
            })
            .with_site(Site {
                id: 99,
                owner_id: 7,
                name: "blog".to_string(),
                domain: "blog.example.com".to_string(),
                certificate_id: Some(3),
            })
            .with_waf_rule(WafRule {
                id: 5,
                site_id: 10,
                owner_id: 42,
                name: "sqli".to_string(),
            })
            .with_certificate(Certificate {
                id: 3,
                owner_id: 7,
                name: "blog-cert".to_string(),
                domain: "blog.example.com".to_string(),
            })
    }

    fn guard() -> PageGuard<MemoryStore> {
        PageGuard::new(AuthConfig::new(SECRET), store()).unwrap()
    }

    fn request_as(user_id: i64) -> RequestAdapter {
        let mut req = RequestAdapter::new(format!("req-{user_id}"));
        req.add_header(
            "Authorization".to_string(),
            format!("Bearer {}", token_for(user_id)),
        );
        req
    }

    #[test]
    fn public_page_never_inspects_credentials() {
        let mut req = RequestAdapter::new("req-pub".to_string());
        req.add_header("Authorization".to_string(), "Bearer garbage".to_string());

        assert_eq!(guard().guard_page(&req, Page::Login), Outcome::Anonymous);
    }

    #[test]
    fn optional_page_resolves_identity_when_present() {
        let g = guard();
        let outcome = g.guard_page(&request_as(42), Page::Dashboard);
        assert_eq!(outcome.principal().map(|p| p.id), Some(42));

        let anon = RequestAdapter::new("req-anon".to_string());
        assert_eq!(g.guard_page(&anon, Page::Dashboard), Outcome::Anonymous);
    }

    #[test]
    fn authenticated_page_without_credential() {
        let req = RequestAdapter::new("req-none".to_string());
        assert_eq!(guard().guard_page(&req, Page::UserProfile), Outcome::Unauthenticated);
    }

    #[test]
    fn admin_only_page() {
        let g = guard();
        assert_eq!(g.guard_page(&request_as(42), Page::UserList), Outcome::Forbidden);
        assert!(g.guard_page(&request_as(1), Page::UserList).is_allowed());
    }

    #[test]
    fn site_owned_by_caller_is_authorized() {
        let mut req = request_as(42);
        req.add_path_param("id".to_string(), "10".to_string());

        match guard().guard_page(&req, Page::SiteDetail) {
            Outcome::Authorized(p, Resource::Site(site)) => {
                assert_eq!(p.id, 42);
                assert_eq!(site.id, 10);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn site_owned_by_other_is_forbidden() {
        let mut req = request_as(42);
        req.add_path_param("id".to_string(), "99".to_string());
        assert_eq!(guard().guard_page(&req, Page::SiteEdit), Outcome::Forbidden);
    }

    #[test]
    fn missing_site_is_not_found() {
        let mut req = request_as(42);
        req.add_path_param("id".to_string(), "12345".to_string());
        assert_eq!(guard().guard_page(&req, Page::SiteDetail), Outcome::NotFound);
    }

    #[test]
    fn bad_identifier_is_reported_with_param_name() {
        let mut req = request_as(42);
        req.add_path_param("id".to_string(), "10".to_string());
        req.add_path_param("ruleId".to_string(), "five".to_string());
        assert_eq!(
            guard().guard_page(&req, Page::WafRuleDetail),
            Outcome::InvalidIdentifier("ruleId")
        );
    }

    #[test]
    fn unauthenticated_wins_over_bad_identifier() {
        let mut req = RequestAdapter::new("req-anon".to_string());
        req.add_path_param("id".to_string(), "abc".to_string());
        assert_eq!(guard().guard_page(&req, Page::SiteDetail), Outcome::Unauthenticated);
    }

    #[test]
    fn rule_under_its_site_is_authorized() {
        let mut req = request_as(42);
        req.add_path_param("id".to_string(), "10".to_string());
        req.add_path_param("ruleId".to_string(), "5".to_string());

        let outcome = guard().guard_page(&req, Page::WafRuleEdit);
        assert!(matches!(outcome, Outcome::Authorized(_, Resource::WafRule(_))));
    }

    #[test]
    fn rule_under_other_site_is_mismatch() {
        let mut req = request_as(1);
        req.add_path_param("id".to_string(), "99".to_string());
        req.add_path_param("ruleId".to_string(), "5".to_string());
        assert_eq!(
            guard().guard_page(&req, Page::WafRuleDetail),
            Outcome::CrossResourceMismatch
        );
    }

    #[test]
    fn certificate_access_follows_ownership() {
        let g = guard();
        let mut owner = request_as(7);
        owner.add_path_param("id".to_string(), "3".to_string());
        assert!(g.guard_page(&owner, Page::CertificateDetail).is_allowed());

        let mut other = request_as(42);
        other.add_path_param("id".to_string(), "3".to_string());
        assert_eq!(g.guard_page(&other, Page::CertificateDetail), Outcome::Forbidden);
    }

    #[test]
    fn store_failure_is_unavailable() {
        let mut store = store();
        store.set_unavailable(true);
        let g = PageGuard::new(AuthConfig::new(SECRET), store).unwrap();

        assert_eq!(g.guard_page(&request_as(42), Page::SiteList), Outcome::Unavailable);
        assert_eq!(g.guard_page(&request_as(42), Page::Dashboard), Outcome::Unavailable);
    }

    #[test]
    fn dispositions_for_page_mode() {
        let config = AuthConfig::new(SECRET);
        let site_page = Page::SiteDetail.spec();
        let users_page = Page::UserList.spec();

        assert_eq!(
            Outcome::Unauthenticated.disposition(&site_page, &config),
            Disposition::Redirect("/auth/login".to_string())
        );
        assert_eq!(
            Outcome::Forbidden.disposition(&users_page, &config),
            Disposition::Redirect("/dashboard".to_string())
        );
        assert_eq!(
            Outcome::Forbidden.disposition(&site_page, &config),
            Disposition::Status(STATUS_FORBIDDEN)
        );
        assert_eq!(
            Outcome::Forbidden.disposition(&site_page.concealing(), &config),
            Disposition::Status(STATUS_NOT_FOUND)
        );
        assert_eq!(
            Outcome::CrossResourceMismatch.disposition(&site_page, &config),
            Disposition::Status(STATUS_NOT_FOUND)
        );
        assert_eq!(
            Outcome::InvalidIdentifier("id").disposition(&site_page, &config),
            Disposition::Status(STATUS_BAD_REQUEST)
        );
        assert_eq!(
            Outcome::Unavailable.disposition(&site_page, &config),
            Disposition::Status(STATUS_UNAVAILABLE)
        );
        assert_eq!(Outcome::Anonymous.disposition(&site_page, &config), Disposition::Proceed);
    }

    #[test]
    fn dispositions_for_api_mode() {
        let config = AuthConfig::new(SECRET);
        let spec = PageSpec::api("users_api", Access::AdminOnly);

        assert_eq!(
            Outcome::Unauthenticated.disposition(&spec, &config),
            Disposition::Status(STATUS_UNAUTHORIZED)
        );
        assert_eq!(
            Outcome::Forbidden.disposition(&spec, &config),
            Disposition::Status(STATUS_FORBIDDEN)
        );
    }

    #[test]
    fn disposition_status_codes() {
        assert_eq!(Disposition::Proceed.status_code(), None);
        assert_eq!(Disposition::Redirect("/x".to_string()).status_code(), Some(302));
        assert_eq!(Disposition::Status(404).status_code(), Some(404));
    }

    #[test]
    fn empty_secret_is_refused_at_construction() {
        let err = PageGuard::new(AuthConfig::new(""), store()).unwrap_err();
        assert_eq!(err, ConfigError::EmptySecret);
    }

    #[test]
    fn oversized_leeway_is_refused_at_construction() {
        let config = AuthConfig::new(SECRET).with_leeway(u64::MAX);
        assert!(matches!(
            PageGuard::new(config, store()),
            Err(ConfigError::LeewayTooLarge { .. })
        ));
    }

    #[test]
    fn guard_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PageGuard<MemoryStore>>();
    }
}
