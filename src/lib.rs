//! Identity resolution and resource authorization for the WAF dashboard.
//!
//! Every page request passes through one pipeline before rendering:
//! - **Credential extraction**: bearer header first, session cookie second
//! - **Token verification**: HS256 signature and expiry, nothing else trusted
//! - **Identity resolution**: the principal and its role are read from storage
//! - **Resource authorization**: admins manage everything, others what they own
//!
//! # Core Types
//!
//! - [`PageGuard`]: Runs the pipeline and returns a terminal [`Outcome`]
//! - [`Page`]: The dashboard's pages and their access requirements
//! - [`Principal`]: The authenticated user, as stored
//! - [`Resource`]: A site, WAF rule, or certificate with a single owner
//! - [`Secret<T>`]: Wrapper that redacts sensitive values in logs/output
//!
//! # Examples
//!
//! ```
//! use waf_authz::web::RequestAdapter;
//! use waf_authz::{AuthConfig, MemoryStore, Outcome, Page, PageGuard, Principal, Role, Site};
//!
//! let store = MemoryStore::new()
//!     .with_principal(Principal {
//!         id: 42,
//!         username: "alice".to_string(),
//!         email: "alice@example.com".to_string(),
//!         role: Role::Standard,
//!     })
//!     .with_site(Site {
//!         id: 10,
//!         owner_id: 42,
//!         name: "shop".to_string(),
//!         domain: "shop.example.com".to_string(),
//!         certificate_id: None,
//!     });
//! let guard = PageGuard::new(AuthConfig::new("signing-key"), store)?;
//!
//! // No credential: the page is refused before the path is even parsed.
//! let mut request = RequestAdapter::new("req-123".to_string());
//! request.add_path_param("id".to_string(), "10".to_string());
//! assert_eq!(guard.guard_page(&request, Page::SiteDetail), Outcome::Unauthenticated);
//! # Ok::<(), waf_authz::ConfigError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
mod authz;
mod config;
mod credential;
mod error;
mod guard;
mod identity;
mod logging;
mod pages;
mod request;
mod resource;
mod secret;
mod store;
mod token;
pub mod web;

pub use authz::{authorize, can_administer, can_manage, check_rule_binding};
pub use config::{
    AuthConfig, ConfigError, DEFAULT_COOKIE_NAME, DEFAULT_DASHBOARD_PATH, DEFAULT_LOGIN_PATH,
    MAX_LEEWAY_SECS,
};
pub use credential::{
    extract_credential, Credential, CredentialSource, AUTHORIZATION_HEADER, BEARER_SCHEME,
};
pub use error::{Denial, IdentityError, InvalidToken, ParamError, StoreError, TokenRejection};
pub use guard::{
    Access, Disposition, Outcome, PageGuard, PageSpec, ResponseMode, STATUS_BAD_REQUEST,
    STATUS_FORBIDDEN, STATUS_FOUND, STATUS_NOT_FOUND, STATUS_UNAUTHORIZED, STATUS_UNAVAILABLE,
};
pub use identity::IdentityResolver;
pub use pages::Page;
pub use request::{Principal, Role};
pub use resource::{Certificate, Resource, ResourceKind, Site, WafRule};
pub use secret::Secret;
pub use store::{MemoryStore, PrincipalStore, ResourceStore};
pub use token::{Claims, TokenVerifier, SIGNING_ALGORITHM};
