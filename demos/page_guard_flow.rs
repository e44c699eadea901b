//! Page guard demonstration.
//!
//! This example walks a handful of dashboard requests through the guard:
//! 1. Mint session tokens for a standard user and an admin
//! 2. Guard resource pages, admin pages, and public pages
//! 3. Print the outcome and the response each one maps to
//!
//! Audit events are printed by the `tracing` subscriber. Run with:
//! `RUST_LOG=waf_authz=debug cargo run --example page_guard_flow`

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use waf_authz::web::RequestAdapter;
use waf_authz::{AuthConfig, MemoryStore, Page, PageGuard, Principal, Role, Site, WafRule};

const SECRET: &str = "demo-signing-key";

fn mint(user_id: i64, ttl_secs: i64) -> String {
    encode(
        &Header::default(),
        &json!({ "user_id": user_id, "exp": Utc::now().timestamp() + ttl_secs }),
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("HS256 signing cannot fail for a JSON payload")
}

fn request(id: &str, token: Option<&str>, params: &[(&str, &str)]) -> RequestAdapter {
    let mut req = RequestAdapter::new(id.to_string());
    if let Some(token) = token {
        req.add_header("Authorization".to_string(), format!("Bearer {token}"));
    }
    for (name, value) in params {
        req.add_path_param(name.to_string(), value.to_string());
    }
    req
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Page Guard Example ===\n");

    let store = MemoryStore::new()
        .with_principal(Principal {
            id: 42,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::Standard,
        })
        .with_principal(Principal {
            id: 1,
            username: "root".to_string(),
            email: "root@example.com".to_string(),
            role: Role::Admin,
        })
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
            certificate_id: None,
        })
        .with_waf_rule(WafRule {
            id: 5,
            site_id: 10,
            owner_id: 42,
            name: "block-sqli".to_string(),
        });

    let guard = PageGuard::new(AuthConfig::new(SECRET), store)
        .expect("demo configuration is valid");
    let alice = mint(42, 3600);
    let root = mint(1, 3600);
    let stale = mint(42, -60);

    let scenarios = [
        (
            "alice opens her site",
            Page::SiteDetail,
            request("req-1", Some(&alice), &[("id", "10")]),
        ),
        (
            "alice opens someone else's site",
            Page::SiteDetail,
            request("req-2", Some(&alice), &[("id", "99")]),
        ),
        (
            "alice opens the user list",
            Page::UserList,
            request("req-3", Some(&alice), &[]),
        ),
        (
            "root opens the user list",
            Page::UserList,
            request("req-4", Some(&root), &[]),
        ),
        (
            "expired token",
            Page::SiteList,
            request("req-5", Some(&stale), &[]),
        ),
        (
            "non-numeric id",
            Page::SiteEdit,
            request("req-6", Some(&alice), &[("id", "abc")]),
        ),
        (
            "rule under the wrong site",
            Page::WafRuleDetail,
            request("req-7", Some(&root), &[("id", "99"), ("ruleId", "5")]),
        ),
        (
            "anonymous dashboard",
            Page::Dashboard,
            request("req-8", None, &[]),
        ),
    ];

    for (label, page, req) in &scenarios {
        let outcome = guard.guard_page(req, *page);
        let disposition = guard.disposition(&outcome, &page.spec());
        println!("--- {label} ({})", page.path());
        println!("  outcome:     {outcome:?}");
        println!("  disposition: {disposition:?}\n");
    }

    println!("=== Example Complete ===");
}
