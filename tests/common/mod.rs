//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use waf_authz::web::RequestAdapter;
use waf_authz::{
    AuthConfig, Certificate, MemoryStore, PageGuard, Principal, Role, Site, WafRule,
};

pub const SECRET: &str = "integration-test-secret";

pub const ALICE: i64 = 42;
pub const BOB: i64 = 7;
pub const ADMIN: i64 = 1;

/// Signs an arbitrary payload with HS256.
pub fn sign(payload: &Value, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// A token for `user_id` expiring `ttl_secs` from now (negative: already expired).
pub fn token(user_id: i64, ttl_secs: i64) -> String {
    sign(
        &json!({ "user_id": user_id, "exp": Utc::now().timestamp() + ttl_secs }),
        SECRET,
    )
}

pub fn principal(id: i64, username: &str, role: Role) -> Principal {
    Principal {
        id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        role,
    }
}

/// Alice owns site 10 and rule 5; Bob owns site 99, certificate 3, and rule 8.
pub fn store() -> MemoryStore {
    MemoryStore::new()
        .with_principal(principal(ALICE, "alice", Role::Standard))
        .with_principal(principal(BOB, "bob", Role::Standard))
        .with_principal(principal(ADMIN, "root", Role::Admin))
        .with_site(Site {
            id: 10,
            owner_id: ALICE,
            name: "shop".to_string(),
            domain: "shop.example.com".to_string(),
            certificate_id: None,
        })
        .with_site(Site {
            id: 99,
            owner_id: BOB,
            name: "blog".to_string(),
            domain: "blog.example.com".to_string(),
            certificate_id: Some(3),
        })
        .with_waf_rule(WafRule {
            id: 5,
            site_id: 10,
            owner_id: ALICE,
            name: "block-sqli".to_string(),
        })
        .with_waf_rule(WafRule {
            id: 8,
            site_id: 99,
            owner_id: BOB,
            name: "rate-limit".to_string(),
        })
        .with_certificate(Certificate {
            id: 3,
            owner_id: BOB,
            name: "blog-cert".to_string(),
            domain: "blog.example.com".to_string(),
        })
}

pub fn guard() -> PageGuard<MemoryStore> {
    PageGuard::new(AuthConfig::new(SECRET), store()).unwrap()
}

pub fn anonymous_request(request_id: &str) -> RequestAdapter {
    RequestAdapter::new(request_id.to_string())
}

pub fn bearer_request(request_id: &str, token: &str) -> RequestAdapter {
    let mut req = RequestAdapter::new(request_id.to_string());
    req.add_header("Authorization".to_string(), format!("Bearer {token}"));
    req
}

pub fn cookie_request(request_id: &str, token: &str) -> RequestAdapter {
    let mut req = RequestAdapter::new(request_id.to_string());
    req.add_header("Cookie".to_string(), format!("theme=dark; jwt_token={token}"));
    req
}
