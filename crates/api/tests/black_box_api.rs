use std::sync::Arc;

use gatekeeper_api::config::AppConfig;
use gatekeeper_auth::{Identity, IdentityRecord, MemoryIdentityStore, Role, TokenService};
use gatekeeper_core::{IdentityId, SystemClock};
use reqwest::StatusCode;
use serde_json::json;

const ALICE: &str = "64b7f0c2a1e4d93f5c0b1a2e";
const BOB: &str = "64b7f0c2a1e4d93f5c0b1a2f";
const ROOT: &str = "64b7f0c2a1e4d93f5c0b1a30";
const GHOST: &str = "64b7f0c2a1e4d93f5c0b1a31";

struct TestServer {
    base_url: String,
    tokens: TokenService,
    store: Arc<MemoryIdentityStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let config = AppConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some("test-secret".to_string()),
            "JWT_EXPIRES_IN" => Some("10m".to_string()),
            _ => None,
        })
        .expect("valid test config");

        let store = Arc::new(MemoryIdentityStore::new());
        store.insert(record(ALICE, "alice", Role::User, true)).expect("seed identity");
        store.insert(record(BOB, "bob", Role::User, true)).expect("seed identity");
        store.insert(record(ROOT, "root", Role::Admin, true)).expect("seed identity");
        store.insert(record(GHOST, "ghost", Role::User, false)).expect("seed identity");

        // Same router as prod, bound to an ephemeral port.
        let app = gatekeeper_api::app::build_app(&config, store.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let tokens = TokenService::new(config.token_config(), Arc::new(SystemClock));
        Self {
            base_url,
            tokens,
            store,
            handle,
        }
    }

    fn token_for(&self, id: &str, username: &str, role: Role) -> String {
        self.tokens
            .issue(&record(id, username, role, true).into_identity())
            .expect("failed to issue token")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn record(id: &str, username: &str, role: Role, active: bool) -> IdentityRecord {
    IdentityRecord::from(Identity {
        id: IdentityId::new(id),
        email: format!("{username}@example.com"),
        username: username.to_string(),
        role,
        active,
    })
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_and_invalid_tokens_get_distinct_401s() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/me")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let missing: serde_json::Value = res.json().await.unwrap();
    assert_eq!(missing["message"], "Access token required");

    let res = client
        .get(srv.url("/me"))
        .bearer_auth("not-a-token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let invalid: serde_json::Value = res.json().await.unwrap();
    assert_eq!(invalid["message"], "Invalid or expired token");
}

#[tokio::test]
async fn me_returns_identity_from_store() {
    let srv = TestServer::spawn().await;
    let token = srv.token_for(ALICE, "alice", Role::User);

    let res = reqwest::Client::new()
        .get(srv.url("/me"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["id"], ALICE);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["role"], "user");
    assert!(body.get("credential").is_none());
}

#[tokio::test]
async fn inactive_identity_is_rejected() {
    let srv = TestServer::spawn().await;
    let token = srv.token_for(GHOST, "ghost", Role::User);

    let res = reqwest::Client::new()
        .get(srv.url("/me"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_route_is_role_gated() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(srv.url("/admin/ping"))
        .bearer_auth(srv.token_for(ALICE, "alice", Role::User))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .get(srv.url("/admin/ping"))
        .bearer_auth(srv.token_for(ROOT, "root", Role::Admin))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn user_cannot_delete_someone_else() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .delete(srv.url(&format!("/users/{BOB}")))
        .bearer_auth(srv.token_for(ALICE, "alice", Role::User))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(srv.store.len(), 4, "delete must not run");
}

#[tokio::test]
async fn owner_and_admin_can_delete() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .delete(srv.url(&format!("/users/{BOB}")))
        .bearer_auth(srv.token_for(BOB, "bob", Role::User))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .delete(srv.url(&format!("/users/{ALICE}")))
        .bearer_auth(srv.token_for(ROOT, "root", Role::Admin))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // Already gone.
    let res = client
        .delete(srv.url(&format!("/users/{ALICE}")))
        .bearer_auth(srv.token_for(ROOT, "root", Role::Admin))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(srv.store.len(), 2);
}

#[tokio::test]
async fn malformed_id_is_a_validation_error() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .delete(srv.url("/users/not-an-id"))
        .bearer_auth(srv.token_for(ROOT, "root", Role::Admin))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["errors"], json!(["Invalid ID format"]));
}

#[tokio::test]
async fn registration_check_reports_every_violation() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/users/validate"))
        .json(&json!({ "username": "al", "email": "alice@example.com", "password": "weak" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert_eq!(
        body["errors"],
        json!([
            "Username must be between 3 and 30 characters",
            "Password must be at least 6 characters long",
            "Password must contain at least one uppercase letter",
            "Password must contain at least one number",
            "Password must contain at least one special character",
        ])
    );

    let res = client
        .post(srv.url("/users/validate"))
        .json(&json!({ "username": "alice", "email": "alice@example.com", "password": "StrongPass123!" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn search_is_optionally_authenticated() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(srv.url("/search?q=%3Cb%3Erust%3C%2Fb%3E&page=0&limit=1000"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["query"], "brust&#x2F;b");
    assert_eq!(body["pagination"], json!({ "page": 1, "limit": 100, "skip": 0 }));
    assert!(body["viewer"].is_null());

    // A bad token on an optional route is anonymous, not an error.
    let res = client
        .get(srv.url("/search"))
        .bearer_auth("garbage")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["viewer"].is_null());

    let res = client
        .get(srv.url("/search?q=maps"))
        .bearer_auth(srv.token_for(ALICE, "alice", Role::User))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["viewer"], "alice");
}

#[tokio::test]
async fn search_rejects_inverted_date_range() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(srv.url("/search?from=2023-12-31&to=2023-01-01"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["errors"], json!(["Start date must be before end date"]));
}
