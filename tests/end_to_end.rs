//! Full-stack session lifecycle.
//!
//! Runs the real server on a local socket and drives it with the real
//! client, so the cookie round trip is exercised exactly as a browser
//! would: the token is set by login, carried automatically on validate,
//! and dropped when logout expires it.

mod common;

use std::net::SocketAddr;
use std::time::Duration;

use nutriflow::client::{AuthApi, ClientConfig, SessionStore};
use nutriflow::shared::{LoginRequest, RegisterRequest};

async fn spawn_server() -> SocketAddr {
    let app = common::test_app().await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

#[tokio::test]
async fn test_client_against_real_server() {
    let addr = spawn_server().await;
    let config = ClientConfig::new(format!("http://{addr}")).with_timeout(Duration::from_secs(5));
    let api = AuthApi::new(config).expect("client");

    // Fresh visitor: boot resolves to unauthenticated without an error.
    let store = SessionStore::boot(api.clone()).await;
    let snapshot = store.snapshot();
    assert!(!snapshot.is_authenticated());
    assert!(snapshot.error.is_none());

    let user = api
        .register(&RegisterRequest {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .expect("register");
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@x.com");

    api.login(&LoginRequest {
        email: "ana@x.com".to_string(),
        password: "secret1".to_string(),
    })
    .await
    .expect("login");

    // The login response only said "ok"; the identity comes from the
    // source of truth.
    store.revalidate().await;
    let snapshot = store.snapshot();
    assert!(snapshot.is_authenticated());
    let claims = snapshot.user.expect("claims");
    assert_eq!(claims.email, "ana@x.com");
    assert_eq!(claims.sub, user.id);

    store.logout().await;
    assert!(!store.is_authenticated());

    // The jar honored the expired cookie from logout, so the next validate
    // goes out bare and comes back 401.
    store.revalidate().await;
    let snapshot = store.snapshot();
    assert!(!snapshot.is_authenticated());
    assert!(snapshot.error.is_none());
}
