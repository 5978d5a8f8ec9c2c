use crate::net::http::Method;
use crate::test_support::{FakeTransport, api, block_on, user_json};

use super::*;

#[test]
fn login_posts_credentials_as_json() {
    let transport = FakeTransport::new();
    transport.respond(200, serde_json::json!({ "token": "T" }));

    let body = LoginRequest { email: "a@b.co".to_owned(), password: "secret".to_owned() };
    let resp = block_on(api(&transport).login(&body)).unwrap();
    assert_eq!(resp.token(), Some("T"));

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "https://api.example.test/api/auth/login");
    assert_eq!(sent[0].bearer, None);
    assert_eq!(sent[0].body, Some(serde_json::json!({ "email": "a@b.co", "password": "secret" })));
}

#[test]
fn me_sends_bearer_and_unwraps_data() {
    let transport = FakeTransport::new();
    transport.respond(200, serde_json::json!({ "status": "success", "data": user_json("u-7") }));

    let profile = block_on(api(&transport).me("tok")).unwrap();
    assert_eq!(profile.id, "u-7");

    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].url, "https://api.example.test/api/auth/me");
    assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
}

#[test]
fn me_maps_401_to_unauthorized() {
    let transport = FakeTransport::new();
    transport.respond(401, serde_json::json!({ "message": "jwt expired" }));

    let err = block_on(api(&transport).me("stale")).unwrap_err();
    assert!(err.is_unauthorized());
}

#[test]
fn me_without_data_is_a_decode_error() {
    let transport = FakeTransport::new();
    transport.respond(200, serde_json::json!({ "status": "success" }));

    let err = block_on(api(&transport).me("tok")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn transport_failure_is_network_error() {
    let transport = FakeTransport::new();
    transport.fail("connection refused");

    let err = block_on(api(&transport).google_auth_url()).unwrap_err();
    assert_eq!(err, ApiError::Network("connection refused".to_owned()));
}

#[test]
fn success_with_non_json_body_is_decode_error() {
    let transport = FakeTransport::new();
    transport.respond_raw(200, "<!doctype html>");

    let err = block_on(api(&transport).google_auth_url()).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn google_callback_posts_code() {
    let transport = FakeTransport::new();
    transport.respond(200, serde_json::json!({ "token": "G" }));

    block_on(api(&transport).google_callback("abc")).unwrap();
    let sent = transport.sent();
    assert_eq!(sent[0].url, "https://api.example.test/api/auth/google/callback");
    assert_eq!(sent[0].body, Some(serde_json::json!({ "code": "abc" })));
}

#[test]
fn customer_portal_link_posts_with_bearer_and_no_body() {
    let transport = FakeTransport::new();
    transport.respond(200, serde_json::json!({ "status": "success", "url": "https://portal.test" }));

    let link = block_on(api(&transport).customer_portal_link("tok")).unwrap();
    assert_eq!(link.success_url(), Some("https://portal.test"));

    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
    assert_eq!(sent[0].body, None);
}

#[test]
fn register_surfaces_backend_message() {
    let transport = FakeTransport::new();
    transport.respond(400, serde_json::json!({ "message": "Email already registered" }));

    let body = RegisterRequest {
        email: "a@b.co".to_owned(),
        password: "longenough".to_owned(),
        extension_upgrade_id: None,
    };
    let err = block_on(api(&transport).register(&body)).unwrap_err();
    assert_eq!(err.user_message("Failed to create account"), "Email already registered");
}
