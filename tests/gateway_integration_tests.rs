use addytui::gateway::{AddyClient, AliasGateway, GatewayError};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn alias_json(id: &str, email: &str, active: bool) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": "ca0a4e09-c266-4f6f-845c-958db5090f09",
        "local_part": email.split('@').next().unwrap_or_default(),
        "domain": "x.com",
        "email": email,
        "active": active,
        "description": null,
        "emails_forwarded": 7,
        "emails_blocked": 2,
        "emails_replied": 1,
        "emails_sent": 3,
        "created_at": "2024-01-01 00:00:00"
    })
}

fn client(server: &MockServer) -> AddyClient {
    AddyClient::new("test-token".to_string(), Some(server.uri()))
}

// ============================================================================
// fetch_all
// ============================================================================

#[tokio::test]
async fn test_fetch_all_returns_aliases_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/aliases"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                alias_json("b", "second@x.com", true),
                alias_json("a", "first@x.com", false),
            ],
            "links": {},
            "meta": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let aliases = client(&mock_server).fetch_all().await.unwrap();

    assert_eq!(aliases.len(), 2);
    assert_eq!(aliases[0].id, "b");
    assert_eq!(aliases[0].email, "second@x.com");
    assert!(aliases[0].active);
    assert_eq!(aliases[1].id, "a");
    assert!(!aliases[1].active);
    assert_eq!(aliases[1].forward_counts(), "2/7");
    assert_eq!(aliases[1].reply_counts(), "1/3");
}

#[tokio::test]
async fn test_fetch_all_empty_account() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/aliases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    let aliases = client(&mock_server).fetch_all().await.unwrap();
    assert!(aliases.is_empty());
}

#[tokio::test]
async fn test_fetch_all_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/aliases"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"message":"Unauthenticated."}"#),
        )
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).fetch_all().await;

    match result {
        Err(GatewayError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert!(message.contains("Unauthenticated"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_all_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/aliases"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).fetch_all().await;
    assert!(matches!(result, Err(GatewayError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_all_connection_refused() {
    // Nothing listens on port 9 (discard) in the test environment.
    let gateway = AddyClient::new("t".to_string(), Some("http://127.0.0.1:9".to_string()));
    let result = gateway.fetch_all().await;
    assert!(matches!(result, Err(GatewayError::Network(_))));
}

// ============================================================================
// enable / disable
// ============================================================================

#[tokio::test]
async fn test_enable_posts_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/active-aliases"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!({ "id": "abc" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": alias_json("abc", "a@x.com", true) })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    client(&mock_server).enable("abc").await.unwrap();
}

#[tokio::test]
async fn test_disable_deletes_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/active-aliases/abc"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client(&mock_server).disable("abc").await.unwrap();
}

#[tokio::test]
async fn test_disable_unknown_alias_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/active-aliases/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).disable("missing").await;
    assert_eq!(
        result,
        Err(GatewayError::Api {
            status: 404,
            message: "Not found".to_string()
        })
    );
}

#[tokio::test]
async fn test_enable_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/active-aliases"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server Error"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).enable("abc").await;
    assert!(matches!(result, Err(GatewayError::Api { status: 500, .. })));
}
