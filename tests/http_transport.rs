//! End-to-end tests of the supplier client over HTTP against a mock server.

use knawat_suppliers::{
    Config, Credentials, ListSuppliersQuery, NewSupplier, SupplierClient, SupplierError,
    TransportError,
};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

const AUTHORIZATION: &str = "Basic am9objpzZWNyZXQ=";

fn client_for(server: &ServerGuard) -> SupplierClient {
    let credentials = Credentials::new("john", "secret").unwrap();
    let config = Config::new(credentials, &format!("{}/api", server.url())).unwrap();
    SupplierClient::from_config(&config)
}

#[tokio::test]
async fn list_suppliers_sends_query_and_basic_auth() {
    let mut server = Server::new_async().await;
    let body = json!({"suppliers": [{"id": "1", "name": "john"}], "total": 1});
    let mock = server
        .mock("GET", "/api/suppliers")
        .match_header("authorization", AUTHORIZATION)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "20".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("sort".into(), "".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client
        .list_suppliers(ListSuppliersQuery::default())
        .await
        .unwrap();

    assert_eq!(result, body);
    mock.assert_async().await;
}

#[tokio::test]
async fn create_supplier_posts_wrapped_json() {
    let mut server = Server::new_async().await;
    let created = json!({"supplier": {"id": "42", "name": "john"}});
    let mock = server
        .mock("POST", "/api/suppliers")
        .match_header("authorization", AUTHORIZATION)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "supplier": {"name": "john", "url": "https://example.com"}
        })))
        .with_status(201)
        .with_body(created.to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let supplier = NewSupplier {
        url: Some("https://example.com".to_string()),
        ..NewSupplier::new("john")
    };
    let result = client.create_supplier(&supplier).await.unwrap();

    assert_eq!(result, created);
    mock.assert_async().await;
}

#[tokio::test]
async fn supplier_lookups_hit_their_paths() {
    let mut server = Server::new_async().await;
    let by_id = server
        .mock("GET", "/api/suppliers/123")
        .with_body(r#"{"id":"123"}"#)
        .create_async()
        .await;
    let keys = server
        .mock("GET", "/api/suppliers/123/keys")
        .with_body(r#"[{"consumerKey":"ck","consumerSecret":"cs"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.get_supplier_by_id("123").await.unwrap(),
        json!({"id": "123"})
    );
    assert_eq!(
        client.get_supplier_keys("123").await.unwrap(),
        json!([{"consumerKey": "ck", "consumerSecret": "cs"}])
    );

    by_id.assert_async().await;
    keys.assert_async().await;
}

#[tokio::test]
async fn email_is_not_encoded_again() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/suppliers/a%40b.com/users")
        .with_body(r#"{"users":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.get_supplier_by_email("a%40b.com").await.unwrap();

    assert_eq!(result, json!({"users": []}));
    mock.assert_async().await;
}

#[tokio::test]
async fn error_status_is_surfaced_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/suppliers/missing")
        .with_status(404)
        .with_body(r#"{"message":"Supplier not found"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get_supplier_by_id("missing").await.unwrap_err();

    match err {
        SupplierError::Transport(TransportError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, r#"{"message":"Supplier not found"}"#);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/suppliers/123")
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get_supplier_by_id("123").await.unwrap_err();
    assert!(matches!(
        err,
        SupplierError::Transport(TransportError::Parse(_))
    ));
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/suppliers/123")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.get_supplier_by_id("123").await.unwrap(),
        serde_json::Value::Null
    );
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let credentials = Credentials::new("john", "secret").unwrap();
    // Port 9 (discard) is not expected to be listening locally.
    let config = Config::new(credentials, "http://127.0.0.1:9/api").unwrap();
    let client = SupplierClient::from_config(&config);

    let err = client.get_supplier_by_id("123").await.unwrap_err();
    assert!(matches!(
        err,
        SupplierError::Transport(TransportError::Request(_))
    ));
}
