//! Tests for fetching users against a mock endpoint.

use roster_business::BusinessConfig;
use roster_business::users::{SourceError, fetch_users};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn users_body() -> serde_json::Value {
    json!({
        "users": [
            {
                "id": 1,
                "firstName": "Emily",
                "lastName": "Johnson",
                "username": "emilys",
                "email": "emily.johnson@x.dummyjson.com",
                "phone": "+81 965-431-3024",
                "age": 28,
                "birthDate": "1996-5-30",
                "gender": "female",
                "address": { "city": "Phoenix" },
                "company": { "name": "Dooley, Kozey and Cronin" }
            },
            {
                "id": 2,
                "firstName": "Michael",
                "lastName": "Williams",
                "username": "michaelw",
                "email": "michael.williams@x.dummyjson.com",
                "phone": "+49 258-627-6644",
                "age": 35,
                "birthDate": "1989-8-10",
                "gender": "male"
            }
        ],
        "total": 2,
        "skip": 0,
        "limit": 100
    })
}

#[tokio::test]
async fn test_fetch_users_maps_rows() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = BusinessConfig::new(mock_server.uri());
    let rows = fetch_users(&config).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key.as_str(), "1");
    assert_eq!(rows[0].name, "Emily Johnson");
    assert_eq!(rows[0].city, "Phoenix");
    assert_eq!(rows[1].name, "Michael Williams");
    assert_eq!(rows[1].company, "");
}

#[tokio::test]
async fn test_fetch_users_honors_fetch_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = BusinessConfig {
        fetch_limit: 5,
        ..BusinessConfig::new(mock_server.uri())
    };
    assert!(fetch_users(&config).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_users_reports_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config = BusinessConfig::new(mock_server.uri());
    assert_eq!(fetch_users(&config).await, Err(SourceError::Status(503)));
}

#[tokio::test]
async fn test_fetch_users_reports_bad_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let config = BusinessConfig::new(mock_server.uri());
    assert!(matches!(
        fetch_users(&config).await,
        Err(SourceError::Parse(_))
    ));
}

#[tokio::test]
async fn test_fetch_users_reports_transport_error() {
    // Nothing listens on port 9 on test hosts.
    let config = BusinessConfig::new("http://127.0.0.1:9");
    assert!(matches!(
        fetch_users(&config).await,
        Err(SourceError::Http(_))
    ));
}
