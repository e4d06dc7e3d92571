use std::sync::{Arc, Mutex};

use http::Method;
use http::uri::Scheme;
use serde::Serialize;

use super::*;
use crate::client::{CallHeaders, CallPath, CallQuery};
use crate::{ApiClientError, Authentication, DnacClient, Envelope};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PagedQuery {
    offset: Option<i64>,
    limit: Option<i64>,
    name: Option<String>,
}

fn create_test_client() -> DnacClient {
    DnacClient::builder()
        .with_scheme(Scheme::HTTP)
        .with_port(8080)
        .build()
        .expect("should build client")
}

fn body_text(request: &reqwest::Request) -> Option<String> {
    request
        .body()
        .and_then(reqwest::Body::as_bytes)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
}

#[test]
fn test_api_call_build_success() {
    let call = create_test_client()
        .get("/api/v1/network-device")
        .expect("should build api call");

    assert_eq!(call.method, Method::GET);
    assert_eq!(call.path.path, "/api/v1/network-device");
    assert!(call.query.is_empty());
    assert!(call.headers.is_none());
    assert!(call.body.is_none());
}

#[test]
fn test_api_call_rejects_unresolved_path() {
    let result = create_test_client().get(CallPath::from("/api/v1/network-device/{id}"));

    assert!(matches!(
        result,
        Err(ApiClientError::PathUnresolved { .. })
    ));
}

#[test]
fn test_delete_with_single_path_param() {
    let path = CallPath::from("/resource/{id}").add_param("id", "abc-123");
    let call = create_test_client().delete(path).expect("should build api call");

    let request = call.to_request().expect("should build request");

    assert_eq!(request.method(), Method::DELETE);
    assert_eq!(request.url().path(), "/resource/abc-123");
    assert_eq!(request.url().query(), None);
    assert!(request.body().is_none());
}

#[test]
fn test_get_with_optional_query_params() {
    let call = create_test_client()
        .get("/resource")
        .expect("should build api call")
        .with_query_params(&PagedQuery {
            offset: Some(5),
            limit: None,
            name: Some("foo".to_string()),
        })
        .expect("should add query");

    let request = call.to_request().expect("should build request");

    insta::assert_snapshot!(request.url().as_str(), @"http://127.0.0.1:8080/resource?offset=5&name=foo");
}

#[test]
fn test_empty_query_does_not_add_question_mark() {
    let call = create_test_client()
        .get("/api/v1/network-device/count")
        .expect("should build api call")
        .with_query(CallQuery::new().add_param("limit", Option::<i64>::None));

    let request = call.to_request().expect("should build request");

    assert_eq!(
        request.url().as_str(),
        "http://127.0.0.1:8080/api/v1/network-device/count"
    );
}

#[test]
fn test_base_path_is_prefixed() {
    let client = DnacClient::builder()
        .with_host("dnac.example.com")
        .with_base_path("/proxy/dnac")
        .expect("valid base path")
        .build()
        .expect("should build client");
    let call = client
        .get("/api/v1/task/count")
        .expect("should build api call");

    let request = call.to_request().expect("should build request");

    insta::assert_snapshot!(request.url().as_str(), @"https://dnac.example.com/proxy/dnac/api/v1/task/count");
}

#[test]
fn test_json_body_sets_content_type() {
    let call = create_test_client()
        .put("/api/v1/network-device/sync")
        .expect("should build api call")
        .with_query(CallQuery::new().add_param("forceSync", true))
        .json(&["abc-123", "def-456"])
        .expect("should add body");

    let request = call.to_request().expect("should build request");

    assert_eq!(request.method(), Method::PUT);
    assert_eq!(request.url().query(), Some("forceSync=true"));
    assert_eq!(
        request.headers().get("content-type").map(|it| it.as_bytes()),
        Some(b"application/json".as_slice())
    );
    insta::assert_snapshot!(body_text(&request).unwrap_or_default(), @r#"["abc-123","def-456"]"#);
}

#[test]
fn test_headers_are_flattened() {
    #[derive(Serialize)]
    struct Headers {
        #[serde(rename = "__runsync")]
        runsync: Option<bool>,
        #[serde(rename = "__timeout")]
        timeout: Option<u32>,
        #[serde(rename = "__persistbapioutput")]
        persist: Option<bool>,
    }

    let call = create_test_client()
        .post("/dna/intent/api/v1/site")
        .expect("should build api call")
        .with_header_params(&Headers {
            runsync: Some(true),
            timeout: Some(30),
            persist: None,
        })
        .expect("should add headers");

    let request = call.to_request().expect("should build request");
    let headers = request.headers();

    assert_eq!(headers.get("__runsync").map(|it| it.as_bytes()), Some(b"true".as_slice()));
    assert_eq!(headers.get("__timeout").map(|it| it.as_bytes()), Some(b"30".as_slice()));
    assert!(headers.get("__persistbapioutput").is_none());
}

#[test]
fn test_client_token_is_sent() {
    let client = create_test_client().with_authentication(Authentication::Token("a-token".into()));
    let call = client.get("/api/v1/task").expect("should build api call");

    let request = call.to_request().expect("should build request");

    assert_eq!(
        request.headers().get("x-auth-token").map(|it| it.as_bytes()),
        Some(b"a-token".as_slice())
    );
}

#[test]
fn test_explicit_authorization_header_wins() {
    let client = create_test_client().with_authentication(Authentication::Basic {
        username: "ignored".to_string(),
        password: "ignored".into(),
    });
    let call = client
        .post("/api/system/v1/auth/token")
        .expect("should build api call")
        .with_headers(CallHeaders::new().add_header("Authorization", "Basic dXNlcjpwYXNz"));

    let request = call.to_request().expect("should build request");

    let values: Vec<_> = request.headers().get_all("authorization").iter().collect();
    assert_eq!(values, ["Basic dXNlcjpwYXNz"]);
}

#[test]
fn test_invalid_header_name_is_reported() {
    let call = create_test_client()
        .get("/api/v1/task")
        .expect("should build api call")
        .with_header("bad header", "value");

    let result = call.to_request();

    assert!(matches!(result, Err(ApiClientError::InvalidHeaderName(_))));
}

#[tokio::test]
async fn test_unreachable_controller_is_a_transport_error() {
    let client = DnacClient::builder()
        .with_scheme(Scheme::HTTP)
        .with_port(1)
        .build()
        .expect("should build client");

    let result = client
        .get("/api/v1/network-device/count")
        .expect("should build api call")
        .into_json::<Envelope<i64>>()
        .await;

    let error = result.expect_err("nothing listens on port 1");
    assert!(matches!(error, ApiClientError::ReqwestError(_)));
    assert!(!error.is_decode_error());
}

#[tokio::test]
async fn test_continuation_is_called_exactly_once() {
    let client = DnacClient::builder()
        .with_scheme(Scheme::HTTP)
        .with_port(1)
        .build()
        .expect("should build client");
    let outcomes = Arc::new(Mutex::new(Vec::new()));

    let recorded = Arc::clone(&outcomes);
    let handle = client
        .get("/api/v1/network-device/count")
        .expect("should build api call")
        .into_json::<Envelope<i64>>()
        .execute_with(move |outcome| {
            recorded
                .lock()
                .expect("not poisoned")
                .push(outcome.is_ok());
        });
    handle.await.expect("task should not panic");

    let outcomes = outcomes.lock().expect("not poisoned");
    assert_eq!(*outcomes, [false]);
}
