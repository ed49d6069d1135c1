use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_log, Log, RecordedRequest};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn authorized(method: &str, uri: &str) -> http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, "pk_test")
}

// --- echo ---

#[tokio::test]
async fn get_is_echoed_with_path_and_query() {
    let resp = app()
        .oneshot(
            authorized("GET", "/api/v2/list/12/task?archived=false&statuses%5B%5D=open&statuses%5B%5D=in+progress")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let recorded: RecordedRequest = body_json(resp).await;
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.path, "/api/v2/list/12/task");
    assert_eq!(
        recorded.query,
        vec![
            ("archived".to_string(), "false".to_string()),
            ("statuses[]".to_string(), "open".to_string()),
            ("statuses[]".to_string(), "in progress".to_string()),
        ]
    );
    assert_eq!(recorded.header("authorization"), Some("pk_test"));
    assert!(recorded.body.is_none());
}

#[tokio::test]
async fn json_body_is_echoed() {
    let resp = app()
        .oneshot(
            authorized("PUT", "/api/v2/task/9hz")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(r#"{"name":"Renamed","priority":2}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let recorded: RecordedRequest = body_json(resp).await;
    assert_eq!(recorded.method, "PUT");
    assert_eq!(recorded.body, Some(json!({"name": "Renamed", "priority": 2})));
}

#[tokio::test]
async fn delete_with_body_is_echoed() {
    let resp = app()
        .oneshot(
            authorized("DELETE", "/api/v2/team/1/time_entries/tags")
                .body(r#"{"time_entry_ids":["a"]}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    let recorded: RecordedRequest = body_json(resp).await;
    assert_eq!(recorded.method, "DELETE");
    assert_eq!(recorded.body, Some(json!({"time_entry_ids": ["a"]})));
}

#[tokio::test]
async fn multipart_fields_are_recorded() {
    let boundary = "X-BOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"filename\"\r\n\r\n\
         notes.txt\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"attachment\"; filename=\"upload.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         hello\r\n\
         --{boundary}--\r\n"
    );
    let resp = app()
        .oneshot(
            authorized("POST", "/api/v2/task/9hz/attachment")
                .header(
                    http::header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let recorded: RecordedRequest = body_json(resp).await;
    assert!(recorded.body.is_none());
    assert_eq!(recorded.parts.len(), 2);
    assert_eq!(recorded.part("filename").unwrap().content, "notes.txt");
    let attachment = recorded.part("attachment").unwrap();
    assert_eq!(attachment.file_name.as_deref(), Some("upload.txt"));
    assert_eq!(attachment.content, "hello");
}

// --- errors ---

#[tokio::test]
async fn missing_authorization_returns_401() {
    let resp = app()
        .oneshot(Request::builder().uri("/api/v2/team").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["ECODE"], "OAUTH_017");
}

#[tokio::test]
async fn forced_error_status_returns_clickup_error_shape() {
    let resp = app()
        .oneshot(
            authorized("GET", "/api/v2/task/missing")
                .header(mock_server::STATUS_HEADER, "404")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({"err": "Not Found", "ECODE": "MOCK_404"}));
}

#[tokio::test]
async fn forced_success_status_has_empty_body() {
    let resp = app()
        .oneshot(
            authorized("DELETE", "/api/v2/task/9hz")
                .header(mock_server::STATUS_HEADER, "204")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn unparseable_status_header_is_ignored() {
    let resp = app()
        .oneshot(
            authorized("GET", "/api/v2/user")
                .header(mock_server::STATUS_HEADER, "teapot")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// --- log ---

#[tokio::test]
async fn every_request_is_logged_in_order() {
    let log = Log::default();
    for uri in ["/api/v2/team", "/api/v2/user"] {
        app_with_log(log.clone())
            .oneshot(authorized("GET", uri).body(String::new()).unwrap())
            .await
            .unwrap();
    }
    app_with_log(log.clone())
        .oneshot(Request::builder().uri("/api/v2/goal/g").body(String::new()).unwrap())
        .await
        .unwrap();

    let recorded = log.read().await;
    let paths: Vec<_> = recorded.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/api/v2/team", "/api/v2/user", "/api/v2/goal/g"]);
    assert_ne!(recorded[0].id, recorded[1].id);
}
