//! Client behaviour over real HTTP against the recording mock server:
//! headers, hooks, errors, attachments and concurrent use.

mod common;

use std::io::Write;
use std::time::Duration;

use clickup_core::{ApiError, AttachmentFile, Clickup, ClientOptions, ResponseType};
use common::{echoed, start, start_with, TOKEN};
use reqwest::header::HeaderValue;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[tokio::test]
async fn default_headers_reach_the_server() {
    let h = start().await;
    let r = echoed(h.clickup.teams().get().await, "GET", "team");
    assert_eq!(r.header("authorization"), Some(TOKEN));
    assert_eq!(r.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn added_headers_keep_defaults() {
    let h = start_with(|options| options.header("X-Request-Source", "sync")).await;
    let r = echoed(h.clickup.authorization().get_authorized_user().await, "GET", "user");
    assert_eq!(r.header("x-request-source"), Some("sync"));
    assert_eq!(r.header("authorization"), Some(TOKEN));
    assert_eq!(r.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn before_request_hook_adds_header() {
    let h = start_with(|options| {
        options.before_request(|request| {
            request
                .headers_mut()
                .insert("foo", HeaderValue::from_static("bar"));
        })
    })
    .await;
    assert_eq!(h.clickup.request().options().hooks.before_request.len(), 1);

    let r = echoed(h.clickup.teams().get().await, "GET", "team");
    assert_eq!(r.header("foo"), Some("bar"));
}

#[tokio::test]
async fn hooks_run_in_registration_order() {
    let h = start_with(|options| {
        options
            .before_request(|request| {
                request
                    .headers_mut()
                    .insert("x-order", HeaderValue::from_static("first"));
            })
            .before_request(|request| {
                request
                    .headers_mut()
                    .insert("x-order", HeaderValue::from_static("second"));
            })
    })
    .await;

    let r = echoed(h.clickup.teams().get().await, "GET", "team");
    assert_eq!(r.header("x-order"), Some("second"));
}

#[tokio::test]
async fn each_call_sends_exactly_one_request() {
    let h = start().await;
    h.clickup.tasks().get("a", None).await.unwrap();
    h.clickup.lists().get(1).await.unwrap();
    h.clickup.lists().get_tasks(1, None).await.unwrap();

    let log = h.log.read().await;
    let paths: Vec<_> = log.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/api/v2/task/a", "/api/v2/list/1", "/api/v2/list/1/task"]);
}

#[tokio::test]
async fn error_status_is_returned_with_body() {
    let h = start_with(|options| options.header(mock_server::STATUS_HEADER, "404")).await;
    let err = h.clickup.tasks().get("missing", None).await.unwrap_err();

    match err {
        ApiError::HttpError { status, body } => {
            assert_eq!(status, 404);
            let body: Value = serde_json::from_str(&body).unwrap();
            assert_eq!(body["ECODE"], "MOCK_404");
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
    assert_eq!(h.log.read().await.len(), 1);
}

#[tokio::test]
async fn rejected_token_is_not_retried() {
    let h = start_with(|options| options.header(mock_server::STATUS_HEADER, "401")).await;
    let err = h.clickup.teams().get().await.unwrap_err();
    assert!(matches!(err, ApiError::HttpError { status: 401, .. }));
    assert_eq!(h.log.read().await.len(), 1);
}

#[tokio::test]
async fn empty_success_body_is_null() {
    let h = start_with(|options| options.header(mock_server::STATUS_HEADER, "204")).await;
    let value = h.clickup.tasks().delete("9hz", None).await.unwrap();
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn text_response_type_returns_raw_body() {
    let h = start_with(|options| options.response_type(ResponseType::Text)).await;
    let value = h.clickup.goals().get("g1").await.unwrap();
    let text = value.as_str().unwrap();
    assert!(text.contains("\"/api/v2/goal/g1\""));
}

#[tokio::test]
async fn truncated_error_body_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0_u8; 4096];
        let _ = socket.read(&mut request).await;
        socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 64\r\n\r\n{\"err\":")
            .await
            .unwrap();
    });

    let clickup = Clickup::with_options(
        TOKEN,
        ClientOptions::new().prefix_url(format!("http://{addr}/api/v2")),
    )
    .unwrap();
    let err = clickup.teams().get().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let clickup = Clickup::with_options(
        TOKEN,
        ClientOptions::new()
            .prefix_url(format!("http://{addr}/api/v2"))
            .timeout(Duration::from_secs(5)),
    )
    .unwrap();
    let err = clickup.teams().get().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn attachment_is_sent_as_multipart() {
    let h = start().await;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"release notes").unwrap();
    let upload = AttachmentFile::new(file.path(), "notes.txt");

    let r = echoed(
        h.clickup.tasks().add_attachment("9hz", &upload, None).await,
        "POST",
        "task/9hz/attachment",
    );

    assert_eq!(r.header("authorization"), Some(TOKEN));
    let content_type = r.header("content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    assert!(!content_type.contains("application/json"));

    assert_eq!(r.part("filename").unwrap().content, "notes.txt");
    let attachment = r.part("attachment").unwrap();
    assert_eq!(attachment.content, "release notes");
    let expected_name = file.path().file_name().unwrap().to_string_lossy();
    assert_eq!(attachment.file_name.as_deref(), Some(expected_name.as_ref()));
}

#[tokio::test]
async fn missing_attachment_file_is_an_io_error() {
    let h = start().await;
    let dir = tempfile::tempdir().unwrap();
    let upload = AttachmentFile::new(dir.path().join("absent.txt"), "absent.txt");

    let err = h
        .clickup
        .tasks()
        .add_attachment("9hz", &upload, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Io(_)));
    assert!(h.log.read().await.is_empty());
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let h = start().await;
    let mut handles = Vec::new();
    for list_id in 0..16_u64 {
        let clickup = h.clickup.clone();
        handles.push(tokio::spawn(async move { clickup.lists().get(list_id).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let log = h.log.read().await;
    assert_eq!(log.len(), 16);
    let mut paths: Vec<_> = log.iter().map(|r| r.path.clone()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 16);
}

#[tokio::test]
async fn independent_clients_keep_their_own_tokens() {
    let h = start().await;
    let other = Clickup::with_options(
        "pk_other",
        ClientOptions::new().prefix_url(h.prefix_url.clone()),
    )
    .unwrap();

    let mine = echoed(h.clickup.teams().get().await, "GET", "team");
    let theirs = echoed(other.teams().get().await, "GET", "team");
    assert_eq!(mine.header("authorization"), Some(TOKEN));
    assert_eq!(theirs.header("authorization"), Some("pk_other"));
}

#[tokio::test]
async fn typed_payloads_serialize_as_bodies() {
    #[derive(serde::Serialize)]
    struct NewTask<'a> {
        name: &'a str,
        assignees: Vec<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        due_date: Option<u64>,
    }

    let h = start().await;
    let task = NewTask {
        name: "Write release notes",
        assignees: vec![183],
        due_date: None,
    };
    let r = echoed(h.clickup.lists().create_task(12, &task).await, "POST", "list/12/task");
    assert_eq!(r.body, Some(json!({"name": "Write release notes", "assignees": [183]})));
}
