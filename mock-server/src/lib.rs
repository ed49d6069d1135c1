//! A recording stand-in for the ClickUp API.
//!
//! Every request, on any path and method, is captured as a `RecordedRequest`,
//! appended to a shared log and echoed back as the JSON response body. Two
//! headers steer the reply:
//!
//! - a missing `authorization` header yields ClickUp's 401 error shape;
//! - `x-mock-status: <code>` forces the status. Error codes come back as
//!   `{"err": ..., "ECODE": ...}`, success codes with an empty body.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    body::{to_bytes, Bytes},
    extract::{
        multipart::{Multipart, MultipartError},
        FromRequest, Query, Request, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

/// Header that forces the response status.
pub const STATUS_HEADER: &str = "x-mock-status";

/// One request as the server saw it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub id: Uuid,
    pub method: String,
    pub path: String,
    /// Decoded query pairs in wire order; repeated keys repeat.
    pub query: Vec<(String, String)>,
    /// Lower-cased names; repeated headers are joined with `", "`.
    pub headers: BTreeMap<String, String>,
    /// Parsed JSON, or the raw text when the body is not JSON.
    pub body: Option<Value>,
    pub parts: Vec<RecordedPart>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn part(&self, name: &str) -> Option<&RecordedPart> {
        self.parts.iter().find(|part| part.name == name)
    }
}

/// A field of a multipart body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content: String,
}

pub type Log = Arc<RwLock<Vec<RecordedRequest>>>;

pub fn app() -> Router {
    app_with_log(Log::default())
}

/// The mock app recording into `log`, so tests can inspect it afterwards.
pub fn app_with_log(log: Log) -> Router {
    Router::new().fallback(record).with_state(log)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_log(listener: TcpListener, log: Log) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_log(log)).await
}

async fn record(State(log): State<Log>, request: Request) -> Response {
    let recorded = match capture(request).await {
        Ok(recorded) => recorded,
        Err(rejection) => return rejection,
    };
    info!(method = %recorded.method, path = %recorded.path, "recorded request");
    log.write().await.push(recorded.clone());
    respond(recorded)
}

async fn capture(request: Request) -> Result<RecordedRequest, Response> {
    let method = request.method().to_string();
    let path = request.uri().path().to_owned();
    let Query(query) = Query::<Vec<(String, String)>>::try_from_uri(request.uri())
        .map_err(IntoResponse::into_response)?;
    let headers = header_strings(request.headers());
    let is_multipart = headers
        .get(header::CONTENT_TYPE.as_str())
        .is_some_and(|value| value.starts_with("multipart/form-data"));

    let (body, parts) = if is_multipart {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(IntoResponse::into_response)?;
        let parts = read_parts(multipart)
            .await
            .map_err(IntoResponse::into_response)?;
        (None, parts)
    } else {
        let bytes = to_bytes(request.into_body(), usize::MAX)
            .await
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()).into_response())?;
        (parse_body(&bytes), Vec::new())
    };

    Ok(RecordedRequest {
        id: Uuid::new_v4(),
        method,
        path,
        query,
        headers,
        body,
        parts,
    })
}

fn respond(recorded: RecordedRequest) -> Response {
    if recorded.header("authorization").is_none() {
        let body = json!({"err": "Authorization header required", "ECODE": "OAUTH_017"});
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    }

    let forced = recorded
        .header(STATUS_HEADER)
        .and_then(|value| value.parse::<u16>().ok())
        .and_then(|code| StatusCode::from_u16(code).ok());
    match forced {
        Some(status) if status.is_success() => status.into_response(),
        Some(status) => {
            let body = json!({
                "err": status.canonical_reason().unwrap_or("Mock error"),
                "ECODE": format!("MOCK_{}", status.as_u16()),
            });
            (status, Json(body)).into_response()
        }
        None => Json(recorded).into_response(),
    }
}

fn header_strings(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut out: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        out.entry(name.as_str().to_owned())
            .and_modify(|joined| {
                joined.push_str(", ");
                joined.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    out
}

async fn read_parts(mut multipart: Multipart) -> Result<Vec<RecordedPart>, MultipartError> {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().map(str::to_owned);
        let bytes = field.bytes().await?;
        parts.push(RecordedPart {
            name,
            file_name,
            content: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }
    Ok(parts)
}

fn parse_body(bytes: &Bytes) -> Option<Value> {
    if bytes.is_empty() {
        return None;
    }
    Some(
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned())),
    )
}
