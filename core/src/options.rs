//! Client configuration: defaults, caller overrides and their merge.
//!
//! # Design
//! Options are a JSON document so callers can override any part of it the
//! same way the defaults are written:
//!
//! ```json
//! {
//!   "headers": { "authorization": "<token>", "content-type": "application/json" },
//!   "responseType": "json",
//!   "prefixUrl": "https://api.clickup.com/api/v2"
//! }
//! ```
//!
//! Overrides are deep-merged over the defaults, so adding a header keeps
//! `content-type`. Header names are lower-cased before merging. Hooks are
//! closures and cannot live in the document; they are appended to the
//! effective hook list, which the array-replacing merge would otherwise lose.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Map, Value};
use url::Url;

use crate::error::{ApiError, Result};
use crate::merge::{deep_merge, merge_into};

/// Root of the ClickUp v2 API.
pub const API_BASE_URL: &str = "https://api.clickup.com/api/v2";

/// Hook run on every outgoing request just before it is sent.
pub type BeforeRequestHook = Arc<dyn Fn(&mut reqwest::Request) + Send + Sync>;

#[derive(Clone, Default)]
pub struct Hooks {
    pub before_request: Vec<BeforeRequestHook>,
}

impl Hooks {
    /// Appends `other`'s hooks after ours.
    pub fn extend(&mut self, other: &Hooks) {
        self.before_request
            .extend(other.before_request.iter().cloned());
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before_request", &self.before_request.len())
            .finish()
    }
}

/// How response bodies are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Parse as JSON; an empty body becomes `null`.
    #[default]
    Json,
    /// Return the body as a JSON string.
    Text,
}

impl ResponseType {
    fn as_str(self) -> &'static str {
        match self {
            ResponseType::Json => "json",
            ResponseType::Text => "text",
        }
    }
}

/// Caller overrides applied on top of the defaults.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    overrides: Value,
    hooks: Hooks,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            overrides: Value::Object(Map::new()),
            hooks: Hooks::default(),
        }
    }
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the client at another API root, e.g. a local mock server.
    #[must_use]
    pub fn prefix_url(self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.merge_config(json!({ "prefixUrl": url }))
    }

    #[must_use]
    pub fn header(self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        let mut headers = Map::new();
        headers.insert(name.as_ref().to_owned(), Value::String(value.into()));
        self.merge_config(json!({ "headers": headers }))
    }

    #[must_use]
    pub fn response_type(self, response_type: ResponseType) -> Self {
        self.merge_config(json!({ "responseType": response_type.as_str() }))
    }

    #[must_use]
    pub fn timeout(self, timeout: Duration) -> Self {
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.merge_config(json!({ "timeout": millis }))
    }

    /// Registers a hook run on each request before it is sent.
    #[must_use]
    pub fn before_request<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut reqwest::Request) + Send + Sync + 'static,
    {
        self.hooks.before_request.push(Arc::new(hook));
        self
    }

    /// Deep-merges a raw override document into these options.
    ///
    /// ```
    /// use clickup_core::ClientOptions;
    /// use serde_json::json;
    ///
    /// let options = ClientOptions::new()
    ///     .merge_config(json!({"headers": {"X-Request-Source": "sync"}, "timeout": 5000}));
    /// let resolved = options.resolve("pk_123").unwrap();
    /// assert_eq!(resolved.headers["x-request-source"], "sync");
    /// assert_eq!(resolved.headers["content-type"], "application/json");
    /// ```
    #[must_use]
    pub fn merge_config(mut self, config: Value) -> Self {
        merge_into(&mut self.overrides, &normalize_headers(config));
        self
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// Produces the effective options for `token`: overrides merged over
    /// the defaults, caller hooks appended to the default (empty) hook list.
    pub fn resolve(&self, token: &str) -> Result<RequestOptions> {
        let merged = deep_merge(default_config(token), [&self.overrides]);
        let raw: RawOptions =
            serde_json::from_value(merged).map_err(|e| ApiError::Config(e.to_string()))?;

        let mut hooks = Hooks::default();
        hooks.extend(&self.hooks);

        Ok(RequestOptions {
            prefix_url: with_trailing_slash(Url::parse(&raw.prefix_url)?),
            headers: raw.headers,
            response_type: raw.response_type,
            timeout: raw.timeout.map(Duration::from_millis),
            hooks,
        })
    }
}

/// The effective configuration of a built client.
#[derive(Clone)]
pub struct RequestOptions {
    /// Always ends in `/` so endpoints resolve beneath it.
    pub prefix_url: Url,
    /// Lower-cased header names.
    pub headers: BTreeMap<String, String>,
    pub response_type: ResponseType,
    pub timeout: Option<Duration>,
    pub hooks: Hooks,
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .headers
            .iter()
            .map(|(name, value)| {
                let shown = if name == "authorization" { "[REDACTED]" } else { value.as_str() };
                (name.as_str(), shown)
            })
            .collect();
        f.debug_struct("RequestOptions")
            .field("prefix_url", &self.prefix_url.as_str())
            .field("headers", &headers)
            .field("response_type", &self.response_type)
            .field("timeout", &self.timeout)
            .field("hooks", &self.hooks)
            .finish()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOptions {
    prefix_url: String,
    headers: BTreeMap<String, String>,
    response_type: ResponseType,
    #[serde(default)]
    timeout: Option<u64>,
}

fn default_config(token: &str) -> Value {
    json!({
        "headers": {
            "authorization": token,
            "content-type": "application/json",
        },
        "responseType": ResponseType::Json.as_str(),
        "prefixUrl": API_BASE_URL,
    })
}

fn normalize_headers(mut config: Value) -> Value {
    if let Some(Value::Object(headers)) = config.get_mut("headers") {
        let entries = std::mem::take(headers);
        for (name, value) in entries {
            headers.insert(name.to_ascii_lowercase(), value);
        }
    }
    config
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
