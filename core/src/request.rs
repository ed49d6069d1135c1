//! The shared request layer every route goes through.
//!
//! # Design
//! `Request` is built once per facade from the resolved options and is
//! read-only afterwards, so one instance can serve any number of concurrent
//! calls. Each call resolves its endpoint against the prefix URL, layers its
//! header overrides over the defaults, runs the before-request hooks and
//! sends exactly one request. Failures come back as-is; nothing is retried.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, RequestBody, RequestDescriptor};
use crate::options::{ClientOptions, RequestOptions, ResponseType};
use crate::params::build_search_params;

/// A configured HTTP client bound to one token and one prefix URL.
#[derive(Debug)]
pub struct Request {
    client: reqwest::Client,
    options: RequestOptions,
    headers: HeaderMap,
    token: SecretString,
}

impl Request {
    /// Builds a client with the ClickUp defaults merged under `options`.
    pub fn new(token: impl Into<String>, options: &ClientOptions) -> Result<Self> {
        let token = SecretString::from(token.into());
        let options = options.resolve(token.expose_secret())?;
        let headers = header_map(&options)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        debug!(
            prefix_url = %options.prefix_url,
            hooks = options.hooks.before_request.len(),
            "built ClickUp request client"
        );

        Ok(Self {
            client,
            options,
            headers,
            token,
        })
    }

    /// The effective configuration.
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Default headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw access token, for bodies that bypass the default headers.
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    pub async fn get(&self, descriptor: RequestDescriptor) -> Result<Value> {
        self.send(HttpMethod::Get, descriptor).await
    }

    pub async fn post(&self, descriptor: RequestDescriptor) -> Result<Value> {
        self.send(HttpMethod::Post, descriptor).await
    }

    pub async fn put(&self, descriptor: RequestDescriptor) -> Result<Value> {
        self.send(HttpMethod::Put, descriptor).await
    }

    pub async fn delete(&self, descriptor: RequestDescriptor) -> Result<Value> {
        self.send(HttpMethod::Delete, descriptor).await
    }

    #[instrument(
        name = "clickup_request",
        skip(self, descriptor),
        fields(http.method = %method, endpoint = %descriptor.endpoint)
    )]
    async fn send(&self, method: HttpMethod, descriptor: RequestDescriptor) -> Result<Value> {
        let request = self.build(method, descriptor)?;
        debug!(url = %request.url(), "sending request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            warn!(status = status.as_u16(), "request failed");
            let body = response.text().await?;
            return Err(ApiError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        parse_body(self.options.response_type, &bytes)
    }

    fn build(&self, method: HttpMethod, descriptor: RequestDescriptor) -> Result<reqwest::Request> {
        let mut url = self.options.prefix_url.join(&descriptor.endpoint)?;
        if let Some(params) = &descriptor.params {
            let search = build_search_params(params);
            if !search.is_empty() {
                url.set_query(Some(&search.to_string()));
            }
        }

        let mut headers = self.headers.clone();
        if matches!(descriptor.body, Some(RequestBody::Multipart(_))) {
            headers.remove(CONTENT_TYPE);
        }
        for (name, value) in descriptor.headers {
            headers.insert(name, value);
        }

        let mut builder = self
            .client
            .request(method.to_reqwest(), url)
            .headers(headers);
        builder = match descriptor.body {
            Some(RequestBody::Json(value)) => {
                let body = serde_json::to_vec(&value).map_err(ApiError::SerializationError)?;
                builder.body(body)
            }
            Some(RequestBody::Multipart(form)) => builder.multipart(form),
            None => builder,
        };

        let mut request = builder.build()?;
        for hook in &self.options.hooks.before_request {
            hook(&mut request);
        }
        Ok(request)
    }
}

fn header_map(options: &RequestOptions) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(options.headers.len());
    for (name, value) in &options.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::Config(format!("invalid header name `{name}`: {e}")))?;
        let mut header_value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::Config(format!("invalid value for header `{name}`: {e}")))?;
        if header_name == AUTHORIZATION {
            header_value.set_sensitive(true);
        }
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

fn parse_body(response_type: ResponseType, bytes: &[u8]) -> Result<Value> {
    match response_type {
        ResponseType::Json if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Value::Null),
        ResponseType::Json => serde_json::from_slice(bytes).map_err(ApiError::DeserializationError),
        ResponseType::Text => Ok(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}
