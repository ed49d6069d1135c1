//! Request descriptors handed from routes to the shared `Request`.
//!
//! # Design
//! A route never touches reqwest directly. It describes one call as plain
//! data (endpoint, query, body, header overrides) and `Request` turns that
//! into exactly one outbound HTTP request.

use std::fmt;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::multipart::Form;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::params::RequestParams;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Request payload.
#[derive(Debug)]
pub enum RequestBody {
    Json(Value),
    /// Sent without the default `content-type`; reqwest supplies the boundary.
    Multipart(Form),
}

/// Everything needed for one API call, relative to the configured prefix URL.
#[derive(Debug, Default)]
pub struct RequestDescriptor {
    pub endpoint: String,
    pub params: Option<RequestParams>,
    pub body: Option<RequestBody>,
    pub headers: Vec<(HeaderName, HeaderValue)>,
}

impl RequestDescriptor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn params(mut self, params: Option<&RequestParams>) -> Self {
        self.params = params.cloned();
        self
    }

    #[must_use]
    pub fn owned_params(mut self, params: RequestParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Serializes `data` as the JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self> {
        let value = serde_json::to_value(data).map_err(ApiError::SerializationError)?;
        self.body = Some(RequestBody::Json(value));
        Ok(self)
    }

    #[must_use]
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Adds a header that overrides the client default of the same name.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.push((name, value));
        self
    }
}
