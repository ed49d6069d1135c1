//! Async client for the ClickUp v2 REST API.
//!
//! # Overview
//! `Clickup` is built from an access token and optional `ClientOptions`. It
//! wires one shared `Request` into a route type per resource family, and
//! every route method maps to exactly one HTTP call that resolves to the
//! response body as a `serde_json::Value`.
//!
//! ```no_run
//! # async fn run() -> clickup_core::Result<()> {
//! use clickup_core::{Clickup, ClientOptions, RequestParams};
//!
//! let clickup = Clickup::with_options("pk_123", ClientOptions::new().header("x-source", "sync"))?;
//! let params = RequestParams::new().with("statuses[]", vec!["in progress"]);
//! let tasks = clickup.lists().get_tasks(901, Some(&params)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Design
//! - Configuration is a JSON document deep-merged over the defaults, so
//!   callers override exactly the parts they name (`options`, `merge`).
//! - Query parameters use LHS bracket notation for arrays (`params`).
//! - Routes describe calls as `RequestDescriptor`s; only `Request` talks to
//!   reqwest. Errors are returned unchanged and nothing is retried.

pub mod client;
pub mod error;
pub mod http;
pub mod merge;
pub mod options;
pub mod params;
pub mod request;
pub mod routes;

pub use client::Clickup;
pub use error::{ApiError, Result};
pub use http::{HttpMethod, RequestBody, RequestDescriptor};
pub use merge::{deep_merge, is_object};
pub use options::{ClientOptions, Hooks, RequestOptions, ResponseType, API_BASE_URL};
pub use params::{build_search_params, RequestParams, SearchParams};
pub use request::Request;
pub use routes::{
    AttachmentFile, Authorization, Checklists, Comments, Folders, Goals, KeyResults, Lists, Spaces,
    Tasks, Teams, Views, Webhooks,
};
