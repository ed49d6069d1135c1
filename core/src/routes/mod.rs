//! One route type per ClickUp resource family.
//!
//! Every route is a `BaseRoute`: the shared `Request` plus the path segment
//! its endpoints start with. Methods build the endpoint, attach parameters
//! and body, and issue exactly one call.

use std::fmt;
use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{ApiError, Result};
use crate::request::Request;

/// Everything but RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone)]
pub(crate) struct BaseRoute {
    request: Arc<Request>,
    route: &'static str,
}

impl BaseRoute {
    pub(crate) fn new(request: Arc<Request>, route: &'static str) -> Self {
        Self { request, route }
    }

    pub(crate) fn request(&self) -> &Request {
        &self.request
    }

    /// `{route}/{tail}`.
    pub(crate) fn endpoint(&self, tail: impl fmt::Display) -> String {
        format!("{}/{tail}", self.route)
    }
}

/// A caller-supplied identifier, percent-encoded as exactly one path segment.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment<'a>(&'a str);

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", utf8_percent_encode(self.0, PATH_SEGMENT))
    }
}

/// Escapes `id` for interpolation into an endpoint template.
///
/// Empty, `.` and `..` ids are rejected: URL resolution would collapse them
/// and the request would reach a different resource.
pub(crate) fn segment(id: &str) -> Result<Segment<'_>> {
    match id {
        "" | "." | ".." => Err(ApiError::InvalidPathSegment(id.to_owned())),
        _ => Ok(Segment(id)),
    }
}

/// Declares a route type bound to a path segment.
///
/// An optional `by_id(<id type>): [get, update, delete]` list generates
/// those operations on `{segment}/{id}`; everything else is written by hand.
macro_rules! route {
    (@op get, $id:ty) => {
        pub async fn get(&self, id: $id) -> $crate::error::Result<::serde_json::Value> {
            let id = id.to_string();
            let endpoint = self.base.endpoint($crate::routes::segment(&id)?);
            self.base
                .request()
                .get($crate::http::RequestDescriptor::new(endpoint))
                .await
        }
    };
    (@op update, $id:ty) => {
        pub async fn update<T>(&self, id: $id, data: &T) -> $crate::error::Result<::serde_json::Value>
        where
            T: ::serde::Serialize + ?Sized,
        {
            let id = id.to_string();
            let endpoint = self.base.endpoint($crate::routes::segment(&id)?);
            let descriptor = $crate::http::RequestDescriptor::new(endpoint).json(data)?;
            self.base.request().put(descriptor).await
        }
    };
    (@op delete, $id:ty) => {
        pub async fn delete(&self, id: $id) -> $crate::error::Result<::serde_json::Value> {
            let id = id.to_string();
            let endpoint = self.base.endpoint($crate::routes::segment(&id)?);
            self.base
                .request()
                .delete($crate::http::RequestDescriptor::new(endpoint))
                .await
        }
    };
    (
        $(#[$meta:meta])* $name:ident, $segment:literal,
        by_id($id:ty): [$($op:ident),+ $(,)?]
    ) => {
        route!($(#[$meta])* $name, $segment);

        impl $name {
            $(route!(@op $op, $id);)+
        }
    };
    ($(#[$meta:meta])* $name:ident, $segment:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            base: $crate::routes::BaseRoute,
        }

        impl $name {
            pub(crate) fn new(request: ::std::sync::Arc<$crate::request::Request>) -> Self {
                Self {
                    base: $crate::routes::BaseRoute::new(request, $segment),
                }
            }

            /// Path segment every endpoint of this route starts with.
            pub fn route(&self) -> &'static str {
                self.base.route
            }
        }
    };
}

mod authorization;
mod checklists;
mod comments;
mod folders;
mod goals;
mod key_results;
mod lists;
mod spaces;
mod tasks;
mod teams;
mod views;
mod webhooks;

pub use authorization::Authorization;
pub use checklists::Checklists;
pub use comments::Comments;
pub use folders::Folders;
pub use goals::Goals;
pub use key_results::KeyResults;
pub use lists::Lists;
pub use spaces::Spaces;
pub use tasks::{AttachmentFile, Tasks};
pub use teams::Teams;
pub use views::Views;
pub use webhooks::Webhooks;
