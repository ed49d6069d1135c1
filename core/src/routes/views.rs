//! View endpoints (`view/...`).

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::params::RequestParams;

use super::segment;

route!(Views, "view", by_id(&str): [get, update, delete]);

impl Views {
    /// Posts a comment to a chat view.
    pub async fn add_comment<T>(&self, view_id: &str, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let view_id = segment(view_id)?;
        let endpoint = self.base.endpoint(format_args!("{view_id}/comment"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_comments(&self, view_id: &str) -> Result<Value> {
        let view_id = segment(view_id)?;
        let endpoint = self.base.endpoint(format_args!("{view_id}/comment"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    /// One page of the tasks visible in a view. Pages start at 0.
    pub async fn get_tasks(&self, view_id: &str, page: u32) -> Result<Value> {
        let view_id = segment(view_id)?;
        let endpoint = self.base.endpoint(format_args!("{view_id}/task"));
        let params = RequestParams::new().with("page", page);
        let descriptor = RequestDescriptor::new(endpoint).owned_params(params);
        self.base.request().get(descriptor).await
    }
}
