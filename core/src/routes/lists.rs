//! List endpoints (`list/...`): tasks, members, comments and views of a list.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::params::{is_truthy, RequestParams};

use super::segment;

route!(Lists, "list", by_id(u64): [get, update, delete]);

impl Lists {
    pub async fn add_comment<T>(&self, list_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{list_id}/comment"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_comments(&self, list_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{list_id}/comment"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    /// Custom fields available on tasks in this list.
    pub async fn get_accessible_custom_fields(&self, list_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{list_id}/field"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    pub async fn add_guest<T>(&self, list_id: u64, guest_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{list_id}/guest/{guest_id}"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn remove_guest(&self, list_id: u64, guest_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{list_id}/guest/{guest_id}"));
        self.base.request().delete(RequestDescriptor::new(endpoint)).await
    }

    pub async fn get_members(&self, list_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{list_id}/member"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    pub async fn create_task<T>(&self, list_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{list_id}/task"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    /// Tasks in a list. `archived` is sent as `"false"` unless the caller
    /// passes a truthy value for it.
    pub async fn get_tasks(&self, list_id: u64, options: Option<&RequestParams>) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{list_id}/task"));
        let mut params = options.cloned().unwrap_or_default();
        if !params.get("archived").is_some_and(is_truthy) {
            params.insert("archived", "false");
        }
        let descriptor = RequestDescriptor::new(endpoint).owned_params(params);
        self.base.request().get(descriptor).await
    }

    pub async fn create_task_from_template<T>(
        &self,
        list_id: u64,
        template_id: &str,
        data: &T,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let template_id = segment(template_id)?;
        let endpoint = self
            .base
            .endpoint(format_args!("{list_id}/taskTemplate/{template_id}"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn create_view<T>(&self, list_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{list_id}/view"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_views(&self, list_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{list_id}/view"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    /// Adds an existing task to an additional list.
    pub async fn add_task_to_list(&self, list_id: u64, task_id: &str) -> Result<Value> {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{list_id}/task/{task_id}"));
        self.base.request().post(RequestDescriptor::new(endpoint)).await
    }

    pub async fn remove_task_from_list(&self, list_id: u64, task_id: &str) -> Result<Value> {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{list_id}/task/{task_id}"));
        self.base.request().delete(RequestDescriptor::new(endpoint)).await
    }

    /// Same endpoint as [`Lists::get_members`].
    pub async fn get_list_members(&self, list_id: u64) -> Result<Value> {
        self.get_members(list_id).await
    }
}
