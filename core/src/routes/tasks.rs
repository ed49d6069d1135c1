//! Task endpoints (`task/...`), including attachments and legacy time tracking.

use std::path::PathBuf;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::http::RequestDescriptor;
use crate::params::RequestParams;

use super::segment;

route!(Tasks, "task");

/// A local file to upload as a task attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentFile {
    pub file_path: PathBuf,
    /// Name shown in ClickUp, including the extension, e.g. `notes.txt`.
    pub file_name: String,
}

impl AttachmentFile {
    pub fn new(file_path: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            file_name: file_name.into(),
        }
    }
}

impl Tasks {
    pub async fn get(&self, task_id: &str, options: Option<&RequestParams>) -> Result<Value> {
        let task_id = segment(task_id)?;
        let descriptor = RequestDescriptor::new(self.base.endpoint(task_id)).params(options);
        self.base.request().get(descriptor).await
    }

    pub async fn update<T>(
        &self,
        task_id: &str,
        data: &T,
        options: Option<&RequestParams>,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let task_id = segment(task_id)?;
        let descriptor = RequestDescriptor::new(self.base.endpoint(task_id))
            .params(options)
            .json(data)?;
        self.base.request().put(descriptor).await
    }

    pub async fn delete(&self, task_id: &str, options: Option<&RequestParams>) -> Result<Value> {
        let task_id = segment(task_id)?;
        let descriptor = RequestDescriptor::new(self.base.endpoint(task_id)).params(options);
        self.base.request().delete(descriptor).await
    }

    /// Uploads a file as a multipart body.
    ///
    /// The file is streamed from disk. Multipart requests cannot carry the
    /// default JSON `content-type`, so the token is set on the request itself.
    pub async fn add_attachment(
        &self,
        task_id: &str,
        file: &AttachmentFile,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let task_id = segment(task_id)?;
        let handle = tokio::fs::File::open(&file.file_path).await?;
        let mut attachment = Part::stream(handle);
        if let Some(name) = file.file_path.file_name() {
            attachment = attachment.file_name(name.to_string_lossy().into_owned());
        }
        let form = Form::new()
            .text("filename", file.file_name.clone())
            .part("attachment", attachment);

        let mut token = HeaderValue::from_str(self.base.request().token())
            .map_err(|e| ApiError::Config(format!("token is not a valid header value: {e}")))?;
        token.set_sensitive(true);

        debug!(task_id = %task_id, path = %file.file_path.display(), "uploading attachment");
        let endpoint = self.base.endpoint(format_args!("{task_id}/attachment"));
        let descriptor = RequestDescriptor::new(endpoint)
            .params(options)
            .multipart(form)
            .header(AUTHORIZATION, token);
        self.base.request().post(descriptor).await
    }

    pub async fn add_comment<T>(
        &self,
        task_id: &str,
        data: &T,
        options: Option<&RequestParams>,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/comment"));
        let descriptor = RequestDescriptor::new(endpoint).params(options).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_comments(
        &self,
        task_id: &str,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/comment"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().get(descriptor).await
    }

    pub async fn create_checklist<T>(
        &self,
        task_id: &str,
        data: &T,
        options: Option<&RequestParams>,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/checklist"));
        let descriptor = RequestDescriptor::new(endpoint).params(options).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn add_custom_field_value<T>(
        &self,
        task_id: &str,
        field_id: &str,
        data: &T,
        options: Option<&RequestParams>,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let task_id = segment(task_id)?;
        let field_id = segment(field_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/field/{field_id}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn delete_custom_field_value(
        &self,
        task_id: &str,
        field_id: &str,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let task_id = segment(task_id)?;
        let field_id = segment(field_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/field/{field_id}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().delete(descriptor).await
    }

    /// Marks this task as waiting on, or blocking, another task.
    pub async fn add_dependency<T>(
        &self,
        task_id: &str,
        data: &T,
        options: Option<&RequestParams>,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/dependency"));
        let descriptor = RequestDescriptor::new(endpoint).params(options).json(data)?;
        self.base.request().post(descriptor).await
    }

    /// The dependency to remove is named by `depends_on` or `dependency_of`
    /// in `options`.
    pub async fn delete_dependency(
        &self,
        task_id: &str,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/dependency"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().delete(descriptor).await
    }

    pub async fn add_task_link(
        &self,
        task_id: &str,
        links_to: &str,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let task_id = segment(task_id)?;
        let links_to = segment(links_to)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/link/{links_to}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().post(descriptor).await
    }

    pub async fn delete_task_link(
        &self,
        task_id: &str,
        links_to: &str,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let task_id = segment(task_id)?;
        let links_to = segment(links_to)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/link/{links_to}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().delete(descriptor).await
    }

    pub async fn add_guest<T>(
        &self,
        task_id: &str,
        guest_id: u64,
        data: &T,
        options: Option<&RequestParams>,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/guest/{guest_id}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn remove_guest(
        &self,
        task_id: &str,
        guest_id: u64,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/guest/{guest_id}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().delete(descriptor).await
    }

    pub async fn get_members(&self, task_id: &str) -> Result<Value> {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/member"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    pub async fn add_tag(
        &self,
        task_id: &str,
        tag_name: &str,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let task_id = segment(task_id)?;
        let tag_name = segment(tag_name)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/tag/{tag_name}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().post(descriptor).await
    }

    pub async fn remove_tag(
        &self,
        task_id: &str,
        tag_name: &str,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let task_id = segment(task_id)?;
        let tag_name = segment(tag_name)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/tag/{tag_name}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().delete(descriptor).await
    }

    // Legacy time tracking endpoints. Team time entries live on `Teams`.

    pub async fn track_time<T>(
        &self,
        task_id: &str,
        data: &T,
        options: Option<&RequestParams>,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/time"));
        let descriptor = RequestDescriptor::new(endpoint).params(options).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_tracked_time(
        &self,
        task_id: &str,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/time"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().get(descriptor).await
    }

    pub async fn edit_tracked_time<T>(
        &self,
        task_id: &str,
        interval_id: &str,
        data: &T,
        options: Option<&RequestParams>,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let task_id = segment(task_id)?;
        let interval_id = segment(interval_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/time/{interval_id}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options).json(data)?;
        self.base.request().put(descriptor).await
    }

    pub async fn delete_tracked_time(
        &self,
        task_id: &str,
        interval_id: &str,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let task_id = segment(task_id)?;
        let interval_id = segment(interval_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/time/{interval_id}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().delete(descriptor).await
    }

    pub async fn get_time_in_status(
        &self,
        task_id: &str,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let task_id = segment(task_id)?;
        let endpoint = self.base.endpoint(format_args!("{task_id}/time_in_status"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().get(descriptor).await
    }

    /// Time in status for several tasks, named with `task_ids[]` in `options`.
    pub async fn get_bulk_time_in_status(&self, options: Option<&RequestParams>) -> Result<Value> {
        let endpoint = self.base.endpoint("bulk_time_in_status/task_ids");
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().get(descriptor).await
    }
}
