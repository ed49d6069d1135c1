//! Workspace endpoints (`team/...`), including time tracking 2.0.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::params::RequestParams;

route!(
    /// Workspaces. ClickUp's v2 API still calls them teams.
    Teams,
    "team"
);

impl Teams {
    /// Workspaces the token can see.
    pub async fn get(&self) -> Result<Value> {
        let descriptor = RequestDescriptor::new(self.route());
        self.base.request().get(descriptor).await
    }

    pub async fn create_goal<T>(&self, team_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/goal"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_goals(&self, team_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/goal"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    pub async fn invite_guest<T>(&self, team_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/guest"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_guest(&self, team_id: u64, guest_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/guest/{guest_id}"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    pub async fn edit_guest<T>(&self, team_id: u64, guest_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/guest/{guest_id}"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().put(descriptor).await
    }

    pub async fn remove_guest(&self, team_id: u64, guest_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/guest/{guest_id}"));
        self.base.request().delete(RequestDescriptor::new(endpoint)).await
    }

    /// Tasks, lists and folders shared with the authenticated user.
    pub async fn shared_hierarchy(&self, team_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/shared"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    pub async fn create_space<T>(&self, team_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/space"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_spaces(&self, team_id: u64, archived: bool) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/space"));
        let params = RequestParams::new().with("archived", archived.to_string());
        let descriptor = RequestDescriptor::new(endpoint).owned_params(params);
        self.base.request().get(descriptor).await
    }

    /// Tasks across the whole workspace, narrowed by `options`
    /// (`statuses[]`, `assignees[]`, `page`, ...).
    pub async fn get_filtered_tasks(
        &self,
        team_id: u64,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/task"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().get(descriptor).await
    }

    pub async fn get_task_templates(&self, team_id: u64, page: u32) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/taskTemplate"));
        let params = RequestParams::new().with("page", page.to_string());
        let descriptor = RequestDescriptor::new(endpoint).owned_params(params);
        self.base.request().get(descriptor).await
    }

    pub async fn get_user(&self, team_id: u64, user_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/user/{user_id}"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    pub async fn invite_user<T>(&self, team_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/user"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn edit_user<T>(&self, team_id: u64, user_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/user/{user_id}"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().put(descriptor).await
    }

    pub async fn remove_user(&self, team_id: u64, user_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/user/{user_id}"));
        self.base.request().delete(RequestDescriptor::new(endpoint)).await
    }

    pub async fn create_view<T>(&self, team_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/view"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_views(&self, team_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/view"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    pub async fn create_webhook<T>(&self, team_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/webhook"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_webhooks(&self, team_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/webhook"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    // Time tracking 2.0.

    /// Time entries within a date range (`start_date`, `end_date` in ms).
    pub async fn get_time_entries(
        &self,
        team_id: u64,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/time_entries"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().get(descriptor).await
    }

    pub async fn create_time_entry<T>(
        &self,
        team_id: u64,
        data: &T,
        options: Option<&RequestParams>,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/time_entries"));
        let descriptor = RequestDescriptor::new(endpoint).params(options).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_single_time_entry(
        &self,
        team_id: u64,
        timer_id: u64,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/time_entries/{timer_id}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().get(descriptor).await
    }

    pub async fn update_time_entry<T>(
        &self,
        team_id: u64,
        timer_id: u64,
        data: &T,
        options: Option<&RequestParams>,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/time_entries/{timer_id}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options).json(data)?;
        self.base.request().put(descriptor).await
    }

    pub async fn delete_time_entry(&self, team_id: u64, timer_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/time_entries/{timer_id}"));
        self.base.request().delete(RequestDescriptor::new(endpoint)).await
    }

    pub async fn get_running_time_entry(
        &self,
        team_id: u64,
        options: Option<&RequestParams>,
    ) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/time_entries/current"));
        let descriptor = RequestDescriptor::new(endpoint).params(options);
        self.base.request().get(descriptor).await
    }

    pub async fn get_all_tags_from_time_entries(&self, team_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/time_entries/tags"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    pub async fn add_tags_from_time_entries<T>(&self, team_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/time_entries/tags"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    /// Renames a tag, or changes its colors, on every entry that carries it.
    pub async fn change_tags_from_time_entries<T>(&self, team_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/time_entries/tags"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().put(descriptor).await
    }

    /// The entries and tags to detach travel in the DELETE body.
    pub async fn remove_tags_from_time_entries<T>(&self, team_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{team_id}/time_entries/tags"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().delete(descriptor).await
    }

    pub async fn start_time_entry<T>(
        &self,
        team_id: u64,
        timer_id: u64,
        data: &T,
        options: Option<&RequestParams>,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self
            .base
            .endpoint(format_args!("{team_id}/time_entries/start/{timer_id}"));
        let descriptor = RequestDescriptor::new(endpoint).params(options).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn stop_time_entry(&self, team_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{team_id}/time_entries/stop"));
        self.base.request().post(RequestDescriptor::new(endpoint)).await
    }
}
