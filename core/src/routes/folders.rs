//! Folder endpoints (`folder/...`): lists, guests and views inside a folder.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::params::RequestParams;

route!(Folders, "folder", by_id(u64): [get, update, delete]);

impl Folders {
    pub async fn add_guest<T>(&self, folder_id: u64, guest_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{folder_id}/guest/{guest_id}"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn remove_guest(&self, folder_id: u64, guest_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{folder_id}/guest/{guest_id}"));
        self.base.request().delete(RequestDescriptor::new(endpoint)).await
    }

    pub async fn create_list<T>(&self, folder_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{folder_id}/list"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    /// Lists in a folder; archived lists only when `archived` is set.
    pub async fn get_lists(&self, folder_id: u64, archived: bool) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{folder_id}/list"));
        let params = RequestParams::new().with("archived", archived.to_string());
        let descriptor = RequestDescriptor::new(endpoint).owned_params(params);
        self.base.request().get(descriptor).await
    }

    pub async fn create_view<T>(&self, folder_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{folder_id}/view"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_views(&self, folder_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{folder_id}/view"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }
}
