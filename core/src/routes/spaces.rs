//! Space endpoints (`space/...`): folders, folderless lists, tags and views.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::params::RequestParams;

use super::segment;

route!(Spaces, "space", by_id(u64): [get, update, delete]);

impl Spaces {
    pub async fn create_folder<T>(&self, space_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{space_id}/folder"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_folders(&self, space_id: u64, archived: bool) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{space_id}/folder"));
        let params = RequestParams::new().with("archived", archived.to_string());
        let descriptor = RequestDescriptor::new(endpoint).owned_params(params);
        self.base.request().get(descriptor).await
    }

    pub async fn create_folderless_list<T>(&self, space_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{space_id}/list"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_folderless_lists(&self, space_id: u64, archived: bool) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{space_id}/list"));
        let params = RequestParams::new().with("archived", archived.to_string());
        let descriptor = RequestDescriptor::new(endpoint).owned_params(params);
        self.base.request().get(descriptor).await
    }

    pub async fn get_tags(&self, space_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{space_id}/tag"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }

    pub async fn create_tag<T>(&self, space_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{space_id}/tag"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn update_tag(&self, space_id: u64, tag_name: &str) -> Result<Value> {
        let tag_name = segment(tag_name)?;
        let endpoint = self.base.endpoint(format_args!("{space_id}/tag/{tag_name}"));
        self.base.request().put(RequestDescriptor::new(endpoint)).await
    }

    pub async fn delete_tag(&self, space_id: u64, tag_name: &str) -> Result<Value> {
        let tag_name = segment(tag_name)?;
        let endpoint = self.base.endpoint(format_args!("{space_id}/tag/{tag_name}"));
        self.base.request().delete(RequestDescriptor::new(endpoint)).await
    }

    pub async fn create_view<T>(&self, space_id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = self.base.endpoint(format_args!("{space_id}/view"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn get_views(&self, space_id: u64) -> Result<Value> {
        let endpoint = self.base.endpoint(format_args!("{space_id}/view"));
        self.base.request().get(RequestDescriptor::new(endpoint)).await
    }
}
