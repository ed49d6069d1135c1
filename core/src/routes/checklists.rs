//! Checklist and checklist item endpoints (`checklist/...`).

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::RequestDescriptor;

use super::segment;

route!(Checklists, "checklist", by_id(&str): [update, delete]);

impl Checklists {
    pub async fn create_checklist_item<T>(&self, checklist_id: &str, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let checklist_id = segment(checklist_id)?;
        let endpoint = self.base.endpoint(format_args!("{checklist_id}/checklist_item"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }

    pub async fn update_checklist_item<T>(
        &self,
        checklist_id: &str,
        checklist_item_id: &str,
        data: &T,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let checklist_id = segment(checklist_id)?;
        let checklist_item_id = segment(checklist_item_id)?;
        let endpoint = self
            .base
            .endpoint(format_args!("{checklist_id}/checklist_item/{checklist_item_id}"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().put(descriptor).await
    }

    pub async fn delete_checklist_item(
        &self,
        checklist_id: &str,
        checklist_item_id: &str,
    ) -> Result<Value> {
        let checklist_id = segment(checklist_id)?;
        let checklist_item_id = segment(checklist_item_id)?;
        let endpoint = self
            .base
            .endpoint(format_args!("{checklist_id}/checklist_item/{checklist_item_id}"));
        self.base.request().delete(RequestDescriptor::new(endpoint)).await
    }
}
