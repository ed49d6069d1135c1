//! Goal targets (`key_result/{id}`).

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::RequestDescriptor;

use super::segment;

route!(
    /// Goal targets. Key results are created through `Goals`.
    KeyResults,
    "key_result"
);

impl KeyResults {
    pub async fn update_key_result<T>(&self, key_result_id: &str, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let key_result_id = segment(key_result_id)?;
        let descriptor = RequestDescriptor::new(self.base.endpoint(key_result_id)).json(data)?;
        self.base.request().put(descriptor).await
    }

    pub async fn delete_key_result(&self, key_result_id: &str) -> Result<Value> {
        let key_result_id = segment(key_result_id)?;
        let descriptor = RequestDescriptor::new(self.base.endpoint(key_result_id));
        self.base.request().delete(descriptor).await
    }
}
