//! Goal endpoints (`goal/...`).

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::RequestDescriptor;

use super::segment;

route!(Goals, "goal", by_id(&str): [get, update, delete]);

impl Goals {
    pub async fn create_key_result<T>(&self, goal_id: &str, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let goal_id = segment(goal_id)?;
        let endpoint = self.base.endpoint(format_args!("{goal_id}/key_result"));
        let descriptor = RequestDescriptor::new(endpoint).json(data)?;
        self.base.request().post(descriptor).await
    }
}
