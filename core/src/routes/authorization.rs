//! OAuth token exchange and the authorized user, under the API root.

use serde_json::Value;

use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::params::RequestParams;

route!(
    /// OAuth token exchange and the authorized user's identity.
    Authorization,
    ""
);

impl Authorization {
    /// Exchanges an OAuth authorization `code` for an access token.
    pub async fn access_token(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
    ) -> Result<Value> {
        let params = RequestParams::new()
            .with("client_id", client_id)
            .with("client_secret", client_secret)
            .with("code", code);
        self.base
            .request()
            .post(RequestDescriptor::new("oauth/token").owned_params(params))
            .await
    }

    pub async fn get_authorized_user(&self) -> Result<Value> {
        self.base.request().get(RequestDescriptor::new("user")).await
    }

    /// Workspaces (teams) the token has access to.
    pub async fn get_authorized_teams(&self) -> Result<Value> {
        self.base.request().get(RequestDescriptor::new("team")).await
    }
}
