//! User account endpoints

use tracing::debug;

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    types::{ProfileUpdate, UserAuthRequest, UserAuthResponse},
};

/// Auth and user profile API resource.
#[derive(Debug, Clone)]
pub struct Auth {
    client: Client,
}

impl Auth {
    /// Create a new Auth resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Register a user on first login, or log an existing user in.
    ///
    /// The backend keys accounts on `(provider, provider_id)`; the
    /// response's `is_new` flag tells the two cases apart.
    #[tracing::instrument(skip(self, user), fields(provider = %user.provider))]
    pub async fn register_or_login(&self, user: &UserAuthRequest) -> Result<UserAuthResponse> {
        debug!("Registering or logging in user");

        self.client
            .request(http::Method::POST, "/auth/register-or-login")?
            .json(user)?
            .send()
            .await?
            .parse_result()
    }

    /// Fetch a user's profile.
    #[tracing::instrument(skip(self))]
    pub async fn profile(&self, user_id: &str) -> Result<UserAuthResponse> {
        self.client
            .request(http::Method::POST, &format!("/users/{}", user_id))?
            .send()
            .await?
            .parse_result()
    }

    /// Update parts of a user's profile.
    ///
    /// Only fields set on `update` are changed.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<UserAuthResponse> {
        debug!("Updating user profile");

        self.client
            .request(http::Method::PUT, &format!("/users/{}", user_id))?
            .json(update)?
            .send()
            .await?
            .parse_result()
    }
}

impl Resource for Auth {
    fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_resource_creation() {
        let client = Client::new();
        let auth = client.auth();

        let _ = auth.client();
    }
}
