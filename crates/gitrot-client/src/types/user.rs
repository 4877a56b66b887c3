//! User account types for the auth endpoints

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// OAuth profile data sent to `POST /auth/register-or-login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct UserAuthRequest {
    /// Account email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Avatar URL
    pub image: String,

    /// OAuth provider (e.g. "github", "google")
    pub provider: String,

    /// Stable user id within the OAuth provider
    pub provider_id: String,
}

impl UserAuthRequest {
    /// Create a builder for constructing a UserAuthRequest.
    pub fn builder() -> UserAuthRequestBuilder {
        UserAuthRequestBuilder::default()
    }
}

/// Backend view of a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAuthResponse {
    /// Backend-assigned user identifier
    pub user_id: String,

    /// Whether this login created the account
    #[serde(default)]
    pub is_new: bool,

    /// Account email address
    #[serde(default)]
    pub email: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Avatar URL
    #[serde(default)]
    pub image: String,
}

/// Partial profile update for `PUT /users/{id}`.
///
/// Only the set fields are sent; everything else keeps its stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// New email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// Update with a new display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update with a new avatar URL.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Update with a new email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_request_builder() {
        let request = UserAuthRequest::builder()
            .email("dev@example.com")
            .name("Dev")
            .image("https://avatars.example.com/dev.png")
            .provider("github")
            .provider_id("12345")
            .build()
            .unwrap();

        assert_eq!(request.provider, "github");
        assert_eq!(request.provider_id, "12345");
    }

    #[test]
    fn test_profile_update_serializes_only_set_fields() {
        let update = ProfileUpdate::default().name("New Name");

        let value = serde_json::to_value(&update).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(value["name"], "New Name");
    }

    #[test]
    fn test_auth_response_defaults_missing_fields() {
        let response: UserAuthResponse =
            serde_json::from_str(r#"{"user_id": "u-1"}"#).unwrap();

        assert_eq!(response.user_id, "u-1");
        assert!(!response.is_new);
        assert_eq!(response.email, "");
    }
}
