//! Service tier and bring-your-own-key credentials
//!
//! GitRot runs in two tiers: the hosted "Pro" service where the backend
//! supplies provider credentials, and the "Free" tier where users bring
//! their own keys. Keys never travel in generation requests; this module
//! only decides, client side, whether a configuration is complete enough
//! to submit.

use secrecy::{ExposeSecret, SecretString};

use crate::catalog::data::providers;

/// Which credential source a generation run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTier {
    /// "GitRot Pro": the hosted service supplies provider credentials.
    #[default]
    Hosted,
    /// "GitRot Free": the user supplies their own provider keys.
    OwnCredentials,
}

impl ServiceTier {
    /// Product name of the tier.
    pub fn label(self) -> &'static str {
        match self {
            ServiceTier::Hosted => "GitRot Pro",
            ServiceTier::OwnCredentials => "GitRot Free",
        }
    }
}

/// User-supplied provider credentials.
///
/// Secrets are held as [`SecretString`] so they stay out of debug output
/// and logs. All fields are optional; [`CredentialSet::is_complete_for`]
/// knows which subset each provider needs.
#[derive(Debug, Clone, Default)]
pub struct CredentialSet {
    /// Azure OpenAI API key
    pub azure_api_key: Option<SecretString>,

    /// Azure OpenAI resource endpoint URL
    pub azure_endpoint: Option<String>,

    /// Azure OpenAI API version (optional, the backend has a default)
    pub azure_api_version: Option<String>,

    /// Azure OpenAI deployment name
    pub azure_deployment: Option<String>,

    /// Google AI Studio API key
    pub google_api_key: Option<SecretString>,

    /// OpenAI API key (reserved; no catalog provider uses it yet)
    pub openai_api_key: Option<SecretString>,
}

impl CredentialSet {
    /// Load credentials from `GITROT_*` environment variables.
    ///
    /// Reads `GITROT_AZURE_API_KEY`, `GITROT_AZURE_ENDPOINT`,
    /// `GITROT_AZURE_API_VERSION`, `GITROT_AZURE_DEPLOYMENT`,
    /// `GITROT_GOOGLE_API_KEY`, and `GITROT_OPENAI_API_KEY`. A `.env`
    /// file in the working directory is loaded first, if present.
    #[cfg(feature = "env")]
    pub fn from_env() -> Self {
        use std::env;

        let _ = dotenvy::dotenv();

        let secret = |name: &str| {
            env::var(name)
                .ok()
                .map(|v| SecretString::new(v.into_boxed_str()))
        };

        Self {
            azure_api_key: secret("GITROT_AZURE_API_KEY"),
            azure_endpoint: env::var("GITROT_AZURE_ENDPOINT").ok(),
            azure_api_version: env::var("GITROT_AZURE_API_VERSION").ok(),
            azure_deployment: env::var("GITROT_AZURE_DEPLOYMENT").ok(),
            google_api_key: secret("GITROT_GOOGLE_API_KEY"),
            openai_api_key: secret("GITROT_OPENAI_API_KEY"),
        }
    }

    /// Whether this set satisfies the named provider's requirements.
    ///
    /// Azure OpenAI needs a key, an endpoint, and a deployment name (the
    /// API version is optional). Google needs an API key. Providers this
    /// module does not know about are never satisfiable with custom
    /// credentials. Empty strings count as unset.
    pub fn is_complete_for(&self, provider_id: &str) -> bool {
        match provider_id {
            providers::AZURE_OPENAI => {
                self.has_secret(&self.azure_api_key)
                    && self.has_value(&self.azure_endpoint)
                    && self.has_value(&self.azure_deployment)
            }
            providers::GOOGLE => self.has_secret(&self.google_api_key),
            _ => false,
        }
    }

    fn has_secret(&self, secret: &Option<SecretString>) -> bool {
        secret
            .as_ref()
            .is_some_and(|s| !s.expose_secret().is_empty())
    }

    fn has_value(&self, value: &Option<String>) -> bool {
        value.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// Whether a configuration is complete enough to submit a generation.
///
/// The hosted tier is always complete; the own-credentials tier requires
/// the credentials for the selected provider.
pub fn config_complete(tier: ServiceTier, credentials: &CredentialSet, provider_id: &str) -> bool {
    match tier {
        ServiceTier::Hosted => true,
        ServiceTier::OwnCredentials => credentials.is_complete_for(provider_id),
    }
}
