//! README generation request and result types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Parameters for a README generation request.
///
/// `provider_id` and `model_id` name a catalog selection; they do not
/// need to be valid — the payload adapter forwards unknown identifiers
/// and the backend decides whether it can serve them.
///
/// # Example
///
/// ```rust
/// use gitrot_client::GenerateRequest;
/// use gitrot_client::catalog::data::{models, providers};
///
/// let request = GenerateRequest::builder()
///     .repo_url("https://github.com/rust-lang/rust")
///     .provider_id(providers::AZURE_OPENAI)
///     .model_id(models::GPT_4O_MINI)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.generation_method, "Standard README");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct GenerateRequest {
    /// GitHub repository URL to document
    pub repo_url: String,

    /// Generation recipe name understood by the backend
    #[builder(default = "crate::DEFAULT_GENERATION_METHOD.to_string()")]
    pub generation_method: String,

    /// Catalog provider identifier
    pub provider_id: String,

    /// Catalog model identifier
    pub model_id: String,

    /// Token budget override; the backend defaults to 1000 when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub max_tokens: Option<u32>,

    /// Sampling temperature override; the backend defaults to 0.3 when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub temperature: Option<f32>,
}

impl GenerateRequest {
    /// Create a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Wire-level response envelope of the generation endpoint.
///
/// The backend answers 200 for both outcomes and signals failure inside
/// the envelope via `success` and `error_message`. Non-2xx statuses mean
/// the request never reached generation (validation, rate limit, infra).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Whether generation succeeded
    pub success: bool,

    /// Generated README markdown (empty on failure)
    #[serde(default)]
    pub readme_content: String,

    /// Failure description (empty on success)
    #[serde(default)]
    pub error_message: String,

    /// ISO-8601 timestamp of the generation attempt
    #[serde(default)]
    pub generation_timestamp: String,

    /// Repository URL the backend worked on
    #[serde(default)]
    pub repo_url: String,

    /// Generation recipe that was applied
    #[serde(default)]
    pub generation_method: String,
}

/// A successfully generated README with its attempt metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReadme {
    /// Generated README markdown
    pub content: String,

    /// ISO-8601 timestamp of the generation
    pub generation_timestamp: String,

    /// Repository URL the README describes
    pub repo_url: String,

    /// Generation recipe that was applied
    pub generation_method: String,
}

/// Outcome of a generation attempt.
///
/// This is deliberately not a `Result`: callers render one of two states,
/// and every failure mode (envelope failure, HTTP rejection, transport
/// error) collapses into [`GenerationResult::Failure`] with a displayable
/// message.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    /// Generation succeeded; the README is ready to render.
    Success(GeneratedReadme),
    /// Generation failed; `message` is safe to show the user.
    Failure {
        /// Human-readable failure description
        message: String,
    },
}

impl GenerationResult {
    /// Construct a failure result.
    pub fn failure(message: impl Into<String>) -> Self {
        GenerationResult::Failure {
            message: message.into(),
        }
    }

    /// Whether the attempt produced a README.
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success(_))
    }

    /// The generated README, if the attempt succeeded.
    pub fn readme(&self) -> Option<&GeneratedReadme> {
        match self {
            GenerationResult::Success(readme) => Some(readme),
            GenerationResult::Failure { .. } => None,
        }
    }

    /// The failure message, if the attempt failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationResult::Success(_) => None,
            GenerationResult::Failure { message } => Some(message),
        }
    }
}

impl From<GenerateResponse> for GenerationResult {
    fn from(envelope: GenerateResponse) -> Self {
        if envelope.success {
            GenerationResult::Success(GeneratedReadme {
                content: envelope.readme_content,
                generation_timestamp: envelope.generation_timestamp,
                repo_url: envelope.repo_url,
                generation_method: envelope.generation_method,
            })
        } else {
            let message = if envelope.error_message.is_empty() {
                "Generation failed without an error message".to_string()
            } else {
                envelope.error_message
            };
            GenerationResult::Failure { message }
        }
    }
}
