//! README generation endpoint

use tracing::{debug, info, warn};

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    types::{GenerateRequest, GenerateResponse, GenerationResult},
};

/// README generation API resource.
#[derive(Debug, Clone)]
pub struct Readmes {
    client: Client,
}

impl Readmes {
    /// Create a new Readmes resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Generate a README for a repository.
    ///
    /// This call is infallible by design: the caller always gets a
    /// [`GenerationResult`] to render. Backend-reported failures, HTTP
    /// rejections (rate limit, validation), and transport errors all
    /// surface as [`GenerationResult::Failure`] with a displayable
    /// message; HTTP rejections keep their status code in the message.
    ///
    /// The request is sent exactly once. No retries, so a generation is
    /// never silently billed twice.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use gitrot_client::{Client, GenerateRequest};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new();
    /// let request = GenerateRequest::builder()
    ///     .repo_url("https://github.com/rust-lang/rust")
    ///     .provider_id("azure_openai")
    ///     .model_id("gpt-4o-mini")
    ///     .build()?;
    ///
    /// let result = client.readmes().generate(&request).await;
    /// match result.readme() {
    ///     Some(readme) => println!("{}", readme.content),
    ///     None => eprintln!("{}", result.error_message().unwrap_or("unknown failure")),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, request), fields(repo_url = %request.repo_url, provider = %request.provider_id, model = %request.model_id))]
    pub async fn generate(&self, request: &GenerateRequest) -> GenerationResult {
        debug!("Requesting README generation");
        let start = std::time::Instant::now();

        let outcome = self.try_generate(request).await;
        let elapsed = start.elapsed();

        match outcome {
            Ok(result) => {
                match &result {
                    GenerationResult::Success(readme) => {
                        info!(
                            elapsed_ms = elapsed.as_millis(),
                            content_bytes = readme.content.len(),
                            "README generated successfully"
                        );
                    }
                    GenerationResult::Failure { message } => {
                        warn!(
                            elapsed_ms = elapsed.as_millis(),
                            error = %message,
                            "Backend reported generation failure"
                        );
                    }
                }
                result
            }
            Err(e) => {
                warn!(elapsed_ms = elapsed.as_millis(), error = %e, "README generation failed");
                GenerationResult::failure(e.to_string())
            }
        }
    }

    /// Fallible inner path; [`generate`](Self::generate) folds errors
    /// into the result type.
    async fn try_generate(&self, request: &GenerateRequest) -> Result<GenerationResult> {
        #[derive(serde::Serialize)]
        struct WireRequest<'a> {
            repo_url: &'a str,
            generation_method: &'a str,
            #[serde(flatten)]
            model: crate::catalog::BackendModelPayload,
            #[serde(skip_serializing_if = "Option::is_none")]
            max_tokens: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            temperature: Option<f32>,
        }

        let model = self
            .client
            .catalog()
            .backend_payload(&request.provider_id, &request.model_id);

        let wire = WireRequest {
            repo_url: &request.repo_url,
            generation_method: &request.generation_method,
            model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let envelope: GenerateResponse = self
            .client
            .request(http::Method::POST, "/generate-readme")?
            .json(&wire)?
            .send()
            .await?
            .parse_result()?;

        Ok(GenerationResult::from(envelope))
    }
}

impl Resource for Readmes {
    fn client(&self) -> &Client {
        &self.client
    }
}
