//! Backend payload adapter
//!
//! Translates a (provider, model) pair into the exact wire shape the
//! backend's generation endpoint expects. The adapter is total: unknown
//! identifiers pass through verbatim and the backend stays the final
//! authority on whether they are usable.

use serde::{Deserialize, Serialize};

use super::ModelCatalog;

/// Model fields of a generation request, in backend wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendModelPayload {
    /// Model identifier the backend should run
    pub model_name: String,

    /// Backend provider identifier
    pub provider: String,

    /// Echo of the catalog entry for the backend's model wrapper
    pub model_config: ModelConfigPayload,
}

/// Catalog metadata forwarded alongside the model name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfigPayload {
    /// Frontend provider identifier as selected
    pub provider_id: String,

    /// Model identifier as selected
    pub model_id: String,

    /// Context window size in tokens, when the model is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u32>,

    /// Maximum output tokens, when the model is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    /// Catalog description, when the model is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ModelCatalog {
    /// Build the backend payload for a (provider, model) pair.
    ///
    /// This never fails. For a known pair the payload carries the full
    /// catalog metadata; for unknown identifiers it degrades gracefully:
    /// the identifiers are forwarded as-is and the metadata fields are
    /// simply absent.
    pub fn backend_payload(&self, provider_id: &str, model_id: &str) -> BackendModelPayload {
        let provider = self.provider(provider_id);
        let model = self.model(provider_id, model_id);

        BackendModelPayload {
            model_name: model_id.to_string(),
            provider: provider
                .map(|p| p.backend_provider.clone())
                .unwrap_or_else(|| provider_id.to_string()),
            model_config: ModelConfigPayload {
                provider_id: provider_id.to_string(),
                model_id: model_id.to_string(),
                context_window: model.and_then(|m| m.context_window),
                max_output_tokens: model.and_then(|m| m.max_output_tokens),
                description: model.map(|m| m.description.clone()),
            },
        }
    }
}
