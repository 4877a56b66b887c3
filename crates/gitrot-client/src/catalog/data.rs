//! Built-in catalog data
//!
//! Provider and model entries mirror the backend's `ModelProvider` and
//! `ModelType` enums. When the backend gains a model, it gets a row here.

use super::{CostTier, ModelInfo, Provider, SpeedTier};

/// Provider identifiers known to the backend.
pub mod providers {
    /// OpenAI models hosted on Azure.
    pub const AZURE_OPENAI: &str = "azure_openai";

    /// Google Gemini models.
    pub const GOOGLE: &str = "google";
}

/// Model identifiers known to the backend.
pub mod models {
    /// GPT-4o Mini: the recommended default for most documentation runs.
    pub const GPT_4O_MINI: &str = "gpt-4o-mini";

    /// GPT-4o: multimodal mid-tier model.
    pub const GPT_4O: &str = "gpt-4o";

    /// GPT-4 Turbo: premium tier with a 128K context window.
    pub const GPT_4_TURBO: &str = "gpt-4-turbo";

    /// GPT-3.5 Turbo.
    pub const GPT_35_TURBO: &str = "gpt-35-turbo";

    /// GPT-3.5 Turbo Instruct.
    pub const GPT_35_TURBO_INSTRUCT: &str = "gpt-35-turbo-instruct";

    /// GPT-3.5 Turbo with a 16K context window.
    pub const GPT_35_TURBO_16K: &str = "gpt-35-turbo-16k";

    /// GPT-4.
    pub const GPT_4: &str = "gpt-4";

    /// GPT-4 with a 32K context window.
    pub const GPT_4_32K: &str = "gpt-4-32k";

    /// Gemini 1.5 Flash: fastest model in the catalog.
    pub const GEMINI_1_5_FLASH: &str = "gemini-1.5-flash";

    /// Gemini 1.5 Pro: 2M token context window.
    pub const GEMINI_1_5_PRO: &str = "gemini-1.5-pro";
}

/// The providers shipped with this crate, in display order.
pub fn builtin_providers() -> Vec<Provider> {
    vec![
        Provider {
            id: providers::AZURE_OPENAI.into(),
            label: "Azure OpenAI".into(),
            tagline: "Enterprise-grade OpenAI models with Azure reliability".into(),
            icon: Some("🤖".into()),
            backend_provider: providers::AZURE_OPENAI.into(),
            models: vec![
                ModelInfo {
                    id: models::GPT_4O_MINI.into(),
                    label: "GPT-4o Mini".into(),
                    description: "Fast, cost-effective model perfect for most tasks".into(),
                    cost: CostTier::Low,
                    speed: SpeedTier::Fast,
                    badge: Some("Most Popular".into()),
                    recommended: true,
                    context_window: Some(128_000),
                    max_output_tokens: Some(16_384),
                },
                ModelInfo {
                    id: models::GPT_4O.into(),
                    label: "GPT-4o".into(),
                    description: "Enhanced reasoning with multimodal capabilities".into(),
                    cost: CostTier::Medium,
                    speed: SpeedTier::Medium,
                    badge: Some("Balanced".into()),
                    recommended: false,
                    context_window: Some(128_000),
                    max_output_tokens: Some(4_096),
                },
                ModelInfo {
                    id: models::GPT_4_TURBO.into(),
                    label: "GPT-4 Turbo".into(),
                    description: "High-quality responses with large context window".into(),
                    cost: CostTier::High,
                    speed: SpeedTier::Slow,
                    badge: Some("Premium".into()),
                    recommended: false,
                    context_window: Some(128_000),
                    max_output_tokens: Some(4_096),
                },
                ModelInfo {
                    id: models::GPT_35_TURBO.into(),
                    label: "GPT-3.5 Turbo".into(),
                    description: "Reliable and efficient for standard documentation".into(),
                    cost: CostTier::Low,
                    speed: SpeedTier::Fast,
                    badge: None,
                    recommended: false,
                    context_window: Some(4_096),
                    max_output_tokens: Some(2_048),
                },
                ModelInfo {
                    id: models::GPT_35_TURBO_INSTRUCT.into(),
                    label: "GPT-3.5 Turbo Instruct".into(),
                    description: "Instruction-following variant of GPT-3.5".into(),
                    cost: CostTier::Low,
                    speed: SpeedTier::Fast,
                    badge: None,
                    recommended: false,
                    context_window: Some(4_096),
                    max_output_tokens: Some(2_048),
                },
                ModelInfo {
                    id: models::GPT_35_TURBO_16K.into(),
                    label: "GPT-3.5 Turbo 16K".into(),
                    description: "Extended context version of GPT-3.5".into(),
                    cost: CostTier::Low,
                    speed: SpeedTier::Fast,
                    badge: Some("Large Context".into()),
                    recommended: false,
                    context_window: Some(16_384),
                    max_output_tokens: Some(8_192),
                },
                ModelInfo {
                    id: models::GPT_4.into(),
                    label: "GPT-4".into(),
                    description: "Advanced reasoning and complex problem-solving".into(),
                    cost: CostTier::High,
                    speed: SpeedTier::Slow,
                    badge: None,
                    recommended: false,
                    context_window: Some(8_192),
                    max_output_tokens: Some(4_096),
                },
                ModelInfo {
                    id: models::GPT_4_32K.into(),
                    label: "GPT-4 32K".into(),
                    description: "GPT-4 with extended 32K context window".into(),
                    cost: CostTier::High,
                    speed: SpeedTier::Slow,
                    badge: Some("Large Context".into()),
                    recommended: false,
                    context_window: Some(32_768),
                    max_output_tokens: Some(16_384),
                },
            ],
            default_model: models::GPT_4O.into(),
        },
        Provider {
            id: providers::GOOGLE.into(),
            label: "Google Gemini".into(),
            tagline: "Ultra-fast responses with massive context windows".into(),
            icon: Some("✨".into()),
            backend_provider: providers::GOOGLE.into(),
            models: vec![
                ModelInfo {
                    id: models::GEMINI_1_5_FLASH.into(),
                    label: "Gemini 1.5 Flash".into(),
                    description: "Lightning-fast generation with 1M token context".into(),
                    cost: CostTier::Low,
                    speed: SpeedTier::Fast,
                    badge: Some("Fastest".into()),
                    recommended: true,
                    context_window: Some(1_000_000),
                    max_output_tokens: Some(8_192),
                },
                ModelInfo {
                    id: models::GEMINI_1_5_PRO.into(),
                    label: "Gemini 1.5 Pro".into(),
                    description: "Superior reasoning with 2M token context".into(),
                    cost: CostTier::Medium,
                    speed: SpeedTier::Slow,
                    badge: Some("Ultra Context".into()),
                    recommended: false,
                    context_window: Some(2_000_000),
                    max_output_tokens: Some(8_192),
                },
            ],
            default_model: models::GEMINI_1_5_FLASH.into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_recommended_model_per_provider() {
        for provider in builtin_providers() {
            let recommended = provider.models.iter().filter(|m| m.recommended).count();
            assert_eq!(
                recommended, 1,
                "provider '{}' should have exactly one recommended model",
                provider.id
            );
        }
    }

    #[test]
    fn test_every_model_has_limits() {
        for provider in builtin_providers() {
            for model in &provider.models {
                assert!(
                    model.context_window.is_some(),
                    "model '{}' missing context window",
                    model.id
                );
                assert!(
                    model.max_output_tokens.is_some(),
                    "model '{}' missing max output tokens",
                    model.id
                );
            }
        }
    }

    #[test]
    fn test_backend_provider_matches_id_for_builtin_data() {
        for provider in builtin_providers() {
            assert_eq!(provider.backend_provider, provider.id);
        }
    }
}
