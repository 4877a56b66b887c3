//! Model catalog: the authoritative registry of providers and models
//!
//! The catalog is a read-only, explicitly constructed registry. It ships
//! with a built-in data set ([`ModelCatalog::builtin`]) aligned with the
//! backend's provider and model enums, and every consumer (pickers, the
//! payload adapter, selection validation) receives it by reference rather
//! than reaching for a global.

pub mod data;
pub mod payload;

pub use payload::{BackendModelPayload, ModelConfigPayload};

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::selection::Selection;

/// Relative cost of running a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    /// Cheapest tier ("$")
    Low,
    /// Mid tier ("$$")
    Medium,
    /// Most expensive tier ("$$$")
    High,
}

impl CostTier {
    /// Dollar-sign glyph used in pickers.
    pub fn symbol(self) -> &'static str {
        match self {
            CostTier::Low => "$",
            CostTier::Medium => "$$",
            CostTier::High => "$$$",
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CostTier::Low => "low",
            CostTier::Medium => "medium",
            CostTier::High => "high",
        };
        write!(f, "{}", name)
    }
}

/// Relative response speed of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedTier {
    /// Low-latency models
    Fast,
    /// Middle of the pack
    Medium,
    /// Slower, typically higher-quality models
    Slow,
}

impl fmt::Display for SpeedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpeedTier::Fast => "fast",
            SpeedTier::Medium => "medium",
            SpeedTier::Slow => "slow",
        };
        write!(f, "{}", name)
    }
}

/// A single model entry in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Stable model identifier sent to the backend
    pub id: String,

    /// Human-readable display name
    pub label: String,

    /// One-line description shown in pickers
    pub description: String,

    /// Relative cost tier
    pub cost: CostTier,

    /// Relative speed tier
    pub speed: SpeedTier,

    /// Optional marketing badge ("Most Popular", "Large Context", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,

    /// Whether this model is the recommended pick for its provider
    #[serde(default)]
    pub recommended: bool,

    /// Context window size in tokens, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u32>,

    /// Maximum output tokens, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// A provider entry: display metadata plus its models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Stable provider identifier used in selections
    pub id: String,

    /// Human-readable display name
    pub label: String,

    /// One-line pitch shown in pickers
    pub tagline: String,

    /// Optional emoji/icon for pickers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Identifier the backend expects for this provider. Usually equal to
    /// `id`, but kept separate so frontend and backend naming can drift.
    pub backend_provider: String,

    /// Models offered by this provider, in display order
    pub models: Vec<ModelInfo>,

    /// Identifier of this provider's default model
    pub default_model: String,
}

impl Provider {
    /// Look up a model by identifier.
    pub fn model(&self, model_id: &str) -> Option<&ModelInfo> {
        self.models.iter().find(|m| m.id == model_id)
    }
}

/// Picker-ready projection of a [`Provider`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderOption {
    /// Provider identifier
    pub id: String,
    /// Display name
    pub label: String,
    /// One-line pitch
    pub tagline: String,
    /// Optional emoji/icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Picker-ready projection of a [`ModelInfo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOption {
    /// Model identifier
    pub id: String,
    /// Display name
    pub label: String,
    /// One-line description
    pub description: String,
    /// Relative cost tier
    pub cost: CostTier,
    /// Relative speed tier
    pub speed: SpeedTier,
    /// Optional marketing badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Whether this is the recommended pick
    #[serde(default)]
    pub recommended: bool,
}

/// The model catalog: an ordered list of providers with a designated
/// default provider.
///
/// Construction verifies internal consistency, so lookups against a
/// constructed catalog can rely on the default provider and every
/// provider's default model existing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCatalog {
    providers: Vec<Provider>,
    default_provider_id: String,
}

impl ModelCatalog {
    /// Create a catalog from providers and a default provider id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the data is inconsistent: no
    /// providers, duplicate provider or model identifiers, a provider
    /// without models, a provider whose default model is not among its
    /// models, or a default provider id that matches no provider.
    pub fn new(providers: Vec<Provider>, default_provider_id: impl Into<String>) -> Result<Self> {
        let catalog = Self {
            providers,
            default_provider_id: default_provider_id.into(),
        };
        catalog.verify()?;
        Ok(catalog)
    }

    /// The built-in catalog shipped with this crate, aligned with the
    /// backend's provider and model enums.
    ///
    /// # Panics
    ///
    /// Panics if the built-in data set fails verification. That is a
    /// defect in the crate itself and is covered by unit tests.
    pub fn builtin() -> Self {
        Self::new(data::builtin_providers(), data::providers::AZURE_OPENAI)
            .expect("built-in catalog data is verified by tests")
    }

    /// All providers, in display order.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Identifier of the catalog-wide default provider.
    pub fn default_provider_id(&self) -> &str {
        &self.default_provider_id
    }

    /// The catalog-wide default provider.
    pub fn default_provider(&self) -> &Provider {
        self.provider(&self.default_provider_id)
            .expect("default provider existence is verified at construction")
    }

    /// Look up a provider by identifier.
    pub fn provider(&self, provider_id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == provider_id)
    }

    /// Look up a model within a provider.
    ///
    /// Returns `None` if either the provider or the model is unknown.
    pub fn model(&self, provider_id: &str, model_id: &str) -> Option<&ModelInfo> {
        self.provider(provider_id)?.model(model_id)
    }

    /// Picker-ready options for every provider.
    pub fn provider_options(&self) -> Vec<ProviderOption> {
        self.providers
            .iter()
            .map(|p| ProviderOption {
                id: p.id.clone(),
                label: p.label.clone(),
                tagline: p.tagline.clone(),
                icon: p.icon.clone(),
            })
            .collect()
    }

    /// Picker-ready options for one provider's models.
    ///
    /// Unknown providers yield an empty list rather than an error, so
    /// pickers degrade to "nothing to choose" instead of failing.
    pub fn model_options(&self, provider_id: &str) -> Vec<ModelOption> {
        match self.provider(provider_id) {
            Some(provider) => provider
                .models
                .iter()
                .map(|m| ModelOption {
                    id: m.id.clone(),
                    label: m.label.clone(),
                    description: m.description.clone(),
                    cost: m.cost,
                    speed: m.speed,
                    badge: m.badge.clone(),
                    recommended: m.recommended,
                })
                .collect(),
            None => Vec::new(),
        }
    }

    /// The catalog-wide default selection: the default provider paired
    /// with that provider's default model.
    pub fn default_selection(&self) -> Selection {
        let provider = self.default_provider();
        Selection::new(&provider.id, &provider.default_model)
    }

    /// Validate a (provider, model) pair against the catalog, correcting
    /// unknown identifiers.
    ///
    /// - Known provider and model: the pair is returned unchanged.
    /// - Known provider, unknown model: falls back to that provider's
    ///   default model.
    /// - Unknown provider: falls back to [`Self::default_selection`].
    pub fn resolve_selection(&self, provider_id: &str, model_id: &str) -> Selection {
        match self.provider(provider_id) {
            Some(provider) => {
                if provider.model(model_id).is_some() {
                    Selection::new(provider_id, model_id)
                } else {
                    Selection::new(&provider.id, &provider.default_model)
                }
            }
            None => self.default_selection(),
        }
    }

    fn verify(&self) -> Result<()> {
        if self.providers.is_empty() {
            return Err(Error::Catalog("catalog has no providers".to_string()));
        }

        let mut provider_ids = HashSet::new();
        for provider in &self.providers {
            if !provider_ids.insert(provider.id.as_str()) {
                return Err(Error::Catalog(format!(
                    "duplicate provider id '{}'",
                    provider.id
                )));
            }

            if provider.models.is_empty() {
                return Err(Error::Catalog(format!(
                    "provider '{}' has no models",
                    provider.id
                )));
            }

            let mut model_ids = HashSet::new();
            for model in &provider.models {
                if !model_ids.insert(model.id.as_str()) {
                    return Err(Error::Catalog(format!(
                        "duplicate model id '{}' in provider '{}'",
                        model.id, provider.id
                    )));
                }
            }

            if !model_ids.contains(provider.default_model.as_str()) {
                return Err(Error::Catalog(format!(
                    "provider '{}' default model '{}' is not among its models",
                    provider.id, provider.default_model
                )));
            }
        }

        if !provider_ids.contains(self.default_provider_id.as_str()) {
            return Err(Error::Catalog(format!(
                "default provider '{}' is not in the catalog",
                self.default_provider_id
            )));
        }

        Ok(())
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
