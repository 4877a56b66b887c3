//! # GitRot Client
//!
//! Rust client for the GitRot README generation service supporting:
//! - One-shot README generation for public GitHub repositories
//! - A built-in provider/model catalog with cost and speed metadata
//! - Durable model selection with catalog-backed fallback
//! - Service tier credential checks (hosted vs. own keys)
//! - Backend health probing and user profile endpoints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gitrot_client::{Client, GenerateRequest, GenerationResult};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new();
//!
//!     let request = GenerateRequest::builder()
//!         .repo_url("https://github.com/rust-lang/rust")
//!         .provider_id("azure_openai")
//!         .model_id("gpt-4o")
//!         .build()?;
//!
//!     match client.readmes().generate(&request).await {
//!         GenerationResult::Success(readme) => println!("{}", readme.content),
//!         GenerationResult::Failure { message } => eprintln!("failed: {message}"),
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use catalog::{BackendModelPayload, ModelCatalog, ModelOption, ProviderOption};
pub use client::{Client, GitrotClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, Environment};
pub use credentials::{CredentialSet, ServiceTier, config_complete};
pub use error::{Error, Result};
pub use selection::{Selection, SelectionStore};
pub use types::*;
pub use validation::{is_valid_repository_url, validate_repository_url};

// Module declarations
pub mod catalog;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod resources;
pub mod selection;
pub mod types;
pub mod validation;

// Re-export key dependencies for convenience
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use gitrot_client::prelude::*;
/// ```
pub mod prelude {

    pub use crate::{
        Client, ClientConfig, Error, Result,
        catalog::{ModelCatalog, ModelOption, ProviderOption},
        selection::{Selection, SelectionStore},
        types::{GenerateRequest, GenerateRequestBuilder, GeneratedReadme, GenerationResult},
    };
}

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Generation method requested when none is given
pub const DEFAULT_GENERATION_METHOD: &str = "Standard README";

/// Generation methods the backend understands
pub const GENERATION_METHODS: &[&str] = &[DEFAULT_GENERATION_METHOD, "README with Examples"];
