//! Core types for the GitRot API
//!
//! Request and response shapes for the generation, auth, and health
//! endpoints, mirroring the backend's pydantic models.

// Re-export commonly used types from submodules
pub use generation::*;
pub use health::*;
pub use user::*;

// Submodules
pub mod generation;
pub mod health;
pub mod user;
