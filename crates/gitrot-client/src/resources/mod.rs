//! API resource endpoints
//!
//! One resource per backend API group: README generation, user accounts,
//! and service health.

pub mod auth;
pub mod health;
pub mod readmes;

pub use auth::Auth;
pub use health::Health;
pub use readmes::Readmes;

use crate::client::Client;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}
