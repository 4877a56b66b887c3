//! Client-side repository URL validation
//!
//! Mirrors the backend's check so callers can reject obviously bad input
//! before paying for a round trip. The backend remains the authority;
//! passing this check does not guarantee the repository exists.

use crate::error::{Error, Result};

/// Validate that a URL references a GitHub repository.
///
/// Accepts `https://`, `http://`, and scheme-less forms, requiring a
/// `github.com/<owner>/<repo>` path with both segments non-empty. Extra
/// path segments (branches, subdirectories) are allowed. Matching is
/// case-insensitive and ignores surrounding whitespace.
///
/// # Errors
///
/// Returns [`Error::InvalidRequest`] describing what is wrong with the URL.
pub fn validate_repository_url(url: &str) -> Result<()> {
    const MARKER: &str = "github.com/";

    let normalized = url.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(Error::InvalidRequest(
            "repository URL is empty".to_string(),
        ));
    }

    // Everything after the last "github.com/" is the repository path
    let Some(index) = normalized.rfind(MARKER) else {
        return Err(Error::InvalidRequest(format!(
            "'{}' is not a GitHub repository URL",
            url.trim()
        )));
    };

    let path = normalized[index + MARKER.len()..].trim_matches('/');
    let mut segments = path.split('/');
    let owner = segments.next().unwrap_or_default();
    let repo = segments.next().unwrap_or_default();

    if owner.is_empty() || repo.is_empty() {
        return Err(Error::InvalidRequest(format!(
            "'{}' must name a repository as github.com/<owner>/<repo>",
            url.trim()
        )));
    }

    Ok(())
}

/// Boolean form of [`validate_repository_url`].
pub fn is_valid_repository_url(url: &str) -> bool {
    validate_repository_url(url).is_ok()
}
