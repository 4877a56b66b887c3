//! HTTP plumbing for the GitRot client
//!
//! A thin request/response layer over `reqwest`. Requests are single-shot:
//! the client reports failures to the caller instead of retrying, so a
//! generation is never silently attempted twice.

pub mod request;
pub mod response;

pub use request::RequestBuilder;
pub use response::Response;
