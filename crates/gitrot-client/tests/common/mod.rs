//! Common test utilities and helpers

use std::path::Path;

use gitrot_client::Client;

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Build a client pointed at a mock server
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> Client {
    Client::builder()
        .base_url(base_url)
        .build()
        .expect("Failed to build client")
}
