//! Integration test for the model picker flow
//!
//! Walks the path a frontend takes: list catalog options, persist the
//! user's choice, generate with it, and restore it on the next run.

mod common;

use gitrot_client::selection::FileStorage;
use gitrot_client::{GenerateRequest, Selection, SelectionStore};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_pick_persist_generate_and_restore() {
    let mock_server = MockServer::start().await;
    let client = common::test_client(&mock_server.uri());
    let catalog = client.catalog();

    let dir = tempfile::tempdir().unwrap();
    let selection_path = dir.path().join("selection.json");

    // First run starts on the catalog defaults
    let mut store = SelectionStore::new(Box::new(FileStorage::new(&selection_path)));
    let initial = store.load(catalog);
    assert_eq!(initial, catalog.default_selection());
    assert_eq!(initial.provider, "azure_openai");
    assert_eq!(initial.model, "gpt-4o");

    // The user switches to Gemini via the picker options
    let provider = catalog
        .provider_options()
        .into_iter()
        .find(|p| p.label == "Google Gemini")
        .expect("google provider listed");
    let model = catalog
        .model_options(&provider.id)
        .into_iter()
        .find(|m| m.id == "gemini-1.5-pro")
        .expect("gemini-1.5-pro listed");

    let choice = Selection::new(provider.id.clone(), model.id.clone());
    store.save(&choice);

    // Generation uses the persisted choice, catalog metadata included
    Mock::given(method("POST"))
        .and(path("/generate-readme"))
        .and(body_json(serde_json::json!({
            "repo_url": "https://github.com/octocat/hello-world",
            "generation_method": "Standard README",
            "model_name": "gemini-1.5-pro",
            "provider": "google",
            "model_config": {
                "provider_id": "google",
                "model_id": "gemini-1.5-pro",
                "context_window": 2000000,
                "max_output_tokens": 8192,
                "description": "Superior reasoning with 2M token context"
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("generate_success")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = GenerateRequest::builder()
        .repo_url("https://github.com/octocat/hello-world")
        .provider_id(choice.provider.clone())
        .model_id(choice.model.clone())
        .build()
        .unwrap();

    let result = client.readmes().generate(&request).await;
    assert!(result.is_success());
    mock_server.verify().await;

    // Next run restores the choice from disk
    let mut reopened = SelectionStore::new(Box::new(FileStorage::new(&selection_path)));
    assert_eq!(reopened.load(catalog), choice);
}

#[tokio::test]
async fn test_catalog_shrink_falls_back_on_next_run() {
    let dir = tempfile::tempdir().unwrap();
    let selection_path = dir.path().join("selection.json");

    // A previous run persisted a model that the catalog no longer lists
    std::fs::write(
        &selection_path,
        r#"{"provider":"azure_openai","model":"gpt-5-preview"}"#,
    )
    .unwrap();

    let catalog = gitrot_client::ModelCatalog::builtin();
    let mut store = SelectionStore::new(Box::new(FileStorage::new(&selection_path)));
    let selection = store.load(&catalog);

    // Provider survives, model falls back to the provider default
    assert_eq!(selection.provider, "azure_openai");
    assert_eq!(selection.model, "gpt-4o");

    // Saving the corrected pair makes the next run clean
    store.save(&selection);
    let raw = std::fs::read_to_string(&selection_path).unwrap();
    assert_eq!(raw, r#"{"provider":"azure_openai","model":"gpt-4o"}"#);
}
