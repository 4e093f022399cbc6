//! Single-document path: stamp the master template, persist, and fetch back
//! through the same key derivation. Plus property coverage for the key.

mod common;

use std::sync::Arc;

use common::{minimal_template, pdf_text_lines, StubSubmissionRepository, SubmissionBuilder};
use proptest::prelude::*;
use submission_docs::application::dto::AdminContext;
use submission_docs::application::ports::{DocumentStore, SubmissionRepository};
use submission_docs::application::use_cases::{
    FetchDocumentUseCase, FetchError, GenerateDocumentUseCase,
};
use submission_docs::domain::value_objects::DocumentKey;
use submission_docs::infrastructure::pdf::TemplateOverlay;
use submission_docs::infrastructure::storage::{
    FilesystemDocumentStore, InMemoryDocumentStore,
};

fn admin() -> AdminContext {
    AdminContext {
        subject: "it-admin".to_string(),
    }
}

#[tokio::test]
async fn generate_then_download_round_trips() {
    let record = SubmissionBuilder::new().tax_number(Some("GSTIN29X")).build();
    let id = *record.id();

    let repo = Arc::new(StubSubmissionRepository::new(vec![record]));
    let store = Arc::new(InMemoryDocumentStore::new());
    let overlay = Arc::new(TemplateOverlay::from_bytes(minimal_template()).unwrap());

    let generate = GenerateDocumentUseCase::new(
        Arc::clone(&repo) as Arc<dyn SubmissionRepository>,
        Arc::clone(&store) as Arc<dyn DocumentStore>,
        Some(overlay),
    );
    let fetch = FetchDocumentUseCase::new(
        Arc::clone(&repo) as Arc<dyn SubmissionRepository>,
        Arc::clone(&store) as Arc<dyn DocumentStore>,
    );

    let generated = generate.execute(&id, &admin()).await.unwrap();
    assert_eq!(generated.key, "GSTIN29X");

    let (key, bytes) = fetch.execute(&id, &admin()).await.unwrap();
    assert_eq!(key.as_str(), "GSTIN29X");
    assert_eq!(bytes.len() as u64, generated.size_bytes);

    // The stored document carries the template text plus both stamped
    // fields.
    let lines = pdf_text_lines(&bytes);
    assert_eq!(
        lines,
        vec![
            "Registration Certificate",
            "Firm Name: Verma Traders",
            "Tax Number: GSTIN29X",
        ]
    );
}

#[tokio::test]
async fn download_before_generate_is_not_found() {
    let record = SubmissionBuilder::new().build();
    let id = *record.id();

    let repo = Arc::new(StubSubmissionRepository::new(vec![record]));
    let store = Arc::new(InMemoryDocumentStore::new());
    let fetch = FetchDocumentUseCase::new(repo, store);

    let result = fetch.execute(&id, &admin()).await;
    assert!(matches!(result, Err(FetchError::DocumentNotFound(_))));
}

#[tokio::test]
async fn regeneration_overwrites_in_place() {
    let record = SubmissionBuilder::new().tax_number(Some("GST77")).build();
    let id = *record.id();

    let repo = Arc::new(StubSubmissionRepository::new(vec![record]));
    let store = Arc::new(InMemoryDocumentStore::new());
    let overlay = Arc::new(TemplateOverlay::from_bytes(minimal_template()).unwrap());

    let generate = GenerateDocumentUseCase::new(
        Arc::clone(&repo) as Arc<dyn SubmissionRepository>,
        Arc::clone(&store) as Arc<dyn DocumentStore>,
        Some(overlay),
    );

    generate.execute(&id, &admin()).await.unwrap();
    generate.execute(&id, &admin()).await.unwrap();

    // Same key, single stored document.
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn filesystem_store_backs_the_same_flow() {
    let dir = tempfile::TempDir::new().unwrap();
    let record = SubmissionBuilder::new().tax_number(Some("FS-KEY-1")).build();
    let id = *record.id();

    let repo = Arc::new(StubSubmissionRepository::new(vec![record]));
    let store = Arc::new(FilesystemDocumentStore::new(dir.path().to_path_buf()));
    store.init().await.unwrap();
    let overlay = Arc::new(TemplateOverlay::from_bytes(minimal_template()).unwrap());

    let generate = GenerateDocumentUseCase::new(
        Arc::clone(&repo) as Arc<dyn SubmissionRepository>,
        Arc::clone(&store) as Arc<dyn DocumentStore>,
        Some(overlay),
    );
    let fetch = FetchDocumentUseCase::new(repo, store);

    let generated = generate.execute(&id, &admin()).await.unwrap();
    let (_, bytes) = fetch.execute(&id, &admin()).await.unwrap();

    assert_eq!(bytes.len() as u64, generated.size_bytes);
}

proptest! {
    // Derivation must be total and idempotent for arbitrary identifiers.
    #[test]
    fn document_key_is_total_and_idempotent(raw in ".{0,64}") {
        let first = DocumentKey::derive(Some(raw.as_str()));
        let second = DocumentKey::derive(Some(raw.as_str()));

        prop_assert_eq!(first.as_str(), second.as_str());
        prop_assert!(!first.as_str().is_empty());
        prop_assert!(first
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    }

    #[test]
    fn document_key_never_escapes_the_store_directory(raw in ".{0,64}") {
        let key = DocumentKey::derive(Some(raw.as_str()));
        prop_assert!(!key.file_name().contains('/'));
        prop_assert!(!key.file_name().contains(".."));
    }
}
