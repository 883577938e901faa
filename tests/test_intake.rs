//! Integration tests for RFP document intake and analysis.
//!
//! Tests cover:
//! - Keyword routing of file names to the canned analysis records
//! - Extension and size rejection with the expected messages
//! - The stored URL shape emitted by the mock store
//! - The full intake flow gluing the stages together

use std::time::Duration;

use kokua::analysis::{
    DocumentIntake, FileConstraints, IntakeError, KeywordAnalyzer, MockDocumentStore, RfpAnalyzer,
};
use kokua::models::RfpDocument;

fn analyzer() -> KeywordAnalyzer {
    KeywordAnalyzer::new().with_latency(Duration::ZERO)
}

fn intake() -> DocumentIntake<MockDocumentStore, KeywordAnalyzer> {
    DocumentIntake::new(
        FileConstraints::default(),
        MockDocumentStore::new().with_latency(Duration::ZERO),
        analyzer(),
    )
}

#[tokio::test]
async fn test_environmental_keywords_route_to_environmental_record() -> anyhow::Result<()> {
    let doc = RfpDocument::detached("Hawaii_Environmental_Grant.pdf", 1024);
    let analysis = analyzer().analyze(&doc).await?;

    assert_eq!(analysis.deadline.as_deref(), Some("March 15, 2025"));
    assert_eq!(analysis.funding_amount.as_deref(), Some("$25,000 - $75,000"));
    assert!(
        analysis
            .focus_areas
            .iter()
            .any(|a| a.contains("Marine conservation"))
    );

    // "conservation" routes the same way
    let doc = RfpDocument::detached("reef-conservation-rfp.docx", 1024);
    let analysis = analyzer().analyze(&doc).await?;
    assert_eq!(analysis.deadline.as_deref(), Some("March 15, 2025"));

    Ok(())
}

#[tokio::test]
async fn test_education_keywords_route_to_education_record() -> anyhow::Result<()> {
    let doc = RfpDocument::detached("Youth_Education_RFP.docx", 2048);
    let analysis = analyzer().analyze(&doc).await?;

    assert_eq!(analysis.deadline.as_deref(), Some("April 30, 2025"));
    assert_eq!(analysis.funding_amount.as_deref(), Some("$15,000 - $50,000"));

    Ok(())
}

#[tokio::test]
async fn test_other_names_route_to_general_record() -> anyhow::Result<()> {
    let doc = RfpDocument::detached("community_grant_2025.pdf", 2048);
    let analysis = analyzer().analyze(&doc).await?;

    assert_eq!(analysis.deadline.as_deref(), Some("May 1, 2025"));
    assert_eq!(analysis.funding_amount.as_deref(), Some("$10,000 - $30,000"));
    assert!(!analysis.requirements.is_empty());
    assert!(!analysis.key_sections.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_unsupported_extension_is_rejected() {
    let constraints = FileConstraints::default();
    let doc = RfpDocument::detached("notes.txt", 1024);

    let error = constraints.check(&doc).expect_err(".txt should be rejected");
    assert!(matches!(error, IntakeError::UnsupportedType { .. }));
    let message = error.to_string();
    assert!(message.contains(".pdf"), "accepted list should be named: {message}");
}

#[tokio::test]
async fn test_extension_check_is_case_insensitive() {
    let constraints = FileConstraints::default();
    let doc = RfpDocument::detached("Grant_RFP.PDF", 1024);
    assert!(constraints.check(&doc).is_ok());
}

#[tokio::test]
async fn test_oversized_file_is_rejected() {
    let constraints = FileConstraints::default();
    let doc = RfpDocument::detached("huge.pdf", 11 * 1024 * 1024);

    let error = constraints.check(&doc).expect_err("11 MB should be rejected");
    assert!(matches!(error, IntakeError::TooLarge { .. }));

    // Exactly at the limit is still fine
    let doc = RfpDocument::detached("exact.pdf", 10 * 1024 * 1024);
    assert!(constraints.check(&doc).is_ok());
}

#[tokio::test]
async fn test_mock_store_url_shape() -> anyhow::Result<()> {
    use kokua::analysis::DocumentStore;

    let store = MockDocumentStore::new().with_latency(Duration::ZERO);
    let doc = RfpDocument::detached("Hawaii_Environmental_Grant.pdf", 1024);
    let url = store.store(&doc).await?;

    assert!(url.starts_with("https://storage.kokua.test/kokua-grants/rfp-files/"));
    assert!(url.ends_with("-Hawaii_Environmental_Grant.pdf"));

    Ok(())
}

#[tokio::test]
async fn test_full_intake_flow() -> anyhow::Result<()> {
    let doc = RfpDocument::detached("Youth_Education_RFP.docx", 2048);
    let outcome = intake().submit(&doc).await?;

    assert_eq!(outcome.analysis.deadline.as_deref(), Some("April 30, 2025"));
    assert!(outcome.stored_url.contains("rfp-files"));

    // Constraint failures surface through the same entry point
    let bad = RfpDocument::detached("notes.txt", 1024);
    let result = intake().submit(&bad).await;
    assert!(result.is_err());

    Ok(())
}
