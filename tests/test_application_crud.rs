//! Integration tests for grant application storage.
//!
//! Tests cover:
//! - Creating applications in draft status
//! - Rejecting applications before onboarding
//! - Listing applications for the session's organization only
//! - Status transitions

mod common;

use common::*;

fn make_new_application(title: &str) -> NewApplication {
    NewApplication {
        title: title.to_string(),
        template_id: Some("environmental-conservation".to_string()),
        rfp_file_url: None,
        content: serde_json::json!({}),
    }
}

#[tokio::test]
async fn test_add_application_starts_as_draft() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;
    let session = create_test_session(&workspace, "lani@example.org").await;
    let organization = session
        .create_organization(make_new_organization("Malama Aina Foundation"))
        .await?;

    let application = session
        .add_application(make_new_application("Reef Restoration 2026"))
        .await?;
    assert_eq!(application.title, "Reef Restoration 2026");
    assert_eq!(application.status, ApplicationStatus::Draft);
    assert_eq!(application.organization_id, organization.id);
    assert_eq!(
        application.template_id.as_deref(),
        Some("environmental-conservation")
    );

    Ok(())
}

#[tokio::test]
async fn test_add_application_requires_organization() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;
    let session = create_test_session(&workspace, "lani@example.org").await;

    let result = session
        .add_application(make_new_application("Too Early"))
        .await;
    assert!(result.is_err(), "Application without a profile should fail");

    Ok(())
}

#[tokio::test]
async fn test_applications_are_scoped_to_session() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;

    let mine = create_test_session(&workspace, "lani@example.org").await;
    mine.create_organization(make_new_organization("Mine")).await?;
    mine.add_application(make_new_application("My Application"))
        .await?;

    let theirs = create_test_session(&workspace, "kai@example.org").await;
    theirs
        .create_organization(make_new_organization("Theirs"))
        .await?;

    assert_eq!(mine.get_applications().await?.len(), 1);
    assert!(theirs.get_applications().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_update_application_status() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;
    let session = create_test_session(&workspace, "lani@example.org").await;
    session
        .create_organization(make_new_organization("Malama Aina Foundation"))
        .await?;
    let application = session
        .add_application(make_new_application("Reef Restoration 2026"))
        .await?;

    let updated = session
        .update_application_status(&application, ApplicationStatus::InProgress)
        .await?;
    assert_eq!(updated.status, ApplicationStatus::InProgress);
    assert_eq!(updated.id, application.id);

    let listed = session.get_applications().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, ApplicationStatus::InProgress);

    Ok(())
}
