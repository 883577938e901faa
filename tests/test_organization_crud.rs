//! Integration tests for identity and organization storage.
//!
//! Tests cover:
//! - Sign-in get-or-create semantics
//! - Creating and fetching the organization profile
//! - The missing profile being an Ok(None), not an error
//! - Partial updates, including clearing nullable fields
//! - One profile per identity
//! - Persistence across workspace reopen

mod common;

use common::*;

#[tokio::test]
async fn test_sign_in_is_get_or_create() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;

    // 1. First sign-in creates the identity
    let first = workspace.sign_in("lani@example.org").await?;
    assert_eq!(first.email, "lani@example.org");

    // 2. Second sign-in with the same email returns the same row
    let second = workspace.sign_in("lani@example.org").await?;
    assert_eq!(second.id, first.id);

    // 3. A different email gets a different identity
    let other = workspace.sign_in("kai@example.org").await?;
    assert_ne!(other.id, first.id);

    let found = workspace.get_identity_by_email("lani@example.org").await?;
    assert_eq!(found.map(|i| i.id), Some(first.id));

    Ok(())
}

#[tokio::test]
async fn test_session_context_scopes_queries() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;

    // 1. The session carries the identity it was started for
    let session = sign_in_test_user(&workspace).await;
    assert_eq!(session.identity.email, "tester@example.org");
    assert_eq!(session.db.identity_id(), session.identity.id);

    // 2. Its repository only sees that identity's data
    session
        .db
        .create_organization(make_new_organization("Tester Org"))
        .await?;
    let other = create_test_session(&workspace, "someone-else@example.org").await;
    assert!(other.get_organization().await?.is_none());

    // 3. Sign-out consumes the context; a fresh sign-in still finds the data
    session.sign_out();
    let again = sign_in_test_user(&workspace).await;
    let fetched = again.db.get_organization().await?;
    assert_eq!(fetched.map(|o| o.name), Some("Tester Org".to_string()));

    Ok(())
}

#[tokio::test]
async fn test_create_and_fetch_organization() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;
    let session = create_test_session(&workspace, "lani@example.org").await;

    // 1. No profile before onboarding; expected, not an error
    assert!(session.get_organization().await?.is_none());

    // 2. Create the profile
    let created = session
        .create_organization(make_new_organization("Malama Aina Foundation"))
        .await?;
    assert_eq!(created.name, "Malama Aina Foundation");
    assert_eq!(created.identity_id, session.identity_id());
    assert!(created.is_501c3);
    assert_eq!(created.annual_revenue, Some(250_000.0));

    // 3. Fetch it back
    let fetched = session
        .get_organization()
        .await?
        .expect("Organization should exist after create");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.contact_phone.as_deref(), Some("(808) 555-0100"));

    Ok(())
}

#[tokio::test]
async fn test_update_organization_partial_and_clearing() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;
    let session = create_test_session(&workspace, "lani@example.org").await;
    let created = session
        .create_organization(make_new_organization("Malama Aina Foundation"))
        .await?;

    // 1. Touch only the mission; everything else keeps its value
    let update = OrganizationUpdate {
        mission: Some("Restore watersheds".to_string()),
        ..Default::default()
    };
    let updated = session.update_organization(&update).await?;
    assert_eq!(updated.mission, "Restore watersheds");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.tax_id, created.tax_id);

    // 2. Inner None clears a nullable column
    let clearing = OrganizationUpdate {
        contact_phone: Some(None),
        annual_revenue: Some(None),
        ..Default::default()
    };
    let cleared = session.update_organization(&clearing).await?;
    assert_eq!(cleared.contact_phone, None);
    assert_eq!(cleared.annual_revenue, None);
    assert_eq!(cleared.mission, "Restore watersheds");

    Ok(())
}

#[tokio::test]
async fn test_update_without_organization_fails() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;
    let session = create_test_session(&workspace, "lani@example.org").await;

    let update = OrganizationUpdate {
        name: Some("Nobody".to_string()),
        ..Default::default()
    };
    let result = session.update_organization(&update).await;
    let error = result.expect_err("Update without a profile should fail");
    assert!(error.to_string().contains("No organization to update"));

    Ok(())
}

#[tokio::test]
async fn test_one_organization_per_identity() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;
    let session = create_test_session(&workspace, "lani@example.org").await;

    session
        .create_organization(make_new_organization("First"))
        .await?;
    let second = session
        .create_organization(make_new_organization("Second"))
        .await;
    assert!(second.is_err(), "A second profile should be rejected");

    // A different identity still gets its own profile
    let other = create_test_session(&workspace, "kai@example.org").await;
    let theirs = other
        .create_organization(make_new_organization("Second Org"))
        .await?;
    assert_eq!(theirs.name, "Second Org");

    Ok(())
}

#[tokio::test]
async fn test_organization_survives_reopen() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("reopen.db");

    let created_id = {
        let workspace = WorkspaceDb::new(&path).await?;
        let session = create_test_session(&workspace, "lani@example.org").await;
        let created = session
            .create_organization(make_new_organization("Persistent Org"))
            .await?;
        workspace.close().await?;
        created.id
    };

    let workspace = WorkspaceDb::new(&path).await?;
    let session = create_test_session(&workspace, "lani@example.org").await;
    let fetched = session
        .get_organization()
        .await?
        .expect("Profile should survive reopen");
    assert_eq!(fetched.id, created_id);
    assert_eq!(fetched.name, "Persistent Org");

    Ok(())
}
