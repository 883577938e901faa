//! Integration tests for the onboarding wizard.
//!
//! Tests cover:
//! - Per-step validation gating with the expected messages
//! - Boundary no-ops at the first and last steps
//! - Email format validation
//! - Submit creating the organization from the review step only

mod common;

use common::*;
use kokua::wizard::validate_step;

#[tokio::test]
async fn test_advance_is_gated_on_required_fields() -> anyhow::Result<()> {
    let mut wizard = StepWizard::new();

    // 1. Empty form cannot leave the first step
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), WizardStep::BasicInfo);
    assert_eq!(
        wizard.error_for(Field::Name),
        Some("Organization name is required")
    );
    assert_eq!(
        wizard.error_for(Field::Mission),
        Some("Mission statement is required")
    );

    // 2. Filling the fields clears the gate
    wizard.data_mut().name = "Ocean Keepers".to_string();
    wizard.data_mut().mission = "Protect reefs".to_string();
    assert!(wizard.advance());
    assert_eq!(wizard.step(), WizardStep::ContactDetails);
    assert!(wizard.errors().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_email_validation_messages() -> anyhow::Result<()> {
    let mut data = complete_onboarding_data();

    data.contact_email = String::new();
    let errors = validate_step(WizardStep::ContactDetails, &data);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Contact email is required");

    data.contact_email = "not-an-email".to_string();
    let errors = validate_step(WizardStep::ContactDetails, &data);
    assert_eq!(errors[0].message, "Invalid email address");

    data.contact_email = "Aloha@Ocean-Keepers.ORG".to_string();
    assert!(validate_step(WizardStep::ContactDetails, &data).is_empty());

    Ok(())
}

#[tokio::test]
async fn test_boundary_moves_are_no_ops() -> anyhow::Result<()> {
    // 1. Retreat on the first step does nothing
    let mut wizard = StepWizard::new();
    assert!(!wizard.retreat());
    assert_eq!(wizard.step(), WizardStep::BasicInfo);

    // 2. Advance on the review step does nothing
    let mut wizard = StepWizard::resume(complete_onboarding_data(), WizardStep::Review);
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), WizardStep::Review);

    Ok(())
}

#[tokio::test]
async fn test_retreat_clears_pending_errors() -> anyhow::Result<()> {
    let mut data = complete_onboarding_data();
    data.contact_email = String::new();
    let mut wizard = StepWizard::resume(data, WizardStep::ContactDetails);

    assert!(!wizard.advance());
    assert!(!wizard.errors().is_empty());

    assert!(wizard.retreat());
    assert!(wizard.errors().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_submit_only_from_review_step() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;
    let session = create_test_session(&workspace, "lani@example.org").await;

    let mut wizard = StepWizard::resume(complete_onboarding_data(), WizardStep::BasicInfo);
    let result = wizard.submit(&session).await;
    assert!(result.is_err(), "Submit before the review step should fail");
    assert!(session.get_organization().await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_submit_creates_organization() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;
    let session = create_test_session(&workspace, "lani@example.org").await;

    // 1. Walk the whole sequence with valid data
    let mut wizard = StepWizard::new();
    wizard.data_mut().name = "Ocean Keepers".to_string();
    wizard.data_mut().mission = "Protect reefs".to_string();
    assert!(wizard.advance());
    wizard.data_mut().contact_email = "aloha@oceankeepers.org".to_string();
    assert!(wizard.advance());
    wizard.data_mut().is_501c3 = true;
    assert!(wizard.advance());
    assert_eq!(wizard.step(), WizardStep::Review);

    // 2. Submit persists the profile
    let organization = wizard.submit(&session).await?;
    assert_eq!(organization.name, "Ocean Keepers");
    assert_eq!(organization.mission, "Protect reefs");
    assert!(organization.is_501c3);

    let fetched = session.get_organization().await?;
    assert_eq!(fetched.map(|o| o.id), Some(organization.id));

    Ok(())
}

#[tokio::test]
async fn test_submit_trims_padded_fields() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;
    let session = create_test_session(&workspace, "lani@example.org").await;

    // Padded values pass validation (it checks the trimmed text), so the
    // stored profile must be the trimmed text as well
    let mut data = complete_onboarding_data();
    data.name = "  Ocean Keepers  ".to_string();
    data.mission = " Protect reefs ".to_string();
    data.contact_email = " aloha@oceankeepers.org ".to_string();
    let mut wizard = StepWizard::resume(data, WizardStep::Review);

    let organization = wizard.submit(&session).await?;
    assert_eq!(organization.name, "Ocean Keepers");
    assert_eq!(organization.mission, "Protect reefs");
    assert_eq!(organization.contact_email, "aloha@oceankeepers.org");

    Ok(())
}

#[tokio::test]
async fn test_submit_revalidates_earlier_steps() -> anyhow::Result<()> {
    let (workspace, _temp_dir) = create_test_workspace().await;
    let session = create_test_session(&workspace, "lani@example.org").await;

    // Resumed drafts can land on review with stale invalid data
    let mut data = complete_onboarding_data();
    data.name = String::new();
    let mut wizard = StepWizard::resume(data, WizardStep::Review);

    let result = wizard.submit(&session).await;
    assert!(result.is_err());
    assert_eq!(
        wizard.error_for(Field::Name),
        Some("Organization name is required")
    );
    assert!(session.get_organization().await?.is_none());

    Ok(())
}
