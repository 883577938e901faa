//! Integration tests for draft snapshots and the debounced writer.
//!
//! Tests cover:
//! - Snapshot save/restore fidelity, including the recorded step
//! - Missing and unreadable drafts loading as None
//! - Clearing being idempotent, and a successful submit leaving no draft
//! - The debounced writer coalescing bursts into one final write
//! - Write confirmations arriving only for payloads that reached disk
//! - Dropping the writer discarding a pending snapshot

mod common;

use std::time::Duration;

use common::*;
use kokua::draft::{DebouncedWriter, DraftSlot, DraftSnapshot};

fn temp_slot() -> (DraftSlot, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let slot = DraftSlot::new(dir.path().join("onboarding-draft.json"));
    (slot, dir)
}

#[tokio::test]
async fn test_snapshot_round_trip_preserves_values_and_step() -> anyhow::Result<()> {
    let (slot, _dir) = temp_slot();

    let data = complete_onboarding_data();
    let snapshot = DraftSnapshot::capture(&data, WizardStep::LegalFinancial);
    slot.store(&snapshot).await?;

    let restored = slot.load().await.expect("Draft should load back");
    assert_eq!(restored.data, data);
    assert_eq!(restored.step(), WizardStep::LegalFinancial);
    assert!(restored.saved_at().is_some());

    // Resuming puts the wizard exactly where the user left off
    let step = restored.step();
    let wizard = StepWizard::resume(restored.data, step);
    assert_eq!(wizard.step(), WizardStep::LegalFinancial);
    assert_eq!(wizard.data().name, "Ocean Keepers");
    assert_eq!(wizard.data().mission, "Protect reefs");

    Ok(())
}

#[tokio::test]
async fn test_missing_draft_loads_as_none() {
    let (slot, _dir) = temp_slot();
    assert!(slot.load().await.is_none());
}

#[tokio::test]
async fn test_corrupt_draft_loads_as_none() -> anyhow::Result<()> {
    let (slot, _dir) = temp_slot();
    tokio::fs::write(slot.path(), b"{ not json").await?;
    assert!(slot.load().await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_out_of_range_step_falls_back_to_first() -> anyhow::Result<()> {
    let (slot, _dir) = temp_slot();
    let mut snapshot = DraftSnapshot::capture(&complete_onboarding_data(), WizardStep::Review);
    snapshot.step = 99;
    slot.store(&snapshot).await?;

    let restored = slot.load().await.expect("Draft should load back");
    assert_eq!(restored.step(), WizardStep::BasicInfo);
    Ok(())
}

#[tokio::test]
async fn test_clear_is_idempotent() -> anyhow::Result<()> {
    let (slot, _dir) = temp_slot();

    // Clearing an empty slot is fine
    slot.clear().await?;

    let snapshot = DraftSnapshot::capture(&complete_onboarding_data(), WizardStep::Review);
    slot.store(&snapshot).await?;
    slot.clear().await?;
    assert!(slot.load().await.is_none());
    slot.clear().await?;

    Ok(())
}

#[tokio::test]
async fn test_successful_submit_leaves_no_draft_behind() -> anyhow::Result<()> {
    let (workspace, _workspace_dir) = create_test_workspace().await;
    let session = create_test_session(&workspace, "lani@example.org").await;
    let (slot, _dir) = temp_slot();

    // 1. A draft accumulated while filling the form
    let data = complete_onboarding_data();
    slot.store(&DraftSnapshot::capture(&data, WizardStep::Review))
        .await?;
    assert!(slot.load().await.is_some());

    // 2. Completing setup persists the profile and retires the draft
    let mut wizard = StepWizard::resume(data, WizardStep::Review);
    let organization = wizard.submit(&session).await?;
    slot.clear().await?;

    assert_eq!(organization.name, "Ocean Keepers");
    assert!(slot.load().await.is_none());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_writer_coalesces_a_burst_into_the_last_snapshot() -> anyhow::Result<()> {
    let (slot, _dir) = temp_slot();
    let writer = DebouncedWriter::spawn(slot.clone(), Duration::from_secs(1));

    // Three keystrokes in quick succession
    let mut data = complete_onboarding_data();
    data.name = "O".to_string();
    writer.submit(DraftSnapshot::capture(&data, WizardStep::BasicInfo));
    data.name = "Oc".to_string();
    writer.submit(DraftSnapshot::capture(&data, WizardStep::BasicInfo));
    data.name = "Ocean Keepers".to_string();
    writer.submit(DraftSnapshot::capture(&data, WizardStep::BasicInfo));

    // Let the quiet period elapse
    tokio::time::sleep(Duration::from_secs(2)).await;

    let restored = slot.load().await.expect("Burst should end in one write");
    assert_eq!(restored.data.name, "Ocean Keepers");
    Ok(())
}

#[tokio::test]
async fn test_write_waits_for_the_quiet_period() -> anyhow::Result<()> {
    let (slot, _dir) = temp_slot();
    let writer = DebouncedWriter::spawn(slot.clone(), Duration::from_millis(200));

    writer.submit(DraftSnapshot::capture(
        &complete_onboarding_data(),
        WizardStep::BasicInfo,
    ));

    // Well inside the quiet period nothing has been written yet
    tokio::time::sleep(Duration::from_millis(25)).await;
    assert!(slot.load().await.is_none());

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(slot.load().await.is_some());
    Ok(())
}

#[tokio::test]
async fn test_write_confirmation_arrives_after_the_write_lands() -> anyhow::Result<()> {
    let (slot, _dir) = temp_slot();
    let writer = DebouncedWriter::spawn(slot.clone(), Duration::from_millis(200));

    let mut confirmation = writer.submit(DraftSnapshot::capture(
        &complete_onboarding_data(),
        WizardStep::BasicInfo,
    ));

    // 1. While the quiet period runs there is no write and no confirmation
    tokio::time::sleep(Duration::from_millis(25)).await;
    assert!(confirmation.try_recv().is_err());
    assert!(slot.load().await.is_none());

    // 2. The confirmation resolves once the snapshot is on disk
    let written_at = confirmation.await?;
    assert!(written_at <= time::OffsetDateTime::now_utc());
    assert!(slot.load().await.is_some());

    Ok(())
}

#[tokio::test]
async fn test_superseded_snapshot_never_confirms() -> anyhow::Result<()> {
    let (slot, _dir) = temp_slot();
    let writer = DebouncedWriter::spawn(slot.clone(), Duration::from_millis(100));

    let mut data = complete_onboarding_data();
    data.name = "O".to_string();
    let first = writer.submit(DraftSnapshot::capture(&data, WizardStep::BasicInfo));
    data.name = "Ocean Keepers".to_string();
    let second = writer.submit(DraftSnapshot::capture(&data, WizardStep::BasicInfo));

    // Only the payload that survives the quiet period reports back
    assert!(first.await.is_err());
    assert!(second.await.is_ok());

    let restored = slot.load().await.expect("Surviving snapshot should be written");
    assert_eq!(restored.data.name, "Ocean Keepers");

    Ok(())
}

#[tokio::test]
async fn test_dropping_the_writer_discards_pending_work() -> anyhow::Result<()> {
    let (slot, _dir) = temp_slot();
    let writer = DebouncedWriter::spawn(slot.clone(), Duration::from_millis(100));

    writer.submit(DraftSnapshot::capture(
        &complete_onboarding_data(),
        WizardStep::BasicInfo,
    ));
    drop(writer);

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(slot.load().await.is_none());
    Ok(())
}
