use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::fs as async_fs;
use tokio::sync::{mpsc, oneshot};

use crate::wizard::{OnboardingData, WizardStep};

/// Quiet period after the most recent change before a draft write happens.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_secs(1);

const DRAFT_FILE_NAME: &str = "onboarding-draft.json";

/// One wholesale capture of the wizard's in-progress state. Overwrites any
/// previous snapshot on save; no partial merge, no versioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub data: OnboardingData,
    pub step: usize,
    pub timestamp: String,
}

impl DraftSnapshot {
    pub fn capture(data: &OnboardingData, step: WizardStep) -> Self {
        let timestamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();
        Self {
            data: data.clone(),
            step: step.number(),
            timestamp,
        }
    }

    /// The recorded step, falling back to the first step if the stored index
    /// is out of range.
    pub fn step(&self) -> WizardStep {
        WizardStep::from_number(self.step).unwrap_or(WizardStep::BasicInfo)
    }

    /// Parsed save time for "last saved" display.
    pub fn saved_at(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::parse(&self.timestamp, &Rfc3339).ok()
    }
}

/// The single well-known slot holding the serialized draft.
#[derive(Debug, Clone)]
pub struct DraftSlot {
    path: PathBuf,
}

impl DraftSlot {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Platform data directory slot, e.g. `~/.local/share/kokua/onboarding-draft.json`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("No platform data directory available"))?;
        Ok(data_dir.join("kokua").join(DRAFT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore the saved snapshot, if any. A corrupt or unparsable slot is
    /// logged and treated as no draft; the load path never fails.
    pub async fn load(&self) -> Option<DraftSnapshot> {
        let raw = match async_fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "failed to read draft slot");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "ignoring corrupt draft snapshot");
                None
            }
        }
    }

    /// Overwrite the slot with a new snapshot.
    pub async fn store(&self, snapshot: &DraftSnapshot) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string(snapshot)?;
        async_fs::write(&self.path, raw).await?;
        tracing::debug!(path = ?self.path, step = snapshot.step, "draft saved");
        Ok(())
    }

    /// Delete the snapshot so a future session starts clean. Missing slot is
    /// not an error.
    pub async fn clear(&self) -> anyhow::Result<()> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Timer-backed single-slot write queue with replace-pending semantics: each
/// submitted snapshot restarts the quiet period, and only the payload that
/// survives it uninterrupted is written. At most one write per quiet
/// interval, always the most recent state.
#[derive(Clone)]
pub struct DebouncedWriter {
    tx: mpsc::UnboundedSender<(DraftSnapshot, oneshot::Sender<OffsetDateTime>)>,
}

impl std::fmt::Debug for DebouncedWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebouncedWriter").finish()
    }
}

impl DebouncedWriter {
    /// Spawn the writer task. Must be called within a tokio runtime.
    pub fn spawn(slot: DraftSlot, quiet_period: Duration) -> Self {
        let (tx, mut rx) =
            mpsc::unbounded_channel::<(DraftSnapshot, oneshot::Sender<OffsetDateTime>)>();
        tokio::spawn(async move {
            while let Some((mut pending, mut ack)) = rx.recv().await {
                loop {
                    tokio::select! {
                        next = rx.recv() => match next {
                            // A newer payload supersedes the pending one; its
                            // ack is dropped so the caller never sees a
                            // confirmation for data that was never written.
                            Some((snapshot, sender)) => {
                                pending = snapshot;
                                ack = sender;
                            }
                            // Handle dropped mid-wait: stop without flushing,
                            // matching "navigating away stops scheduling saves".
                            None => return,
                        },
                        _ = tokio::time::sleep(quiet_period) => {
                            match slot.store(&pending).await {
                                Ok(()) => {
                                    let _ = ack.send(OffsetDateTime::now_utc());
                                }
                                Err(e) => {
                                    tracing::warn!(error = %e, "debounced draft write failed");
                                }
                            }
                            break;
                        }
                    }
                }
            }
        });
        Self { tx }
    }

    /// Replace the pending payload and restart the quiet period. The returned
    /// receiver resolves with the write time once this exact payload reaches
    /// disk; it errors if a newer payload supersedes it or the write fails.
    pub fn submit(&self, snapshot: DraftSnapshot) -> oneshot::Receiver<OffsetDateTime> {
        let (ack, confirmation) = oneshot::channel();
        // Send only fails when the writer task is gone; nothing to save then.
        let _ = self.tx.send((snapshot, ack));
        confirmation
    }
}
