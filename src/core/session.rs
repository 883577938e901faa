use crate::core::db::{Identity, IdentityRepository, SessionDb, WorkspaceDb};

/// Explicit session context: constructed at sign-in, dropped at sign-out, and
/// passed to views rather than accessed as an ambient singleton.
#[derive(Debug, Clone)]
pub struct Session {
    pub identity: Identity,
    pub db: SessionDb,
}

impl Session {
    pub async fn sign_in(workspace: &WorkspaceDb, email: &str) -> anyhow::Result<Self> {
        let identity = workspace.sign_in(email).await?;
        tracing::info!(email = %identity.email, id = %identity.id, "signed in");
        let db = workspace.session_repo(&identity);
        Ok(Self { identity, db })
    }

    /// Tear the session down. Consuming self is the teardown; nothing
    /// identity-scoped survives it.
    pub fn sign_out(self) {
        tracing::info!(email = %self.identity.email, "signed out");
    }
}
