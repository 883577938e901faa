use std::future::Future;

use time::OffsetDateTime;
use uuid::Uuid;

/// An authenticated identity. One row per email address.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub created_at: OffsetDateTime,
    pub(super) _guard: (),
}

pub trait IdentityRepository {
    /// Get-or-create the identity for an email address. Signing in with a
    /// known email returns the existing row.
    fn sign_in(&self, email: &str) -> impl Future<Output = anyhow::Result<Identity>>;

    fn get_identity_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Identity>>>;
}
