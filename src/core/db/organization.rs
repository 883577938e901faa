use std::future::Future;

use time::OffsetDateTime;
use uuid::Uuid;

/// The nonprofit profile record owned by one identity. At most one per
/// identity; never deleted by this system.
#[derive(Debug, Clone)]
pub struct Organization {
    pub id: Uuid,
    pub identity_id: Uuid,
    pub name: String,
    pub mission: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub tax_id: Option<String>,
    pub is_501c3: bool,
    pub annual_revenue: Option<f64>,
    pub annual_expenses: Option<f64>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub(super) _guard: (),
}

#[derive(Debug, Clone)]
pub struct NewOrganization {
    pub name: String,
    pub mission: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub tax_id: Option<String>,
    pub is_501c3: bool,
    pub annual_revenue: Option<f64>,
    pub annual_expenses: Option<f64>,
}

/// Partial profile edit. Outer `None` leaves a column untouched; for the
/// nullable columns an inner `None` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct OrganizationUpdate {
    pub name: Option<String>,
    pub mission: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<Option<String>>,
    pub tax_id: Option<Option<String>>,
    pub is_501c3: Option<bool>,
    pub annual_revenue: Option<Option<f64>>,
    pub annual_expenses: Option<Option<f64>>,
}

pub trait OrganizationRepository {
    /// `None` means the identity has not onboarded yet; an expected outcome,
    /// not an error.
    fn get_organization(&self) -> impl Future<Output = anyhow::Result<Option<Organization>>>;

    fn create_organization(
        &self,
        org: NewOrganization,
    ) -> impl Future<Output = anyhow::Result<Organization>>;

    /// Fails when no organization exists for the identity.
    fn update_organization(
        &self,
        update: &OrganizationUpdate,
    ) -> impl Future<Output = anyhow::Result<Organization>>;
}
