use std::future::Future;

use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Draft,
    InProgress,
    Completed,
    Submitted,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "draft",
            ApplicationStatus::InProgress => "in_progress",
            ApplicationStatus::Completed => "completed",
            ApplicationStatus::Submitted => "submitted",
        }
    }
}

impl TryFrom<&str> for ApplicationStatus {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "draft" => Ok(ApplicationStatus::Draft),
            "in_progress" => Ok(ApplicationStatus::InProgress),
            "completed" => Ok(ApplicationStatus::Completed),
            "submitted" => Ok(ApplicationStatus::Submitted),
            _ => Err(anyhow::anyhow!("Invalid application status: {}", value)),
        }
    }
}

/// A grant application owned by the session's organization.
#[derive(Debug, Clone)]
pub struct GrantApplication {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub status: ApplicationStatus,
    pub template_id: Option<String>,
    pub rfp_file_url: Option<String>,
    pub content: serde_json::Value,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub(super) _guard: (),
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub title: String,
    pub template_id: Option<String>,
    pub rfp_file_url: Option<String>,
    pub content: serde_json::Value,
}

pub trait ApplicationRepository {
    fn get_applications(&self) -> impl Future<Output = anyhow::Result<Vec<GrantApplication>>>;

    /// Created in `draft` status; fails when the session has no organization
    /// yet.
    fn add_application(
        &self,
        application: NewApplication,
    ) -> impl Future<Output = anyhow::Result<GrantApplication>>;

    fn update_application_status(
        &self,
        application: &GrantApplication,
        status: ApplicationStatus,
    ) -> impl Future<Output = anyhow::Result<GrantApplication>>;
}
