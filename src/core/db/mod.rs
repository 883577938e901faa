mod application;
mod identity;
mod organization;
mod state;

use std::{path::Path, sync::Arc};

use anyhow::Context;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use state::WorkspaceState;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

pub use application::{
    ApplicationRepository, ApplicationStatus, GrantApplication, NewApplication,
};
pub use identity::{Identity, IdentityRepository};
pub use organization::{
    NewOrganization, Organization, OrganizationRepository, OrganizationUpdate,
};

/// Identity-level handle on the single-file SQLite workspace.
#[derive(Debug)]
pub struct WorkspaceDb {
    state: Arc<WorkspaceState>,
}

impl WorkspaceDb {
    /// Platform data directory location, e.g. `~/.local/share/kokua/workspace.db`.
    pub fn default_path() -> anyhow::Result<std::path::PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("No platform data directory available"))?;
        Ok(data_dir.join("kokua").join("workspace.db"))
    }

    pub async fn new<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        Ok(Self {
            state: Arc::new(WorkspaceState::new(db_file).await?),
        })
    }

    /// Repository bound to one signed-in identity. Every query it runs is
    /// filtered by this identity's ownership.
    pub fn session_repo(&self, identity: &Identity) -> SessionDb {
        SessionDb {
            state: self.state.clone(),
            identity_id: identity.id,
        }
    }

    /// Checkpoint the WAL and release all database handles.
    pub async fn close(&self) -> anyhow::Result<()> {
        self.state.close().await
    }
}

/// Repository scoped to one identity.
#[derive(Debug, Clone)]
pub struct SessionDb {
    state: Arc<WorkspaceState>,
    identity_id: Uuid,
}

impl SessionDb {
    pub fn identity_id(&self) -> Uuid {
        self.identity_id
    }

    async fn organization_id(&self) -> anyhow::Result<Option<Uuid>> {
        let mut conn = self.state.conn().await?;
        let row = sqlx::query(r#"SELECT id FROM organization WHERE identity_id = $1"#)
            .bind(self.identity_id.to_string())
            .fetch_optional(&mut *conn)
            .await?;
        row.map(|r| parse_uuid(&r, "id")).transpose()
    }
}

impl IdentityRepository for WorkspaceDb {
    async fn sign_in(&self, email: &str) -> anyhow::Result<Identity> {
        let mut conn = self.state.conn().await?;
        let row = sqlx::query(
            r#"INSERT INTO identity (id, email, created_at) VALUES ($1, $2, $3)
            ON CONFLICT (email) DO UPDATE SET email = excluded.email
            RETURNING id, email, created_at"#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(email)
        .bind(format_ts(OffsetDateTime::now_utc())?)
        .fetch_one(&mut *conn)
        .await?;
        identity_from_row(&row)
    }

    async fn get_identity_by_email(&self, email: &str) -> anyhow::Result<Option<Identity>> {
        let mut conn = self.state.conn().await?;
        let row = sqlx::query(r#"SELECT id, email, created_at FROM identity WHERE email = $1"#)
            .bind(email)
            .fetch_optional(&mut *conn)
            .await?;
        row.map(|r| identity_from_row(&r)).transpose()
    }
}

impl OrganizationRepository for SessionDb {
    async fn get_organization(&self) -> anyhow::Result<Option<Organization>> {
        let mut conn = self.state.conn().await?;
        let row = sqlx::query(
            r#"SELECT id, identity_id, name, mission, contact_email, contact_phone,
                tax_id, is_501c3, annual_revenue, annual_expenses, created_at, updated_at
            FROM organization WHERE identity_id = $1"#,
        )
        .bind(self.identity_id.to_string())
        .fetch_optional(&mut *conn)
        .await?;
        row.map(|r| organization_from_row(&r)).transpose()
    }

    async fn create_organization(&self, org: NewOrganization) -> anyhow::Result<Organization> {
        let mut conn = self.state.conn().await?;
        let now = format_ts(OffsetDateTime::now_utc())?;
        let row = sqlx::query(
            r#"INSERT INTO organization
                (id, identity_id, name, mission, contact_email, contact_phone,
                 tax_id, is_501c3, annual_revenue, annual_expenses, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
            RETURNING id, identity_id, name, mission, contact_email, contact_phone,
                tax_id, is_501c3, annual_revenue, annual_expenses, created_at, updated_at"#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(self.identity_id.to_string())
        .bind(&org.name)
        .bind(&org.mission)
        .bind(&org.contact_email)
        .bind(&org.contact_phone)
        .bind(&org.tax_id)
        .bind(org.is_501c3)
        .bind(org.annual_revenue)
        .bind(org.annual_expenses)
        .bind(&now)
        .fetch_one(&mut *conn)
        .await
        .context("Failed to create organization")?;
        organization_from_row(&row)
    }

    async fn update_organization(
        &self,
        update: &OrganizationUpdate,
    ) -> anyhow::Result<Organization> {
        let existing = self
            .get_organization()
            .await?
            .ok_or_else(|| anyhow::anyhow!("No organization to update"))?;

        let contact_phone = match &update.contact_phone {
            Some(v) => v.clone(),
            None => existing.contact_phone.clone(),
        };
        let tax_id = match &update.tax_id {
            Some(v) => v.clone(),
            None => existing.tax_id.clone(),
        };
        let annual_revenue = match update.annual_revenue {
            Some(v) => v,
            None => existing.annual_revenue,
        };
        let annual_expenses = match update.annual_expenses {
            Some(v) => v,
            None => existing.annual_expenses,
        };

        let mut conn = self.state.conn().await?;
        let row = sqlx::query(
            r#"UPDATE organization SET
                name = COALESCE($1, name),
                mission = COALESCE($2, mission),
                contact_email = COALESCE($3, contact_email),
                contact_phone = $4,
                tax_id = $5,
                is_501c3 = COALESCE($6, is_501c3),
                annual_revenue = $7,
                annual_expenses = $8,
                updated_at = $9
            WHERE id = $10 AND identity_id = $11
            RETURNING id, identity_id, name, mission, contact_email, contact_phone,
                tax_id, is_501c3, annual_revenue, annual_expenses, created_at, updated_at"#,
        )
        .bind(&update.name)
        .bind(&update.mission)
        .bind(&update.contact_email)
        .bind(contact_phone)
        .bind(tax_id)
        .bind(update.is_501c3)
        .bind(annual_revenue)
        .bind(annual_expenses)
        .bind(format_ts(OffsetDateTime::now_utc())?)
        .bind(existing.id.to_string())
        .bind(self.identity_id.to_string())
        .fetch_one(&mut *conn)
        .await
        .context("Failed to update organization")?;
        organization_from_row(&row)
    }
}

impl ApplicationRepository for SessionDb {
    async fn get_applications(&self) -> anyhow::Result<Vec<GrantApplication>> {
        let mut conn = self.state.conn().await?;
        sqlx::query(
            r#"SELECT a.id, a.organization_id, a.title, a.status, a.template_id,
                a.rfp_file_url, a.content, a.created_at, a.updated_at
            FROM application a
            JOIN organization o ON a.organization_id = o.id
            WHERE o.identity_id = $1
            ORDER BY a.updated_at DESC"#,
        )
        .bind(self.identity_id.to_string())
        .fetch_all(&mut *conn)
        .await?
        .iter()
        .map(application_from_row)
        .collect()
    }

    async fn add_application(
        &self,
        application: NewApplication,
    ) -> anyhow::Result<GrantApplication> {
        let organization_id = self
            .organization_id()
            .await?
            .ok_or_else(|| anyhow::anyhow!("No organization to attach the application to"))?;

        let mut conn = self.state.conn().await?;
        let now = format_ts(OffsetDateTime::now_utc())?;
        let row = sqlx::query(
            r#"INSERT INTO application
                (id, organization_id, title, status, template_id, rfp_file_url,
                 content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING id, organization_id, title, status, template_id, rfp_file_url,
                content, created_at, updated_at"#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(organization_id.to_string())
        .bind(&application.title)
        .bind(ApplicationStatus::Draft.as_str())
        .bind(&application.template_id)
        .bind(&application.rfp_file_url)
        .bind(serde_json::to_string(&application.content)?)
        .bind(&now)
        .fetch_one(&mut *conn)
        .await
        .context("Failed to create application")?;
        application_from_row(&row)
    }

    async fn update_application_status(
        &self,
        application: &GrantApplication,
        status: ApplicationStatus,
    ) -> anyhow::Result<GrantApplication> {
        let mut conn = self.state.conn().await?;
        let row = sqlx::query(
            r#"UPDATE application SET status = $1, updated_at = $2
            WHERE id = $3 AND organization_id IN
                (SELECT id FROM organization WHERE identity_id = $4)
            RETURNING id, organization_id, title, status, template_id, rfp_file_url,
                content, created_at, updated_at"#,
        )
        .bind(status.as_str())
        .bind(format_ts(OffsetDateTime::now_utc())?)
        .bind(application.id.to_string())
        .bind(self.identity_id.to_string())
        .fetch_one(&mut *conn)
        .await
        .context("Failed to update application status")?;
        application_from_row(&row)
    }
}

fn format_ts(ts: OffsetDateTime) -> anyhow::Result<String> {
    Ok(ts.format(&Rfc3339)?)
}

fn parse_ts(row: &SqliteRow, column: &str) -> anyhow::Result<OffsetDateTime> {
    let raw: String = row.try_get(column)?;
    OffsetDateTime::parse(&raw, &Rfc3339)
        .with_context(|| format!("Invalid timestamp in column {}", column))
}

fn parse_uuid(row: &SqliteRow, column: &str) -> anyhow::Result<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).with_context(|| format!("Invalid UUID in column {}", column))
}

fn identity_from_row(row: &SqliteRow) -> anyhow::Result<Identity> {
    Ok(Identity {
        id: parse_uuid(row, "id")?,
        email: row.try_get("email")?,
        created_at: parse_ts(row, "created_at")?,
        _guard: (),
    })
}

fn organization_from_row(row: &SqliteRow) -> anyhow::Result<Organization> {
    Ok(Organization {
        id: parse_uuid(row, "id")?,
        identity_id: parse_uuid(row, "identity_id")?,
        name: row.try_get("name")?,
        mission: row.try_get("mission")?,
        contact_email: row.try_get("contact_email")?,
        contact_phone: row.try_get("contact_phone")?,
        tax_id: row.try_get("tax_id")?,
        is_501c3: row.try_get("is_501c3")?,
        annual_revenue: row.try_get("annual_revenue")?,
        annual_expenses: row.try_get("annual_expenses")?,
        created_at: parse_ts(row, "created_at")?,
        updated_at: parse_ts(row, "updated_at")?,
        _guard: (),
    })
}

fn application_from_row(row: &SqliteRow) -> anyhow::Result<GrantApplication> {
    let status_raw: String = row.try_get("status")?;
    let content_raw: String = row.try_get("content")?;
    Ok(GrantApplication {
        id: parse_uuid(row, "id")?,
        organization_id: parse_uuid(row, "organization_id")?,
        title: row.try_get("title")?,
        status: ApplicationStatus::try_from(status_raw.as_str())?,
        template_id: row.try_get("template_id")?,
        rfp_file_url: row.try_get("rfp_file_url")?,
        content: serde_json::from_str(&content_raw).context("Invalid application content JSON")?,
        created_at: parse_ts(row, "created_at")?,
        updated_at: parse_ts(row, "updated_at")?,
        _guard: (),
    })
}
