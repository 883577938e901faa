use kokua::core::db::{IdentityRepository, NewOrganization, SessionDb, WorkspaceDb};
use kokua::core::session::Session;
use kokua::wizard::OnboardingData;

/// Creates a WorkspaceDb backed by a temporary sqlite file.
/// Returns both the workspace and the temp directory (which must be kept alive).
pub async fn create_test_workspace() -> (WorkspaceDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("test-workspace.db");
    let workspace = WorkspaceDb::new(&path)
        .await
        .expect("Failed to create test workspace");
    (workspace, dir)
}

/// Signs in a fresh identity and returns its bound repository.
pub async fn create_test_session(workspace: &WorkspaceDb, email: &str) -> SessionDb {
    let identity = workspace
        .sign_in(email)
        .await
        .expect("Failed to sign in test identity");
    workspace.session_repo(&identity)
}

/// A session context for the default test identity.
pub async fn sign_in_test_user(workspace: &WorkspaceDb) -> Session {
    Session::sign_in(workspace, "tester@example.org")
        .await
        .expect("Failed to sign in test user")
}

/// A fully filled organization profile.
pub fn make_new_organization(name: &str) -> NewOrganization {
    NewOrganization {
        name: name.to_string(),
        mission: "Protect native habitats across the islands".to_string(),
        contact_email: "grants@example.org".to_string(),
        contact_phone: Some("(808) 555-0100".to_string()),
        tax_id: Some("12-3456789".to_string()),
        is_501c3: true,
        annual_revenue: Some(250_000.0),
        annual_expenses: Some(230_000.0),
    }
}

/// Valid wizard form values that pass every step's validation.
pub fn complete_onboarding_data() -> OnboardingData {
    OnboardingData {
        name: "Ocean Keepers".to_string(),
        mission: "Protect reefs".to_string(),
        contact_email: "aloha@oceankeepers.org".to_string(),
        contact_phone: None,
        is_501c3: true,
        tax_id: None,
        annual_revenue: Some(120_000.0),
        annual_expenses: Some(95_000.0),
    }
}
