use std::sync::Arc;

use crate::core::db::{Organization, WorkspaceDb};
use crate::core::session::Session;

/// Shared state every screen can read, owned by the application root.
/// `workspace` is filled in once the database has been opened, `session`
/// and `organization` once someone has signed in.
#[derive(Debug, Default)]
pub struct AppState {
    pub workspace: Option<Arc<WorkspaceDb>>,
    pub session: Option<Session>,
    pub organization: Option<Organization>,
}
