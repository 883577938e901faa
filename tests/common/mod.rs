mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from kokua for tests
pub use kokua::core::db::{
    ApplicationRepository, ApplicationStatus, IdentityRepository, NewApplication, NewOrganization,
    OrganizationRepository, OrganizationUpdate, SessionDb, WorkspaceDb,
};
pub use kokua::wizard::{Field, OnboardingData, StepWizard, WizardStep};
