use std::sync::Arc;

use crate::analysis::IntakeOutcome;
use crate::core::db::{Organization, WorkspaceDb};
use crate::core::session::Session;
use crate::models::RfpDocument;

use super::screens::{
    AnalysisResultsScreen, CreateApplicationScreen, DashboardScreen, LoginScreen,
    OnboardingScreen, ProfileScreen, ScreenMessage, SelectTemplateScreen,
};

/// Navigation targets. Guards in `ScreenData::navigate` may redirect a
/// route when the state it needs is missing.
#[derive(Debug, Clone)]
pub enum Route {
    Login,
    Onboarding,
    Dashboard,
    CreateApplication(ApplicationKind),
    AnalysisResults {
        document: RfpDocument,
        outcome: IntakeOutcome,
    },
    TemplateSelection,
    Profile,
}

/// Which path the user picked when starting a new application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationKind {
    Rfp,
    Template,
}

#[derive(Debug, Clone)]
pub enum Message {
    WorkspaceOpened(Result<Arc<WorkspaceDb>, String>),
    SessionStarted(Result<(Session, Option<Organization>), String>),
    Login(ScreenMessage<LoginScreen>),
    Onboarding(ScreenMessage<OnboardingScreen>),
    Dashboard(ScreenMessage<DashboardScreen>),
    CreateApplication(ScreenMessage<CreateApplicationScreen>),
    AnalysisResults(ScreenMessage<AnalysisResultsScreen>),
    SelectTemplate(ScreenMessage<SelectTemplateScreen>),
    Profile(ScreenMessage<ProfileScreen>),
}
