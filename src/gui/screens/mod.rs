mod analysis_results;
mod create_application;
mod dashboard;
mod login;
mod onboarding;
mod profile;
mod select_template;

pub use analysis_results::{AnalysisResultsMessage, AnalysisResultsParentMessage, AnalysisResultsScreen};
pub use create_application::{
    CreateApplicationMessage, CreateApplicationParentMessage, CreateApplicationScreen,
};
pub use dashboard::{DashboardMessage, DashboardParentMessage, DashboardScreen};
pub use login::{LoginMessage, LoginParentMessage, LoginScreen};
pub use onboarding::{OnboardingMessage, OnboardingParentMessage, OnboardingScreen};
pub use profile::{ProfileMessage, ProfileParentMessage, ProfileScreen};
pub use select_template::{SelectTemplateMessage, SelectTemplateParentMessage, SelectTemplateScreen};

use iced::{Element, Task};

use super::message::{ApplicationKind, Message, Route};
use super::state::AppState;
use crate::core::session::Session;

/// One screen of the app. `Message` stays inside the screen; `ParentMessage`
/// is how a screen asks the router for something it cannot do itself
/// (navigation, session changes).
pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone + Send;
    type ParentMessage: std::fmt::Debug + Clone + Send;

    fn view(&self) -> Element<'_, ScreenMessage<Self>>;

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>>;
}

pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

// Derives would put bounds on `S` itself; the payloads are what need them.
impl<S: Screen> Clone for ScreenMessage<S> {
    fn clone(&self) -> Self {
        match self {
            Self::ScreenMessage(m) => Self::ScreenMessage(m.clone()),
            Self::ParentMessage(m) => Self::ParentMessage(m.clone()),
        }
    }
}

impl<S: Screen> std::fmt::Debug for ScreenMessage<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScreenMessage(m) => f.debug_tuple("ScreenMessage").field(m).finish(),
            Self::ParentMessage(m) => f.debug_tuple("ParentMessage").field(m).finish(),
        }
    }
}

/// Runs a screen's own messages and surfaces parent messages to the caller.
fn delegate<S: Screen + 'static>(
    screen: &mut S,
    message: ScreenMessage<S>,
    state: &mut AppState,
    wrap: fn(ScreenMessage<S>) -> Message,
) -> Result<Task<Message>, S::ParentMessage> {
    match message {
        ScreenMessage::ScreenMessage(m) => Ok(screen.update(m, state).map(wrap)),
        ScreenMessage::ParentMessage(m) => Err(m),
    }
}

/// The active screen, and the router between screens.
#[derive(Debug)]
pub enum ScreenData {
    Login(LoginScreen),
    Onboarding(OnboardingScreen),
    Dashboard(DashboardScreen),
    CreateApplication(CreateApplicationScreen),
    AnalysisResults(AnalysisResultsScreen),
    SelectTemplate(SelectTemplateScreen),
    Profile(ProfileScreen),
}

impl ScreenData {
    pub fn view(&self) -> Element<'_, Message> {
        match self {
            ScreenData::Login(s) => s.view().map(Message::Login),
            ScreenData::Onboarding(s) => s.view().map(Message::Onboarding),
            ScreenData::Dashboard(s) => s.view().map(Message::Dashboard),
            ScreenData::CreateApplication(s) => s.view().map(Message::CreateApplication),
            ScreenData::AnalysisResults(s) => s.view().map(Message::AnalysisResults),
            ScreenData::SelectTemplate(s) => s.view().map(Message::SelectTemplate),
            ScreenData::Profile(s) => s.view().map(Message::Profile),
        }
    }

    pub fn update(&mut self, message: Message, state: &mut AppState) -> Task<Message> {
        match message {
            Message::WorkspaceOpened(Ok(workspace)) => {
                state.workspace = Some(workspace);
                Task::none()
            }
            Message::WorkspaceOpened(Err(e)) => {
                tracing::error!(error = %e, "failed to open workspace");
                if let ScreenData::Login(screen) = self {
                    screen.fail(format!("Could not open the workspace: {e}"));
                }
                Task::none()
            }
            Message::SessionStarted(Ok((session, organization))) => {
                state.session = Some(session);
                state.organization = organization;
                self.navigate(Route::Dashboard, state)
            }
            Message::SessionStarted(Err(e)) => {
                if let ScreenData::Login(screen) = self {
                    screen.fail(e);
                }
                Task::none()
            }
            Message::Login(msg) => {
                let ScreenData::Login(screen) = self else {
                    return Task::none();
                };
                match delegate(screen, msg, state, Message::Login) {
                    Ok(task) => task,
                    Err(LoginParentMessage::SignIn(email)) => start_session(state, email),
                }
            }
            Message::Onboarding(msg) => {
                let ScreenData::Onboarding(screen) = self else {
                    return Task::none();
                };
                match delegate(screen, msg, state, Message::Onboarding) {
                    Ok(task) => task,
                    Err(OnboardingParentMessage::Completed) => {
                        self.navigate(Route::Dashboard, state)
                    }
                }
            }
            Message::Dashboard(msg) => {
                let ScreenData::Dashboard(screen) = self else {
                    return Task::none();
                };
                match delegate(screen, msg, state, Message::Dashboard) {
                    Ok(task) => task,
                    Err(DashboardParentMessage::StartRfp) => {
                        self.navigate(Route::CreateApplication(ApplicationKind::Rfp), state)
                    }
                    Err(DashboardParentMessage::StartTemplate) => {
                        self.navigate(Route::CreateApplication(ApplicationKind::Template), state)
                    }
                    Err(DashboardParentMessage::OpenProfile) => {
                        self.navigate(Route::Profile, state)
                    }
                    Err(DashboardParentMessage::SignOut) => {
                        if let Some(session) = state.session.take() {
                            session.sign_out();
                        }
                        state.organization = None;
                        self.navigate(Route::Login, state)
                    }
                }
            }
            Message::CreateApplication(msg) => {
                let ScreenData::CreateApplication(screen) = self else {
                    return Task::none();
                };
                match delegate(screen, msg, state, Message::CreateApplication) {
                    Ok(task) => task,
                    Err(CreateApplicationParentMessage::Analyzed { document, outcome }) => {
                        self.navigate(Route::AnalysisResults { document, outcome }, state)
                    }
                    Err(CreateApplicationParentMessage::BrowseTemplates) => {
                        self.navigate(Route::TemplateSelection, state)
                    }
                    Err(CreateApplicationParentMessage::Back) => {
                        self.navigate(Route::Dashboard, state)
                    }
                }
            }
            Message::AnalysisResults(msg) => {
                let ScreenData::AnalysisResults(screen) = self else {
                    return Task::none();
                };
                match delegate(screen, msg, state, Message::AnalysisResults) {
                    Ok(task) => task,
                    Err(AnalysisResultsParentMessage::Done) => {
                        self.navigate(Route::Dashboard, state)
                    }
                    Err(AnalysisResultsParentMessage::Back) => {
                        self.navigate(Route::CreateApplication(ApplicationKind::Rfp), state)
                    }
                }
            }
            Message::SelectTemplate(msg) => {
                let ScreenData::SelectTemplate(screen) = self else {
                    return Task::none();
                };
                match delegate(screen, msg, state, Message::SelectTemplate) {
                    Ok(task) => task,
                    Err(SelectTemplateParentMessage::Done) => {
                        self.navigate(Route::Dashboard, state)
                    }
                    Err(SelectTemplateParentMessage::Back) => {
                        self.navigate(Route::Dashboard, state)
                    }
                }
            }
            Message::Profile(msg) => {
                let ScreenData::Profile(screen) = self else {
                    return Task::none();
                };
                match delegate(screen, msg, state, Message::Profile) {
                    Ok(task) => task,
                    Err(ProfileParentMessage::Back) => self.navigate(Route::Dashboard, state),
                }
            }
        }
    }

    /// Switch screens, redirecting routes whose prerequisites are missing:
    /// everything needs a session, and everything past onboarding needs an
    /// organization.
    fn navigate(&mut self, route: Route, state: &AppState) -> Task<Message> {
        if state.session.is_none() {
            *self = ScreenData::Login(LoginScreen::default());
            return Task::none();
        }
        if state.organization.is_none() && !matches!(route, Route::Login | Route::Onboarding) {
            *self = ScreenData::Onboarding(OnboardingScreen::new());
            return OnboardingScreen::load_task();
        }
        match route {
            Route::Login => {
                *self = ScreenData::Login(LoginScreen::default());
                Task::none()
            }
            Route::Onboarding => {
                *self = ScreenData::Onboarding(OnboardingScreen::new());
                OnboardingScreen::load_task()
            }
            Route::Dashboard => {
                *self = ScreenData::Dashboard(DashboardScreen::default());
                DashboardScreen::load_task(state)
            }
            Route::CreateApplication(kind) => {
                *self = ScreenData::CreateApplication(CreateApplicationScreen::new(kind));
                Task::none()
            }
            Route::AnalysisResults { document, outcome } => {
                *self = ScreenData::AnalysisResults(AnalysisResultsScreen::new(document, outcome));
                Task::none()
            }
            Route::TemplateSelection => {
                *self = ScreenData::SelectTemplate(SelectTemplateScreen::default());
                Task::none()
            }
            Route::Profile => {
                // The guard above means an organization is present here.
                let Some(organization) = state.organization.as_ref() else {
                    return Task::none();
                };
                *self = ScreenData::Profile(ProfileScreen::from_organization(organization));
                Task::none()
            }
        }
    }
}

fn start_session(state: &AppState, email: String) -> Task<Message> {
    let Some(workspace) = state.workspace.clone() else {
        return Task::none();
    };
    Task::perform(
        async move {
            use crate::core::db::OrganizationRepository;

            let session = Session::sign_in(&workspace, &email)
                .await
                .map_err(|e| e.to_string())?;
            let organization = session
                .db
                .get_organization()
                .await
                .map_err(|e| e.to_string())?;
            Ok((session, organization))
        },
        Message::SessionStarted,
    )
}
