use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Task};

use super::{Screen, ScreenMessage};
use crate::analysis::IntakeOutcome;
use crate::core::db::{ApplicationRepository, GrantApplication, NewApplication};
use crate::gui::state::AppState;
use crate::models::RfpDocument;

/// Shows what the analyzer extracted from an uploaded RFP and lets the user
/// start an application seeded with it.
#[derive(Debug, Clone)]
pub struct AnalysisResultsScreen {
    document: RfpDocument,
    outcome: IntakeOutcome,
    creating: bool,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AnalysisResultsMessage {
    StartApplication,
    Created(Result<GrantApplication, String>),
}

#[derive(Debug, Clone)]
pub enum AnalysisResultsParentMessage {
    Done,
    Back,
}

impl AnalysisResultsScreen {
    pub fn new(document: RfpDocument, outcome: IntakeOutcome) -> Self {
        Self {
            document,
            outcome,
            creating: false,
            error: None,
        }
    }
}

impl Screen for AnalysisResultsScreen {
    type Message = AnalysisResultsMessage;
    type ParentMessage = AnalysisResultsParentMessage;

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            AnalysisResultsMessage::StartApplication => {
                let Some(session) = state.session.clone() else {
                    return Task::none();
                };
                self.creating = true;
                self.error = None;
                let title = self
                    .document
                    .name
                    .rsplit_once('.')
                    .map(|(stem, _)| stem.to_string())
                    .unwrap_or_else(|| self.document.name.clone());
                let application = NewApplication {
                    title: format!("Response to {title}"),
                    template_id: None,
                    rfp_file_url: Some(self.outcome.stored_url.clone()),
                    content: serde_json::json!({ "rfp_analysis": self.outcome.analysis }),
                };
                Task::perform(
                    async move {
                        session
                            .db
                            .add_application(application)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |result| ScreenMessage::ScreenMessage(AnalysisResultsMessage::Created(result)),
                )
            }
            AnalysisResultsMessage::Created(Ok(_)) => Task::done(ScreenMessage::ParentMessage(
                AnalysisResultsParentMessage::Done,
            )),
            AnalysisResultsMessage::Created(Err(e)) => {
                self.creating = false;
                self.error = Some(e);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let analysis = &self.outcome.analysis;

        let mut facts = row![].spacing(25);
        if let Some(deadline) = &analysis.deadline {
            facts = facts.push(column![
                text("Deadline").size(13),
                text(deadline).size(15),
            ]);
        }
        if let Some(funding) = &analysis.funding_amount {
            facts = facts.push(column![
                text("Funding").size(13),
                text(funding).size(15),
            ]);
        }

        let mut requirements = column![text("Requirements").size(18)].spacing(6);
        for requirement in &analysis.requirements {
            requirements = requirements.push(text(format!("- {requirement}")).size(14));
        }

        let mut focus = column![text("Focus Areas").size(18)].spacing(6);
        for area in &analysis.focus_areas {
            focus = focus.push(text(format!("- {area}")).size(14));
        }

        let mut sections = column![text("Key Sections to Prepare").size(18)].spacing(6);
        for section in &analysis.key_sections {
            sections = sections.push(text(format!("- {section}")).size(14));
        }

        let mut page = column![
            text(format!("Analysis of {}", self.document.name)).size(26),
            facts,
            requirements,
            focus,
            sections,
        ]
        .spacing(20)
        .max_width(640);

        if let Some(error) = &self.error {
            page = page.push(text(error).size(14).style(text::danger));
        }

        let label = if self.creating {
            "Creating..."
        } else {
            "Start My Application"
        };
        page = page.push(
            row![
                button("Back").on_press(ScreenMessage::ParentMessage(
                    AnalysisResultsParentMessage::Back
                )),
                button(text(label)).on_press_maybe((!self.creating).then_some(
                    ScreenMessage::ScreenMessage(AnalysisResultsMessage::StartApplication)
                )),
            ]
            .spacing(10),
        );

        container(scrollable(page))
            .center_x(iced::Length::Fill)
            .padding(30)
            .into()
    }
}
