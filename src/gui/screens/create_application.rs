use std::path::PathBuf;

use iced::widget::{button, column, container, row, text};
use iced::{Element, Task};

use super::{Screen, ScreenMessage};
use crate::analysis::{
    DocumentIntake, FileConstraints, IntakeOutcome, KeywordAnalyzer, MockDocumentStore,
};
use crate::gui::message::ApplicationKind;
use crate::gui::state::AppState;
use crate::models::RfpDocument;

/// Entry point for a new application: either pick an RFP file to analyze or
/// jump to the template catalog.
#[derive(Debug, Clone)]
pub struct CreateApplicationScreen {
    kind: ApplicationKind,
    constraints: FileConstraints,
    selected: Option<RfpDocument>,
    error: Option<String>,
    analyzing: bool,
}

#[derive(Debug, Clone)]
pub enum CreateApplicationMessage {
    PickFile,
    FilePicked(Option<PathBuf>),
    RemoveFile,
    Analyze,
    IntakeFinished(Result<IntakeOutcome, String>),
}

#[derive(Debug, Clone)]
pub enum CreateApplicationParentMessage {
    Analyzed {
        document: RfpDocument,
        outcome: IntakeOutcome,
    },
    BrowseTemplates,
    Back,
}

impl CreateApplicationScreen {
    pub fn new(kind: ApplicationKind) -> Self {
        Self {
            kind,
            constraints: FileConstraints::default(),
            selected: None,
            error: None,
            analyzing: false,
        }
    }
}

impl Screen for CreateApplicationScreen {
    type Message = CreateApplicationMessage;
    type ParentMessage = CreateApplicationParentMessage;

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            CreateApplicationMessage::PickFile => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("RFP Document", &["pdf", "docx", "doc"])
                        .set_title("Select an RFP document")
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                |picked| ScreenMessage::ScreenMessage(CreateApplicationMessage::FilePicked(picked)),
            ),
            CreateApplicationMessage::FilePicked(None) => Task::none(),
            CreateApplicationMessage::FilePicked(Some(path)) => {
                match RfpDocument::from_path(&path) {
                    Ok(document) => match self.constraints.check(&document) {
                        Ok(()) => {
                            self.selected = Some(document);
                            self.error = None;
                        }
                        Err(e) => self.error = Some(e.to_string()),
                    },
                    Err(e) => self.error = Some(e.to_string()),
                }
                Task::none()
            }
            CreateApplicationMessage::RemoveFile => {
                self.selected = None;
                self.error = None;
                Task::none()
            }
            CreateApplicationMessage::Analyze => {
                let Some(document) = self.selected.clone() else {
                    return Task::none();
                };
                self.analyzing = true;
                self.error = None;
                Task::perform(
                    async move {
                        let intake = DocumentIntake::new(
                            FileConstraints::default(),
                            MockDocumentStore::new(),
                            KeywordAnalyzer::new(),
                        );
                        intake.submit(&document).await.map_err(|e| e.to_string())
                    },
                    |result| {
                        ScreenMessage::ScreenMessage(CreateApplicationMessage::IntakeFinished(
                            result,
                        ))
                    },
                )
            }
            CreateApplicationMessage::IntakeFinished(Ok(outcome)) => {
                self.analyzing = false;
                let Some(document) = self.selected.clone() else {
                    return Task::none();
                };
                Task::done(ScreenMessage::ParentMessage(
                    CreateApplicationParentMessage::Analyzed { document, outcome },
                ))
            }
            CreateApplicationMessage::IntakeFinished(Err(e)) => {
                self.analyzing = false;
                self.error = Some(e);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let page = match self.kind {
            ApplicationKind::Template => column![
                text("Start from a Template").size(26),
                text("Pick a proven structure and fill it in at your own pace").size(15),
                button("Browse Templates").padding(10).on_press(
                    ScreenMessage::ParentMessage(CreateApplicationParentMessage::BrowseTemplates)
                ),
                button("Back to Dashboard").on_press(ScreenMessage::ParentMessage(
                    CreateApplicationParentMessage::Back
                )),
            ]
            .spacing(20),
            ApplicationKind::Rfp => {
                let mut page = column![
                    text("Upload an RFP").size(26),
                    text("We accept .pdf, .docx and .doc files up to 10 MB").size(15),
                ]
                .spacing(20);

                match &self.selected {
                    Some(document) => {
                        page = page.push(
                            container(
                                row![
                                    text(&document.name).size(15),
                                    text(format!("{:.1} MB", document.size_mb())).size(13),
                                    button("Remove").on_press(ScreenMessage::ScreenMessage(
                                        CreateApplicationMessage::RemoveFile
                                    )),
                                ]
                                .spacing(15),
                            )
                            .style(iced::widget::container::bordered_box)
                            .padding(12),
                        );
                    }
                    None => {
                        page = page.push(
                            button("Choose a file...")
                                .padding(10)
                                .on_press(ScreenMessage::ScreenMessage(
                                    CreateApplicationMessage::PickFile,
                                )),
                        );
                    }
                }

                if let Some(error) = &self.error {
                    page = page.push(text(error).size(14).style(text::danger));
                }

                let label = if self.analyzing {
                    "Analyzing RFP..."
                } else {
                    "Analyze RFP"
                };
                page.push(
                    row![
                        button("Back").on_press(ScreenMessage::ParentMessage(
                            CreateApplicationParentMessage::Back
                        )),
                        button(text(label)).on_press_maybe(
                            (self.selected.is_some() && !self.analyzing).then_some(
                                ScreenMessage::ScreenMessage(CreateApplicationMessage::Analyze)
                            )
                        ),
                    ]
                    .spacing(10),
                )
            }
        };

        container(page.max_width(560))
            .center_x(iced::Length::Fill)
            .padding(30)
            .into()
    }
}
