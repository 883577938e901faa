use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Task};

use super::{Screen, ScreenMessage};
use crate::core::db::{ApplicationRepository, GrantApplication};
use crate::gui::message::Message;
use crate::gui::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct DashboardScreen {
    applications: Vec<GrantApplication>,
    load_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    ApplicationsLoaded(Result<Vec<GrantApplication>, String>),
}

#[derive(Debug, Clone)]
pub enum DashboardParentMessage {
    StartRfp,
    StartTemplate,
    OpenProfile,
    SignOut,
}

impl DashboardScreen {
    pub fn load_task(state: &AppState) -> Task<Message> {
        let Some(session) = state.session.clone() else {
            return Task::none();
        };
        Task::perform(
            async move { session.db.get_applications().await.map_err(|e| e.to_string()) },
            |result| {
                Message::Dashboard(ScreenMessage::ScreenMessage(
                    DashboardMessage::ApplicationsLoaded(result),
                ))
            },
        )
    }
}

impl Screen for DashboardScreen {
    type Message = DashboardMessage;
    type ParentMessage = DashboardParentMessage;

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            DashboardMessage::ApplicationsLoaded(Ok(applications)) => {
                self.applications = applications;
                self.load_error = None;
                Task::none()
            }
            DashboardMessage::ApplicationsLoaded(Err(e)) => {
                self.load_error = Some(e);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let header = row![
            text("Kokua Grants").size(24),
            iced::widget::space::horizontal(),
            button("Profile").on_press(ScreenMessage::ParentMessage(
                DashboardParentMessage::OpenProfile
            )),
            button("Sign Out").on_press(ScreenMessage::ParentMessage(
                DashboardParentMessage::SignOut
            )),
        ]
        .spacing(10);

        let quick_start = row![
            button(
                column![
                    text("Upload an RFP").size(16),
                    text("Get an instant breakdown of what the funder asks for").size(13),
                ]
                .spacing(4)
            )
            .padding(15)
            .on_press(ScreenMessage::ParentMessage(
                DashboardParentMessage::StartRfp
            )),
            button(
                column![
                    text("Use a Template").size(16),
                    text("Start from a proven structure for common grant types").size(13),
                ]
                .spacing(4)
            )
            .padding(15)
            .on_press(ScreenMessage::ParentMessage(
                DashboardParentMessage::StartTemplate
            )),
        ]
        .spacing(15);

        let mut recents = column![text("Your Applications").size(20)].spacing(10);
        if let Some(error) = &self.load_error {
            recents = recents.push(text(error).size(14).style(text::danger));
        } else if self.applications.is_empty() {
            recents = recents.push(text("No applications yet. Start one above!").size(14));
        } else {
            for application in &self.applications {
                recents = recents.push(
                    container(
                        row![
                            text(&application.title).size(15),
                            iced::widget::space::horizontal(),
                            text(application.status.as_str()).size(13),
                        ]
                        .spacing(10),
                    )
                    .style(iced::widget::container::bordered_box)
                    .padding(12),
                );
            }
        }

        let page = column![header, quick_start, recents]
            .spacing(25)
            .max_width(720);

        container(scrollable(page))
            .center_x(iced::Length::Fill)
            .padding(30)
            .into()
    }
}
