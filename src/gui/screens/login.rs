use iced::widget::{button, column, container, text, text_input};
use iced::{Element, Task};

use super::{Screen, ScreenMessage};
use crate::gui::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    email: String,
    error: Option<String>,
    signing_in: bool,
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    EmailChanged(String),
    Submit,
}

#[derive(Debug, Clone)]
pub enum LoginParentMessage {
    SignIn(String),
}

impl LoginScreen {
    /// Called by the router when sign-in or workspace setup fails.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.signing_in = false;
    }
}

impl Screen for LoginScreen {
    type Message = LoginMessage;
    type ParentMessage = LoginParentMessage;

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LoginMessage::EmailChanged(email) => {
                self.email = email;
                self.error = None;
                Task::none()
            }
            LoginMessage::Submit => {
                let email = self.email.trim().to_string();
                if email.is_empty() {
                    self.error = Some("Enter your email address".to_string());
                    return Task::none();
                }
                if state.workspace.is_none() {
                    self.error = Some("The workspace is still opening, try again".to_string());
                    return Task::none();
                }
                self.signing_in = true;
                Task::done(ScreenMessage::ParentMessage(LoginParentMessage::SignIn(
                    email,
                )))
            }
        }
    }

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut form = column![
            text("Kokua Grants").size(32),
            text("Grant writing help for Hawaii nonprofits").size(16),
            text_input("you@organization.org", &self.email)
                .on_input(|email| ScreenMessage::ScreenMessage(LoginMessage::EmailChanged(email)))
                .on_submit(ScreenMessage::ScreenMessage(LoginMessage::Submit))
                .padding(10),
        ]
        .spacing(15)
        .max_width(360);

        if let Some(error) = &self.error {
            form = form.push(text(error).size(14).style(text::danger));
        }

        let label = if self.signing_in {
            "Signing in..."
        } else {
            "Sign In"
        };
        form = form.push(
            button(text(label))
                .on_press_maybe(
                    (!self.signing_in)
                        .then_some(ScreenMessage::ScreenMessage(LoginMessage::Submit)),
                )
                .padding(10),
        );

        container(form)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }
}
