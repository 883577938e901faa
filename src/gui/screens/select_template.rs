use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Task};

use super::{Screen, ScreenMessage};
use crate::core::db::{ApplicationRepository, GrantApplication, NewApplication};
use crate::gui::state::AppState;
use crate::templates::{GrantTemplate, grant_templates, template_by_id};

/// Browse the template catalog and start an application from one.
#[derive(Debug, Clone, Default)]
pub struct SelectTemplateScreen {
    creating: Option<&'static str>,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum SelectTemplateMessage {
    Choose(&'static str),
    Created(Result<GrantApplication, String>),
}

#[derive(Debug, Clone)]
pub enum SelectTemplateParentMessage {
    Done,
    Back,
}

impl Screen for SelectTemplateScreen {
    type Message = SelectTemplateMessage;
    type ParentMessage = SelectTemplateParentMessage;

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            SelectTemplateMessage::Choose(id) => {
                let Some(session) = state.session.clone() else {
                    return Task::none();
                };
                let Some(template) = template_by_id(id) else {
                    self.error = Some(format!("Unknown template: {id}"));
                    return Task::none();
                };
                self.creating = Some(id);
                self.error = None;
                let application = NewApplication {
                    title: template.title.to_string(),
                    template_id: Some(template.id.to_string()),
                    rfp_file_url: None,
                    content: serde_json::json!({}),
                };
                Task::perform(
                    async move {
                        session
                            .db
                            .add_application(application)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |result| ScreenMessage::ScreenMessage(SelectTemplateMessage::Created(result)),
                )
            }
            SelectTemplateMessage::Created(Ok(_)) => Task::done(ScreenMessage::ParentMessage(
                SelectTemplateParentMessage::Done,
            )),
            SelectTemplateMessage::Created(Err(e)) => {
                self.creating = None;
                self.error = Some(e);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut catalog = column![
            text("Choose a Template").size(26),
            text("Each template walks you through the sections funders expect").size(15),
        ]
        .spacing(15);

        if let Some(error) = &self.error {
            catalog = catalog.push(text(error).size(14).style(text::danger));
        }

        for template in grant_templates() {
            catalog = catalog.push(self.template_card(template));
        }

        catalog = catalog.push(
            button("Back to Dashboard").on_press(ScreenMessage::ParentMessage(
                SelectTemplateParentMessage::Back,
            )),
        );

        container(scrollable(catalog.max_width(640)))
            .center_x(iced::Length::Fill)
            .padding(30)
            .into()
    }
}

impl SelectTemplateScreen {
    fn template_card(
        &self,
        template: &'static GrantTemplate,
    ) -> Element<'_, ScreenMessage<Self>> {
        let mut areas = row![].spacing(8);
        for area in template.focus_areas.iter().take(3) {
            areas = areas.push(text(*area).size(12));
        }

        let busy = self.creating == Some(template.id);
        let label = if busy { "Creating..." } else { "Use This Template" };

        container(
            column![
                row![
                    text(template.icon).size(22),
                    text(template.title).size(18),
                ]
                .spacing(10),
                text(template.description).size(14),
                row![
                    text(template.estimated_time).size(13),
                    text(template.difficulty.label()).size(13),
                    text(format!("{} sections", template.sections.len())).size(13),
                ]
                .spacing(15),
                areas,
                button(text(label)).on_press_maybe((self.creating.is_none()).then_some(
                    ScreenMessage::ScreenMessage(SelectTemplateMessage::Choose(template.id))
                )),
            ]
            .spacing(8),
        )
        .style(iced::widget::container::bordered_box)
        .padding(15)
        .into()
    }
}
