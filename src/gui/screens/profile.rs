use iced::widget::{button, checkbox, column, container, row, scrollable, text};
use iced::{Element, Task};

use super::{Screen, ScreenMessage};
use crate::core::db::{Organization, OrganizationRepository, OrganizationUpdate};
use crate::gui::state::AppState;
use crate::gui::widgets::{format_amount, labeled_input, optional};
use crate::wizard::{Field, FieldError, OnboardingData, WizardStep, validate_step};

/// Edit the organization profile created during onboarding.
#[derive(Debug, Clone, Default)]
pub struct ProfileScreen {
    data: OnboardingData,
    revenue_input: String,
    expenses_input: String,
    errors: Vec<FieldError>,
    saving: bool,
    notice: Option<String>,
    save_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ProfileMessage {
    NameChanged(String),
    MissionChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    Toggled501c3(bool),
    TaxIdChanged(String),
    RevenueChanged(String),
    ExpensesChanged(String),
    Save,
    Saved(Result<Organization, String>),
}

#[derive(Debug, Clone)]
pub enum ProfileParentMessage {
    Back,
}

impl ProfileScreen {
    pub fn from_organization(organization: &Organization) -> Self {
        let data = OnboardingData {
            name: organization.name.clone(),
            mission: organization.mission.clone(),
            contact_email: organization.contact_email.clone(),
            contact_phone: organization.contact_phone.clone(),
            is_501c3: organization.is_501c3,
            tax_id: organization.tax_id.clone(),
            annual_revenue: organization.annual_revenue,
            annual_expenses: organization.annual_expenses,
        };
        Self {
            revenue_input: data.annual_revenue.map(format_amount).unwrap_or_default(),
            expenses_input: data.annual_expenses.map(format_amount).unwrap_or_default(),
            data,
            ..Self::default()
        }
    }

    fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn touch(&mut self) {
        self.notice = None;
        self.save_error = None;
    }
}

impl Screen for ProfileScreen {
    type Message = ProfileMessage;
    type ParentMessage = ProfileParentMessage;

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ProfileMessage::NameChanged(name) => {
                self.data.name = name;
                self.touch();
                Task::none()
            }
            ProfileMessage::MissionChanged(mission) => {
                self.data.mission = mission;
                self.touch();
                Task::none()
            }
            ProfileMessage::EmailChanged(email) => {
                self.data.contact_email = email;
                self.touch();
                Task::none()
            }
            ProfileMessage::PhoneChanged(phone) => {
                self.data.contact_phone = optional(phone);
                self.touch();
                Task::none()
            }
            ProfileMessage::Toggled501c3(value) => {
                self.data.is_501c3 = value;
                self.touch();
                Task::none()
            }
            ProfileMessage::TaxIdChanged(tax_id) => {
                self.data.tax_id = optional(tax_id);
                self.touch();
                Task::none()
            }
            ProfileMessage::RevenueChanged(raw) => {
                self.data.annual_revenue = raw.trim().parse().ok();
                self.revenue_input = raw;
                self.touch();
                Task::none()
            }
            ProfileMessage::ExpensesChanged(raw) => {
                self.data.annual_expenses = raw.trim().parse().ok();
                self.expenses_input = raw;
                self.touch();
                Task::none()
            }
            ProfileMessage::Save => {
                self.errors = WizardStep::ALL
                    .into_iter()
                    .flat_map(|step| validate_step(step, &self.data))
                    .collect();
                if !self.errors.is_empty() {
                    return Task::none();
                }
                let Some(session) = state.session.clone() else {
                    return Task::none();
                };
                self.saving = true;
                let update = OrganizationUpdate {
                    name: Some(self.data.name.clone()),
                    mission: Some(self.data.mission.clone()),
                    contact_email: Some(self.data.contact_email.clone()),
                    contact_phone: Some(self.data.contact_phone.clone()),
                    tax_id: Some(self.data.tax_id.clone()),
                    is_501c3: Some(self.data.is_501c3),
                    annual_revenue: Some(self.data.annual_revenue),
                    annual_expenses: Some(self.data.annual_expenses),
                };
                Task::perform(
                    async move {
                        session
                            .db
                            .update_organization(&update)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |result| ScreenMessage::ScreenMessage(ProfileMessage::Saved(result)),
                )
            }
            ProfileMessage::Saved(Ok(organization)) => {
                state.organization = Some(organization);
                self.saving = false;
                self.notice = Some("Profile updated successfully!".to_string());
                Task::none()
            }
            ProfileMessage::Saved(Err(e)) => {
                self.saving = false;
                self.save_error = Some(e);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut form = column![
            text("Organization Profile").size(26),
            labeled_input(
                "Organization Name *",
                "",
                &self.data.name,
                self.error_for(Field::Name),
                |v| ScreenMessage::ScreenMessage(ProfileMessage::NameChanged(v)),
            ),
            labeled_input(
                "Mission Statement *",
                "",
                &self.data.mission,
                self.error_for(Field::Mission),
                |v| ScreenMessage::ScreenMessage(ProfileMessage::MissionChanged(v)),
            ),
            labeled_input(
                "Contact Email *",
                "",
                &self.data.contact_email,
                self.error_for(Field::ContactEmail),
                |v| ScreenMessage::ScreenMessage(ProfileMessage::EmailChanged(v)),
            ),
            labeled_input(
                "Contact Phone",
                "",
                self.data.contact_phone.as_deref().unwrap_or(""),
                None,
                |v| ScreenMessage::ScreenMessage(ProfileMessage::PhoneChanged(v)),
            ),
            checkbox(self.data.is_501c3)
                .label("We are a 501(c)(3) organization")
                .on_toggle(|v| ScreenMessage::ScreenMessage(ProfileMessage::Toggled501c3(v))),
            labeled_input(
                "Tax ID / EIN",
                "",
                self.data.tax_id.as_deref().unwrap_or(""),
                None,
                |v| ScreenMessage::ScreenMessage(ProfileMessage::TaxIdChanged(v)),
            ),
            labeled_input("Annual Revenue ($)", "", &self.revenue_input, None, |v| {
                ScreenMessage::ScreenMessage(ProfileMessage::RevenueChanged(v))
            }),
            labeled_input("Annual Expenses ($)", "", &self.expenses_input, None, |v| {
                ScreenMessage::ScreenMessage(ProfileMessage::ExpensesChanged(v))
            }),
        ]
        .spacing(15)
        .max_width(560);

        if let Some(notice) = &self.notice {
            form = form.push(text(notice).size(14));
        }
        if let Some(error) = &self.save_error {
            form = form.push(text(error).size(14).style(text::danger));
        }

        let label = if self.saving { "Saving..." } else { "Save Changes" };
        form = form.push(
            row![
                button("Back").on_press(ScreenMessage::ParentMessage(ProfileParentMessage::Back)),
                button(text(label)).on_press_maybe((!self.saving).then_some(
                    ScreenMessage::ScreenMessage(ProfileMessage::Save)
                )),
            ]
            .spacing(10),
        );

        container(scrollable(form))
            .center_x(iced::Length::Fill)
            .padding(30)
            .into()
    }
}
