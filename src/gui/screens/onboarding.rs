use std::path::PathBuf;

use iced::widget::{button, checkbox, column, container, row, scrollable, text};
use iced::{Element, Task};
use time::OffsetDateTime;

use super::{Screen, ScreenMessage};
use crate::core::db::Organization;
use crate::draft::{DEFAULT_QUIET_PERIOD, DebouncedWriter, DraftSlot, DraftSnapshot};
use crate::gui::message::Message;
use crate::gui::state::AppState;
use crate::gui::widgets::{format_amount, labeled_input, optional, step_header};
use crate::wizard::{Field, StepWizard, WizardStep};

/// The four-step organization setup wizard, with drafts saved in the
/// background while the user types.
#[derive(Debug, Clone)]
pub struct OnboardingScreen {
    wizard: StepWizard,
    slot: Option<DraftSlot>,
    writer: Option<DebouncedWriter>,
    revenue_input: String,
    expenses_input: String,
    last_saved: Option<String>,
    submitting: bool,
    submit_error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum OnboardingMessage {
    /// The draft slot has been read and the background writer started.
    Ready {
        slot: DraftSlot,
        snapshot: Option<DraftSnapshot>,
        writer: DebouncedWriter,
    },
    NameChanged(String),
    MissionChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    Toggled501c3(bool),
    TaxIdChanged(String),
    RevenueChanged(String),
    ExpensesChanged(String),
    /// The background writer confirmed a snapshot reached disk.
    DraftStored(Option<OffsetDateTime>),
    Next,
    Previous,
    Submit,
    Submitted(Result<Organization, String>),
}

#[derive(Debug, Clone)]
pub enum OnboardingParentMessage {
    Completed,
}

impl OnboardingScreen {
    pub fn new() -> Self {
        Self {
            wizard: StepWizard::new(),
            slot: None,
            writer: None,
            revenue_input: String::new(),
            expenses_input: String::new(),
            last_saved: None,
            submitting: false,
            submit_error: None,
        }
    }

    /// Restore any saved draft and start the debounced writer. Runs on the
    /// runtime executor so the writer task has somewhere to live.
    pub fn load_task() -> Task<Message> {
        Task::perform(
            async {
                let path = DraftSlot::default_path()
                    .unwrap_or_else(|_| PathBuf::from("onboarding-draft.json"));
                let slot = DraftSlot::new(path);
                let snapshot = slot.load().await;
                let writer = DebouncedWriter::spawn(slot.clone(), DEFAULT_QUIET_PERIOD);
                (slot, snapshot, writer)
            },
            |(slot, snapshot, writer)| {
                Message::Onboarding(ScreenMessage::ScreenMessage(OnboardingMessage::Ready {
                    slot,
                    snapshot,
                    writer,
                }))
            },
        )
    }

    /// Queue a draft save reflecting the current values. The writer only
    /// touches disk once typing pauses; the returned task reports back when
    /// the write actually lands, which is what updates the saved-at display.
    fn autosave(&mut self) -> Task<ScreenMessage<Self>> {
        let Some(writer) = &self.writer else {
            return Task::none();
        };
        let snapshot = DraftSnapshot::capture(self.wizard.data(), self.wizard.step());
        let confirmation = writer.submit(snapshot);
        Task::perform(async move { confirmation.await.ok() }, |written_at| {
            ScreenMessage::ScreenMessage(OnboardingMessage::DraftStored(written_at))
        })
    }
}

impl Default for OnboardingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for OnboardingScreen {
    type Message = OnboardingMessage;
    type ParentMessage = OnboardingParentMessage;

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            OnboardingMessage::Ready {
                slot,
                snapshot,
                writer,
            } => {
                if let Some(snapshot) = snapshot {
                    self.revenue_input = snapshot
                        .data
                        .annual_revenue
                        .map(format_amount)
                        .unwrap_or_default();
                    self.expenses_input = snapshot
                        .data
                        .annual_expenses
                        .map(format_amount)
                        .unwrap_or_default();
                    self.last_saved = snapshot.saved_at().and_then(saved_clock);
                    let step = snapshot.step();
                    self.wizard = StepWizard::resume(snapshot.data, step);
                }
                self.slot = Some(slot);
                self.writer = Some(writer);
                Task::none()
            }
            OnboardingMessage::NameChanged(name) => {
                self.wizard.data_mut().name = name;
                self.autosave()
            }
            OnboardingMessage::MissionChanged(mission) => {
                self.wizard.data_mut().mission = mission;
                self.autosave()
            }
            OnboardingMessage::EmailChanged(email) => {
                self.wizard.data_mut().contact_email = email;
                self.autosave()
            }
            OnboardingMessage::PhoneChanged(phone) => {
                self.wizard.data_mut().contact_phone = optional(phone);
                self.autosave()
            }
            OnboardingMessage::Toggled501c3(value) => {
                self.wizard.data_mut().is_501c3 = value;
                self.autosave()
            }
            OnboardingMessage::TaxIdChanged(tax_id) => {
                self.wizard.data_mut().tax_id = optional(tax_id);
                self.autosave()
            }
            OnboardingMessage::RevenueChanged(raw) => {
                self.wizard.data_mut().annual_revenue = raw.trim().parse().ok();
                self.revenue_input = raw;
                self.autosave()
            }
            OnboardingMessage::ExpensesChanged(raw) => {
                self.wizard.data_mut().annual_expenses = raw.trim().parse().ok();
                self.expenses_input = raw;
                self.autosave()
            }
            OnboardingMessage::DraftStored(written_at) => {
                // None means the payload was superseded or the write failed;
                // the display keeps whatever save last succeeded.
                if let Some(written_at) = written_at {
                    self.last_saved = saved_clock(written_at);
                }
                Task::none()
            }
            OnboardingMessage::Next => {
                if self.wizard.advance() {
                    self.autosave()
                } else {
                    Task::none()
                }
            }
            OnboardingMessage::Previous => {
                if self.wizard.retreat() {
                    self.autosave()
                } else {
                    Task::none()
                }
            }
            OnboardingMessage::Submit => {
                let Some(session) = state.session.clone() else {
                    return Task::none();
                };
                let Some(slot) = self.slot.clone() else {
                    return Task::none();
                };
                self.submitting = true;
                self.submit_error = None;
                let mut wizard = self.wizard.clone();
                Task::perform(
                    async move {
                        let organization =
                            wizard.submit(&session.db).await.map_err(|e| e.to_string())?;
                        slot.clear().await.map_err(|e| e.to_string())?;
                        Ok(organization)
                    },
                    |result| ScreenMessage::ScreenMessage(OnboardingMessage::Submitted(result)),
                )
            }
            OnboardingMessage::Submitted(Ok(organization)) => {
                state.organization = Some(organization);
                Task::done(ScreenMessage::ParentMessage(
                    OnboardingParentMessage::Completed,
                ))
            }
            OnboardingMessage::Submitted(Err(e)) => {
                self.submitting = false;
                self.submit_error = Some(e);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let step = self.wizard.step();
        let body: Element<'_, ScreenMessage<Self>> = match step {
            WizardStep::BasicInfo => self.basic_info(),
            WizardStep::ContactDetails => self.contact_details(),
            WizardStep::LegalFinancial => self.legal_financial(),
            WizardStep::Review => self.review(),
        };

        let mut nav = row![
            button("Previous").on_press_maybe(
                (!step.is_first()).then_some(ScreenMessage::ScreenMessage(
                    OnboardingMessage::Previous
                ))
            ),
        ]
        .spacing(10);
        if step.is_last() {
            let label = if self.submitting {
                "Setting up..."
            } else {
                "Complete Setup"
            };
            nav = nav.push(
                button(text(label)).on_press_maybe(
                    (!self.submitting && self.writer.is_some()).then_some(
                        ScreenMessage::ScreenMessage(OnboardingMessage::Submit),
                    ),
                ),
            );
        } else {
            nav = nav.push(
                button("Next").on_press(ScreenMessage::ScreenMessage(OnboardingMessage::Next)),
            );
        }

        let mut page = column![
            text("Welcome to Kokua Grants").size(28),
            step_header(step),
            body,
            nav,
        ]
        .spacing(20)
        .max_width(560);

        if let Some(error) = &self.submit_error {
            page = page.push(text(error).size(14).style(text::danger));
        }
        if let Some(saved) = &self.last_saved {
            page = page.push(text(format!("Draft saved at {saved}")).size(12));
        }

        container(scrollable(page))
            .center_x(iced::Length::Fill)
            .padding(30)
            .into()
    }
}

impl OnboardingScreen {
    fn basic_info(&self) -> Element<'_, ScreenMessage<Self>> {
        column![
            labeled_input(
                "Organization Name *",
                "e.g. Malama Aina Foundation",
                &self.wizard.data().name,
                self.wizard.error_for(Field::Name),
                |v| ScreenMessage::ScreenMessage(OnboardingMessage::NameChanged(v)),
            ),
            labeled_input(
                "Mission Statement *",
                "What does your organization do?",
                &self.wizard.data().mission,
                self.wizard.error_for(Field::Mission),
                |v| ScreenMessage::ScreenMessage(OnboardingMessage::MissionChanged(v)),
            ),
        ]
        .spacing(15)
        .into()
    }

    fn contact_details(&self) -> Element<'_, ScreenMessage<Self>> {
        column![
            labeled_input(
                "Contact Email *",
                "grants@organization.org",
                &self.wizard.data().contact_email,
                self.wizard.error_for(Field::ContactEmail),
                |v| ScreenMessage::ScreenMessage(OnboardingMessage::EmailChanged(v)),
            ),
            labeled_input(
                "Contact Phone",
                "(808) 555-0100",
                self.wizard.data().contact_phone.as_deref().unwrap_or(""),
                None,
                |v| ScreenMessage::ScreenMessage(OnboardingMessage::PhoneChanged(v)),
            ),
        ]
        .spacing(15)
        .into()
    }

    fn legal_financial(&self) -> Element<'_, ScreenMessage<Self>> {
        column![
            checkbox(self.wizard.data().is_501c3)
                .label("We are a 501(c)(3) organization")
                .on_toggle(|v| ScreenMessage::ScreenMessage(OnboardingMessage::Toggled501c3(v))),
            labeled_input(
                "Tax ID / EIN",
                "12-3456789",
                self.wizard.data().tax_id.as_deref().unwrap_or(""),
                None,
                |v| ScreenMessage::ScreenMessage(OnboardingMessage::TaxIdChanged(v)),
            ),
            labeled_input(
                "Annual Revenue ($)",
                "50000",
                &self.revenue_input,
                None,
                |v| ScreenMessage::ScreenMessage(OnboardingMessage::RevenueChanged(v)),
            ),
            labeled_input(
                "Annual Expenses ($)",
                "45000",
                &self.expenses_input,
                None,
                |v| ScreenMessage::ScreenMessage(OnboardingMessage::ExpensesChanged(v)),
            ),
        ]
        .spacing(15)
        .into()
    }

    fn review(&self) -> Element<'_, ScreenMessage<Self>> {
        let data = self.wizard.data();
        let not_provided = "Not provided".to_string();
        column![
            review_row("Organization", data.name.clone()),
            review_row("Mission", data.mission.clone()),
            review_row("Email", data.contact_email.clone()),
            review_row(
                "Phone",
                data.contact_phone.clone().unwrap_or_else(|| not_provided.clone()),
            ),
            review_row(
                "501(c)(3) status",
                if data.is_501c3 { "Yes".to_string() } else { "No".to_string() },
            ),
            review_row(
                "Tax ID",
                data.tax_id.clone().unwrap_or_else(|| not_provided.clone()),
            ),
            review_row(
                "Annual Revenue",
                data.annual_revenue
                    .map(|v| format!("${}", format_amount(v)))
                    .unwrap_or_else(|| not_provided.clone()),
            ),
            review_row(
                "Annual Expenses",
                data.annual_expenses
                    .map(|v| format!("${}", format_amount(v)))
                    .unwrap_or(not_provided),
            ),
        ]
        .spacing(8)
        .into()
    }
}

fn review_row<'a>(label: &'a str, value: String) -> Element<'a, ScreenMessage<OnboardingScreen>> {
    row![
        text(label).size(14).width(160),
        text(value).size(14),
    ]
    .spacing(10)
    .into()
}

fn saved_clock(at: OffsetDateTime) -> Option<String> {
    let format = time::format_description::parse("[hour]:[minute]:[second]").ok()?;
    at.format(&format).ok()
}
