use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::db::{NewOrganization, Organization, OrganizationRepository};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern is valid")
});

/// Ordinal position in the fixed onboarding sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    BasicInfo,
    ContactDetails,
    LegalFinancial,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::ContactDetails,
        WizardStep::LegalFinancial,
        WizardStep::Review,
    ];

    /// 1-based step number, as shown in the progress header and stored in
    /// draft snapshots.
    pub fn number(self) -> usize {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::ContactDetails => 2,
            WizardStep::LegalFinancial => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(WizardStep::BasicInfo),
            2 => Some(WizardStep::ContactDetails),
            3 => Some(WizardStep::LegalFinancial),
            4 => Some(WizardStep::Review),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Information",
            WizardStep::ContactDetails => "Contact Details",
            WizardStep::LegalFinancial => "Legal & Financial",
            WizardStep::Review => "Review",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Tell us about your organization",
            WizardStep::ContactDetails => "How can funders reach you?",
            WizardStep::LegalFinancial => "Important details for grants",
            WizardStep::Review => "Confirm your information",
        }
    }

    pub fn is_first(self) -> bool {
        self == WizardStep::BasicInfo
    }

    pub fn is_last(self) -> bool {
        self == WizardStep::Review
    }

    fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    fn previous(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }
}

/// Field identifiers used for per-step gating and inline error display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Mission,
    ContactEmail,
    ContactPhone,
    Is501c3,
    TaxId,
    AnnualRevenue,
    AnnualExpenses,
}

/// Live form values for the onboarding wizard. Serialized wholesale into the
/// draft snapshot; missing fields default on restore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingData {
    pub name: String,
    pub mission: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub is_501c3: bool,
    pub tax_id: Option<String>,
    pub annual_revenue: Option<f64>,
    pub annual_expenses: Option<f64>,
}

impl OnboardingData {
    /// Validation works on trimmed values, so persist them trimmed too.
    pub fn to_new_organization(&self) -> NewOrganization {
        NewOrganization {
            name: self.name.trim().to_string(),
            mission: self.mission.trim().to_string(),
            contact_email: self.contact_email.trim().to_string(),
            contact_phone: self.contact_phone.clone(),
            tax_id: self.tax_id.clone(),
            is_501c3: self.is_501c3,
            annual_revenue: self.annual_revenue,
            annual_expenses: self.annual_expenses,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Fields whose validation gates advancement from the given step. The review
/// step gates nothing of its own.
pub fn fields_for_step(step: WizardStep) -> &'static [Field] {
    match step {
        WizardStep::BasicInfo => &[Field::Name, Field::Mission],
        WizardStep::ContactDetails => &[Field::ContactEmail],
        WizardStep::LegalFinancial => &[Field::Is501c3],
        WizardStep::Review => &[],
    }
}

/// Validate the fields declared for one step against the live values.
pub fn validate_step(step: WizardStep, data: &OnboardingData) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for field in fields_for_step(step) {
        match field {
            Field::Name => {
                if data.name.trim().is_empty() {
                    errors.push(FieldError::new(
                        Field::Name,
                        "Organization name is required",
                    ));
                }
            }
            Field::Mission => {
                if data.mission.trim().is_empty() {
                    errors.push(FieldError::new(
                        Field::Mission,
                        "Mission statement is required",
                    ));
                }
            }
            Field::ContactEmail => {
                if data.contact_email.trim().is_empty() {
                    errors.push(FieldError::new(
                        Field::ContactEmail,
                        "Contact email is required",
                    ));
                } else if !EMAIL_PATTERN.is_match(data.contact_email.trim()) {
                    errors.push(FieldError::new(Field::ContactEmail, "Invalid email address"));
                }
            }
            // The checkbox always carries a value; nothing to reject.
            Field::Is501c3 => {}
            Field::ContactPhone | Field::TaxId | Field::AnnualRevenue | Field::AnnualExpenses => {}
        }
    }
    errors
}

/// Controller for the onboarding step sequence. Advancement is gated on the
/// current step's fields; retreat is unconditional; both are no-ops at the
/// boundaries.
#[derive(Debug, Clone, Default)]
pub struct StepWizard {
    step: WizardStep,
    data: OnboardingData,
    errors: Vec<FieldError>,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::BasicInfo
    }
}

impl StepWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a wizard from a restored draft snapshot.
    pub fn resume(data: OnboardingData, step: WizardStep) -> Self {
        Self {
            step,
            data,
            errors: Vec::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn data(&self) -> &OnboardingData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut OnboardingData {
        &mut self.data
    }

    /// Errors from the most recent advance or submit attempt.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Move forward one step if the current step's fields validate. Returns
    /// whether the step changed.
    pub fn advance(&mut self) -> bool {
        self.errors = validate_step(self.step, &self.data);
        if !self.errors.is_empty() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move back one step; no-op on the first step. Pending errors are
    /// cleared since the user is leaving the step they belong to.
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                self.errors.clear();
                true
            }
            None => false,
        }
    }

    /// Create the organization from the review step. Re-validates every
    /// gated step first; on failure the wizard stays where it is.
    pub async fn submit<R: OrganizationRepository>(
        &mut self,
        repo: &R,
    ) -> anyhow::Result<Organization> {
        if !self.step.is_last() {
            anyhow::bail!(
                "Submission is only reachable from the review step (currently on step {})",
                self.step.number()
            );
        }

        self.errors = WizardStep::ALL
            .into_iter()
            .flat_map(|step| validate_step(step, &self.data))
            .collect();
        if !self.errors.is_empty() {
            anyhow::bail!("Onboarding form has {} invalid field(s)", self.errors.len());
        }

        repo.create_organization(self.data.to_new_organization())
            .await
    }
}
