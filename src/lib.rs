pub mod analysis;
pub mod core;
pub mod draft;
pub mod models;
pub mod templates;
pub mod wizard;

pub use analysis::{
    DocumentIntake, DocumentStore, FileConstraints, IntakeError, IntakeOutcome, KeywordAnalyzer,
    MockDocumentStore, RfpAnalyzer,
};
pub use draft::{DEFAULT_QUIET_PERIOD, DebouncedWriter, DraftSlot, DraftSnapshot};
pub use models::{RfpAnalysis, RfpDocument};
pub use wizard::{OnboardingData, StepWizard, WizardStep};

#[cfg(feature = "gui")]
pub mod gui;
