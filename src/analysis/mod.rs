pub mod intake;
pub mod keyword;

use std::future::Future;

use crate::models::{RfpAnalysis, RfpDocument};

pub use intake::{FileConstraints, IntakeError};
pub use keyword::{KeywordAnalyzer, MockDocumentStore};

/// Capability interface for turning an RFP document into a structured
/// requirements record. The keyword mock is one implementation; a real
/// document-understanding backend slots in here without touching callers.
pub trait RfpAnalyzer {
    fn analyze(&self, doc: &RfpDocument) -> impl Future<Output = anyhow::Result<RfpAnalysis>>;
}

/// Capability interface for persisting an uploaded document, returning the
/// stored location.
pub trait DocumentStore {
    fn store(&self, doc: &RfpDocument) -> impl Future<Output = anyhow::Result<String>>;
}

/// Result of a successful intake run.
#[derive(Debug, Clone)]
pub struct IntakeOutcome {
    pub analysis: RfpAnalysis,
    pub stored_url: String,
}

/// Document intake orchestrator: constraint check, then store, then analyze.
/// Single attempt, sequential awaits; retries are user-initiated.
pub struct DocumentIntake<S, A> {
    constraints: FileConstraints,
    store: S,
    analyzer: A,
}

impl<S: DocumentStore, A: RfpAnalyzer> DocumentIntake<S, A> {
    pub fn new(constraints: FileConstraints, store: S, analyzer: A) -> Self {
        Self {
            constraints,
            store,
            analyzer,
        }
    }

    /// Run the full intake flow for one document.
    pub async fn submit(&self, doc: &RfpDocument) -> anyhow::Result<IntakeOutcome> {
        self.constraints.check(doc)?;

        tracing::info!(name = %doc.name, size_bytes = doc.size_bytes, "storing RFP document");
        let stored_url = self.store.store(doc).await?;

        tracing::info!(name = %doc.name, "analyzing RFP document");
        let analysis = self.analyzer.analyze(doc).await?;

        Ok(IntakeOutcome {
            analysis,
            stored_url,
        })
    }

    pub fn constraints(&self) -> &FileConstraints {
        &self.constraints
    }
}
