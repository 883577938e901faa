use std::time::Duration;

use time::OffsetDateTime;

use crate::analysis::{DocumentStore, RfpAnalyzer};
use crate::models::{RfpAnalysis, RfpDocument};

/// Mock analyzer: routes on a case-insensitive substring of the file name
/// after a simulated latency. Stands in for a real document-understanding
/// service behind the same interface.
pub struct KeywordAnalyzer {
    latency: Duration,
}

impl KeywordAnalyzer {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_secs(2),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RfpAnalyzer for KeywordAnalyzer {
    async fn analyze(&self, doc: &RfpDocument) -> anyhow::Result<RfpAnalysis> {
        tokio::time::sleep(self.latency).await;

        let file_name = doc.name.to_lowercase();
        let analysis = if file_name.contains("environmental") || file_name.contains("conservation")
        {
            environmental_rfp()
        } else if file_name.contains("education") || file_name.contains("youth") {
            education_rfp()
        } else {
            general_rfp()
        };

        tracing::debug!(
            name = %doc.name,
            requirements = analysis.requirements.len(),
            "mock analysis complete"
        );
        Ok(analysis)
    }
}

/// Mock storage backend: fabricates a URL after a simulated upload delay.
/// No bytes are transmitted anywhere.
pub struct MockDocumentStore {
    base_url: String,
    latency: Duration,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self {
            base_url: "https://storage.kokua.test/kokua-grants".to_string(),
            latency: Duration::from_millis(1500),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MockDocumentStore {
    async fn store(&self, doc: &RfpDocument) -> anyhow::Result<String> {
        tokio::time::sleep(self.latency).await;

        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        Ok(format!(
            "{}/rfp-files/{}-{}",
            self.base_url, millis, doc.name
        ))
    }
}

fn environmental_rfp() -> RfpAnalysis {
    RfpAnalysis {
        requirements: vec![
            "Must be a 501(c)(3) nonprofit organization".into(),
            "Project must focus on environmental conservation in Hawaii".into(),
            "Must demonstrate community impact and engagement".into(),
            "Required to provide detailed budget breakdown".into(),
            "Must include project timeline with milestones".into(),
            "Need letters of support from community partners".into(),
            "Must address sustainability of the project beyond funding period".into(),
        ],
        deadline: Some("March 15, 2025".into()),
        funding_amount: Some("$25,000 - $75,000".into()),
        focus_areas: vec![
            "Marine conservation".into(),
            "Native species protection".into(),
            "Environmental education".into(),
            "Community engagement".into(),
            "Habitat restoration".into(),
        ],
        key_sections: vec![
            "Project Description".into(),
            "Statement of Need".into(),
            "Goals and Objectives".into(),
            "Methodology and Approach".into(),
            "Budget and Budget Narrative".into(),
            "Evaluation Plan".into(),
            "Organizational Capacity".into(),
            "Sustainability Plan".into(),
        ],
    }
}

fn education_rfp() -> RfpAnalysis {
    RfpAnalysis {
        requirements: vec![
            "Must serve K-12 students in Hawaii".into(),
            "Focus on STEM education and career readiness".into(),
            "Must demonstrate measurable learning outcomes".into(),
            "Required to show partnership with local schools".into(),
            "Need qualified instructional staff".into(),
            "Must provide program evaluation metrics".into(),
            "Required to serve underrepresented populations".into(),
        ],
        deadline: Some("April 30, 2025".into()),
        funding_amount: Some("$15,000 - $50,000".into()),
        focus_areas: vec![
            "STEM education".into(),
            "Career readiness".into(),
            "Youth development".into(),
            "Educational equity".into(),
            "Technology access".into(),
        ],
        key_sections: vec![
            "Program Overview".into(),
            "Statement of Need".into(),
            "Target Population".into(),
            "Program Goals and Objectives".into(),
            "Curriculum and Activities".into(),
            "Budget".into(),
            "Evaluation and Assessment".into(),
            "Staff Qualifications".into(),
            "Community Partnerships".into(),
        ],
    }
}

fn general_rfp() -> RfpAnalysis {
    RfpAnalysis {
        requirements: vec![
            "Must be a registered nonprofit organization".into(),
            "Project must serve Hawaii communities".into(),
            "Demonstrate clear community need".into(),
            "Provide detailed project plan and timeline".into(),
            "Include comprehensive budget".into(),
            "Show organizational capacity".into(),
            "Must include evaluation plan".into(),
        ],
        deadline: Some("May 1, 2025".into()),
        funding_amount: Some("$10,000 - $30,000".into()),
        focus_areas: vec![
            "Community development".into(),
            "Social services".into(),
            "Capacity building".into(),
            "Direct service delivery".into(),
            "Program sustainability".into(),
        ],
        key_sections: vec![
            "Executive Summary".into(),
            "Statement of Need".into(),
            "Project Description".into(),
            "Goals and Objectives".into(),
            "Methods".into(),
            "Budget".into(),
            "Evaluation".into(),
            "Organization Information".into(),
        ],
    }
}
