//! Static catalog of grant-application templates. Bundled configuration
//! data, not user data; immutable for the life of the process.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    TextArea,
    Number,
    Date,
    Select,
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateSection {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub max_length: Option<u32>,
    pub field_type: FieldType,
    pub help_text: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct GrantTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub focus_areas: &'static [&'static str],
    pub sections: &'static [TemplateSection],
    pub estimated_time: &'static str,
    pub difficulty: Difficulty,
}

/// The full immutable catalog.
pub fn grant_templates() -> &'static [GrantTemplate] {
    GRANT_TEMPLATES
}

/// Look up one catalog entry for selection routing.
pub fn template_by_id(id: &str) -> Option<&'static GrantTemplate> {
    GRANT_TEMPLATES.iter().find(|t| t.id == id)
}

const fn section(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    placeholder: &'static str,
    required: bool,
    field_type: FieldType,
) -> TemplateSection {
    TemplateSection {
        id,
        title,
        description,
        placeholder,
        required,
        max_length: None,
        field_type,
        help_text: None,
    }
}

const fn with_help(mut s: TemplateSection, help_text: &'static str) -> TemplateSection {
    s.help_text = Some(help_text);
    s
}

const fn with_max_length(mut s: TemplateSection, max_length: u32) -> TemplateSection {
    s.max_length = Some(max_length);
    s
}

static GRANT_TEMPLATES: &[GrantTemplate] = &[
    GrantTemplate {
        id: "environmental-conservation",
        title: "Environmental Conservation",
        description: "Perfect for conservation projects, environmental education, and sustainability initiatives.",
        category: "Environment",
        icon: "\u{1F331}",
        focus_areas: &[
            "Marine conservation",
            "Native species protection",
            "Environmental education",
            "Habitat restoration",
        ],
        estimated_time: "2-3 hours",
        difficulty: Difficulty::Intermediate,
        sections: &[
            with_max_length(
                with_help(
                    section(
                        "project-summary",
                        "Project Summary",
                        "Brief overview of your conservation project",
                        "Provide a concise summary of your environmental conservation project, including the main objectives and expected impact...",
                        true,
                        FieldType::TextArea,
                    ),
                    "Keep this section engaging and focused on your project's environmental impact.",
                ),
                500,
            ),
            with_help(
                section(
                    "environmental-need",
                    "Environmental Need Statement",
                    "Describe the environmental issue your project addresses",
                    "Describe the specific environmental challenge or need in your community that this project will address...",
                    true,
                    FieldType::TextArea,
                ),
                "Use data and evidence to support your case. Include local environmental concerns specific to Hawaii.",
            ),
            with_help(
                section(
                    "conservation-goals",
                    "Conservation Goals & Objectives",
                    "Specific, measurable goals for your project",
                    "List 3-5 specific, measurable goals for your conservation project...",
                    true,
                    FieldType::TextArea,
                ),
                "Make goals SMART: Specific, Measurable, Achievable, Relevant, Time-bound.",
            ),
            section(
                "project-activities",
                "Project Activities & Methods",
                "Detailed description of conservation activities",
                "Describe the specific conservation activities, methods, and approaches you will use...",
                true,
                FieldType::TextArea,
            ),
            with_help(
                section(
                    "community-engagement",
                    "Community Engagement Plan",
                    "How you will involve the local community",
                    "Explain how you will engage local communities in your conservation efforts...",
                    true,
                    FieldType::TextArea,
                ),
                "Community involvement is crucial for successful conservation projects in Hawaii.",
            ),
            section(
                "project-timeline",
                "Project Timeline",
                "Timeline with key milestones",
                "Provide a detailed timeline with major milestones and deliverables...",
                true,
                FieldType::TextArea,
            ),
            section(
                "budget-amount",
                "Total Project Budget",
                "Total amount requested",
                "25000",
                true,
                FieldType::Number,
            ),
            with_help(
                section(
                    "sustainability-plan",
                    "Long-term Sustainability",
                    "How the project will continue beyond funding",
                    "Describe how your conservation efforts will be sustained after the grant period...",
                    true,
                    FieldType::TextArea,
                ),
                "Funders want to see lasting impact beyond the grant period.",
            ),
        ],
    },
    GrantTemplate {
        id: "community-development",
        title: "Community Development",
        description: "Ideal for community programs, social services, and local development projects.",
        category: "Community",
        icon: "\u{1F465}",
        focus_areas: &[
            "Community building",
            "Social services",
            "Local development",
            "Capacity building",
        ],
        estimated_time: "2-3 hours",
        difficulty: Difficulty::Beginner,
        sections: &[
            with_max_length(
                section(
                    "project-summary",
                    "Project Summary",
                    "Brief overview of your community development project",
                    "Provide a concise summary of your community development project and its expected impact...",
                    true,
                    FieldType::TextArea,
                ),
                500,
            ),
            with_help(
                section(
                    "community-need",
                    "Community Need Assessment",
                    "Describe the community need your project addresses",
                    "Describe the specific community need or challenge that your project will address...",
                    true,
                    FieldType::TextArea,
                ),
                "Include demographic data and community input to support your assessment.",
            ),
            section(
                "target-population",
                "Target Population",
                "Who will benefit from your project",
                "Describe the specific population that will benefit from your project...",
                true,
                FieldType::TextArea,
            ),
            section(
                "project-goals",
                "Project Goals & Objectives",
                "Specific, measurable goals for community impact",
                "List 3-5 specific, measurable goals for your community development project...",
                true,
                FieldType::TextArea,
            ),
            section(
                "program-activities",
                "Program Activities & Services",
                "Detailed description of programs and services",
                "Describe the specific programs, services, and activities you will provide...",
                true,
                FieldType::TextArea,
            ),
            with_help(
                section(
                    "community-partnerships",
                    "Community Partnerships",
                    "Partner organizations and collaborations",
                    "List the community organizations, agencies, or groups you will partner with...",
                    false,
                    FieldType::TextArea,
                ),
                "Partnerships strengthen community development projects.",
            ),
            section(
                "project-timeline",
                "Project Timeline",
                "Timeline with key milestones",
                "Provide a detailed timeline with major milestones and deliverables...",
                true,
                FieldType::TextArea,
            ),
            section(
                "budget-amount",
                "Total Project Budget",
                "Total amount requested",
                "20000",
                true,
                FieldType::Number,
            ),
            section(
                "impact-measurement",
                "Impact Measurement Plan",
                "How you will measure success",
                "Describe how you will measure and evaluate the impact of your community development project...",
                true,
                FieldType::TextArea,
            ),
        ],
    },
    GrantTemplate {
        id: "education-youth",
        title: "Education & Youth Development",
        description: "Great for educational programs, youth development, and scholarship initiatives.",
        category: "Education",
        icon: "\u{1F393}",
        focus_areas: &[
            "Youth development",
            "Educational programs",
            "Skills training",
            "Mentorship",
        ],
        estimated_time: "3-4 hours",
        difficulty: Difficulty::Intermediate,
        sections: &[
            with_max_length(
                section(
                    "project-summary",
                    "Project Summary",
                    "Brief overview of your education/youth program",
                    "Provide a concise summary of your educational or youth development program...",
                    true,
                    FieldType::TextArea,
                ),
                500,
            ),
            with_help(
                section(
                    "educational-need",
                    "Educational Need Statement",
                    "Describe the educational gap your program addresses",
                    "Describe the specific educational need or gap that your program will address...",
                    true,
                    FieldType::TextArea,
                ),
                "Include educational data and statistics to support your case.",
            ),
            section(
                "target-students",
                "Target Student Population",
                "Demographics of students you will serve",
                "Describe the specific student population you will serve (age range, grade levels, demographics)...",
                true,
                FieldType::TextArea,
            ),
            with_help(
                section(
                    "learning-objectives",
                    "Learning Objectives & Outcomes",
                    "Specific educational goals and expected outcomes",
                    "List the specific learning objectives and expected educational outcomes...",
                    true,
                    FieldType::TextArea,
                ),
                "Make objectives measurable and aligned with educational standards.",
            ),
            section(
                "curriculum-activities",
                "Curriculum & Program Activities",
                "Detailed description of educational activities",
                "Describe the curriculum, educational activities, and learning experiences you will provide...",
                true,
                FieldType::TextArea,
            ),
            section(
                "teaching-methods",
                "Teaching Methods & Approach",
                "Educational methodology and instructional approach",
                "Describe your teaching methods, instructional approach, and educational philosophy...",
                true,
                FieldType::TextArea,
            ),
            with_help(
                section(
                    "staff-qualifications",
                    "Staff Qualifications",
                    "Qualifications of instructional staff",
                    "Describe the qualifications and experience of your teaching and program staff...",
                    true,
                    FieldType::TextArea,
                ),
                "Include relevant credentials, experience, and training.",
            ),
            section(
                "school-partnerships",
                "School & Community Partnerships",
                "Partnerships with schools and educational organizations",
                "List the schools, educational institutions, or community organizations you will partner with...",
                false,
                FieldType::TextArea,
            ),
            section(
                "project-timeline",
                "Project Timeline",
                "Timeline with key milestones",
                "Provide a detailed timeline with major milestones and deliverables...",
                true,
                FieldType::TextArea,
            ),
            section(
                "budget-amount",
                "Total Project Budget",
                "Total amount requested",
                "30000",
                true,
                FieldType::Number,
            ),
            with_help(
                section(
                    "assessment-evaluation",
                    "Student Assessment & Program Evaluation",
                    "How you will assess student progress and program effectiveness",
                    "Describe how you will assess student learning and evaluate program effectiveness...",
                    true,
                    FieldType::TextArea,
                ),
                "Include both formative and summative assessment methods.",
            ),
        ],
    },
];
