//! Canonical quiz configuration model.
//!
//! This is the trusted output of the transform pipeline and the shape
//! the rendering layer consumes. Identity is always the source slug;
//! internal ids from the raw document are never carried over.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::condition::RenderCondition;
use crate::display::DisplayValue;

/// A fully normalized quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizConfig {
    /// Canonical id, promoted from the raw quiz slug.
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    pub progress_steps: Vec<ProgressStep>,
    /// Cross-reference of form steps to progress steps. Every
    /// `progress_step_id` here is a member of `progress_steps`.
    pub step_progress_mapping: Vec<StepProgressMapping>,
    pub steps: Vec<FormStep>,
    #[serde(default)]
    pub metadata: Option<QuizMetadata>,
}

/// Advisory quiz metadata. Absence of any field is a validation
/// warning, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizMetadata {
    pub category: Option<String>,
    pub estimated_time: Option<String>,
    pub target_audience: Option<String>,
    pub compliance: Vec<String>,
}

/// A coarse-grained visual stage, id = source slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStep {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
}

/// Links a form step to the progress step it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepProgressMapping {
    pub step_id: String,
    pub progress_step_id: String,
}

/// One page of the quiz, id = source slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStep {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub heading1: Option<String>,
    #[serde(default)]
    pub heading2: Option<String>,
    #[serde(default)]
    pub subtext: Option<String>,
    /// Alias of `subtext` kept for rendering-layer compatibility.
    #[serde(default)]
    pub question_subtext: Option<String>,
    #[serde(default)]
    pub render_condition: Option<RenderCondition>,
    #[serde(default)]
    pub show_trust_badges: Option<bool>,
    #[serde(default)]
    pub headings_inline: Option<bool>,
    #[serde(default)]
    pub dynamic_title: Option<String>,
    #[serde(default)]
    pub dynamic_heading1: Option<String>,
    #[serde(default)]
    pub dynamic_heading2: Option<String>,
    #[serde(default)]
    pub dynamic_subtext: Option<String>,
    #[serde(default)]
    pub display_value: Option<DisplayValue>,
    pub questions: Vec<FormQuestion>,
}

/// One question, id = source slug. Type-specific payload lives in
/// `kind`; the common fields apply to every type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormQuestion {
    pub id: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub display_question: Option<String>,
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub api_type: Option<String>,
    #[serde(default)]
    pub validation: Option<Vec<String>>,
    #[serde(default)]
    pub dynamic_text: Option<String>,
    pub kind: QuestionKind,
}

/// Payload of the three choice-style question types. Option values and
/// labels are parallel, index-aligned lists sorted by option order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceQuestion {
    pub options: Vec<Value>,
    pub option_labels: Vec<String>,
    pub display_as_row: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub option_images: Option<Vec<String>>,
}

/// Payload of dropdown questions: options and labels only, no layout
/// flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownQuestion {
    pub options: Vec<Value>,
    pub option_labels: Vec<String>,
}

/// Precomputed values shown on a medical-review screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatedValues {
    pub bmi: Option<String>,
    pub current_weight: Option<String>,
    pub weeks_to_goal: Option<String>,
}

/// Text-like input flavors covered by the generic input question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    TextArea,
    Number,
    Email,
    Tel,
}

impl InputType {
    /// Lower-case tag as stored on text-like questions.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Number => "number",
            Self::Email => "email",
            Self::Tel => "tel",
        }
    }
}

/// Question type tags accepted in raw documents, parsed
/// case-insensitively. Unknown tags are a transform error rather than
/// a silent fallthrough, so newly introduced types surface in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    SingleSelect,
    MultiSelect,
    Checkbox,
    Dropdown,
    Marketing,
    BeforeAfter,
    FileInput,
    MedicalReview,
    Perfect,
    WeightSummary,
    Input(InputType),
}

impl QuestionType {
    /// Case-insensitive parse of a raw `type` tag.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_uppercase().as_str() {
            "SINGLESELECT" => Some(Self::SingleSelect),
            "MULTISELECT" => Some(Self::MultiSelect),
            "CHECKBOX" => Some(Self::Checkbox),
            "DROPDOWN" => Some(Self::Dropdown),
            "MARKETING" => Some(Self::Marketing),
            "BEFORE_AFTER" => Some(Self::BeforeAfter),
            "FILE_INPUT" => Some(Self::FileInput),
            "MEDICAL_REVIEW" => Some(Self::MedicalReview),
            "PERFECT" => Some(Self::Perfect),
            "WEIGHT_SUMMARY" => Some(Self::WeightSummary),
            "TEXT" => Some(Self::Input(InputType::Text)),
            "TEXTAREA" => Some(Self::Input(InputType::TextArea)),
            "NUMBER" => Some(Self::Input(InputType::Number)),
            "EMAIL" => Some(Self::Input(InputType::Email)),
            "TEL" => Some(Self::Input(InputType::Tel)),
            _ => None,
        }
    }
}

/// Type-specific question payload, one variant per type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuestionKind {
    SingleSelect(ChoiceQuestion),
    MultiSelect(ChoiceQuestion),
    Checkbox(ChoiceQuestion),
    Dropdown(DropdownQuestion),
    Marketing {
        image: Option<String>,
        display_statistics: Option<bool>,
    },
    BeforeAfter {
        before_image: Option<String>,
        after_image: Option<String>,
        quote: Option<String>,
    },
    FileInput,
    MedicalReview {
        calculated_values: Option<CalculatedValues>,
        candidate_statement: String,
    },
    Perfect {
        heading1: Option<String>,
        subtext: Option<String>,
        dynamic_subtext: Option<String>,
    },
    WeightSummary,
    Input {
        input_type: InputType,
        icon: Option<String>,
    },
}

impl QuestionKind {
    /// Canonical stored `type` tag: upper-case for the named variants,
    /// the lower-case input tag for text-like questions.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::SingleSelect(_) => "SINGLESELECT",
            Self::MultiSelect(_) => "MULTISELECT",
            Self::Checkbox(_) => "CHECKBOX",
            Self::Dropdown(_) => "DROPDOWN",
            Self::Marketing { .. } => "MARKETING",
            Self::BeforeAfter { .. } => "BEFORE_AFTER",
            Self::FileInput => "FILE_INPUT",
            Self::MedicalReview { .. } => "MEDICAL_REVIEW",
            Self::Perfect { .. } => "PERFECT",
            Self::WeightSummary => "WEIGHT_SUMMARY",
            Self::Input { input_type, .. } => input_type.tag(),
        }
    }
}
