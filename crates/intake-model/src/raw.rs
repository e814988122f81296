//! Raw quiz document types.
//!
//! These mirror the JSON quiz document as supplied by the document
//! provider: loosely typed and tolerant of both canonical (camelCase)
//! and legacy (snake_case) key spellings. Every dual-spelled field is
//! stored as two `Option`s and resolved only through an accessor
//! method (canonical, then alias, then default), so each fallback
//! chain lives in exactly one place.

use serde::Deserialize;
use serde_json::Value;

use crate::condition::RenderCondition;
use crate::config::QuizMetadata;
use crate::display::{CalculateSpec, DisplayCondition};

/// Design-system fallback color for progress steps.
pub const DEFAULT_PROGRESS_COLOR: &str = "#A75809";

/// Top-level envelope of the quiz document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawQuizDocument {
    pub quizzes: Vec<RawQuiz>,
    pub templates: Vec<RawTemplate>,
    pub metadata: Option<RawDocumentMetadata>,
}

/// Document-level metadata envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDocumentMetadata {
    pub version: Option<String>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
}

/// One quiz as declared in the document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawQuiz {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub metadata: Option<QuizMetadata>,
    #[serde(rename = "progressSteps")]
    pub progress_steps: Vec<RawProgressStep>,
    #[serde(rename = "formSteps")]
    pub form_steps: Vec<RawFormStep>,
}

impl RawQuiz {
    /// Best identifier available for diagnostics: slug, then internal
    /// id, then a placeholder.
    pub fn identity_label(&self) -> &str {
        self.slug
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.id.as_deref())
            .unwrap_or("<unknown>")
    }
}

/// A coarse-grained visual stage grouping one or more form steps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProgressStep {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub order: Option<f64>,
    pub step_order: Option<f64>,
}

impl RawProgressStep {
    /// Ordering value: `order`, then legacy `step_order`, then 0.
    pub fn resolved_order(&self) -> f64 {
        self.order.or(self.step_order).unwrap_or(0.0)
    }

    /// Whether either order spelling is present.
    pub fn has_order(&self) -> bool {
        self.order.is_some() || self.step_order.is_some()
    }

    /// Declared color, or the design-system default when absent or blank.
    pub fn resolved_color(&self) -> &str {
        match self.color.as_deref() {
            Some(color) if !color.is_empty() => color,
            _ => DEFAULT_PROGRESS_COLOR,
        }
    }
}

/// One page of the quiz.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFormStep {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub heading1: Option<String>,
    pub heading2: Option<String>,
    pub subtext: Option<String>,
    /// References a progress step by slug.
    #[serde(rename = "progressStepId")]
    pub progress_step_id: Option<String>,
    pub order: Option<f64>,
    pub step_order: Option<f64>,
    #[serde(rename = "renderCondition")]
    pub render_condition: Option<RenderCondition>,
    #[serde(rename = "render_condition")]
    pub render_condition_legacy: Option<RenderCondition>,
    #[serde(rename = "showTrustBadges")]
    pub show_trust_badges: Option<bool>,
    #[serde(rename = "headingsInline")]
    pub headings_inline: Option<bool>,
    #[serde(rename = "dynamicTitle")]
    pub dynamic_title: Option<String>,
    #[serde(rename = "dynamicHeading1")]
    pub dynamic_heading1: Option<String>,
    #[serde(rename = "dynamicHeading2")]
    pub dynamic_heading2: Option<String>,
    #[serde(rename = "dynamicSubtext")]
    pub dynamic_subtext: Option<String>,
    #[serde(rename = "displayValue")]
    pub display_value: Option<RawDisplayValue>,
    pub questions: Vec<RawQuestion>,
}

impl RawFormStep {
    /// Ordering value: `order`, then legacy `step_order`, then 0.
    pub fn resolved_order(&self) -> f64 {
        self.order.or(self.step_order).unwrap_or(0.0)
    }

    /// Whether either order spelling is present.
    pub fn has_order(&self) -> bool {
        self.order.is_some() || self.step_order.is_some()
    }

    /// Render condition under either key, canonical spelling first.
    pub fn resolved_render_condition(&self) -> Option<&RenderCondition> {
        self.render_condition
            .as_ref()
            .or(self.render_condition_legacy.as_ref())
    }
}

/// Declarative display-value block attached to a form step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDisplayValue {
    pub condition: Vec<DisplayCondition>,
    pub calculate: Option<CalculateSpec>,
    pub template: Option<String>,
}

/// One question of a form step. Type-specific payload fields are all
/// optional here; which ones matter depends on the `type` tag.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawQuestion {
    pub id: Option<String>,
    pub slug: Option<String>,
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    pub question: Option<String>,
    #[serde(rename = "displayQuestion")]
    pub display_question: Option<String>,
    #[serde(rename = "display_question")]
    pub display_question_legacy: Option<String>,
    pub required: Option<bool>,
    pub is_required: Option<bool>,
    pub placeholder: Option<String>,
    #[serde(rename = "apiType")]
    pub api_type: Option<String>,
    #[serde(rename = "api_type")]
    pub api_type_legacy: Option<String>,
    pub validation: Option<Vec<String>>,
    pub order: Option<f64>,
    pub question_order: Option<f64>,
    #[serde(rename = "dynamicText")]
    pub dynamic_text: Option<String>,
    pub icon: Option<String>,

    // Choice and dropdown questions
    pub options: Vec<RawOption>,
    #[serde(rename = "displayAsRow")]
    pub display_as_row: Option<bool>,
    #[serde(rename = "display_as_row")]
    pub display_as_row_legacy: Option<bool>,
    #[serde(rename = "optionImages")]
    pub option_images: Option<Vec<String>>,
    #[serde(rename = "option_images")]
    pub option_images_legacy: Option<Vec<String>>,

    // Marketing
    pub image: Option<String>,
    #[serde(rename = "displayStatistics")]
    pub display_statistics: Option<bool>,
    #[serde(rename = "display_statistics")]
    pub display_statistics_legacy: Option<bool>,

    // Before/after
    #[serde(rename = "beforeImage")]
    pub before_image: Option<String>,
    #[serde(rename = "before_image")]
    pub before_image_legacy: Option<String>,
    #[serde(rename = "afterImage")]
    pub after_image: Option<String>,
    #[serde(rename = "after_image")]
    pub after_image_legacy: Option<String>,
    pub quote: Option<String>,

    // Medical review
    #[serde(rename = "calculatedValues")]
    pub calculated_values: Option<crate::config::CalculatedValues>,
    #[serde(rename = "candidateStatement")]
    pub candidate_statement: Option<String>,

    // Perfect
    pub heading1: Option<String>,
    pub subtext: Option<String>,
    #[serde(rename = "dynamicSubtext")]
    pub dynamic_subtext: Option<String>,
}

impl RawQuestion {
    /// Required flag: `required`, then legacy `is_required`, then false.
    pub fn resolved_required(&self) -> bool {
        self.required.or(self.is_required).unwrap_or(false)
    }

    /// Display text: `displayQuestion`, then legacy `display_question`.
    pub fn resolved_display_question(&self) -> Option<&str> {
        self.display_question
            .as_deref()
            .or(self.display_question_legacy.as_deref())
    }

    /// API type tag: `apiType`, then legacy `api_type`.
    pub fn resolved_api_type(&self) -> Option<&str> {
        self.api_type.as_deref().or(self.api_type_legacy.as_deref())
    }

    /// Ordering value: `order`, then legacy `question_order`, then 0.
    pub fn resolved_order(&self) -> f64 {
        self.order.or(self.question_order).unwrap_or(0.0)
    }

    /// Row-layout flag: `displayAsRow`, then legacy `display_as_row`,
    /// then true.
    pub fn resolved_display_as_row(&self) -> bool {
        self.display_as_row
            .or(self.display_as_row_legacy)
            .unwrap_or(true)
    }

    /// Option images under either spelling.
    pub fn resolved_option_images(&self) -> Option<&[String]> {
        self.option_images
            .as_deref()
            .or(self.option_images_legacy.as_deref())
    }

    /// Statistics flag under either spelling.
    pub fn resolved_display_statistics(&self) -> Option<bool> {
        self.display_statistics.or(self.display_statistics_legacy)
    }

    /// Before-image under either spelling.
    pub fn resolved_before_image(&self) -> Option<&str> {
        self.before_image
            .as_deref()
            .or(self.before_image_legacy.as_deref())
    }

    /// After-image under either spelling.
    pub fn resolved_after_image(&self) -> Option<&str> {
        self.after_image
            .as_deref()
            .or(self.after_image_legacy.as_deref())
    }
}

/// One option of a choice or dropdown question.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOption {
    pub id: Option<String>,
    pub question_id: Option<String>,
    pub value: Value,
    pub label: Option<String>,
    pub order: Option<f64>,
    pub option_order: Option<f64>,
}

impl RawOption {
    /// Ordering value: `order`, then legacy `option_order`, then 0.
    pub fn resolved_order(&self) -> f64 {
        self.order.or(self.option_order).unwrap_or(0.0)
    }

    /// Label, or the stringified value when absent or blank.
    pub fn resolved_label(&self) -> String {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => value_display(&self.value),
        }
    }
}

/// A reusable template step fragment. Carried through the envelope but
/// not consumed by the transform pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTemplate {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub heading1: Option<String>,
    pub subtext: Option<String>,
    pub is_template_step: Option<bool>,
    #[serde(rename = "render_condition")]
    pub render_condition: Option<RenderCondition>,
    pub questions: Vec<RawQuestion>,
}

fn value_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_spelling_wins_over_alias() {
        let question: RawQuestion = serde_json::from_value(json!({
            "slug": "goal",
            "type": "TEXT",
            "required": true,
            "is_required": false,
            "displayQuestion": "canonical",
            "display_question": "legacy",
            "order": 5,
            "question_order": 9,
        }))
        .expect("deserialize question");
        assert!(question.resolved_required());
        assert_eq!(question.resolved_display_question(), Some("canonical"));
        assert_eq!(question.resolved_order(), 5.0);
    }

    #[test]
    fn alias_fills_in_when_canonical_absent() {
        let question: RawQuestion = serde_json::from_value(json!({
            "slug": "goal",
            "type": "TEXT",
            "is_required": true,
            "display_question": "legacy",
            "question_order": 9,
            "api_type": "STRING",
        }))
        .expect("deserialize question");
        assert!(question.resolved_required());
        assert_eq!(question.resolved_display_question(), Some("legacy"));
        assert_eq!(question.resolved_order(), 9.0);
        assert_eq!(question.resolved_api_type(), Some("STRING"));
    }

    #[test]
    fn defaults_apply_when_both_spellings_absent() {
        let question = RawQuestion::default();
        assert!(!question.resolved_required());
        assert_eq!(question.resolved_order(), 0.0);
        assert!(question.resolved_display_as_row());

        let step = RawProgressStep::default();
        assert!(!step.has_order());
        assert_eq!(step.resolved_color(), DEFAULT_PROGRESS_COLOR);
    }

    #[test]
    fn option_label_falls_back_to_value() {
        let option: RawOption = serde_json::from_value(json!({ "value": 5, "option_order": 1 }))
            .expect("deserialize option");
        assert_eq!(option.resolved_label(), "5");
        assert_eq!(option.resolved_order(), 1.0);

        let named: RawOption = serde_json::from_value(json!({ "value": "a", "label": "A" }))
            .expect("deserialize option");
        assert_eq!(named.resolved_label(), "A");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let quiz: RawQuiz = serde_json::from_value(json!({
            "slug": "weight-loss",
            "id": "q1",
            "created_at": "2024-01-01",
            "organization_id": "org",
            "quizFormStepMapping": [],
        }))
        .expect("deserialize quiz");
        assert_eq!(quiz.identity_label(), "weight-loss");
    }
}
