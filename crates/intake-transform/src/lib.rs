//! Quiz document transformation.
//!
//! Converts raw quiz documents into the canonical `QuizConfig` model:
//! alias resolution, stable ordering by resolved order values,
//! progress-step cross-referencing, and per-type question payloads.
//!
//! Transformation is best-effort and independent of validation: a
//! caller that wants hard guarantees runs `intake-validate` first and
//! only trusts the output when the report has no errors.

mod question;

use std::collections::BTreeSet;

use intake_model::{
    DisplayValue, FormStep, ProgressStep, QuizConfig, RawDisplayValue, RawFormStep,
    RawProgressStep, RawQuiz, RawQuizDocument, Result, StepProgressMapping, TransformError,
    DEFAULT_DISPLAY_TEMPLATE,
};

pub use question::transform_question;

/// Transform one raw quiz into its canonical configuration.
///
/// Missing optional fields resolve to documented defaults; broken
/// progress-step references are dropped from the mapping with a
/// diagnostic. The only hard failures are a quiz without a usable slug
/// and a question with an unknown type tag.
pub fn transform_quiz(raw: &RawQuiz) -> Result<QuizConfig> {
    let slug = raw
        .slug
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(TransformError::MissingSlug)?;

    let progress_steps = transform_progress_steps(&raw.progress_steps);
    let progress_slugs: BTreeSet<&str> = progress_steps
        .iter()
        .map(|step| step.id.as_str())
        .collect();

    let mut form_raw: Vec<&RawFormStep> = raw.form_steps.iter().collect();
    form_raw.sort_by(|a, b| a.resolved_order().total_cmp(&b.resolved_order()));

    let steps = form_raw
        .iter()
        .map(|step| transform_form_step(step))
        .collect::<Result<Vec<FormStep>>>()?;
    let step_progress_mapping = build_step_progress_mapping(&form_raw, &progress_slugs);

    Ok(QuizConfig {
        id: slug.to_string(),
        name: raw.name.clone(),
        description: raw.description.clone(),
        version: raw.version.clone(),
        progress_steps,
        step_progress_mapping,
        steps,
        metadata: raw.metadata.clone(),
    })
}

/// Batch transform of a whole document. A quiz that fails to transform
/// is logged and skipped; the batch itself never fails.
pub fn transform_document(document: &RawQuizDocument) -> Vec<QuizConfig> {
    document
        .quizzes
        .iter()
        .filter_map(|raw| match transform_quiz(raw) {
            Ok(quiz) => Some(quiz),
            Err(error) => {
                tracing::warn!(
                    quiz = raw.identity_label(),
                    %error,
                    "skipping quiz that failed to transform"
                );
                None
            }
        })
        .collect()
}

fn transform_progress_steps(raw_steps: &[RawProgressStep]) -> Vec<ProgressStep> {
    let mut sorted: Vec<&RawProgressStep> = raw_steps.iter().collect();
    sorted.sort_by(|a, b| a.resolved_order().total_cmp(&b.resolved_order()));
    sorted
        .iter()
        .map(|step| ProgressStep {
            id: step.slug.clone().unwrap_or_default(),
            name: step.name.clone(),
            description: step.description.clone(),
            color: step.resolved_color().to_string(),
        })
        .collect()
}

/// Cross-reference sorted form steps against the progress-step slug
/// set. A step without a `progressStepId` is omitted silently; a step
/// referencing an unknown progress step is omitted with a diagnostic.
fn build_step_progress_mapping(
    form_steps: &[&RawFormStep],
    progress_slugs: &BTreeSet<&str>,
) -> Vec<StepProgressMapping> {
    let mut mapping = Vec::new();
    for step in form_steps {
        let step_id = step.slug.clone().unwrap_or_default();
        let Some(progress_step_id) = step
            .progress_step_id
            .as_deref()
            .filter(|id| !id.is_empty())
        else {
            continue;
        };
        if !progress_slugs.contains(progress_step_id) {
            tracing::warn!(
                step = %step_id,
                progress_step = %progress_step_id,
                "form step references invalid progress step"
            );
            continue;
        }
        mapping.push(StepProgressMapping {
            step_id,
            progress_step_id: progress_step_id.to_string(),
        });
    }
    mapping
}

fn transform_form_step(raw: &RawFormStep) -> Result<FormStep> {
    let mut questions_raw: Vec<&intake_model::RawQuestion> = raw.questions.iter().collect();
    questions_raw.sort_by(|a, b| a.resolved_order().total_cmp(&b.resolved_order()));
    let questions = questions_raw
        .iter()
        .map(|question| transform_question(question))
        .collect::<Result<Vec<_>>>()?;

    Ok(FormStep {
        id: raw.slug.clone().unwrap_or_default(),
        title: raw.title.clone(),
        heading1: raw.heading1.clone(),
        heading2: raw.heading2.clone(),
        subtext: raw.subtext.clone(),
        question_subtext: raw.subtext.clone(),
        render_condition: raw.resolved_render_condition().cloned(),
        show_trust_badges: raw.show_trust_badges,
        headings_inline: raw.headings_inline,
        dynamic_title: raw.dynamic_title.clone(),
        dynamic_heading1: raw.dynamic_heading1.clone(),
        dynamic_heading2: raw.dynamic_heading2.clone(),
        dynamic_subtext: raw.dynamic_subtext.clone(),
        display_value: raw.display_value.as_ref().map(transform_display_value),
        questions,
    })
}

fn transform_display_value(raw: &RawDisplayValue) -> DisplayValue {
    DisplayValue {
        conditions: raw.condition.clone(),
        calculate: raw.calculate.clone(),
        template: raw
            .template
            .clone()
            .unwrap_or_else(|| DEFAULT_DISPLAY_TEMPLATE.to_string()),
    }
}
