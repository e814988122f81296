//! Per-question transformation: alias resolution for the common
//! fields, then exhaustive dispatch on the parsed type tag into the
//! canonical `QuestionKind` payload.

use serde_json::Value;

use intake_model::{
    ChoiceQuestion, DropdownQuestion, FormQuestion, QuestionKind, QuestionType, RawOption,
    RawQuestion, Result, TransformError,
};

/// Transform a single question. Unknown type tags are rejected so a
/// newly introduced type surfaces in tests instead of silently turning
/// into a generic text question.
pub fn transform_question(raw: &RawQuestion) -> Result<FormQuestion> {
    let slug = raw.slug.clone().unwrap_or_default();
    let type_tag = raw.type_tag.as_deref().unwrap_or("");
    let Some(question_type) = QuestionType::parse(type_tag) else {
        return Err(TransformError::UnknownQuestionType {
            slug,
            type_tag: type_tag.to_string(),
        });
    };

    let kind = build_kind(question_type, raw);

    // FILE_INPUT always submits as a file, regardless of the declared
    // API type.
    let api_type = if matches!(kind, QuestionKind::FileInput) {
        Some("FILE".to_string())
    } else {
        raw.resolved_api_type().map(str::to_string)
    };

    Ok(FormQuestion {
        id: slug,
        question: raw.question.clone(),
        display_question: raw.resolved_display_question().map(str::to_string),
        required: raw.resolved_required(),
        placeholder: raw.placeholder.clone(),
        api_type,
        validation: raw.validation.clone(),
        dynamic_text: raw.dynamic_text.clone(),
        kind,
    })
}

fn build_kind(question_type: QuestionType, raw: &RawQuestion) -> QuestionKind {
    match question_type {
        QuestionType::SingleSelect => QuestionKind::SingleSelect(choice_payload(raw)),
        QuestionType::MultiSelect => QuestionKind::MultiSelect(choice_payload(raw)),
        QuestionType::Checkbox => QuestionKind::Checkbox(choice_payload(raw)),
        QuestionType::Dropdown => {
            let (options, option_labels) = collect_options(&raw.options);
            QuestionKind::Dropdown(DropdownQuestion {
                options,
                option_labels,
            })
        }
        QuestionType::Marketing => QuestionKind::Marketing {
            image: raw.image.clone(),
            display_statistics: raw.resolved_display_statistics(),
        },
        QuestionType::BeforeAfter => QuestionKind::BeforeAfter {
            before_image: raw.resolved_before_image().map(str::to_string),
            after_image: raw.resolved_after_image().map(str::to_string),
            quote: raw.quote.clone(),
        },
        QuestionType::FileInput => QuestionKind::FileInput,
        QuestionType::MedicalReview => QuestionKind::MedicalReview {
            calculated_values: raw.calculated_values.clone(),
            candidate_statement: raw.candidate_statement.clone().unwrap_or_default(),
        },
        QuestionType::Perfect => QuestionKind::Perfect {
            heading1: raw.heading1.clone(),
            subtext: raw.subtext.clone(),
            dynamic_subtext: raw.dynamic_subtext.clone(),
        },
        QuestionType::WeightSummary => QuestionKind::WeightSummary,
        QuestionType::Input(input_type) => QuestionKind::Input {
            input_type,
            icon: raw.icon.clone(),
        },
    }
}

fn choice_payload(raw: &RawQuestion) -> ChoiceQuestion {
    let (options, option_labels) = collect_options(&raw.options);
    ChoiceQuestion {
        options,
        option_labels,
        display_as_row: raw.resolved_display_as_row(),
        image: raw.image.clone(),
        option_images: raw.resolved_option_images().map(<[String]>::to_vec),
    }
}

/// Sort options by their own order value and split into parallel,
/// index-aligned value and label lists.
fn collect_options(raw_options: &[RawOption]) -> (Vec<Value>, Vec<String>) {
    let mut sorted: Vec<&RawOption> = raw_options.iter().collect();
    sorted.sort_by(|a, b| a.resolved_order().total_cmp(&b.resolved_order()));
    let options = sorted.iter().map(|option| option.value.clone()).collect();
    let labels = sorted.iter().map(|option| option.resolved_label()).collect();
    (options, labels)
}
