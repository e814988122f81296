//! Per-question checks. Messages come back bare; the form-step check
//! prefixes them with the enclosing step and question position.

use intake_model::{RawOption, RawQuestion};
use serde_json::Value;

use crate::util::is_valid_slug;

/// Question types that must carry at least one option.
const OPTION_BEARING_TYPES: &[&str] = &["SINGLESELECT", "MULTISELECT", "CHECKBOX", "DROPDOWN"];

pub fn check(question: &RawQuestion) -> Vec<String> {
    let mut errors = Vec::new();

    match question.slug.as_deref() {
        None | Some("") => errors.push("Question is missing slug".to_string()),
        Some(slug) if !is_valid_slug(slug) => {
            errors.push(format!("Question slug \"{slug}\" is not URL-safe"));
        }
        Some(_) => {}
    }

    let type_tag = question.type_tag.as_deref().unwrap_or("");
    if type_tag.is_empty() {
        errors.push("Question is missing type".to_string());
    }

    let upper = type_tag.to_uppercase();
    if OPTION_BEARING_TYPES.contains(&upper.as_str()) {
        if question.options.is_empty() {
            errors.push(format!("Question type \"{upper}\" requires options"));
        } else {
            for (index, option) in question.options.iter().enumerate() {
                if !has_value(option) {
                    errors.push(format!("Option {} is missing value", index + 1));
                }
                if option.label.as_deref().is_none_or(str::is_empty) {
                    errors.push(format!("Option {} is missing label", index + 1));
                }
            }
        }
    }

    if upper == "MARKETING" && question.image.as_deref().is_none_or(str::is_empty) {
        errors.push("MARKETING question type requires image".to_string());
    }

    if upper == "BEFORE_AFTER" {
        if question.resolved_before_image().is_none_or(str::is_empty) {
            errors.push("BEFORE_AFTER question type requires beforeImage".to_string());
        }
        if question.resolved_after_image().is_none_or(str::is_empty) {
            errors.push("BEFORE_AFTER question type requires afterImage".to_string());
        }
    }

    errors
}

fn has_value(option: &RawOption) -> bool {
    match &option.value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
