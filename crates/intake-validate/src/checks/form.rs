//! Form-step checks: presence, slug uniqueness across the quiz,
//! progress-step references, ordering, and per-question checks.

use std::collections::BTreeSet;

use intake_model::RawFormStep;

use crate::checks::question;
use crate::issue::Issue;
use crate::util::{find_duplicates, is_valid_slug, slug_or_index};

pub fn check(steps: &[RawFormStep], progress_slugs: &BTreeSet<&str>) -> Vec<Issue> {
    let mut issues = Vec::new();

    if steps.is_empty() {
        issues.push(Issue::error("Quiz must have at least one form step"));
        return issues;
    }

    let slugs: Vec<&str> = steps.iter().filter_map(|s| s.slug.as_deref()).collect();
    let duplicate_slugs = find_duplicates(slugs);
    if !duplicate_slugs.is_empty() {
        issues.push(Issue::error(format!(
            "Duplicate form step slugs: {}",
            duplicate_slugs.join(", ")
        )));
    }

    for (index, step) in steps.iter().enumerate() {
        let step_ref = slug_or_index(step.slug.as_deref(), index);

        match step.slug.as_deref() {
            None | Some("") => {
                issues.push(Issue::error(format!(
                    "Form step at index {index} is missing slug"
                )));
            }
            Some(slug) if !is_valid_slug(slug) => {
                issues.push(Issue::error(format!(
                    "Form step slug \"{slug}\" is not URL-safe"
                )));
            }
            Some(_) => {}
        }

        match step.progress_step_id.as_deref() {
            None | Some("") => {
                issues.push(Issue::error(format!(
                    "Form step \"{step_ref}\" is missing progressStepId"
                )));
            }
            Some(progress_step_id) if !progress_slugs.contains(progress_step_id) => {
                issues.push(Issue::error(format!(
                    "Form step \"{step_ref}\" references invalid progress step \"{progress_step_id}\""
                )));
            }
            Some(_) => {}
        }

        if !step.has_order() {
            issues.push(Issue::error(format!(
                "Form step \"{step_ref}\" is missing order"
            )));
        }

        if step.questions.is_empty() {
            issues.push(Issue::error(format!(
                "Form step \"{step_ref}\" has no questions"
            )));
        } else {
            for (question_index, raw_question) in step.questions.iter().enumerate() {
                for message in question::check(raw_question) {
                    issues.push(Issue::error(format!(
                        "Form step \"{step_ref}\", question {}: {message}",
                        question_index + 1
                    )));
                }
            }
        }

        // Question slugs must be unique within each step; the same slug
        // may recur across steps.
        let question_slugs: Vec<&str> = step
            .questions
            .iter()
            .filter_map(|q| q.slug.as_deref())
            .collect();
        let duplicate_questions = find_duplicates(question_slugs);
        if !duplicate_questions.is_empty() {
            issues.push(Issue::error(format!(
                "Duplicate question slugs in step \"{step_ref}\": {}",
                duplicate_questions.join(", ")
            )));
        }
    }

    issues
}
