//! Structural and domain validation for raw quiz documents.
//!
//! `validate_quiz` runs every check and accumulates findings into a
//! [`ValidationReport`]: errors block ingestion, warnings are
//! advisory. Validation never inspects transformer output and the
//! transformer never consults a report; a production pipeline
//! validates first and only trusts transformed quizzes when the report
//! carries no errors.

mod checks;
mod issue;
mod util;

use std::collections::BTreeSet;

use intake_model::{RawQuiz, ValidationReport};

pub use issue::{Issue, Severity};
pub use util::{find_duplicates, is_valid_color, is_valid_slug};

/// Validate a single raw quiz. Pure: the only output is the report.
pub fn validate_quiz(quiz: &RawQuiz) -> ValidationReport {
    let mut issues = Vec::new();

    if !present(quiz.slug.as_deref()) || !present(quiz.id.as_deref()) {
        issues.push(Issue::error("Quiz must have both id and slug"));
    }
    if let Some(slug) = quiz.slug.as_deref().filter(|s| !s.is_empty())
        && !is_valid_slug(slug)
    {
        issues.push(Issue::error(format!(
            "Quiz slug \"{slug}\" is not URL-safe"
        )));
    }

    issues.extend(checks::progress::check(&quiz.progress_steps));

    let progress_slugs: BTreeSet<&str> = quiz
        .progress_steps
        .iter()
        .filter_map(|step| step.slug.as_deref())
        .collect();
    issues.extend(checks::form::check(&quiz.form_steps, &progress_slugs));

    issues.extend(checks::metadata::check(quiz));

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for issue in issues {
        match issue.severity {
            Severity::Error => errors.push(issue.message),
            Severity::Warning => warnings.push(issue.message),
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn present(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}
