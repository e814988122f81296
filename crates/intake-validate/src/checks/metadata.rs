//! Metadata checks. Missing metadata is advisory only.

use intake_model::RawQuiz;

use crate::issue::Issue;

pub fn check(quiz: &RawQuiz) -> Vec<Issue> {
    let Some(metadata) = &quiz.metadata else {
        return vec![Issue::warning("Quiz is missing metadata")];
    };

    let mut issues = Vec::new();
    if metadata.category.as_deref().is_none_or(str::is_empty) {
        issues.push(Issue::warning("Quiz metadata missing category"));
    }
    if metadata.estimated_time.as_deref().is_none_or(str::is_empty) {
        issues.push(Issue::warning("Quiz metadata missing estimatedTime"));
    }
    if metadata
        .target_audience
        .as_deref()
        .is_none_or(str::is_empty)
    {
        issues.push(Issue::warning("Quiz metadata missing targetAudience"));
    }
    issues
}
