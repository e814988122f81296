//! Progress-step checks: presence, uniqueness, per-step fields, and
//! the 1..N order sequence.

use intake_model::RawProgressStep;

use crate::issue::Issue;
use crate::util::{find_duplicates, format_order, is_valid_color, is_valid_slug, slug_or_index};

pub fn check(steps: &[RawProgressStep]) -> Vec<Issue> {
    let mut issues = Vec::new();

    if steps.is_empty() {
        issues.push(Issue::error("Quiz must have at least one progress step"));
        return issues;
    }

    let slugs: Vec<&str> = steps.iter().filter_map(|s| s.slug.as_deref()).collect();
    let duplicate_slugs = find_duplicates(slugs);
    if !duplicate_slugs.is_empty() {
        issues.push(Issue::error(format!(
            "Duplicate progress step slugs: {}",
            duplicate_slugs.join(", ")
        )));
    }

    let ids: Vec<&str> = steps.iter().filter_map(|s| s.id.as_deref()).collect();
    let duplicate_ids = find_duplicates(ids);
    if !duplicate_ids.is_empty() {
        issues.push(Issue::error(format!(
            "Duplicate progress step IDs: {}",
            duplicate_ids.join(", ")
        )));
    }

    for (index, step) in steps.iter().enumerate() {
        let step_ref = slug_or_index(step.slug.as_deref(), index);

        match step.slug.as_deref() {
            None | Some("") => {
                issues.push(Issue::error(format!(
                    "Progress step at index {index} is missing slug"
                )));
            }
            Some(slug) if !is_valid_slug(slug) => {
                issues.push(Issue::error(format!(
                    "Progress step slug \"{slug}\" is not URL-safe"
                )));
            }
            Some(_) => {}
        }

        if step.name.as_deref().is_none_or(str::is_empty) {
            issues.push(Issue::error(format!(
                "Progress step \"{step_ref}\" is missing name"
            )));
        }

        if !step.color.as_deref().is_some_and(is_valid_color) {
            issues.push(Issue::error(format!(
                "Progress step \"{step_ref}\" has invalid color"
            )));
        }

        if !step.has_order() {
            issues.push(Issue::error(format!(
                "Progress step \"{step_ref}\" is missing order"
            )));
        }
    }

    // Resolved orders, sorted, must form the exact sequence 1..N. The
    // first gap or duplicate short-circuits this sub-check.
    let mut orders: Vec<f64> = steps.iter().map(RawProgressStep::resolved_order).collect();
    orders.sort_by(f64::total_cmp);
    for (index, order) in orders.iter().enumerate() {
        let expected = (index + 1) as f64;
        if *order != expected {
            issues.push(Issue::error(format!(
                "Progress step order sequence is not sequential (expected {}, found {})",
                index + 1,
                format_order(*order)
            )));
            break;
        }
    }

    issues
}
