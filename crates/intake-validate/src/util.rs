//! Shared validation helpers: duplicate detection and format checks.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// URL-safe slug: lowercase ASCII letters, digits, hyphen, underscore.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("invalid slug regex"));

/// `#`-prefixed 3- or 6-digit hex color.
static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("invalid color regex"));

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

pub fn is_valid_color(color: &str) -> bool {
    HEX_COLOR_REGEX.is_match(color)
}

/// Values that appear more than once, in order of first repetition.
pub fn find_duplicates<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = BTreeSet::new();
    let mut duplicates = Vec::new();
    for value in values {
        if !seen.insert(value) && !duplicates.contains(&value) {
            duplicates.push(value);
        }
    }
    duplicates
}

/// Entity reference for messages: the slug when present and non-empty,
/// the positional index otherwise.
pub fn slug_or_index(slug: Option<&str>, index: usize) -> String {
    match slug {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => index.to_string(),
    }
}

/// Render an order value the way documents write them: integral values
/// without a trailing fraction.
pub fn format_order(order: f64) -> String {
    if order.fract() == 0.0 && order.is_finite() {
        format!("{}", order as i64)
    } else {
        format!("{order}")
    }
}
