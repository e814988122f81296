//! Render conditions: boolean gates over a form-answers map that
//! control whether a form step is shown.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answers collected so far, keyed by question slug.
pub type FormAnswers = BTreeMap<String, Value>;

/// The closed set of comparison operators a render condition may use.
/// Anything else fails deserialization of the raw document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionOperator {
    #[serde(rename = "equals")]
    Equals,
    #[serde(rename = "notEquals")]
    NotEquals,
    #[serde(rename = "greaterThan")]
    GreaterThan,
    #[serde(rename = "lessThan")]
    LessThan,
}

/// How the comparisons of a render condition combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

/// A single field comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub field: String,
    pub operator: ConditionOperator,
    #[serde(default)]
    pub value: Value,
}

/// A conjunction or disjunction of field comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderCondition {
    pub conditions: Vec<Comparison>,
    pub logical_operator: LogicalOperator,
}

impl Comparison {
    /// Whether this comparison holds against the given answers.
    ///
    /// `equals` is strict equality on the JSON value. `notEquals` only
    /// holds when the field is present, non-empty, and different. The
    /// numeric comparators coerce both sides to numbers; a value that
    /// cannot be coerced makes the comparison fail, never pass.
    pub fn holds(&self, answers: &FormAnswers) -> bool {
        let field_value = answers.get(&self.field);
        match self.operator {
            ConditionOperator::Equals => field_value == Some(&self.value),
            ConditionOperator::NotEquals => match field_value {
                None | Some(Value::Null) => false,
                Some(Value::String(s)) if s.is_empty() => false,
                Some(v) => *v != self.value,
            },
            ConditionOperator::GreaterThan => {
                coerce_number(field_value) > coerce_number(Some(&self.value))
            }
            ConditionOperator::LessThan => {
                coerce_number(field_value) < coerce_number(Some(&self.value))
            }
        }
    }
}

impl RenderCondition {
    /// Evaluate the full gate against the answers map.
    pub fn evaluate(&self, answers: &FormAnswers) -> bool {
        match self.logical_operator {
            LogicalOperator::And => self.conditions.iter().all(|c| c.holds(answers)),
            LogicalOperator::Or => self.conditions.iter().any(|c| c.holds(answers)),
        }
    }
}

/// Loose numeric coercion matching the answer values the rendering
/// layer produces: numbers pass through, strings are parsed (blank
/// parses to zero), null is zero, anything else is NaN. NaN makes
/// every ordered comparison false.
pub(crate) fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Some(_) => f64::NAN,
    }
}
