//! Display values: derived, computed values (e.g. BMI) shown to the
//! user, declared in the quiz document as a condition list, a
//! calculation spec, and a text template.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::condition::{coerce_number, FormAnswers};

/// Template used when the document does not supply one.
pub const DEFAULT_DISPLAY_TEMPLATE: &str = "{{value}}";

const INCHES_PER_FOOT: f64 = 12.0;
const METERS_PER_INCH: f64 = 0.0254;
const KG_PER_POUND: f64 = 0.453592;

/// One clause of a display-value condition.
///
/// Unlike render conditions, the operator stays free text here: an
/// unknown operator does not reject the document, it makes the clause
/// pass vacuously (see `DisplayCondition::passes`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayCondition {
    pub field: String,
    pub operator: String,
    #[serde(default)]
    pub value: Value,
}

/// Declarative calculation spec. Only `bmi` is implemented;
/// `weeksToGoal` and `custom` are accepted and resolve to the
/// empty-string sentinel until they grow an implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub formula: Option<String>,
}

/// A derived value attached to a form step: a gate, a calculation,
/// and a display template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayValue {
    #[serde(default)]
    pub conditions: Vec<DisplayCondition>,
    #[serde(default)]
    pub calculate: Option<CalculateSpec>,
    pub template: String,
}

impl DisplayCondition {
    fn passes(&self, answers: &FormAnswers) -> bool {
        let field_value = answers.get(&self.field);
        match self.operator.as_str() {
            "equals" => field_value == Some(&self.value),
            "notEquals" => match field_value {
                None | Some(Value::Null) => false,
                Some(Value::String(s)) if s.is_empty() => false,
                Some(v) => *v != self.value,
            },
            "greaterThan" => coerce_number(field_value) > coerce_number(Some(&self.value)),
            "lessThan" => coerce_number(field_value) < coerce_number(Some(&self.value)),
            // Operators outside the known four cannot fail a clause.
            _ => true,
        }
    }
}

impl DisplayValue {
    /// `true` when no clauses are declared; otherwise every clause
    /// must hold (the condition list is conjunctive only).
    pub fn condition_met(&self, answers: &FormAnswers) -> bool {
        self.conditions.iter().all(|clause| clause.passes(answers))
    }

    /// Run the declared calculation against the answers map. Returns
    /// the empty-string sentinel when no calculation is declared, the
    /// calculation is an unimplemented kind, or a referenced field is
    /// missing.
    pub fn calculate(&self, answers: &FormAnswers) -> String {
        let Some(calc) = &self.calculate else {
            return String::new();
        };
        match calc.kind.as_str() {
            "bmi" if calc.fields.len() >= 3 => bmi(&calc.fields, answers),
            _ => String::new(),
        }
    }
}

/// BMI from three positional fields: height feet, height inches,
/// weight in pounds. Two-decimal text output.
fn bmi(fields: &[String], answers: &FormAnswers) -> String {
    let resolved: Vec<Option<&Value>> = fields
        .iter()
        .take(3)
        .map(|field| answers.get(field))
        .collect();
    if resolved
        .iter()
        .any(|value| matches!(value, None | Some(Value::Null)))
    {
        return String::new();
    }
    let feet = coerce_number(resolved[0]);
    let inches = coerce_number(resolved[1]);
    let pounds = coerce_number(resolved[2]);

    let height_meters = (feet * INCHES_PER_FOOT + inches) * METERS_PER_INCH;
    let weight_kg = pounds * KG_PER_POUND;
    let bmi = weight_kg / (height_meters * height_meters);
    format!("{bmi:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bmi_display() -> DisplayValue {
        DisplayValue {
            conditions: vec![],
            calculate: Some(CalculateSpec {
                kind: "bmi".to_string(),
                fields: vec![
                    "height-feet".to_string(),
                    "height-inches".to_string(),
                    "weight".to_string(),
                ],
                formula: None,
            }),
            template: DEFAULT_DISPLAY_TEMPLATE.to_string(),
        }
    }

    fn answers(pairs: &[(&str, Value)]) -> FormAnswers {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn bmi_is_deterministic() {
        let display = bmi_display();
        let answers = answers(&[
            ("height-feet", json!(5)),
            ("height-inches", json!(10)),
            ("weight", json!(180)),
        ]);
        assert_eq!(display.calculate(&answers), "25.83");
    }

    #[test]
    fn bmi_accepts_stringly_numbers() {
        let display = bmi_display();
        let answers = answers(&[
            ("height-feet", json!("5")),
            ("height-inches", json!("10")),
            ("weight", json!("180")),
        ]);
        assert_eq!(display.calculate(&answers), "25.83");
    }

    #[test]
    fn bmi_with_missing_field_is_empty() {
        let display = bmi_display();
        let answers = answers(&[("height-feet", json!(5)), ("weight", json!(180))]);
        assert_eq!(display.calculate(&answers), "");
        let with_null = self::answers(&[
            ("height-feet", json!(5)),
            ("height-inches", Value::Null),
            ("weight", json!(180)),
        ]);
        assert_eq!(display.calculate(&with_null), "");
    }

    #[test]
    fn unimplemented_calculations_return_sentinel() {
        for kind in ["weeksToGoal", "custom"] {
            let display = DisplayValue {
                conditions: vec![],
                calculate: Some(CalculateSpec {
                    kind: kind.to_string(),
                    fields: vec!["current-weight".to_string(), "goal-weight".to_string()],
                    formula: Some("a - b".to_string()),
                }),
                template: DEFAULT_DISPLAY_TEMPLATE.to_string(),
            };
            assert_eq!(display.calculate(&answers(&[])), "");
        }
    }

    #[test]
    fn no_clauses_means_condition_met() {
        let display = bmi_display();
        assert!(display.condition_met(&answers(&[])));
    }

    #[test]
    fn clauses_are_conjunctive() {
        let display = DisplayValue {
            conditions: vec![
                DisplayCondition {
                    field: "goal".to_string(),
                    operator: "equals".to_string(),
                    value: json!("lose-weight"),
                },
                DisplayCondition {
                    field: "weight".to_string(),
                    operator: "greaterThan".to_string(),
                    value: json!(100),
                },
            ],
            calculate: None,
            template: DEFAULT_DISPLAY_TEMPLATE.to_string(),
        };
        assert!(display.condition_met(&answers(&[
            ("goal", json!("lose-weight")),
            ("weight", json!(180)),
        ])));
        assert!(!display.condition_met(&answers(&[
            ("goal", json!("lose-weight")),
            ("weight", json!(90)),
        ])));
    }

    #[test]
    fn unknown_operator_passes_vacuously() {
        let display = DisplayValue {
            conditions: vec![DisplayCondition {
                field: "goal".to_string(),
                operator: "contains".to_string(),
                value: json!("weight"),
            }],
            calculate: None,
            template: DEFAULT_DISPLAY_TEMPLATE.to_string(),
        };
        assert!(display.condition_met(&answers(&[])));
    }
}
