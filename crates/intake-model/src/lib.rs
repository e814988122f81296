//! Data model for intake-form quiz documents.
//!
//! Two shapes live here:
//!
//! - **raw**: the untrusted JSON quiz document as it arrives from the
//!   document provider, tolerant of both canonical (camelCase) and
//!   legacy (snake_case) key spellings
//! - **config**: the canonical configuration model consumed by the
//!   rendering layer, produced by `intake-transform`
//!
//! The evaluation helpers (`condition`, `display`) are pure values
//! invoked against a form-answers map; they hold no state beyond what
//! the document declared.

pub mod condition;
pub mod config;
pub mod display;
pub mod error;
pub mod raw;
pub mod report;

pub use condition::{Comparison, ConditionOperator, FormAnswers, LogicalOperator, RenderCondition};
pub use config::{
    CalculatedValues, ChoiceQuestion, DropdownQuestion, FormQuestion, FormStep, InputType,
    ProgressStep, QuestionKind, QuestionType, QuizConfig, QuizMetadata, StepProgressMapping,
};
pub use display::{CalculateSpec, DisplayCondition, DisplayValue, DEFAULT_DISPLAY_TEMPLATE};
pub use error::{Result, TransformError};
pub use raw::{
    RawDisplayValue, RawDocumentMetadata, RawFormStep, RawOption, RawProgressStep, RawQuestion,
    RawQuiz, RawQuizDocument, RawTemplate, DEFAULT_PROGRESS_COLOR,
};
pub use report::ValidationReport;
