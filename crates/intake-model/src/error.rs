use thiserror::Error;

/// Failure while transforming a single raw quiz.
///
/// The transformer is best-effort: missing optional fields never fail,
/// they resolve to documented defaults. Only input the canonical model
/// cannot represent at all is rejected.
#[derive(Debug, Clone, Error)]
pub enum TransformError {
    /// The quiz carries no usable slug, so no canonical id can be formed.
    #[error("quiz has no usable slug")]
    MissingSlug,
    /// A question declares a type tag outside the known set.
    #[error("question \"{slug}\" has unknown type \"{type_tag}\"")]
    UnknownQuestionType { slug: String, type_tag: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;
