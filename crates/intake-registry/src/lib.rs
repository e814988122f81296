//! Quiz lookup with explicit caching and hand-authored fallbacks.
//!
//! The registry owns its cache: document-sourced quizzes are loaded
//! once via [`QuizRegistry::load`] and served until
//! [`QuizRegistry::clear`]. Hand-authored quizzes act as fallbacks and
//! are shadowed by a document-sourced quiz with the same id. The
//! transform and validate functions stay stateless; all caching lives
//! here.

use std::collections::BTreeSet;

use intake_model::{QuizConfig, RawQuizDocument};
use intake_transform::transform_document;

#[derive(Debug, Default)]
pub struct QuizRegistry {
    builtin: Vec<QuizConfig>,
    loaded: Option<Vec<QuizConfig>>,
}

impl QuizRegistry {
    /// A registry serving only the given hand-authored quizzes until a
    /// document is loaded.
    pub fn new(builtin: Vec<QuizConfig>) -> Self {
        Self {
            builtin,
            loaded: None,
        }
    }

    /// Transform and cache the quizzes of `document`. `None` is the
    /// degenerate "no document available" state: it caches an empty
    /// list, leaving the hand-authored quizzes in service.
    pub fn load(&mut self, document: Option<&RawQuizDocument>) {
        let quizzes = match document {
            Some(document) => transform_document(document),
            None => {
                tracing::debug!("no quiz document available, serving built-in quizzes only");
                Vec::new()
            }
        };
        self.loaded = Some(quizzes);
    }

    /// Whether a document load (possibly empty) has happened since the
    /// last clear.
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Drop the cached document-sourced quizzes.
    pub fn clear(&mut self) {
        self.loaded = None;
    }

    /// All quizzes in service: document-sourced first, then
    /// hand-authored ones whose id is not shadowed.
    pub fn quizzes(&self) -> Vec<&QuizConfig> {
        let loaded = self.loaded.as_deref().unwrap_or_default();
        let loaded_ids: BTreeSet<&str> = loaded.iter().map(|quiz| quiz.id.as_str()).collect();
        loaded
            .iter()
            .chain(
                self.builtin
                    .iter()
                    .filter(|quiz| !loaded_ids.contains(quiz.id.as_str())),
            )
            .collect()
    }

    /// Look up a quiz by id, document-sourced entries taking
    /// precedence.
    pub fn get(&self, id: &str) -> Option<&QuizConfig> {
        self.quizzes().into_iter().find(|quiz| quiz.id == id)
    }

    /// Ids of every quiz in service.
    pub fn ids(&self) -> Vec<String> {
        self.quizzes().iter().map(|quiz| quiz.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn builtin(id: &str, version: &str) -> QuizConfig {
        QuizConfig {
            id: id.to_string(),
            name: None,
            description: None,
            version: Some(version.to_string()),
            progress_steps: vec![],
            step_progress_mapping: vec![],
            steps: vec![],
            metadata: None,
        }
    }

    fn document(slugs: &[&str]) -> RawQuizDocument {
        let quizzes: Vec<serde_json::Value> = slugs
            .iter()
            .map(|slug| {
                json!({
                    "id": format!("id-{slug}"),
                    "slug": slug,
                    "progressSteps": [],
                    "formSteps": []
                })
            })
            .collect();
        serde_json::from_value(json!({ "quizzes": quizzes })).expect("raw document")
    }

    #[test]
    fn document_quizzes_shadow_builtin_by_id() {
        let mut registry = QuizRegistry::new(vec![
            builtin("weight-loss", "builtin"),
            builtin("hair-loss", "builtin"),
        ]);
        registry.load(Some(&document(&["weight-loss", "acne"])));

        assert_eq!(registry.ids(), ["weight-loss", "acne", "hair-loss"]);
        // The document-sourced quiz wins over the builtin of the same id.
        assert_eq!(registry.get("weight-loss").expect("quiz").version, None);
        assert_eq!(
            registry
                .get("hair-loss")
                .expect("quiz")
                .version
                .as_deref(),
            Some("builtin")
        );
    }

    #[test]
    fn absent_document_serves_builtins() {
        let mut registry = QuizRegistry::new(vec![builtin("acne", "builtin")]);
        registry.load(None);
        assert!(registry.is_loaded());
        assert_eq!(registry.ids(), ["acne"]);
    }

    #[test]
    fn clear_forgets_the_document() {
        let mut registry = QuizRegistry::new(vec![builtin("weight-loss", "builtin")]);
        registry.load(Some(&document(&["weight-loss"])));
        assert_eq!(registry.get("weight-loss").expect("quiz").version, None);

        registry.clear();
        assert!(!registry.is_loaded());
        assert_eq!(
            registry
                .get("weight-loss")
                .expect("quiz")
                .version
                .as_deref(),
            Some("builtin")
        );
    }

    #[test]
    fn lookup_miss_is_none() {
        let registry = QuizRegistry::new(vec![]);
        assert!(registry.get("unknown").is_none());
        assert!(registry.ids().is_empty());
    }
}
