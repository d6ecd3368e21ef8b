//! Question classification using keyword rules.
//!
//! Case-insensitive substring matching against the theme's rule table,
//! followed by the generic difficulty overlay. No model calls, no state.

use tracing::debug;

use super::difficulty::{Difficulty, DifficultyOverlay};
use super::rules::{rules_for, CategoryRule};
use super::theme::Theme;
use crate::models::Classification;

/// Category used when no theme rule matches
pub const DEFAULT_CATEGORY: &str = "General";

/// Keyword classifier for student questions
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionClassifier {
    overlay: DifficultyOverlay,
}

impl QuestionClassifier {
    /// Create a new classifier over the built-in rule tables
    pub fn new() -> Self {
        Self {
            overlay: DifficultyOverlay,
        }
    }

    /// First rule in the theme's table whose triggers appear in the text
    fn match_rule(&self, text_lower: &str, theme: Theme) -> Option<&'static CategoryRule> {
        rules_for(theme).iter().find(|rule| rule.matches(text_lower))
    }

    /// Classify a question asked under `theme`.
    ///
    /// Total: an unmatched question gets the "General" category, no concepts,
    /// and whatever tier the overlay implies (beginner by default).
    pub fn classify(&self, content: &str, theme: Theme) -> Classification {
        let text_lower = content.to_lowercase();

        let mut classification = Classification {
            category: DEFAULT_CATEGORY.to_string(),
            difficulty: Difficulty::Beginner,
            concepts: Vec::new(),
        };

        if let Some(rule) = self.match_rule(&text_lower, theme) {
            classification.category = rule.category.to_string();
            classification.concepts.push(rule.concept.slug().to_string());
            classification.difficulty = rule.difficulty_for(&text_lower);
        }

        // The overlay always has the last word on difficulty
        classification.difficulty = self.overlay.apply(&text_lower, classification.difficulty);

        debug!(
            theme = %theme,
            category = %classification.category,
            difficulty = %classification.difficulty,
            concepts = ?classification.concepts,
            "Classified question"
        );

        classification
    }

    /// Classify using a raw theme id; unknown ids fall back to `Theme::General`
    pub fn classify_with_id(&self, content: &str, theme_id: &str) -> Classification {
        self.classify(content, Theme::from_id(theme_id))
    }
}
