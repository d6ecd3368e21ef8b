// TutorLens Core
// Question classification and topic insight engine

pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;

#[cfg(test)]
mod tests;

use brain::{InsightAggregator, QuestionClassifier, Theme};
use models::{Classification, Question, TopicInsight};

/// Classify a question asked under the theme with id `theme_id`.
///
/// Unknown theme ids are treated like a theme without specific rules.
pub fn classify(content: &str, theme_id: &str) -> Classification {
    QuestionClassifier::new().classify(content, Theme::from_id(theme_id))
}

/// Ranked topic insights over a snapshot of classified questions.
pub fn analyze(questions: &[Question]) -> Vec<TopicInsight> {
    InsightAggregator::new().analyze(questions)
}
