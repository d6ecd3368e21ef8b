//! Study Analyzer - Main orchestrator for the Brain module.
//!
//! Coordinates question submission, classification, insight aggregation and
//! dashboard statistics. Holds only immutable configuration, so one analyzer
//! can serve any number of callers.

use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info};

use super::classifier::QuestionClassifier;
use super::insights::InsightAggregator;
use super::report::{self, AnalyticsReport};
use super::theme::Theme;
use crate::config::AnalyticsConfig;
use crate::error::AppError;
use crate::models::{Classification, Question, QuestionSubmission, TopicInsight};

/// Main analyzer that orchestrates all analysis components
#[derive(Debug, Clone)]
pub struct StudyAnalyzer {
    classifier: QuestionClassifier,
    aggregator: InsightAggregator,
    trending_threshold: usize,
}

impl Default for StudyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StudyAnalyzer {
    /// Create a new analyzer with default settings
    pub fn new() -> Self {
        Self::with_config(&AnalyticsConfig::default())
    }

    /// Create an analyzer from loaded configuration
    pub fn with_config(config: &AnalyticsConfig) -> Self {
        Self {
            classifier: QuestionClassifier::new(),
            aggregator: InsightAggregator::with_config(config.max_common_questions),
            trending_threshold: config.trending_threshold,
        }
    }

    /// Classify question text under a theme
    pub fn classify(&self, content: &str, theme: Theme) -> Classification {
        self.classifier.classify(content, theme)
    }

    /// Validate, classify and record a newly submitted question.
    ///
    /// Rejects blank content. The returned question keeps `content` verbatim.
    pub fn submit(&self, content: &str, theme: Theme, user_id: &str) -> Result<Question, AppError> {
        let submission = QuestionSubmission::checked(content, user_id)?;
        let classification = self.classifier.classify(content, theme);

        let question = Question::new(content, theme, submission.user_id)
            .with_classification(classification);

        debug!(
            id = %question.id,
            theme = %theme,
            category = ?question.category,
            "Question submitted"
        );

        Ok(question)
    }

    /// Ranked topic insights for a snapshot of questions
    pub fn insights(&self, questions: &[Question]) -> Vec<TopicInsight> {
        self.aggregator.analyze(questions)
    }

    /// Full analytics report for a snapshot of questions
    pub fn report(&self, questions: &[Question]) -> AnalyticsReport {
        let start = Instant::now();

        // 1. Topic insights
        let insights = self.aggregator.analyze(questions);

        // 2. Distributions
        let categories = report::category_distribution(questions);
        let difficulties = report::difficulty_distribution(questions);

        // 3. Headline numbers (needs insights and categories first)
        let summary = report::summarize(questions, &categories, &insights, self.trending_threshold);

        let report = AnalyticsReport {
            summary,
            categories,
            difficulties,
            insights,
            processing_time_ms: start.elapsed().as_millis() as u64,
            generated_at: Utc::now(),
        };

        info!("Analytics report generated: {}", report.summary());

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::Difficulty;

    #[test]
    fn test_submit_classifies() {
        let analyzer = StudyAnalyzer::new();

        let question = analyzer
            .submit("What is the derivative of x^2?", Theme::PureMath, "student-1")
            .unwrap();
        assert_eq!(question.content, "What is the derivative of x^2?");
        assert_eq!(question.category.as_deref(), Some("Calculus"));
        assert_eq!(question.difficulty, Some(Difficulty::Beginner));
        assert_eq!(question.concepts, vec!["calculus"]);
        assert_eq!(question.user_id, "student-1");
        assert!(uuid::Uuid::parse_str(&question.id).is_ok());
    }

    #[test]
    fn test_submit_rejects_blank() {
        let analyzer = StudyAnalyzer::new();

        let err = analyzer.submit("   ", Theme::Physics, "student-1").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_submit_keeps_content_verbatim() {
        let analyzer = StudyAnalyzer::new();

        let question = analyzer
            .submit("  why is a matrix invertible?\n", Theme::PureMath, "student-1")
            .unwrap();
        assert_eq!(question.content, "  why is a matrix invertible?\n");
        assert_eq!(question.category.as_deref(), Some("Linear Algebra"));
    }

    #[test]
    fn test_report() {
        let analyzer = StudyAnalyzer::new();

        let questions: Vec<Question> = [
            "What is a qubit?",
            "How does a Hadamard gate work?",
            "Explain Grover's algorithm",
            "What is a quantum bit?",
            "Tell me about the weather",
        ]
        .iter()
        .map(|q| analyzer.submit(q, Theme::QuantumComputing, "student-1").unwrap())
        .collect();

        let report = analyzer.report(&questions);
        assert_eq!(report.summary.total_questions, 5);
        assert_eq!(report.summary.unique_concepts, 3);
        assert_eq!(report.summary.categories, 4);
        assert_eq!(report.summary.trending_topics, 0);
        assert_eq!(report.top_insight().map(|i| i.concept.as_str()), Some("Qubits"));
        assert_eq!(report.top_insight().map(|i| i.frequency), Some(2));
    }

    #[test]
    fn test_config_threshold() {
        let config = AnalyticsConfig {
            trending_threshold: 1,
            ..AnalyticsConfig::default()
        };
        let analyzer = StudyAnalyzer::with_config(&config);

        let questions: Vec<Question> = ["integral of x", "integral of y"]
            .iter()
            .map(|q| analyzer.submit(q, Theme::PureMath, "student-1").unwrap())
            .collect();

        let report = analyzer.report(&questions);
        assert_eq!(report.summary.trending_topics, 1);
    }
}
