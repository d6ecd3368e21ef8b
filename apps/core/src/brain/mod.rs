//! # Brain Module
//!
//! Fast, non-LLM analysis of student questions.
//! Classifies each question as it is submitted and turns a snapshot of
//! classified questions into teaching insights.
//!
//! ## Components
//! - `theme`: Subject themes and the static theme catalog
//! - `difficulty`: Difficulty tiers and the generic difficulty overlay
//! - `rules`: Per-theme keyword rule tables
//! - `classifier`: Question classification (first matching rule wins)
//! - `suggestion`: Canned teaching suggestions per concept and tier
//! - `insights`: Topic insight aggregation
//! - `report`: Dashboard statistics and the report structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod classifier;
pub mod difficulty;
pub mod insights;
pub mod report;
pub mod rules;
pub mod suggestion;
pub mod theme;

// Re-export main types for convenience
pub use analyzer::StudyAnalyzer;
pub use classifier::QuestionClassifier;
pub use difficulty::{Difficulty, DifficultyOverlay};
pub use insights::{format_concept, InsightAggregator};
pub use report::{AnalyticsReport, AnalyticsSummary, CategoryCount, DifficultyCount};
pub use rules::Concept;
pub use suggestion::SuggestionGenerator;
pub use theme::{Theme, ThemeProfile};
