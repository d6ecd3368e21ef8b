//! Analytics Report - Output structure for a question snapshot.
//!
//! Bundles the dashboard statistics with the ranked topic insights.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use crate::models::{Question, TopicInsight};

/// Category label for questions that were never classified
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Default frequency a topic must exceed to count as trending
pub const DEFAULT_TRENDING_THRESHOLD: usize = 5;

/// Count of questions per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Count of questions per difficulty tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: Difficulty,
    pub count: usize,
}

/// Headline numbers for the analytics view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_questions: usize,
    pub unique_concepts: usize,
    pub categories: usize,
    /// Insights whose frequency exceeds the trending threshold
    pub trending_topics: usize,
}

/// Complete analytics over one question snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub summary: AnalyticsSummary,

    /// Questions per category, in order of first appearance
    pub categories: Vec<CategoryCount>,

    /// Questions per difficulty, in order of first appearance
    pub difficulties: Vec<DifficultyCount>,

    /// Ranked topic insights
    pub insights: Vec<TopicInsight>,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub generated_at: DateTime<Utc>,
}

impl AnalyticsReport {
    /// Get the most asked-about topic
    pub fn top_insight(&self) -> Option<&TopicInsight> {
        self.insights.first()
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Questions: {}, Concepts: {}, Categories: {}, Trending: {}, Top: {}",
            self.summary.total_questions,
            self.summary.unique_concepts,
            self.summary.categories,
            self.summary.trending_topics,
            self.top_insight()
                .map(|i| i.concept.as_str())
                .unwrap_or("none")
        )
    }
}

/// Questions per category; unclassified questions go under "Uncategorized"
pub fn category_distribution(questions: &[Question]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for question in questions {
        let category = question.category.as_deref().unwrap_or(UNCATEGORIZED);
        match counts.iter_mut().find(|c| c.category == category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: category.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

/// Questions per difficulty; unrated questions count as beginner
pub fn difficulty_distribution(questions: &[Question]) -> Vec<DifficultyCount> {
    let mut counts: Vec<DifficultyCount> = Vec::new();
    for question in questions {
        let difficulty = question.difficulty.unwrap_or_default();
        match counts.iter_mut().find(|c| c.difficulty == difficulty) {
            Some(entry) => entry.count += 1,
            None => counts.push(DifficultyCount {
                difficulty,
                count: 1,
            }),
        }
    }
    counts
}

/// Headline numbers from the snapshot and its insights
pub fn summarize(
    questions: &[Question],
    categories: &[CategoryCount],
    insights: &[TopicInsight],
    trending_threshold: usize,
) -> AnalyticsSummary {
    AnalyticsSummary {
        total_questions: questions.len(),
        unique_concepts: insights.len(),
        categories: categories.len(),
        trending_topics: insights
            .iter()
            .filter(|i| i.frequency > trending_threshold)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::Theme;
    use crate::models::Classification;

    fn classified(category: &str, difficulty: Difficulty) -> Question {
        Question::new("q", Theme::PureMath, "student-1").with_classification(Classification {
            category: category.to_string(),
            difficulty,
            concepts: vec![],
        })
    }

    fn insight(concept: &str, frequency: usize) -> TopicInsight {
        TopicInsight {
            concept: concept.to_string(),
            frequency,
            difficulty: Difficulty::Beginner,
            common_questions: vec![],
            suggested_introduction: String::new(),
        }
    }

    #[test]
    fn test_category_distribution() {
        let questions = vec![
            classified("Calculus", Difficulty::Beginner),
            Question::new("raw", Theme::PureMath, "student-1"),
            classified("Calculus", Difficulty::Advanced),
            classified("Algebra", Difficulty::Beginner),
        ];

        let counts = category_distribution(&questions);
        assert_eq!(
            counts,
            vec![
                CategoryCount { category: "Calculus".to_string(), count: 2 },
                CategoryCount { category: UNCATEGORIZED.to_string(), count: 1 },
                CategoryCount { category: "Algebra".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_difficulty_distribution_defaults_to_beginner() {
        let questions = vec![
            classified("Calculus", Difficulty::Advanced),
            Question::new("raw", Theme::PureMath, "student-1"),
            classified("Algebra", Difficulty::Beginner),
        ];

        let counts = difficulty_distribution(&questions);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].difficulty, Difficulty::Advanced);
        assert_eq!(counts[1].difficulty, Difficulty::Beginner);
        assert_eq!(counts[1].count, 2);
    }

    #[test]
    fn test_trending_is_strictly_greater() {
        let insights = vec![insight("A", 6), insight("B", 5), insight("C", 1)];
        let summary = summarize(&[], &[], &insights, DEFAULT_TRENDING_THRESHOLD);
        assert_eq!(summary.trending_topics, 1);
        assert_eq!(summary.unique_concepts, 3);
    }

    #[test]
    fn test_report_summary_line() {
        let report = AnalyticsReport {
            summary: AnalyticsSummary {
                total_questions: 4,
                unique_concepts: 1,
                categories: 2,
                trending_topics: 0,
            },
            categories: vec![],
            difficulties: vec![],
            insights: vec![insight("Calculus", 3)],
            processing_time_ms: 0,
            generated_at: Utc::now(),
        };

        let line = report.summary();
        assert!(line.contains("Questions: 4"));
        assert!(line.contains("Top: Calculus"));
    }
}
