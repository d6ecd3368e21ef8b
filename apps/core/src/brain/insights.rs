//! Topic insight aggregation.
//!
//! Groups classified questions by concept tag and summarises each group:
//! how often it comes up, its typical difficulty, a few sample questions and
//! a teaching suggestion. Recomputed from scratch on every call.

use std::collections::HashMap;
use tracing::debug;

use super::difficulty::Difficulty;
use super::suggestion::SuggestionGenerator;
use crate::models::{Question, TopicInsight};

/// Default number of sample questions kept per insight
pub const DEFAULT_COMMON_QUESTIONS: usize = 3;

/// Questions sharing one concept tag, in input order
struct ConceptBucket<'a> {
    concept: &'a str,
    questions: Vec<&'a Question>,
}

/// Aggregates question snapshots into ranked topic insights
#[derive(Debug, Clone)]
pub struct InsightAggregator {
    suggestions: SuggestionGenerator,
    max_common_questions: usize,
}

impl Default for InsightAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightAggregator {
    /// Create an aggregator with default settings
    pub fn new() -> Self {
        Self::with_config(DEFAULT_COMMON_QUESTIONS)
    }

    /// Create an aggregator keeping up to `max_common_questions` samples per insight
    pub fn with_config(max_common_questions: usize) -> Self {
        Self {
            suggestions: SuggestionGenerator::new(),
            max_common_questions,
        }
    }

    /// Group questions by concept, preserving first-seen concept order
    fn bucket<'a>(&self, questions: &'a [Question]) -> Vec<ConceptBucket<'a>> {
        let mut index: HashMap<&'a str, usize> = HashMap::new();
        let mut buckets: Vec<ConceptBucket<'a>> = Vec::new();

        for question in questions {
            for concept in &question.concepts {
                let slot = *index.entry(concept.as_str()).or_insert_with(|| {
                    buckets.push(ConceptBucket {
                        concept: concept.as_str(),
                        questions: Vec::new(),
                    });
                    buckets.len() - 1
                });
                buckets[slot].questions.push(question);
            }
        }

        buckets
    }

    fn summarise(&self, bucket: &ConceptBucket<'_>) -> TopicInsight {
        let frequency = bucket.questions.len();
        let difficulty = Difficulty::mode(
            bucket
                .questions
                .iter()
                .map(|q| q.difficulty.unwrap_or_default()),
        );
        let common_questions = bucket
            .questions
            .iter()
            .take(self.max_common_questions)
            .map(|q| q.content.clone())
            .collect();

        TopicInsight {
            concept: format_concept(bucket.concept),
            frequency,
            difficulty,
            common_questions,
            suggested_introduction: self.suggestions.suggest(bucket.concept, difficulty, frequency),
        }
    }

    /// Analyze a snapshot of classified questions.
    ///
    /// Output is sorted by frequency, highest first; equal frequencies keep the
    /// order in which their concepts first appeared. Questions without concept
    /// tags are skipped. Never fails; an empty snapshot gives an empty list.
    pub fn analyze(&self, questions: &[Question]) -> Vec<TopicInsight> {
        let mut insights: Vec<TopicInsight> = self
            .bucket(questions)
            .iter()
            .map(|bucket| self.summarise(bucket))
            .collect();

        // sort_by is stable
        insights.sort_by(|a, b| b.frequency.cmp(&a.frequency));

        debug!(
            questions = questions.len(),
            insights = insights.len(),
            "Aggregated topic insights"
        );

        insights
    }
}

/// Turn a concept slug into a display name: "linear-algebra" -> "Linear Algebra"
pub fn format_concept(concept: &str) -> String {
    concept
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::Theme;
    use crate::models::Classification;

    fn tagged(content: &str, concepts: &[&str], difficulty: Difficulty) -> Question {
        Question::new(content, Theme::PureMath, "student-1").with_classification(Classification {
            category: "Test".to_string(),
            difficulty,
            concepts: concepts.iter().map(|c| c.to_string()).collect(),
        })
    }

    #[test]
    fn test_empty_input() {
        let aggregator = InsightAggregator::new();
        assert!(aggregator.analyze(&[]).is_empty());
    }

    #[test]
    fn test_single_bucket_mode() {
        let aggregator = InsightAggregator::new();
        let questions = vec![
            tagged("q1", &["calculus"], Difficulty::Beginner),
            tagged("q2", &["calculus"], Difficulty::Beginner),
            tagged("q3", &["calculus"], Difficulty::Advanced),
        ];

        let insights = aggregator.analyze(&questions);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].concept, "Calculus");
        assert_eq!(insights[0].frequency, 3);
        assert_eq!(insights[0].difficulty, Difficulty::Beginner);
        assert_eq!(insights[0].common_questions, vec!["q1", "q2", "q3"]);
    }

    #[test]
    fn test_sorted_by_frequency() {
        let aggregator = InsightAggregator::new();
        let mut questions = Vec::new();
        for i in 0..2 {
            questions.push(tagged(&format!("a{}", i), &["algebra"], Difficulty::Beginner));
        }
        for i in 0..5 {
            questions.push(tagged(&format!("b{}", i), &["calculus"], Difficulty::Beginner));
        }

        let insights = aggregator.analyze(&questions);
        let names: Vec<&str> = insights.iter().map(|i| i.concept.as_str()).collect();
        assert_eq!(names, vec!["Calculus", "Algebra"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let aggregator = InsightAggregator::new();
        let questions = vec![
            tagged("q1", &["probability"], Difficulty::Beginner),
            tagged("q2", &["statistics"], Difficulty::Beginner),
            tagged("q3", &["statistics"], Difficulty::Beginner),
            tagged("q4", &["probability"], Difficulty::Beginner),
            tagged("q5", &["qubits"], Difficulty::Beginner),
        ];

        let insights = aggregator.analyze(&questions);
        let names: Vec<&str> = insights.iter().map(|i| i.concept.as_str()).collect();
        assert_eq!(names, vec!["Probability", "Statistics", "Qubits"]);
    }

    #[test]
    fn test_multi_concept_question_counts_in_each_bucket() {
        let aggregator = InsightAggregator::new();
        let questions = vec![
            tagged("both", &["qubits", "superposition"], Difficulty::Intermediate),
            tagged("untagged", &[], Difficulty::Advanced),
        ];

        let insights = aggregator.analyze(&questions);
        assert_eq!(insights.len(), 2);
        assert!(insights.iter().all(|i| i.frequency == 1));
        assert!(insights.iter().all(|i| i.common_questions == vec!["both"]));
    }

    #[test]
    fn test_common_questions_prefix() {
        let aggregator = InsightAggregator::new();
        let questions: Vec<Question> = (0..6)
            .map(|i| tagged(&format!("q{}", i), &["calculus"], Difficulty::Beginner))
            .collect();

        let insights = aggregator.analyze(&questions);
        assert_eq!(insights[0].common_questions, vec!["q0", "q1", "q2"]);
        assert_eq!(insights[0].frequency, 6);
        assert!(insights[0]
            .suggested_introduction
            .ends_with("Students show moderate interest in this topic."));
    }

    #[test]
    fn test_missing_difficulty_counts_as_beginner() {
        let aggregator = InsightAggregator::new();
        let mut unrated = Question::new("q1", Theme::PureMath, "student-1");
        unrated.concepts = vec!["algebra".to_string()];
        let questions = vec![
            unrated.clone(),
            unrated,
            tagged("q3", &["algebra"], Difficulty::Advanced),
        ];

        let insights = aggregator.analyze(&questions);
        assert_eq!(insights[0].difficulty, Difficulty::Beginner);
    }

    #[test]
    fn test_custom_sample_limit() {
        let aggregator = InsightAggregator::with_config(1);
        let questions = vec![
            tagged("q1", &["algebra"], Difficulty::Beginner),
            tagged("q2", &["algebra"], Difficulty::Beginner),
        ];

        let insights = aggregator.analyze(&questions);
        assert_eq!(insights[0].common_questions, vec!["q1"]);
    }

    #[test]
    fn test_format_concept() {
        assert_eq!(format_concept("linear-algebra"), "Linear Algebra");
        assert_eq!(format_concept("quantum-algorithms"), "Quantum Algorithms");
        assert_eq!(format_concept("qubits"), "Qubits");
        assert_eq!(format_concept(""), "");
    }
}
