use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::brain::{Difficulty, Theme};
use crate::error::AppError;

/// Output of classifying a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Human-readable subject area (e.g., "Linear Algebra").
    pub category: String,
    /// Difficulty tier after the generic overlay.
    pub difficulty: Difficulty,
    /// Concept slugs, in match order. May be empty.
    pub concepts: Vec<String>,
}

/// A question submission, checked before classification.
/// Content must be 1 to 4000 characters after trimming.
#[derive(Debug, Clone, Validate)]
pub struct QuestionSubmission {
    /// Question text with surrounding whitespace removed.
    #[validate(length(min = 1, max = 4000, message = "question must be 1 to 4000 characters"))]
    pub trimmed_content: String,
    /// The submitting user.
    #[validate(length(min = 1, message = "user id must not be empty"))]
    pub user_id: String,
}

impl QuestionSubmission {
    /// Builds a submission and validates it.
    pub fn checked(content: &str, user_id: &str) -> Result<Self, AppError> {
        let submission = Self {
            trimmed_content: content.trim().to_string(),
            user_id: user_id.trim().to_string(),
        };
        submission.validate()?;
        Ok(submission)
    }
}

/// A classified student question. Owned and stored by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// The unique identifier for the question (UUID v4 when created here).
    pub id: String,
    /// The question text, verbatim as submitted.
    pub content: String,
    /// The ID of the student who asked.
    #[serde(default)]
    pub user_id: String,
    /// When the question was submitted.
    pub timestamp: DateTime<Utc>,
    /// The theme the question was asked under.
    #[serde(default)]
    pub theme: Theme,
    /// Subject area assigned by classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Difficulty tier assigned by classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Concept tags assigned by classification.
    #[serde(default)]
    pub concepts: Vec<String>,
}

impl Question {
    /// Creates an unclassified question with a fresh id and the current time.
    pub fn new(content: impl Into<String>, theme: Theme, user_id: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            user_id: user_id.into(),
            timestamp: Utc::now(),
            theme,
            category: None,
            difficulty: None,
            concepts: Vec::new(),
        }
    }

    /// Attaches classification output to the question.
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.category = Some(classification.category);
        self.difficulty = Some(classification.difficulty);
        self.concepts = classification.concepts;
        self
    }

    /// Whether the question has been through the classifier.
    pub fn is_classified(&self) -> bool {
        self.category.is_some()
    }
}

/// Aggregate over all questions that share a concept tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicInsight {
    /// Display name of the concept (e.g., "Linear Algebra").
    pub concept: String,
    /// Number of questions tagged with the concept.
    pub frequency: usize,
    /// Most common difficulty among those questions.
    pub difficulty: Difficulty,
    /// Up to the first few question texts, earliest first.
    pub common_questions: Vec<String>,
    /// Teaching suggestion for introducing the concept.
    pub suggested_introduction: String,
}

/// Parses a JSON array of questions.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, AppError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_rejects_blank() {
        assert!(QuestionSubmission::checked("", "student-1").is_err());
        assert!(QuestionSubmission::checked("   \n\t", "student-1").is_err());
        assert!(QuestionSubmission::checked("What is a prime?", "").is_err());
    }

    #[test]
    fn test_submission_rejects_too_long() {
        let long = "a".repeat(4001);
        let err = QuestionSubmission::checked(&long, "student-1").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        assert!(QuestionSubmission::checked(&"a".repeat(4000), "student-1").is_ok());
    }

    #[test]
    fn test_submission_trims() {
        let submission = QuestionSubmission::checked("  What is a prime?  ", "student-1").unwrap();
        assert_eq!(submission.trimmed_content, "What is a prime?");
    }

    #[test]
    fn test_question_camel_case_wire_format() {
        let question = Question::new("What is a qubit?", Theme::QuantumComputing, "student-1")
            .with_classification(Classification {
                category: "Qubits".to_string(),
                difficulty: Difficulty::Beginner,
                concepts: vec!["qubits".to_string()],
            });

        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["userId"], "student-1");
        assert_eq!(value["theme"], "quantum-computing");
        assert_eq!(value["difficulty"], "beginner");
        assert_eq!(value["concepts"][0], "qubits");
        assert!(question.is_classified());
    }

    #[test]
    fn test_parse_questions_minimal_fields() {
        let json = r#"[
            {"id": "q1", "content": "What is a matrix?", "timestamp": "2024-03-01T10:00:00Z", "theme": "pure-math"},
            {"id": "q2", "content": "Why?", "timestamp": "2024-03-01T10:05:00Z", "theme": "unknown",
             "category": "General", "difficulty": "intermediate", "concepts": []}
        ]"#;

        let questions = parse_questions(json).unwrap();
        assert_eq!(questions.len(), 2);
        assert!(!questions[0].is_classified());
        assert!(questions[0].concepts.is_empty());
        assert_eq!(questions[1].theme, Theme::General);
        assert_eq!(questions[1].difficulty, Some(Difficulty::Intermediate));
    }

    #[test]
    fn test_parse_questions_rejects_garbage() {
        assert!(parse_questions("{}").is_err());
    }
}
