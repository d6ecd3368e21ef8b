//! Keyword rule tables used by the question classifier.
//!
//! Each theme owns an ordered list of rules. A rule fires when any of its
//! triggers is a substring of the lower-cased question, and the first rule
//! that fires wins. Inside a rule, escalations are checked in order and the
//! first hit sets the tier; otherwise the rule's base tier applies.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::difficulty::Difficulty;
use super::theme::Theme;

/// Concept tags the rule tables can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Concept {
    Calculus,
    LinearAlgebra,
    Algebra,
    NumberTheory,
    Probability,
    Statistics,
    Qubits,
    QuantumGates,
    QuantumAlgorithms,
    Superposition,
    Entanglement,
    ErrorCorrection,
}

impl Concept {
    /// Machine-readable slug stored on questions
    pub fn slug(&self) -> &'static str {
        match self {
            Concept::Calculus => "calculus",
            Concept::LinearAlgebra => "linear-algebra",
            Concept::Algebra => "algebra",
            Concept::NumberTheory => "number-theory",
            Concept::Probability => "probability",
            Concept::Statistics => "statistics",
            Concept::Qubits => "qubits",
            Concept::QuantumGates => "quantum-gates",
            Concept::QuantumAlgorithms => "quantum-algorithms",
            Concept::Superposition => "superposition",
            Concept::Entanglement => "entanglement",
            Concept::ErrorCorrection => "error-correction",
        }
    }

    /// Parse a slug. Returns `None` for concepts outside the rule tables.
    pub fn from_slug(slug: &str) -> Option<Concept> {
        let concept = match slug {
            "calculus" => Concept::Calculus,
            "linear-algebra" => Concept::LinearAlgebra,
            "algebra" => Concept::Algebra,
            "number-theory" => Concept::NumberTheory,
            "probability" => Concept::Probability,
            "statistics" => Concept::Statistics,
            "qubits" => Concept::Qubits,
            "quantum-gates" => Concept::QuantumGates,
            "quantum-algorithms" => Concept::QuantumAlgorithms,
            "superposition" => Concept::Superposition,
            "entanglement" => Concept::Entanglement,
            "error-correction" => Concept::ErrorCorrection,
            _ => return None,
        };
        Some(concept)
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Tier override triggered by extra keywords inside a matched rule
#[derive(Debug)]
pub struct Escalation {
    pub triggers: &'static [&'static str],
    pub difficulty: Difficulty,
}

/// One category rule: triggers, the category it assigns and its concept tag
#[derive(Debug)]
pub struct CategoryRule {
    pub triggers: &'static [&'static str],
    pub category: &'static str,
    pub concept: Concept,
    /// Tier when no escalation matches
    pub base: Difficulty,
    pub escalations: &'static [Escalation],
}

impl CategoryRule {
    /// Whether any trigger occurs in the lower-cased text
    pub fn matches(&self, text_lower: &str) -> bool {
        contains_any(text_lower, self.triggers)
    }

    /// Tier for a text this rule already matched
    pub fn difficulty_for(&self, text_lower: &str) -> Difficulty {
        self.escalations
            .iter()
            .find(|esc| contains_any(text_lower, esc.triggers))
            .map(|esc| esc.difficulty)
            .unwrap_or(self.base)
    }
}

pub(crate) fn contains_any(text_lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text_lower.contains(needle))
}

static PURE_MATH_RULES: &[CategoryRule] = &[
    CategoryRule {
        triggers: &["derivative", "integral"],
        category: "Calculus",
        concept: Concept::Calculus,
        base: Difficulty::Beginner,
        escalations: &[
            Escalation {
                triggers: &["partial", "multiple"],
                difficulty: Difficulty::Advanced,
            },
            Escalation {
                triggers: &["chain rule", "substitution"],
                difficulty: Difficulty::Intermediate,
            },
        ],
    },
    CategoryRule {
        triggers: &["matrix", "vector"],
        category: "Linear Algebra",
        concept: Concept::LinearAlgebra,
        base: Difficulty::Beginner,
        escalations: &[
            Escalation {
                triggers: &["eigenvalue", "determinant"],
                difficulty: Difficulty::Advanced,
            },
            Escalation {
                triggers: &["multiply", "inverse"],
                difficulty: Difficulty::Intermediate,
            },
        ],
    },
    CategoryRule {
        triggers: &["equation", "solve"],
        category: "Algebra",
        concept: Concept::Algebra,
        base: Difficulty::Beginner,
        escalations: &[Escalation {
            triggers: &["quadratic", "polynomial"],
            difficulty: Difficulty::Intermediate,
        }],
    },
    CategoryRule {
        triggers: &["prime", "divisible"],
        category: "Number Theory",
        concept: Concept::NumberTheory,
        base: Difficulty::Beginner,
        escalations: &[Escalation {
            triggers: &["theorem", "proof"],
            difficulty: Difficulty::Advanced,
        }],
    },
];

static QUANTUM_COMPUTING_RULES: &[CategoryRule] = &[
    CategoryRule {
        triggers: &["qubit", "quantum bit"],
        category: "Qubits",
        concept: Concept::Qubits,
        base: Difficulty::Beginner,
        escalations: &[Escalation {
            triggers: &["superposition", "entanglement"],
            difficulty: Difficulty::Intermediate,
        }],
    },
    CategoryRule {
        triggers: &["gate", "circuit"],
        category: "Quantum Gates",
        concept: Concept::QuantumGates,
        base: Difficulty::Beginner,
        escalations: &[Escalation {
            triggers: &["cnot", "hadamard"],
            difficulty: Difficulty::Intermediate,
        }],
    },
    CategoryRule {
        triggers: &["algorithm", "shor", "grover"],
        category: "Quantum Algorithms",
        concept: Concept::QuantumAlgorithms,
        base: Difficulty::Advanced,
        escalations: &[],
    },
    CategoryRule {
        triggers: &["superposition"],
        category: "Superposition",
        concept: Concept::Superposition,
        base: Difficulty::Intermediate,
        escalations: &[],
    },
    CategoryRule {
        triggers: &["entanglement"],
        category: "Entanglement",
        concept: Concept::Entanglement,
        base: Difficulty::Intermediate,
        escalations: &[],
    },
    CategoryRule {
        triggers: &["error", "correction"],
        category: "Error Correction",
        concept: Concept::ErrorCorrection,
        base: Difficulty::Advanced,
        escalations: &[],
    },
];

static APPLIED_MATH_RULES: &[CategoryRule] = &[
    CategoryRule {
        triggers: &["probability", "random"],
        category: "Probability",
        concept: Concept::Probability,
        base: Difficulty::Beginner,
        escalations: &[Escalation {
            triggers: &["distribution", "bayesian"],
            difficulty: Difficulty::Advanced,
        }],
    },
    CategoryRule {
        triggers: &["statistics", "mean", "median"],
        category: "Statistics",
        concept: Concept::Statistics,
        base: Difficulty::Beginner,
        escalations: &[Escalation {
            triggers: &["regression", "hypothesis"],
            difficulty: Difficulty::Intermediate,
        }],
    },
];

/// Rule table for a theme, in priority order.
///
/// Physics and the General fallback have no theme-specific rules.
pub fn rules_for(theme: Theme) -> &'static [CategoryRule] {
    match theme {
        Theme::PureMath => PURE_MATH_RULES,
        Theme::AppliedMath => APPLIED_MATH_RULES,
        Theme::QuantumComputing => QUANTUM_COMPUTING_RULES,
        Theme::Physics | Theme::General => &[],
    }
}
