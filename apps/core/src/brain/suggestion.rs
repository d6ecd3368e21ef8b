//! Teaching suggestions for topic insights.
//!
//! Known concepts get a canned sentence per difficulty tier plus a note on how
//! often the topic comes up. Anything else gets a templated fallback.

use regex::Regex;
use std::sync::LazyLock;

use super::difficulty::Difficulty;
use super::rules::Concept;

/// Above this many questions a topic counts as frequent
pub const FREQUENT_THRESHOLD: usize = 10;
/// Above this many questions a topic counts as moderately popular
pub const MODERATE_THRESHOLD: usize = 5;

const FREQUENT_NOTE: &str =
    " This topic appears frequently in student questions, so consider dedicating extra time to it.";
const MODERATE_NOTE: &str = " Students show moderate interest in this topic.";
const OCCASIONAL_NOTE: &str =
    " This topic comes up occasionally - consider it as an advanced or optional topic.";

// NOTE: expect() is acceptable here, the pattern is a literal
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace run"));

/// Canned introduction for a concept at a tier, if the table has one
fn canned_introduction(concept: Concept, difficulty: Difficulty) -> Option<&'static str> {
    use Difficulty::*;

    let text = match (concept, difficulty) {
        (Concept::Calculus, Beginner) => "Start with the concept of limits and rates of change. Use visual examples like velocity and slopes.",
        (Concept::Calculus, Intermediate) => "Build on derivatives by exploring the fundamental theorem of calculus and integration techniques.",
        (Concept::Calculus, Advanced) => "Introduce multivariable calculus concepts and advanced integration methods like Green's theorem.",

        (Concept::Algebra, Beginner) => "Begin with basic equation solving and variable manipulation using concrete examples.",
        (Concept::Algebra, Intermediate) => "Introduce polynomial operations and factoring with real-world applications.",
        (Concept::Algebra, Advanced) => "Explore abstract algebraic structures and advanced equation solving techniques.",

        (Concept::LinearAlgebra, Beginner) => "Start with vectors as arrows in 2D/3D space and basic vector operations.",
        (Concept::LinearAlgebra, Intermediate) => "Introduce matrices as transformations and explore matrix operations.",
        (Concept::LinearAlgebra, Advanced) => "Cover eigenvalues, eigenvectors, and advanced matrix decomposition techniques.",

        (Concept::Probability, Beginner) => "Use simple examples like coin flips and dice rolls to introduce basic probability.",
        (Concept::Probability, Intermediate) => "Explore conditional probability and introduce common probability distributions.",
        (Concept::Probability, Advanced) => "Cover advanced topics like Bayesian inference and stochastic processes.",

        (Concept::Statistics, Beginner) => "Start with descriptive statistics using real datasets and visualizations.",
        (Concept::Statistics, Intermediate) => "Introduce hypothesis testing and confidence intervals with practical examples.",
        (Concept::Statistics, Advanced) => "Cover advanced statistical modeling and machine learning concepts.",

        (Concept::Qubits, Beginner) => "Start with classical bits vs quantum bits, introducing the concept of superposition with simple analogies.",
        (Concept::Qubits, Intermediate) => "Explore qubit states using Bloch sphere representation and basic quantum measurements.",
        (Concept::Qubits, Advanced) => "Cover multi-qubit systems, quantum state manipulation, and decoherence effects.",

        (Concept::QuantumGates, Beginner) => "Introduce basic single-qubit gates (X, Y, Z, H) using circuit diagrams and simple operations.",
        (Concept::QuantumGates, Intermediate) => "Cover two-qubit gates like CNOT and explore how gates create quantum circuits.",
        (Concept::QuantumGates, Advanced) => "Discuss universal gate sets, gate decomposition, and quantum circuit optimization.",

        (Concept::Superposition, Beginner) => "Use analogies like spinning coins to explain quantum superposition concepts.",
        (Concept::Superposition, Intermediate) => "Introduce mathematical formalism with |0⟩ + |1⟩ states and measurement probabilities.",
        (Concept::Superposition, Advanced) => "Cover superposition in multi-qubit systems and interference effects.",

        (Concept::Entanglement, Beginner) => "Explain quantum entanglement using simple two-particle examples and correlations.",
        (Concept::Entanglement, Intermediate) => "Introduce Bell states and explore non-local correlations in quantum systems.",
        (Concept::Entanglement, Advanced) => "Cover entanglement measures, quantum teleportation, and applications in quantum protocols.",

        (Concept::QuantumAlgorithms, Beginner) => "Start with simple quantum algorithms like Deutsch's algorithm to show quantum advantage.",
        (Concept::QuantumAlgorithms, Intermediate) => "Introduce Grover's search algorithm and its quadratic speedup over classical search.",
        (Concept::QuantumAlgorithms, Advanced) => "Cover Shor's factoring algorithm, quantum Fourier transform, and complexity theory implications.",

        (Concept::NumberTheory, _) | (Concept::ErrorCorrection, _) => return None,
    };
    Some(text)
}

/// Frequency band note appended to canned introductions
fn frequency_note(frequency: usize) -> &'static str {
    if frequency > FREQUENT_THRESHOLD {
        FREQUENT_NOTE
    } else if frequency > MODERATE_THRESHOLD {
        MODERATE_NOTE
    } else {
        OCCASIONAL_NOTE
    }
}

/// Lower-case the key and replace every whitespace run with a hyphen
pub fn normalize_concept_key(concept: &str) -> String {
    WHITESPACE_RUN
        .replace_all(concept.trim(), "-")
        .to_lowercase()
}

/// Produces teaching suggestions from the built-in table
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionGenerator;

impl SuggestionGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Suggest how to introduce `concept` given the questions seen so far.
    ///
    /// `concept` may be a slug ("linear-algebra") or a display name
    /// ("Linear Algebra"). Total; unknown concepts get the fallback sentence.
    pub fn suggest(&self, concept: &str, difficulty: Difficulty, frequency: usize) -> String {
        let key = normalize_concept_key(concept);

        match Concept::from_slug(&key).and_then(|c| canned_introduction(c, difficulty)) {
            Some(intro) => format!("{}{}", intro, frequency_note(frequency)),
            None => format!(
                "Based on {} student questions, consider introducing {} with {}-level explanations and plenty of examples.",
                frequency, concept, difficulty
            ),
        }
    }
}
