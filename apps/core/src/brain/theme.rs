//! Subject themes a learning session can run under.
//!
//! A theme selects the keyword rule table used by the classifier. Unknown
//! theme ids are not an error: they collapse to `Theme::General`, which has
//! no theme-specific rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Subject domain selected for a learning session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    PureMath,
    AppliedMath,
    Physics,
    QuantumComputing,
    /// Fallback for ids outside the catalog
    #[default]
    General,
}

/// Static description of a theme, shown when a session picks its subject
#[derive(Debug, Clone, Serialize)]
pub struct ThemeProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Concept slugs the theme is expected to cover
    pub concepts: &'static [&'static str],
    /// Display color (hex)
    pub color: &'static str,
}

const PURE_MATH: ThemeProfile = ThemeProfile {
    id: "pure-math",
    name: "Pure Mathematics",
    description: "Algebra, Calculus, Number Theory, Abstract Algebra",
    concepts: &[
        "algebra",
        "calculus",
        "linear-algebra",
        "number-theory",
        "abstract-algebra",
    ],
    color: "#3b82f6",
};

const APPLIED_MATH: ThemeProfile = ThemeProfile {
    id: "applied-math",
    name: "Applied Mathematics",
    description: "Statistics, Probability, Discrete Math, Operations Research",
    concepts: &["statistics", "probability", "discrete-math", "optimization"],
    color: "#10b981",
};

const PHYSICS: ThemeProfile = ThemeProfile {
    id: "physics",
    name: "Physics",
    description: "Classical Mechanics, Thermodynamics, Quantum Physics",
    concepts: &[
        "mechanics",
        "thermodynamics",
        "electromagnetism",
        "quantum-physics",
    ],
    color: "#8b5cf6",
};

const QUANTUM_COMPUTING: ThemeProfile = ThemeProfile {
    id: "quantum-computing",
    name: "Quantum Computing",
    description: "Qubits, Quantum Gates, Algorithms, Error Correction",
    concepts: &[
        "qubits",
        "quantum-gates",
        "superposition",
        "entanglement",
        "quantum-algorithms",
    ],
    color: "#f59e0b",
};

const GENERAL: ThemeProfile = ThemeProfile {
    id: "general",
    name: "General",
    description: "Questions outside a specific subject",
    concepts: &[],
    color: "#6b7280",
};

impl Theme {
    /// The selectable themes, in catalog order
    pub const CATALOG: [Theme; 4] = [
        Theme::PureMath,
        Theme::AppliedMath,
        Theme::Physics,
        Theme::QuantumComputing,
    ];

    /// Resolve a theme id. Never fails; anything other than an exact
    /// catalog id (case and whitespace included) becomes `General`.
    pub fn from_id(id: &str) -> Theme {
        match id {
            "pure-math" => Theme::PureMath,
            "applied-math" => Theme::AppliedMath,
            "physics" => Theme::Physics,
            "quantum-computing" => Theme::QuantumComputing,
            _ => Theme::General,
        }
    }

    /// Returns the theme id used on the wire
    pub fn id(&self) -> &'static str {
        self.profile().id
    }

    /// Static catalog entry for the theme
    pub fn profile(&self) -> &'static ThemeProfile {
        match self {
            Theme::PureMath => &PURE_MATH,
            Theme::AppliedMath => &APPLIED_MATH,
            Theme::Physics => &PHYSICS,
            Theme::QuantumComputing => &QUANTUM_COMPUTING,
            Theme::General => &GENERAL,
        }
    }

    /// Catalog entries for every selectable theme
    pub fn catalog() -> Vec<&'static ThemeProfile> {
        Self::CATALOG.iter().map(Theme::profile).collect()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Strict parsing, for callers that want to reject ids outside the catalog.
/// Unlike `from_id`, surrounding whitespace and case are ignored here.
impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        match Theme::from_id(&id) {
            Theme::General if id != GENERAL.id => Err(AppError::Validation(format!(
                "Unknown theme: '{}'",
                s.trim()
            ))),
            theme => Ok(theme),
        }
    }
}

impl From<String> for Theme {
    fn from(id: String) -> Self {
        Theme::from_id(&id)
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.id().to_string()
    }
}
