//! Difficulty tiers and the theme-independent difficulty overlay.
//!
//! The overlay runs after theme-specific matching and, when any of its cues
//! appear in the question, replaces whatever tier the theme rules produced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Difficulty tier assigned to a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Returns the wire label for the tier
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Most frequent tier in `tiers`.
    ///
    /// Ties go to the tier that was seen first. An empty input yields `Beginner`.
    pub fn mode<I>(tiers: I) -> Difficulty
    where
        I: IntoIterator<Item = Difficulty>,
    {
        let mut counts: Vec<(Difficulty, usize)> = Vec::with_capacity(Self::ALL.len());
        for tier in tiers {
            match counts.iter_mut().find(|(seen, _)| *seen == tier) {
                Some((_, count)) => *count += 1,
                None => counts.push((tier, 1)),
            }
        }

        let mut best = counts.first().map(|(tier, _)| *tier).unwrap_or_default();
        let mut best_count = 0;
        for (tier, count) in counts {
            if count > best_count {
                best_count = count;
                best = tier;
            }
        }
        best
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(AppError::Validation(format!(
                "Unknown difficulty tier: '{}'",
                other
            ))),
        }
    }
}

/// Overlay cues in priority order. The first group with a hit decides.
const OVERLAY_CUES: &[(Difficulty, &[&str])] = &[
    (Difficulty::Advanced, &["prove", "theorem", "abstract"]),
    (Difficulty::Intermediate, &["why", "explain", "derive"]),
    (Difficulty::Beginner, &["what", "define", "basic"]),
];

/// Generic difficulty cues applied on top of any theme rule
#[derive(Debug, Clone, Copy, Default)]
pub struct DifficultyOverlay;

impl DifficultyOverlay {
    /// Tier implied by the generic cues, if any cue matches.
    ///
    /// `text_lower` must already be lower-cased.
    pub fn detect(&self, text_lower: &str) -> Option<Difficulty> {
        OVERLAY_CUES
            .iter()
            .find(|(_, cues)| cues.iter().any(|cue| text_lower.contains(cue)))
            .map(|(tier, _)| *tier)
    }

    /// Apply the overlay to a tier produced by theme rules.
    ///
    /// A matching cue overwrites `current` unconditionally, even when that
    /// lowers an advanced question back to beginner.
    pub fn apply(&self, text_lower: &str, current: Difficulty) -> Difficulty {
        self.detect(text_lower).unwrap_or(current)
    }
}
