//! # Credibility Grade
//!
//! | Score | Grade |
//! |-------|-------|
//! | 90–100 | A+ |
//! | 75–89 | A |
//! | 55–74 | B |
//! | 35–54 | C |
//! | 0–34 | D |

use serde::{Deserialize, Serialize};

/// Letter bucket for a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CredibilityGrade {
    #[serde(rename = "D")]
    D,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
}

/// Lower bounds, best grade first.
const THRESHOLDS: [(u8, CredibilityGrade); 4] = [
    (90, CredibilityGrade::APlus),
    (75, CredibilityGrade::A),
    (55, CredibilityGrade::B),
    (35, CredibilityGrade::C),
];

impl CredibilityGrade {
    /// Grade for a composite score.
    pub fn from_score(score: u8) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(Self::D)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl std::fmt::Display for CredibilityGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
