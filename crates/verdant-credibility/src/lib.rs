//! # verdant-credibility — Credibility Score
//!
//! Summarizes one business's data quality and verification depth as a
//! single 0–100 score with a letter grade.
//!
//! ## Formula
//!
//! ```text
//! score = round( 0.30 × verification_avg
//!              + 0.25 × green_ratio
//!              + 0.25 × data_completeness
//!              + 0.20 × history_depth )      clamped to [0, 100]
//! ```
//!
//! Each component is a percentage in `[0, 100]` and is `0` for empty input.
//! See [`score`] for the component definitions and [`weights`] for the
//! constants.
//!
//! The scorer is a pure function of its snapshot. Malformed scores are
//! treated as absent; nothing here returns an error.

pub mod grade;
pub mod score;
pub mod weights;

pub use grade::CredibilityGrade;
pub use score::{compute_credibility, is_complete, Components, CredibilityBreakdown, CredibilityResult};
