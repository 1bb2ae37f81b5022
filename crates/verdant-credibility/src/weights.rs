//! Component weights. Re-weighting the score is an edit here and nowhere else.

/// Mean positive verification score.
pub const VERIFICATION_WEIGHT: f64 = 0.30;
/// Share of green-benefit entries.
pub const GREEN_RATIO_WEIGHT: f64 = 0.25;
/// Share of entries with complete invoice metadata.
pub const COMPLETENESS_WEIGHT: f64 = 0.25;
/// Depth of verification history.
pub const HISTORY_DEPTH_WEIGHT: f64 = 0.20;

/// All weights, in breakdown order.
pub const WEIGHTS: [f64; 4] = [
    VERIFICATION_WEIGHT,
    GREEN_RATIO_WEIGHT,
    COMPLETENESS_WEIGHT,
    HISTORY_DEPTH_WEIGHT,
];

/// Number of positively scored submissions at which history depth saturates.
pub const HISTORY_SATURATION: usize = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let sum: f64 = WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12, "weights sum to {sum}");
    }

    #[test]
    fn weights_are_positive() {
        assert!(WEIGHTS.iter().all(|w| *w > 0.0));
    }
}
