pub mod base;
pub mod recalibration;

pub use base::{base_score, breakdown, ScoreBreakdown};
pub use recalibration::{final_score, recalibrate};

/// Clamp a raw score into `[0, 100]`.
pub(crate) fn clamp_score(raw: i32) -> u8 {
    let score = raw.clamp(0, 100) as u8;
    debug_assert!(score <= 100, "score {score} out of range [0, 100]");
    score
}
