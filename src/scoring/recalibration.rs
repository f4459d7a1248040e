use crate::types::record::lookup_confidence;
use crate::types::{AnalysisRecord, Confidence, ExtractedSkills, SkillConfidenceMap};

pub const KNOW_DELTA: i32 = 2;
pub const PRACTICE_DELTA: i32 = -2;

fn delta(confidence: Confidence) -> i32 {
    match confidence {
        Confidence::Know => KNOW_DELTA,
        Confidence::Practice => PRACTICE_DELTA,
    }
}

/// Final score from a base score and confidence map.
///
/// Each skill in `skills` (fallback entries included) adds `+2` when marked
/// `know` and `-2` otherwise; an unset skill counts as `practice`. Keys
/// match skills case-insensitively. Always
/// starts from `base_score`, so the result depends only on the current map.
pub fn final_score(base_score: u8, skills: &ExtractedSkills, confidence: &SkillConfidenceMap) -> u8 {
    let adjustment: i32 = skills
        .all_skills()
        .map(|skill| delta(lookup_confidence(confidence, skill)))
        .sum();

    super::clamp_score(i32::from(base_score) + adjustment)
}

/// Recompute `record`'s final score against `confidence`.
pub fn recalibrate(record: &AnalysisRecord, confidence: &SkillConfidenceMap) -> u8 {
    final_score(record.base_score, &record.extracted_skills, confidence)
}
