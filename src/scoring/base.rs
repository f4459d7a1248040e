use serde::{Deserialize, Serialize};

use crate::types::ExtractedSkills;

pub const STARTING_POINTS: i32 = 35;
pub const POINTS_PER_CATEGORY: i32 = 5;
pub const CATEGORY_POINTS_CAP: i32 = 30;
pub const COMPANY_POINTS: i32 = 10;
pub const ROLE_POINTS: i32 = 10;
pub const LONG_DESCRIPTION_POINTS: i32 = 10;
/// Descriptions strictly longer than this many characters earn the bonus.
pub const LONG_DESCRIPTION_CHARS: usize = 800;

/// Explanation for how a base score was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub categories_matched: usize,
    pub category_points: i32,
    pub company_points: i32,
    pub role_points: i32,
    pub length_points: i32,
    pub total: u8,
}

pub fn breakdown(skills: &ExtractedSkills, company: &str, role: &str, jd_text: &str) -> ScoreBreakdown {
    let categories_matched = skills.categories_matched();
    let category_points =
        (categories_matched as i32 * POINTS_PER_CATEGORY).min(CATEGORY_POINTS_CAP);
    let company_points = if company.trim().is_empty() { 0 } else { COMPANY_POINTS };
    let role_points = if role.trim().is_empty() { 0 } else { ROLE_POINTS };
    let length_points = if jd_text.chars().count() > LONG_DESCRIPTION_CHARS {
        LONG_DESCRIPTION_POINTS
    } else {
        0
    };

    let raw = STARTING_POINTS + category_points + company_points + role_points + length_points;

    ScoreBreakdown {
        categories_matched,
        category_points,
        company_points,
        role_points,
        length_points,
        total: super::clamp_score(raw),
    }
}

/// Base readiness score in `[0, 100]`. No time or random input.
pub fn base_score(skills: &ExtractedSkills, company: &str, role: &str, jd_text: &str) -> u8 {
    breakdown(skills, company, role, jd_text).total
}
