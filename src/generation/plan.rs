use crate::taxonomy::FRONTEND_MARKERS;
use crate::types::{ExtractedSkills, PlanBlock};

pub const FRONTEND_FOCUS: &str = " Focus on Frontend fundamentals.";

/// The 7-day plan: five fixed blocks. The second block names the detected
/// skills; the first gains [`FRONTEND_FOCUS`] when a frontend marker was
/// detected.
pub fn generate_plan(skills: &ExtractedSkills) -> Vec<PlanBlock> {
    let detected: Vec<&str> = skills.all_skills().collect();

    let mut plan = vec![
        block("Day 1–2", "Basics + core CS revision (OS, DBMS, OOP)."),
        block(
            "Day 3–4",
            &format!("Deep dive into detected skills: {}.", detected.join(", ")),
        ),
        block("Day 5", "Project alignment with JD and resume walkthrough."),
        block("Day 6", "Mock interview practice using the generated question bank."),
        block("Day 7", "Revision of weak areas and final preparation."),
    ];

    if FRONTEND_MARKERS.iter().any(|m| skills.contains_skill(m)) {
        plan[0].task.push_str(FRONTEND_FOCUS);
    }

    plan
}

fn block(days: &str, task: &str) -> PlanBlock {
    PlanBlock {
        days: days.to_string(),
        task: task.to_string(),
    }
}
