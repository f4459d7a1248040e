//! Plain-text renderings of a record for copy/download surfaces.

use crate::types::AnalysisRecord;

pub fn plan_text(record: &AnalysisRecord) -> String {
    let mut out = String::from("7-Day Preparation Plan\n");
    for block in &record.plan_7_days {
        out.push_str(&format!("- {}: {}\n", block.days, block.task));
    }
    out
}

pub fn checklist_text(record: &AnalysisRecord) -> String {
    let mut out = String::from("Round-wise Checklist\n");
    for section in &record.checklist {
        out.push_str(&format!("\n{}\n", section.round));
        for item in &section.items {
            out.push_str(&format!("- [ ] {item}\n"));
        }
    }
    out
}

pub fn questions_text(record: &AnalysisRecord) -> String {
    let mut out = String::from("Interview Questions\n");
    for (i, q) in record.questions.iter().enumerate() {
        out.push_str(&format!("{}. {q}\n", i + 1));
    }
    out
}

fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        "(not specified)"
    } else {
        value
    }
}

/// Everything in one document: header, skills, rounds, plan, checklist and
/// questions.
pub fn full_text(record: &AnalysisRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("Company: {}\n", or_placeholder(&record.company)));
    out.push_str(&format!("Role: {}\n", or_placeholder(&record.role)));
    out.push_str(&format!(
        "Readiness: {}/100 (base {})\n",
        record.final_score, record.base_score
    ));
    if let Some(intel) = &record.company_intel {
        out.push_str(&format!(
            "Company profile: {} | {} | {}\n",
            intel.classification.as_str(),
            intel.industry,
            intel.size
        ));
    }

    out.push_str("\nExtracted Skills\n");
    for (category, skills) in record.extracted_skills.non_empty() {
        out.push_str(&format!("- {}: {}\n", category.label(), skills.join(", ")));
    }

    out.push_str("\nInterview Rounds\n");
    for round in &record.round_mapping {
        out.push_str(&format!(
            "{}. {} [{}]: {}\n",
            round.round,
            round.title,
            round.focus.join(", "),
            round.rationale
        ));
    }

    out.push('\n');
    out.push_str(&plan_text(record));
    out.push('\n');
    out.push_str(&checklist_text(record));
    out.push('\n');
    out.push_str(&questions_text(record));
    out
}
