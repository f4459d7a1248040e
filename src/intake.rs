//! Advisory checks on analysis input. Never blocks analysis.

use serde::{Deserialize, Serialize};

/// Descriptions shorter than this are flagged as likely too thin to extract
/// much from.
pub const SHORT_DESCRIPTION_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IntakeWarning {
    EmptyDescription,
    ShortDescription { chars: usize },
    MissingCompany,
    MissingRole,
}

impl IntakeWarning {
    pub fn message(&self) -> String {
        match self {
            IntakeWarning::EmptyDescription => "Paste a job description to analyze.".to_string(),
            IntakeWarning::ShortDescription { chars } => format!(
                "This JD is short ({chars} characters). Paste the full description for better results."
            ),
            IntakeWarning::MissingCompany => {
                "Add a company name to get company-specific round mapping.".to_string()
            }
            IntakeWarning::MissingRole => "Add a role title to improve the readiness score.".to_string(),
        }
    }
}

pub fn assess_intake(company: &str, role: &str, jd_text: &str) -> Vec<IntakeWarning> {
    let mut warnings = Vec::new();

    let chars = jd_text.trim().chars().count();
    if chars == 0 {
        warnings.push(IntakeWarning::EmptyDescription);
    } else if chars < SHORT_DESCRIPTION_CHARS {
        warnings.push(IntakeWarning::ShortDescription { chars });
    }
    if company.trim().is_empty() {
        warnings.push(IntakeWarning::MissingCompany);
    }
    if role.trim().is_empty() {
        warnings.push(IntakeWarning::MissingRole);
    }

    warnings
}
