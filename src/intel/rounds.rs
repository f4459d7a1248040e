use crate::types::{ChecklistSection, Classification, RoundDescriptor};

/// Fixed item appended to every checklist section.
pub const RESUME_VERIFICATION: &str = "Resume verification";

struct RoundTemplate {
    title: &'static str,
    focus: &'static [&'static str],
    rationale: &'static str,
}

const ENTERPRISE_ROUNDS: [RoundTemplate; 4] = [
    RoundTemplate {
        title: "Online Assessment",
        focus: &["Aptitude", "DSA basics", "MCQs"],
        rationale: "Large hiring funnels filter early with timed, auto-graded tests.",
    },
    RoundTemplate {
        title: "Technical Round 1: DSA + Core CS",
        focus: &["Data structures", "Algorithms", "OS", "DBMS"],
        rationale: "Standardized interviews benchmark fundamentals across many candidates.",
    },
    RoundTemplate {
        title: "Technical Round 2: Projects + System Design",
        focus: &["Project deep-dive", "System design basics", "Frameworks"],
        rationale: "Interviewers check depth on what you built and how you reason about scale.",
    },
    RoundTemplate {
        title: "Managerial / HR",
        focus: &["Behavioral", "Culture fit", "Career goals"],
        rationale: "Final alignment on team fit, expectations and long-term intent.",
    },
];

const STARTUP_ROUNDS: [RoundTemplate; 3] = [
    RoundTemplate {
        title: "Practical Coding Round",
        focus: &["Hands-on coding", "Debugging", "Stack fluency"],
        rationale: "Small teams need people productive in their stack from week one.",
    },
    RoundTemplate {
        title: "System Discussion",
        focus: &["Architecture", "Trade-offs", "Shipped projects"],
        rationale: "Engineers own features end to end, so design judgment matters early.",
    },
    RoundTemplate {
        title: "Founder / Culture Fit",
        focus: &["Ownership", "Communication", "Motivation"],
        rationale: "Every hire shapes the culture; founders look for drive and autonomy.",
    },
];

/// Interview rounds for a classification: 4 for enterprise, 3 for startup.
pub fn map_rounds(classification: Classification) -> Vec<RoundDescriptor> {
    let templates: &[RoundTemplate] = match classification {
        Classification::Enterprise => &ENTERPRISE_ROUNDS,
        Classification::Startup => &STARTUP_ROUNDS,
    };

    templates
        .iter()
        .zip(1u8..)
        .map(|(t, round)| RoundDescriptor {
            round,
            title: t.title.to_string(),
            focus: t.focus.iter().map(|f| f.to_string()).collect(),
            rationale: t.rationale.to_string(),
        })
        .collect()
}

/// One checklist section per round: the round's focus tags followed by
/// [`RESUME_VERIFICATION`].
pub fn checklist(rounds: &[RoundDescriptor]) -> Vec<ChecklistSection> {
    rounds
        .iter()
        .map(|r| {
            let mut items = r.focus.clone();
            items.push(RESUME_VERIFICATION.to_string());
            ChecklistSection {
                round: r.title.clone(),
                items,
            }
        })
        .collect()
}
