use crate::types::{Classification, CompanyIntel};

/// Names treated as large enterprises. Matched as case-insensitive substrings,
/// so "Google Cloud" or "Amazon Web Services" resolve to enterprise.
pub const KNOWN_ENTERPRISES: &[&str] = &[
    "Google",
    "Amazon",
    "Microsoft",
    "Meta",
    "Apple",
    "Netflix",
    "Adobe",
    "Oracle",
    "IBM",
    "Intel",
    "Cisco",
    "Salesforce",
    "SAP",
    "Infosys",
    "TCS",
    "Tata Consultancy",
    "Wipro",
    "Accenture",
    "Cognizant",
    "Capgemini",
    "Deloitte",
    "HCL",
    "Tech Mahindra",
    "JPMorgan",
    "Goldman Sachs",
    "Flipkart",
    "Uber",
];

pub fn classify(company: &str) -> Classification {
    let lowered = company.to_lowercase();
    let known = KNOWN_ENTERPRISES
        .iter()
        .any(|name| lowered.contains(&name.to_lowercase()));

    if known {
        Classification::Enterprise
    } else {
        Classification::Startup
    }
}

/// Resolve intel for `company`. `None` when the name is blank.
pub fn resolve(company: &str) -> Option<CompanyIntel> {
    let name = company.trim();
    if name.is_empty() {
        return None;
    }

    let classification = classify(name);
    let (industry, size, hiring_focus) = match classification {
        Classification::Enterprise => (
            "Technology Services",
            "Enterprise (2000+ employees)",
            "Structured hiring with standardized assessments. Strong emphasis on DSA, \
             core CS fundamentals and consistent performance across multiple rounds.",
        ),
        Classification::Startup => (
            "Technology / Product",
            "Startup (<200 employees)",
            "Practical, hands-on evaluation. Expect questions on your stack, shipped \
             projects and ownership rather than textbook theory.",
        ),
    };

    Some(CompanyIntel {
        name: name.to_string(),
        industry: industry.to_string(),
        size: size.to_string(),
        hiring_focus: hiring_focus.to_string(),
        classification,
    })
}
