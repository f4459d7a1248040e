//! The fixed skill taxonomy.
//!
//! Pure data: categories in display order, each with an ordered list of skill
//! tokens. Matching is case-insensitive, so tokens are stored in their display
//! casing.

use serde::{Deserialize, Serialize};

/// A taxonomy category. Declaration order is the iteration order everywhere
/// (extraction, question triggers, recalibration, serialization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "coreCS")]
    CoreCs,
    #[serde(rename = "languages")]
    Languages,
    #[serde(rename = "web")]
    Web,
    #[serde(rename = "data")]
    Data,
    #[serde(rename = "cloud")]
    Cloud,
    #[serde(rename = "testing")]
    Testing,
    /// Sentinel: carries [`FALLBACK_SKILLS`] when nothing else matched.
    #[serde(rename = "other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::CoreCs,
        Category::Languages,
        Category::Web,
        Category::Data,
        Category::Cloud,
        Category::Testing,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::CoreCs => "Core CS",
            Category::Languages => "Languages",
            Category::Web => "Web",
            Category::Data => "Data",
            Category::Cloud => "Cloud/DevOps",
            Category::Testing => "Testing",
            Category::Other => "General",
        }
    }

    /// Taxonomy tokens for this category. `Other` has none.
    pub fn skills(self) -> &'static [&'static str] {
        match self {
            Category::CoreCs => &["DSA", "OOP", "DBMS", "OS", "Networks"],
            Category::Languages => &[
                "Java",
                "Python",
                "JavaScript",
                "TypeScript",
                "C",
                "C++",
                "C#",
                "Go",
            ],
            Category::Web => &["React", "Next.js", "Node.js", "Express", "REST", "GraphQL"],
            Category::Data => &["SQL", "MongoDB", "PostgreSQL", "MySQL", "Redis"],
            Category::Cloud => &[
                "AWS",
                "Azure",
                "GCP",
                "Docker",
                "Kubernetes",
                "CI/CD",
                "Linux",
            ],
            Category::Testing => &["Selenium", "Cypress", "Playwright", "JUnit", "PyTest"],
            Category::Other => &[],
        }
    }

    /// Categories backed by real taxonomy tokens.
    pub fn matchable() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(|c| *c != Category::Other)
    }
}

/// Generic labels placed under [`Category::Other`] when a description matches
/// no taxonomy token at all.
pub const FALLBACK_SKILLS: [&str; 4] = ["Communication", "Problem Solving", "Basic Coding", "Projects"];

/// Detected skills that mark a frontend-leaning role.
pub const FRONTEND_MARKERS: [&str; 2] = ["React", "Next.js"];

/// Iterate every `(category, token)` pair in taxonomy order.
pub fn entries() -> impl Iterator<Item = (Category, &'static str)> {
    Category::ALL
        .into_iter()
        .flat_map(|c| c.skills().iter().map(move |s| (c, *s)))
}

/// True when `skill` (case-insensitive) belongs to `category`.
pub fn contains(category: Category, skill: &str) -> bool {
    category.skills().iter().any(|s| s.eq_ignore_ascii_case(skill))
}
