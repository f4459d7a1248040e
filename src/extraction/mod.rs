//! Skill extraction: whole-token, case-insensitive taxonomy matching.

pub mod tokenizer;

use crate::taxonomy::{self, Category, FALLBACK_SKILLS};
use crate::types::ExtractedSkills;
pub use tokenizer::{IndexedText, SkillPattern, TokenStream};

/// Taxonomy compiled into match patterns, grouped by category in taxonomy
/// order.
pub struct SkillExtractor {
    patterns: Vec<(Category, Vec<(&'static str, SkillPattern)>)>,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillExtractor {
    pub fn new() -> Self {
        let patterns = Category::matchable()
            .map(|category| {
                let compiled = category
                    .skills()
                    .iter()
                    .map(|skill| (*skill, SkillPattern::new(skill)))
                    .collect();
                (category, compiled)
            })
            .collect();

        Self { patterns }
    }

    /// Scan `text` against the taxonomy.
    ///
    /// Every category is present in the result. Matched skills keep their
    /// taxonomy display casing and order. When nothing matches anywhere,
    /// `other` receives the fallback labels; that is the only fallback rule.
    pub fn extract(&self, text: &str) -> ExtractedSkills {
        let indexed = IndexedText::new(text);
        let mut skills = ExtractedSkills::empty();

        for (category, compiled) in &self.patterns {
            let found: Vec<String> = compiled
                .iter()
                .filter(|(_, pattern)| pattern.matches(&indexed))
                .map(|(skill, _)| skill.to_string())
                .collect();
            skills.set(*category, found);
        }

        if skills.total() == 0 {
            skills.set(
                Category::Other,
                FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect(),
            );
        }

        debug_assert!(Category::matchable()
            .all(|c| skills.get(c).iter().all(|s| taxonomy::contains(c, s))));

        skills
    }
}

/// Convenience wrapper over a default [`SkillExtractor`].
pub fn extract_skills(text: &str) -> ExtractedSkills {
    SkillExtractor::new().extract(text)
}
