use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::taxonomy::Category;
use crate::types::identifiers::{AnalysisId, InputFingerprint};

/// Self-reported confidence for one skill.
///
/// A skill missing from the map counts as [`Confidence::Practice`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Know,
    #[default]
    Practice,
}

impl Confidence {
    pub fn toggled(self) -> Self {
        match self {
            Confidence::Know => Confidence::Practice,
            Confidence::Practice => Confidence::Know,
        }
    }
}

pub type SkillConfidenceMap = BTreeMap<String, Confidence>;

/// Case-insensitive lookup. An exact key wins over a differently cased one.
pub(crate) fn lookup_confidence(map: &SkillConfidenceMap, skill: &str) -> Confidence {
    map.get(skill)
        .or_else(|| {
            map.iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(skill))
                .map(|(_, c)| c)
        })
        .copied()
        .unwrap_or_default()
}

/// Matched skills per category.
///
/// Always holds every [`Category`] key, in category order; values may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Category, Vec<String>>",
    into = "BTreeMap<Category, Vec<String>>"
)]
pub struct ExtractedSkills {
    inner: BTreeMap<Category, Vec<String>>,
}

impl ExtractedSkills {
    pub fn empty() -> Self {
        Self::from(BTreeMap::new())
    }

    pub fn set(&mut self, category: Category, skills: Vec<String>) {
        self.inner.insert(category, skills);
    }

    pub fn get(&self, category: Category) -> &[String] {
        self.inner.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All categories in order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.inner.iter().map(|(c, s)| (*c, s.as_slice()))
    }

    /// Categories with at least one skill, for presentation.
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.iter().filter(|(_, s)| !s.is_empty())
    }

    /// Every skill across all categories (fallback entries included), in
    /// category order.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.inner.values().flatten().map(String::as_str)
    }

    pub fn contains_skill(&self, skill: &str) -> bool {
        self.all_skills().any(|s| s.eq_ignore_ascii_case(skill))
    }

    /// Categories with a real taxonomy match. The `other` fallback never counts.
    pub fn categories_matched(&self) -> usize {
        self.non_empty()
            .filter(|(c, _)| *c != Category::Other)
            .count()
    }

    pub fn total(&self) -> usize {
        self.inner.values().map(Vec::len).sum()
    }
}

impl Default for ExtractedSkills {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<BTreeMap<Category, Vec<String>>> for ExtractedSkills {
    fn from(mut inner: BTreeMap<Category, Vec<String>>) -> Self {
        for category in Category::ALL {
            inner.entry(category).or_default();
        }
        ExtractedSkills { inner }
    }
}

impl From<ExtractedSkills> for BTreeMap<Category, Vec<String>> {
    fn from(skills: ExtractedSkills) -> Self {
        skills.inner
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Enterprise,
    Startup,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Enterprise => "enterprise",
            Classification::Startup => "startup",
        }
    }
}

/// Advisory description of the target company. Carries no scoring weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyIntel {
    pub name: String,
    pub industry: String,
    pub size: String,
    pub hiring_focus: String,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDescriptor {
    pub round: u8,
    pub title: String,
    pub focus: Vec<String>,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    pub round: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanBlock {
    pub days: String,
    pub task: String,
}

/// One persisted analysis.
///
/// Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: AnalysisId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company: String,
    pub role: String,
    pub jd_text: String,
    #[serde(default)]
    pub input_fingerprint: InputFingerprint,
    pub extracted_skills: ExtractedSkills,
    pub company_intel: Option<CompanyIntel>,
    pub round_mapping: Vec<RoundDescriptor>,
    pub checklist: Vec<ChecklistSection>,
    #[serde(rename = "plan7Days")]
    pub plan_7_days: Vec<PlanBlock>,
    pub questions: Vec<String>,
    pub base_score: u8,
    #[serde(default)]
    pub skill_confidence_map: SkillConfidenceMap,
    pub final_score: u8,
}

impl AnalysisRecord {
    /// The record's own casing of `skill`, or `None` when the record does not
    /// hold it.
    pub fn resolve_skill(&self, skill: &str) -> Option<&str> {
        self.extracted_skills
            .all_skills()
            .find(|s| s.eq_ignore_ascii_case(skill))
    }

    /// Confidence for `skill` (case-insensitive), defaulting to `Practice`
    /// when unset.
    pub fn confidence_of(&self, skill: &str) -> Confidence {
        lookup_confidence(&self.skill_confidence_map, skill)
    }

    /// Advance `updated_at`. Strictly monotonic even when the clock has not
    /// moved since the previous mutation.
    pub fn touch(&mut self) {
        let now = Utc::now();
        let floor = self.updated_at + Duration::milliseconds(1);
        self.updated_at = now.max(floor);
    }
}

/// Fields a caller may change on an existing record.
///
/// Identity, input and taxonomy-derived fields are immutable after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_confidence_map: Option<SkillConfidenceMap>,
}

impl AnalysisPatch {
    pub fn confidence(map: SkillConfidenceMap) -> Self {
        Self {
            skill_confidence_map: Some(map),
        }
    }
}
