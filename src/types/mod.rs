pub mod identifiers;
pub mod record;

pub use identifiers::{AnalysisId, InputFingerprint};
pub use record::{
    AnalysisPatch, AnalysisRecord, ChecklistSection, Classification, CompanyIntel, Confidence,
    ExtractedSkills, PlanBlock, RoundDescriptor, SkillConfidenceMap,
};
