use chrono::Utc;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::extraction::SkillExtractor;
use crate::generation::{generate_plan, generate_questions};
use crate::intel::{self, checklist, map_rounds};
use crate::scoring::{base_score, final_score};
use crate::store::{AnalysisStore, ChecklistProgress, KeyValueStore, StoreError};
use crate::types::{
    AnalysisId, AnalysisPatch, AnalysisRecord, Confidence, InputFingerprint, SkillConfidenceMap,
};

fn assemble(extractor: &SkillExtractor, company: &str, role: &str, jd_text: &str) -> AnalysisRecord {
    let extracted_skills = extractor.extract(jd_text);
    let base = base_score(&extracted_skills, company, role, jd_text);

    let company_intel = intel::resolve(company);
    let round_mapping = map_rounds(intel::classification_of(company_intel.as_ref()));
    let checklist = checklist(&round_mapping);

    let plan_7_days = generate_plan(&extracted_skills);
    let questions = generate_questions(&extracted_skills);

    let skill_confidence_map = SkillConfidenceMap::new();
    let final_score = final_score(base, &extracted_skills, &skill_confidence_map);

    let now = Utc::now();
    AnalysisRecord {
        id: AnalysisId::generate(),
        created_at: now,
        updated_at: now,
        company: company.to_string(),
        role: role.to_string(),
        jd_text: jd_text.to_string(),
        input_fingerprint: InputFingerprint::from_input(company, role, jd_text),
        extracted_skills,
        company_intel,
        round_mapping,
        checklist,
        plan_7_days,
        questions,
        base_score: base,
        skill_confidence_map,
        final_score,
    }
}

/// Build a record without persisting it.
///
/// Everything except `id` and the timestamps is a pure function of the input.
pub fn build_analysis(company: &str, role: &str, jd_text: &str) -> AnalysisRecord {
    assemble(&SkillExtractor::new(), company, role, jd_text)
}

/// Engine entry points over an injected store.
pub struct PrepEngine<S> {
    store: S,
    config: EngineConfig,
    extractor: SkillExtractor,
}

impl<S: KeyValueStore> PrepEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::v0())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            extractor: SkillExtractor::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn analyses(&self) -> AnalysisStore<&S> {
        AnalysisStore::new(&self.store, self.config.history_key.as_str())
    }

    /// Analyse the input and store the record at the head of the history.
    pub fn analyze(
        &self,
        company: &str,
        role: &str,
        jd_text: &str,
    ) -> Result<AnalysisRecord, StoreError> {
        let record = assemble(&self.extractor, company, role, jd_text);
        self.analyses().create(&record)?;

        info!(
            id = %record.id,
            base_score = record.base_score,
            categories_matched = record.extracted_skills.categories_matched(),
            classification = intel::classification_of(record.company_intel.as_ref()).as_str(),
            "analysis created"
        );
        Ok(record)
    }

    pub fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError> {
        self.analyses().list()
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<AnalysisRecord>, StoreError> {
        self.analyses().get_by_id(&AnalysisId::from(id))
    }

    pub fn latest(&self) -> Result<Option<AnalysisRecord>, StoreError> {
        self.analyses().latest()
    }

    /// The record for `id` if there is one, else the most recent record.
    pub fn get_or_latest(&self, id: Option<&str>) -> Result<Option<AnalysisRecord>, StoreError> {
        if let Some(id) = id {
            if let Some(record) = self.get_by_id(id)? {
                return Ok(Some(record));
            }
            debug!(id, "analysis not found; falling back to latest");
        }
        self.latest()
    }

    /// Most recent earlier analysis of exactly this input, if any.
    pub fn find_previous(
        &self,
        company: &str,
        role: &str,
        jd_text: &str,
    ) -> Result<Option<AnalysisRecord>, StoreError> {
        let fingerprint = InputFingerprint::from_input(company, role, jd_text);
        self.analyses().find_by_fingerprint(&fingerprint)
    }

    pub fn update(
        &self,
        id: &str,
        patch: AnalysisPatch,
    ) -> Result<Option<AnalysisRecord>, StoreError> {
        self.analyses().update(&AnalysisId::from(id), patch)
    }

    /// Set one skill's confidence and recalibrate. `None` for an unknown id.
    ///
    /// `skill` matches the record's skills case-insensitively and is stored
    /// under the record's casing. A skill the record does not hold leaves the
    /// record unchanged.
    pub fn update_confidence(
        &self,
        id: &str,
        skill: &str,
        confidence: Confidence,
    ) -> Result<Option<AnalysisRecord>, StoreError> {
        let Some(record) = self.get_by_id(id)? else {
            return Ok(None);
        };
        let Some(canonical) = record.resolve_skill(skill).map(str::to_string) else {
            debug!(id, skill, "confidence update ignored: skill not in record");
            return Ok(Some(record));
        };

        let mut map = record.skill_confidence_map;
        map.retain(|key, _| !key.eq_ignore_ascii_case(&canonical));
        map.insert(canonical, confidence);
        self.update(id, AnalysisPatch::confidence(map))
    }

    /// Flip one skill between `know` and `practice`.
    pub fn toggle_confidence(
        &self,
        id: &str,
        skill: &str,
    ) -> Result<Option<AnalysisRecord>, StoreError> {
        let Some(record) = self.get_by_id(id)? else {
            return Ok(None);
        };
        let next = record.confidence_of(skill).toggled();
        self.update_confidence(id, skill, next)
    }

    pub fn checklist_progress(&self) -> ChecklistProgress<&S> {
        ChecklistProgress::new(&self.store, self.config.checks_key.as_str())
    }
}
