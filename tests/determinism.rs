use prep_core::{build_analysis, MemoryStore, PrepEngine};

const JD: &str = "We are hiring a backend engineer. Required: Java, Spring, SQL, Docker and \
                  Kubernetes. Nice to have: React, CI/CD, AWS. Strong DSA and OOP fundamentals.";

#[test]
fn analysis_is_deterministic_for_identical_input() {
    let a = build_analysis("Amazon", "SDE 1", JD);
    let b = build_analysis("Amazon", "SDE 1", JD);

    assert_eq!(a.extracted_skills, b.extracted_skills);
    assert_eq!(a.base_score, b.base_score);
    assert_eq!(a.final_score, b.final_score);
    assert_eq!(a.company_intel, b.company_intel);
    assert_eq!(a.round_mapping, b.round_mapping);
    assert_eq!(a.checklist, b.checklist);
    assert_eq!(a.plan_7_days, b.plan_7_days);
    assert_eq!(a.questions, b.questions);
    assert_eq!(a.input_fingerprint, b.input_fingerprint);

    assert_ne!(a.id, b.id, "ids are unique per record");
}

#[test]
fn derived_fields_serialize_byte_identically() {
    let a = build_analysis("Acme Labs", "Intern", JD);
    let b = build_analysis("Acme Labs", "Intern", JD);

    let derived = |r: &prep_core::AnalysisRecord| {
        serde_json::to_string(&(
            &r.extracted_skills,
            &r.company_intel,
            &r.round_mapping,
            &r.checklist,
            &r.plan_7_days,
            &r.questions,
            r.base_score,
            r.final_score,
        ))
        .unwrap()
    };

    assert_eq!(derived(&a), derived(&b));
}

#[test]
fn reanalysing_through_the_engine_gives_the_same_scores() {
    let engine = PrepEngine::new(MemoryStore::new());
    let first = engine.analyze("Amazon", "SDE 1", JD).unwrap();
    let second = engine.analyze("Amazon", "SDE 1", JD).unwrap();

    assert_eq!(first.base_score, second.base_score);
    assert_eq!(first.questions, second.questions);
    assert_eq!(engine.list().unwrap().len(), 2);
}

#[test]
fn fingerprint_separates_fields() {
    let a = build_analysis("ab", "c", JD);
    let b = build_analysis("a", "bc", JD);
    assert_ne!(a.input_fingerprint, b.input_fingerprint);
    assert!(a.input_fingerprint.as_str().starts_with("sha256:"));
    assert_eq!(a.input_fingerprint.as_str().len(), "sha256:".len() + 64);
}
