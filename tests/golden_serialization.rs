use prep_core::extraction::extract_skills;
use prep_core::intake::IntakeWarning;
use prep_core::types::{AnalysisRecord, Confidence, ExtractedSkills, SkillConfidenceMap};
use prep_core::{build_analysis, EngineConfig};
use serde_json::{json, Value};

#[test]
fn golden_record_key_order() {
    let mut record = build_analysis("Google", "SDE", "React and SQL");
    record
        .skill_confidence_map
        .insert("React".to_string(), Confidence::Know);

    let json_str = serde_json::to_string(&record).unwrap();

    let keys = [
        "\"id\":",
        "\"createdAt\":",
        "\"updatedAt\":",
        "\"company\":",
        "\"role\":",
        "\"jdText\":",
        "\"inputFingerprint\":",
        "\"extractedSkills\":",
        "\"companyIntel\":",
        "\"roundMapping\":",
        "\"checklist\":",
        "\"plan7Days\":",
        "\"questions\":",
        "\"baseScore\":",
        "\"skillConfidenceMap\":",
        "\"finalScore\":",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|k| json_str.find(k).unwrap_or_else(|| panic!("missing key {k}")))
        .collect();

    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "record keys out of order: {json_str}"
    );

    let value: Value = serde_json::from_str(&json_str).unwrap();
    assert_eq!(value["skillConfidenceMap"], json!({ "React": "know" }));
    assert_eq!(value["companyIntel"]["classification"], json!("enterprise"));
    assert_eq!(value["baseScore"], json!(65));
}

#[test]
fn golden_extracted_skills_snapshot() {
    let skills = extract_skills("SQL and React");
    let json_str = serde_json::to_string(&skills).unwrap();

    assert_eq!(
        json_str,
        r#"{"coreCS":[],"languages":[],"web":["React"],"data":["SQL"],"cloud":[],"testing":[],"other":[]}"#
    );
}

#[test]
fn extracted_skills_fill_missing_categories_on_read() {
    let skills: ExtractedSkills = serde_json::from_str(r#"{"web":["React"]}"#).unwrap();
    assert_eq!(skills.iter().count(), 7);
    assert_eq!(skills, extract_skills("React"));
}

#[test]
fn absent_intel_serializes_as_null() {
    let record = build_analysis("", "", "Docker");
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["companyIntel"], Value::Null);
    assert_eq!(value["roundMapping"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["questions"].as_array().map(Vec::len), Some(10));
}

#[test]
fn record_without_optional_fields_still_decodes() {
    let record = build_analysis("Acme", "SDE", "Python");
    let mut value = serde_json::to_value(&record).unwrap();
    let obj = value.as_object_mut().unwrap();
    obj.remove("inputFingerprint");
    obj.remove("skillConfidenceMap");

    let decoded: AnalysisRecord = serde_json::from_value(value).unwrap();
    assert!(decoded.input_fingerprint.is_empty());
    assert_eq!(decoded.skill_confidence_map, SkillConfidenceMap::new());
    assert_eq!(decoded.base_score, record.base_score);
}

#[test]
fn confidence_and_warning_wire_values() {
    assert_eq!(serde_json::to_value(Confidence::Know).unwrap(), json!("know"));
    assert_eq!(serde_json::to_value(Confidence::Practice).unwrap(), json!("practice"));
    assert_eq!(
        serde_json::to_value(IntakeWarning::ShortDescription { chars: 12 }).unwrap(),
        json!({ "kind": "shortDescription", "chars": 12 })
    );
}

#[test]
fn golden_config_serialization() {
    let value = serde_json::to_value(EngineConfig::v0()).unwrap();
    assert_eq!(
        value,
        json!({
            "version": "1",
            "historyKey": "prep_history",
            "checksKey": "prp_test_checks"
        })
    );
}
