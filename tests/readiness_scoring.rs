use prep_core::extraction::extract_skills;
use prep_core::scoring::{base_score, breakdown, final_score};
use prep_core::types::{Confidence, SkillConfidenceMap};

const REACT_SQL: &str = "Looking for React and SQL experience.";

fn long_react_sql() -> String {
    let head = "React and SQL. ";
    format!("{head}{}", "a".repeat(900 - head.len()))
}

fn all_tokens() -> String {
    prep_core::taxonomy::entries()
        .map(|(_, s)| s)
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn scenario_short_description_without_labels() {
    let skills = extract_skills(REACT_SQL);
    let details = breakdown(&skills, "", "", REACT_SQL);

    assert_eq!(details.categories_matched, 2);
    assert_eq!(details.category_points, 10);
    assert_eq!(details.company_points, 0);
    assert_eq!(details.role_points, 0);
    assert_eq!(details.length_points, 0);
    assert_eq!(details.total, 45);
}

#[test]
fn scenario_full_labels_and_long_description() {
    let jd = long_react_sql();
    assert_eq!(jd.chars().count(), 900);

    let skills = extract_skills(&jd);
    assert_eq!(base_score(&skills, "Infosys", "SDE", &jd), 75);
}

#[test]
fn description_of_exactly_800_chars_earns_no_length_bonus() {
    let jd = "a".repeat(800);
    let skills = extract_skills(&jd);
    assert_eq!(breakdown(&skills, "", "", &jd).length_points, 0);

    let jd = "a".repeat(801);
    assert_eq!(breakdown(&skills, "", "", &jd).length_points, 10);
}

#[test]
fn whitespace_only_labels_count_as_empty() {
    let skills = extract_skills(REACT_SQL);
    assert_eq!(base_score(&skills, "   ", "\t", REACT_SQL), 45);
}

#[test]
fn fallback_category_does_not_count_as_a_match() {
    let jd = "We want a motivated graduate who enjoys teamwork.";
    let skills = extract_skills(jd);
    assert_eq!(base_score(&skills, "", "", jd), 35);
}

#[test]
fn category_points_are_capped_at_thirty() {
    let jd = all_tokens();
    let skills = extract_skills(&jd);
    let details = breakdown(&skills, "Acme", "SDE", &jd);

    assert_eq!(details.categories_matched, 6);
    assert_eq!(details.category_points, 30);
    assert_eq!(details.total, 85);
}

#[test]
fn base_score_is_deterministic() {
    let jd = long_react_sql();
    let a = base_score(&extract_skills(&jd), "Infosys", "SDE", &jd);
    let b = base_score(&extract_skills(&jd), "Infosys", "SDE", &jd);
    assert_eq!(a, b);
}

#[test]
fn final_score_clamps_at_both_ends() {
    let jd = all_tokens();
    let skills = extract_skills(&jd);
    let base = base_score(&skills, "", "", &jd);
    assert_eq!(base, 65);

    // 36 skills all defaulting to practice: 65 - 72 clamps to 0.
    assert_eq!(final_score(base, &skills, &SkillConfidenceMap::new()), 0);

    let all_known: SkillConfidenceMap = skills
        .all_skills()
        .map(|s| (s.to_string(), Confidence::Know))
        .collect();
    assert_eq!(final_score(base, &skills, &all_known), 100);
}

#[test]
fn scores_stay_in_bounds_for_assorted_inputs() {
    let inputs = [
        ("", "", ""),
        ("Google", "SDE", REACT_SQL),
        ("Acme Labs", "", "C++ C# Go Rust"),
        ("", "Intern", "Docker Kubernetes AWS Azure GCP Linux CI/CD"),
    ];

    for (company, role, jd) in inputs {
        let skills = extract_skills(jd);
        let base = base_score(&skills, company, role, jd);
        let finals = final_score(base, &skills, &SkillConfidenceMap::new());
        assert!(base <= 100);
        assert!(finals <= 100);
    }
}
