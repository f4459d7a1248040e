use prep_core::extraction::{extract_skills, SkillExtractor};
use prep_core::taxonomy::{Category, FALLBACK_SKILLS};

fn skills_in(text: &str, category: Category) -> Vec<String> {
    extract_skills(text).get(category).to_vec()
}

#[test]
fn matching_is_case_insensitive_and_keeps_taxonomy_casing() {
    assert_eq!(skills_in("we use REACT and sql daily", Category::Web), vec!["React"]);
    assert_eq!(skills_in("we use REACT and sql daily", Category::Data), vec!["SQL"]);
    assert_eq!(skills_in("NEXT.JS frontend", Category::Web), vec!["Next.js"]);
}

#[test]
fn prefixes_and_suffixes_do_not_match() {
    assert_eq!(skills_in("Senior JavaScript developer", Category::Languages), vec!["JavaScript"]);
    assert_eq!(
        skills_in("MySQL and PostgreSQL experience", Category::Data),
        vec!["PostgreSQL", "MySQL"]
    );
    assert!(skills_in("RESTful services on macOS", Category::Web).is_empty());
    assert!(skills_in("RESTful services on macOS", Category::CoreCs).is_empty());
    assert!(skills_in("Next.jsx templates", Category::Web).is_empty());
}

#[test]
fn symbols_in_tokens_match_literally() {
    assert_eq!(skills_in("Modern C++ and C# codebases", Category::Languages), vec!["C++", "C#"]);
    assert_eq!(skills_in("Strong C, C++ skills", Category::Languages), vec!["C", "C++"]);
    assert_eq!(skills_in("Own our CI/CD pipelines", Category::Cloud), vec!["CI/CD"]);
    assert!(skills_in("Own our CI / CD pipelines", Category::Cloud).is_empty());
}

#[test]
fn plus_and_hash_between_words_separate_tokens() {
    let skills = extract_skills("Stack: React+Redux, Java+Spring, #Python");

    assert_eq!(skills.get(Category::Web), ["React"]);
    assert_eq!(skills.get(Category::Languages), ["Java", "Python"]);
    assert!(skills.get(Category::Other).is_empty());
}

#[test]
fn trailing_symbols_stay_attached_to_their_token() {
    assert_eq!(skills_in("C++/C# interop", Category::Languages), vec!["C++", "C#"]);
    assert!(skills_in("C++ only", Category::Languages).iter().all(|s| s != "C"));
    assert!(skills_in("#C# tips", Category::Languages).iter().all(|s| s != "C"));
}

#[test]
fn punctuation_separates_tokens() {
    assert_eq!(skills_in("react/redux, node.js.", Category::Web), vec!["React", "Node.js"]);
    assert_eq!(skills_in("We write Go.", Category::Languages), vec!["Go"]);
    assert_eq!(skills_in("OS-level tuning", Category::CoreCs), vec!["OS"]);
}

#[test]
fn result_follows_taxonomy_order_not_text_order() {
    let skills = extract_skills("Redis then SQL then DSA then React");
    assert_eq!(skills.get(Category::Data), ["SQL", "Redis"]);

    let categories: Vec<Category> = skills.non_empty().map(|(c, _)| c).collect();
    assert_eq!(categories, vec![Category::CoreCs, Category::Web, Category::Data]);
}

#[test]
fn every_category_key_is_present() {
    let skills = extract_skills("React");
    let keys: Vec<Category> = skills.iter().map(|(c, _)| c).collect();
    assert_eq!(keys, Category::ALL.to_vec());
    assert!(skills.get(Category::Other).is_empty());
}

#[test]
fn no_match_populates_only_the_fallback_category() {
    let skills = extract_skills("We want a motivated graduate who enjoys teamwork.");

    assert_eq!(skills.get(Category::Other), FALLBACK_SKILLS);
    for category in Category::matchable() {
        assert!(skills.get(category).is_empty(), "{category:?} should be empty");
    }
    assert_eq!(skills.categories_matched(), 0);
}

#[test]
fn empty_text_falls_back() {
    let skills = extract_skills("");
    assert_eq!(skills.get(Category::Other).len(), FALLBACK_SKILLS.len());
}

#[test]
fn every_taxonomy_token_is_detectable() {
    let all: Vec<&str> = prep_core::taxonomy::entries().map(|(_, s)| s).collect();
    let text = all.join(" ");

    let skills = SkillExtractor::new().extract(&text);
    assert_eq!(skills.total(), all.len());
    assert_eq!(skills.categories_matched(), 6);
    assert!(skills.get(Category::Other).is_empty());
}
