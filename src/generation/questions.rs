use crate::taxonomy;
use crate::types::ExtractedSkills;

pub const QUESTION_COUNT: usize = 10;

/// Skill → question. Looked up per detected skill in taxonomy order.
const TRIGGERS: &[(&str, &str)] = &[
    ("DSA", "How would you optimize search in sorted data?"),
    ("OOP", "Explain the four pillars of OOP with an example from your own code."),
    ("DBMS", "What is normalization and when would you denormalize a schema?"),
    ("OS", "What is the difference between a process and a thread?"),
    ("Networks", "What happens when you type a URL into the browser and press Enter?"),
    ("Java", "Explain the difference between an interface and an abstract class."),
    ("Python", "How do generators differ from lists, and when would you use one?"),
    ("JavaScript", "What are closures and how are they used?"),
    ("TypeScript", "How do union types and type guards improve runtime safety?"),
    ("C++", "Explain RAII and how smart pointers prevent leaks."),
    ("React", "Explain state management options in React (Context vs Redux)."),
    ("Next.js", "When would you choose server-side rendering over static generation?"),
    ("Node.js", "Describe the event loop in Node.js."),
    ("REST", "How do you design idempotent REST endpoints?"),
    ("GraphQL", "How does GraphQL avoid over-fetching compared to REST?"),
    ("SQL", "Explain indexing and when it helps."),
    ("MongoDB", "When would you embed documents versus reference them in MongoDB?"),
    ("Redis", "How would you use Redis as a cache and handle invalidation?"),
    ("AWS", "Which AWS services would you use to deploy a simple web app, and why?"),
    ("Docker", "What is a container and how does it differ from a VM?"),
    ("Kubernetes", "What problem does a Kubernetes Deployment solve over a bare Pod?"),
    ("CI/CD", "Walk through a CI/CD pipeline you have built or used."),
    ("Linux", "How would you find which process is holding a port on Linux?"),
    ("Selenium", "How do you make Selenium tests less flaky?"),
    ("JUnit", "How do you structure unit tests with mocks in JUnit?"),
    ("PyTest", "How do fixtures work in PyTest?"),
];

/// Backfill, used in this order until the bank holds [`QUESTION_COUNT`].
const GENERIC_QUESTIONS: [&str; QUESTION_COUNT] = [
    "Tell me about a challenging project you've worked on.",
    "How do you stay updated with the latest technologies?",
    "Explain your experience with version control systems like Git.",
    "How do you handle debugging complex issues in a production environment?",
    "Describe a time you had to work with a team to solve a technical problem.",
    "Walk me through the architecture of your strongest project.",
    "How do you prioritize when you have multiple deadlines?",
    "What is a technical decision you would make differently today?",
    "How do you approach learning a new framework quickly?",
    "Why do you want to join this company?",
];

fn trigger_for(skill: &str) -> Option<&'static str> {
    TRIGGERS
        .iter()
        .find(|(s, _)| s.eq_ignore_ascii_case(skill))
        .map(|(_, q)| *q)
}

/// Exactly [`QUESTION_COUNT`] questions: triggered ones first (taxonomy order,
/// deduplicated, truncated), then generic backfill.
pub fn generate_questions(skills: &ExtractedSkills) -> Vec<String> {
    let mut questions: Vec<String> = Vec::with_capacity(QUESTION_COUNT);

    let triggered = taxonomy::entries()
        .filter(|(category, skill)| skills.get(*category).iter().any(|s| s == skill))
        .filter_map(|(_, skill)| trigger_for(skill));

    for question in triggered.chain(GENERIC_QUESTIONS.iter().copied()) {
        if questions.len() == QUESTION_COUNT {
            break;
        }
        if !questions.iter().any(|q| q == question) {
            questions.push(question.to_string());
        }
    }

    debug_assert_eq!(questions.len(), QUESTION_COUNT);
    questions
}
