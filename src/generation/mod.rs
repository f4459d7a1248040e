pub mod plan;
pub mod questions;

pub use plan::{generate_plan, FRONTEND_FOCUS};
pub use questions::{generate_questions, QUESTION_COUNT};
