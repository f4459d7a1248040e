//! Deterministic placement-readiness engine.
//!
//! `prep-core` turns a free-text job description plus a company and role label
//! into a structured preparation record: detected skills, a readiness score, an
//! interview round map, a day-by-day plan and a question bank. Extraction is
//! exact, case-insensitive, whole-token matching against a fixed taxonomy, and
//! every derivation is deterministic: identical inputs always produce
//! identical outputs.
//!
//! Records are persisted through an injected [`store::KeyValueStore`], so the
//! engine never touches ambient global state.

pub mod config;
pub mod engine;
pub mod export;
pub mod extraction;
pub mod generation;
pub mod intake;
pub mod intel;
pub mod scoring;
pub mod store;
pub mod taxonomy;
pub mod types;

pub use config::EngineConfig;
pub use engine::{build_analysis, PrepEngine};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use types::{AnalysisRecord, Confidence};
