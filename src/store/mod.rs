pub mod analysis;
pub mod file;
pub mod kv;
pub mod progress;

pub use analysis::AnalysisStore;
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore, StoreError};
pub use progress::ChecklistProgress;
