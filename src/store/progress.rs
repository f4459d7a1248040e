use std::collections::BTreeMap;

use tracing::warn;

use crate::store::kv::{KeyValueStore, StoreError};

/// Check-id → passed flags for the external verification checklist.
///
/// The engine never reads these; it only owns their persistence contract.
pub struct ChecklistProgress<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ChecklistProgress<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Current flags. Missing or malformed content loads as empty.
    pub fn load(&self) -> Result<BTreeMap<String, bool>, StoreError> {
        let Some(value) = self.store.read(&self.key)? else {
            return Ok(BTreeMap::new());
        };
        match serde_json::from_value::<BTreeMap<String, bool>>(value) {
            Ok(checks) => Ok(checks),
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring malformed checklist progress");
                Ok(BTreeMap::new())
            }
        }
    }

    pub fn set(&self, check_id: &str, passed: bool) -> Result<(), StoreError> {
        let mut checks = self.load()?;
        checks.insert(check_id.to_string(), passed);
        self.store.write(&self.key, &serde_json::to_value(checks)?)
    }

    /// Flip one flag and return its new value. Unknown ids start unchecked.
    pub fn toggle(&self, check_id: &str) -> Result<bool, StoreError> {
        let passed = !self.load()?.get(check_id).copied().unwrap_or(false);
        self.set(check_id, passed)?;
        Ok(passed)
    }

    pub fn passed_count(&self) -> Result<usize, StoreError> {
        Ok(self.load()?.values().filter(|passed| **passed).count())
    }

    pub fn reset(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}

impl<S> ChecklistProgress<S> {
    pub fn key(&self) -> &str {
        &self.key
    }
}
