use serde_json::Value;
use tracing::{debug, warn};

use crate::scoring::recalibrate;
use crate::store::kv::{KeyValueStore, StoreError};
use crate::types::{AnalysisId, AnalysisPatch, AnalysisRecord, InputFingerprint};

/// Ordered record collection stored as one JSON array under `key`, most
/// recent first.
///
/// Entries that fail the shape check or do not decode are never returned, but
/// are left in place on writes.
pub struct AnalysisStore<S> {
    store: S,
    key: String,
}

/// Minimal shape: an object with string `id` and `jdText`.
fn has_shape(entry: &Value) -> bool {
    entry.get("id").and_then(Value::as_str).is_some()
        && entry.get("jdText").and_then(Value::as_str).is_some()
}

fn decode(entry: &Value) -> Option<AnalysisRecord> {
    if !has_shape(entry) {
        return None;
    }
    match serde_json::from_value(entry.clone()) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(id = ?entry.get("id"), error = %e, "skipping undecodable analysis entry");
            None
        }
    }
}

impl<S: KeyValueStore> AnalysisStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    fn read_raw(&self) -> Result<Vec<Value>, StoreError> {
        match self.store.read(&self.key)? {
            None => Ok(Vec::new()),
            Some(Value::Array(entries)) => Ok(entries),
            Some(_) => {
                warn!(key = %self.key, "history value is not an array; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn write_raw(&self, entries: Vec<Value>) -> Result<(), StoreError> {
        self.store.write(&self.key, &Value::Array(entries))
    }

    /// Insert at the head of the collection.
    pub fn create(&self, record: &AnalysisRecord) -> Result<(), StoreError> {
        let mut entries = self.read_raw()?;
        entries.insert(0, serde_json::to_value(record)?);
        self.write_raw(entries)?;
        debug!(id = %record.id, "analysis stored");
        Ok(())
    }

    /// Valid records in stored order.
    pub fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError> {
        let entries = self.read_raw()?;
        let records: Vec<AnalysisRecord> = entries.iter().filter_map(decode).collect();

        let dropped = entries.len() - records.len();
        if dropped > 0 {
            warn!(dropped, "filtered corrupted analysis entries");
        }
        Ok(records)
    }

    pub fn get_by_id(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, StoreError> {
        Ok(self.list()?.into_iter().find(|r| &r.id == id))
    }

    /// Most recent valid record.
    pub fn latest(&self) -> Result<Option<AnalysisRecord>, StoreError> {
        Ok(self.list()?.into_iter().next())
    }

    /// Most recent record analysed from the same input.
    pub fn find_by_fingerprint(
        &self,
        fingerprint: &InputFingerprint,
    ) -> Result<Option<AnalysisRecord>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|r| &r.input_fingerprint == fingerprint))
    }

    /// Merge `patch` into the record with `id`, bump `updated_at` and, when the
    /// confidence map changed, recompute `final_score` from `base_score`.
    pub fn update(
        &self,
        id: &AnalysisId,
        patch: AnalysisPatch,
    ) -> Result<Option<AnalysisRecord>, StoreError> {
        let mut entries = self.read_raw()?;

        let found = entries
            .iter()
            .enumerate()
            .find_map(|(pos, entry)| decode(entry).filter(|r| &r.id == id).map(|r| (pos, r)));

        let Some((pos, mut record)) = found else {
            return Ok(None);
        };

        if let Some(map) = patch.skill_confidence_map {
            record.skill_confidence_map = map;
            record.final_score = recalibrate(&record, &record.skill_confidence_map);
        }
        record.touch();

        entries[pos] = serde_json::to_value(&record)?;
        self.write_raw(entries)?;

        debug!(id = %record.id, final_score = record.final_score, "analysis updated");
        Ok(Some(record))
    }
}
