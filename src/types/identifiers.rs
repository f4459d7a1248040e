use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Opaque record identifier. Assigned once at creation, never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisId(String);

impl AnalysisId {
    /// Fresh random identifier for a new record.
    pub fn generate() -> Self {
        AnalysisId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnalysisId {
    fn from(raw: &str) -> Self {
        AnalysisId(raw.to_string())
    }
}

/// Content hash of the analysis input.
///
/// Format: `sha256:<hex>` over the length-prefixed company, role and
/// description, so field boundaries cannot be forged by embedding newlines.
/// Records written before fingerprints existed deserialize to the empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputFingerprint(String);

impl InputFingerprint {
    pub fn from_input(company: &str, role: &str, jd_text: &str) -> Self {
        let mut hasher = Sha256::new();
        for field in [company, role, jd_text] {
            hasher.update(format!("{}:", field.len()).as_bytes());
            hasher.update(field.as_bytes());
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        InputFingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
