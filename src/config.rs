use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_KEY: &str = "prep_history";
pub const DEFAULT_CHECKS_KEY: &str = "prp_test_checks";

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub version: String,
    /// Store key holding the JSON array of analysis records.
    pub history_key: String,
    /// Store key holding the checklist progress object.
    pub checks_key: String,
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            history_key: DEFAULT_HISTORY_KEY.into(),
            checks_key: DEFAULT_CHECKS_KEY.into(),
        }
    }

    /// Parse a JSON config. Missing fields take their `v0` values.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let partial: PartialConfig = serde_json::from_str(raw)?;
        let defaults = Self::v0();
        Ok(Self {
            version: partial.version.unwrap_or(defaults.version),
            history_key: partial.history_key.unwrap_or(defaults.history_key),
            checks_key: partial.checks_key.unwrap_or(defaults.checks_key),
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartialConfig {
    version: Option<String>,
    history_key: Option<String>,
    checks_key: Option<String>,
}
