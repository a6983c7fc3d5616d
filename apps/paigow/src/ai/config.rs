//! Tile setter configuration.
//!
//! Extracts the standard fields from a JSON config while keeping any
//! setter-specific fields in `custom`.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for tile setters.
///
/// ```json
/// {"seed": 12345}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetterConfig {
    /// RNG seed for setters that use randomness. Same seed, same choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Setter-specific fields.
    #[serde(flatten)]
    pub custom: serde_json::Map<String, JsonValue>,
}

impl SetterConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Build a config from optional JSON, falling back to an empty config
    /// when the JSON does not fit.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_default()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }
}
