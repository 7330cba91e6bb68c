//! Sync Configuration

use serde::{Deserialize, Serialize};

use crate::error::SyncResult;

/// Reconciliation knobs.
///
/// Defaults keep plain optimistic behavior: created records stay without an
/// id until the next fetch and failures only mark the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Write the server id of a successful create back into its entry
    pub adopt_created_ids: bool,
    /// Ask the caller to refetch the whole list after a failed mutation
    pub refetch_on_failure: bool,
    /// How many diagnostics a `MemorySink` retains
    pub diagnostics_capacity: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            adopt_created_ids: false,
            refetch_on_failure: false,
            diagnostics_capacity: 64,
        }
    }
}

impl SyncConfig {
    /// Parse a JSON object; missing keys fall back to defaults
    pub fn from_json_str(json: &str) -> SyncResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyncError;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SyncConfig::from_json_str(r#"{"refetch_on_failure":true}"#).unwrap();
        assert!(config.refetch_on_failure);
        assert!(!config.adopt_created_ids);
        assert_eq!(config.diagnostics_capacity, 64);
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = SyncConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, SyncError::Decode(_)));
    }
}
