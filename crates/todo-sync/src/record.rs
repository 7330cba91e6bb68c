//! Todo Records
//!
//! Data structures matching the remote `Todo` type, plus the local
//! bookkeeping each entry carries while it lives in the list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Todo data structure (matches remote)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Absent until the record has been persisted and refetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Todo {
    /// A record that has not been persisted yet
    pub fn unsaved(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(TodoId::new(id)),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Local correlation token.
///
/// Assigned when an entry enters the list and never reused within one store,
/// so a remote response can find its entry after positions have shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalKey(pub u64);

impl fmt::Display for LocalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How an entry relates to what the remote last acknowledged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SyncState {
    /// Loaded from the remote, or the last remote call succeeded
    #[default]
    Synced,
    /// A local change is in flight
    Pending,
    /// The last remote call failed; local and remote have diverged
    Unsynced,
}

impl SyncState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncState::Synced => "synced",
            SyncState::Pending => "pending",
            SyncState::Unsynced => "unsynced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_todo_serializes_without_id() {
        let todo = Todo::unsaved("Milk", "2 litres");
        let json = serde_json::to_value(&todo).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Milk");
    }

    #[test]
    fn test_todo_deserializes_remote_shape() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":"abc-1","name":"A","description":"a"}"#).unwrap();
        assert_eq!(todo, Todo::with_id("abc-1", "A", "a"));
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let todo: Todo = serde_json::from_str(r#"{"id":"1","name":"A"}"#).unwrap();
        assert_eq!(todo.description, "");
    }
}
