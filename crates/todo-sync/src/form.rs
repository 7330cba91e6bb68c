//! Form State
//!
//! The two-field draft that feeds create/update. `Draft` is a plain value;
//! every change produces a new one and `FormState` swaps it in.

use serde::{Deserialize, Serialize};

/// Pending, not-yet-submitted field values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub description: String,
}

/// Which draft field an input is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
}

/// Zero or more field replacements applied in one merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl DraftPatch {
    /// Patch that overwrites both fields
    pub fn both(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}

impl Draft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Both fields are required for create and update
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.description.is_empty()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
        }
    }

    /// Copy of `self` with one field replaced
    pub fn with_field(&self, field: DraftField, value: impl Into<String>) -> Draft {
        let value = value.into();
        match field {
            DraftField::Name => Draft {
                name: value,
                description: self.description.clone(),
            },
            DraftField::Description => Draft {
                name: self.name.clone(),
                description: value,
            },
        }
    }

    /// Copy of `self` with every field present in `patch` replaced
    pub fn merged(&self, patch: DraftPatch) -> Draft {
        Draft {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
        }
    }
}

/// Owner of the current draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    draft: Draft,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Merge a single keystroke-level change, leaving the other field alone
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft = self.draft.with_field(field, value);
    }

    pub fn set_fields(&mut self, patch: DraftPatch) {
        self.draft = self.draft.merged(patch);
    }

    pub fn reset(&mut self) {
        self.draft = Draft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_leaves_other_field() {
        let mut form = FormState::new();
        form.set_field(DraftField::Name, "Milk");
        form.set_field(DraftField::Description, "semi-skimmed");
        form.set_field(DraftField::Name, "Oat milk");

        assert_eq!(form.draft(), &Draft::new("Oat milk", "semi-skimmed"));
    }

    #[test]
    fn test_set_fields_merges_partial_patch() {
        let mut form = FormState::new();
        form.set_fields(DraftPatch::both("A", "a"));
        form.set_fields(DraftPatch {
            description: Some("b".to_string()),
            ..Default::default()
        });
        assert_eq!(form.draft(), &Draft::new("A", "b"));

        form.set_fields(DraftPatch::default());
        assert_eq!(form.draft(), &Draft::new("A", "b"));
    }

    #[test]
    fn test_reset_restores_empty_draft() {
        let mut form = FormState::new();
        form.set_fields(DraftPatch::both("A", "a"));
        form.reset();
        assert!(form.draft().is_empty());
        assert_eq!(form.draft(), &Draft::default());
    }

    #[test]
    fn test_merge_does_not_touch_source() {
        let original = Draft::new("A", "a");
        let changed = original.with_field(DraftField::Description, "z");
        assert_eq!(original, Draft::new("A", "a"));
        assert_eq!(changed.field(DraftField::Description), "z");
    }

    #[test]
    fn test_is_complete_requires_both_fields() {
        assert!(Draft::new("A", "a").is_complete());
        assert!(!Draft::new("", "a").is_complete());
        assert!(!Draft::new("A", "").is_complete());
        assert!(!Draft::default().is_complete());
    }
}
