//! List Store
//!
//! Owns the ordered todo collection, the single edit slot and the draft.
//! Every mutation is applied locally and synchronously; the remote call it
//! owes is handed back as a [`PendingSync`] for the caller to dispatch.

use crate::config::SyncConfig;
use crate::form::{Draft, DraftPatch, FormState};
use crate::record::{LocalKey, SyncState, Todo};
use crate::remote::CreateTodoInput;
use crate::sync::{PendingSync, SyncKind, SyncOutcome};

/// Which position, if any, the form is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPointer {
    #[default]
    Inactive,
    Editing(usize),
}

impl EditPointer {
    pub fn target(&self) -> Option<usize> {
        match self {
            EditPointer::Inactive => None,
            EditPointer::Editing(position) => Some(*position),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EditPointer::Editing(_))
    }
}

/// A todo plus its local bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: LocalKey,
    pub todo: Todo,
    pub sync: SyncState,
    /// Sequence of the latest operation issued for this entry (0 = none)
    pub last_seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ListStore {
    entries: Vec<Entry>,
    edit: EditPointer,
    form: FormState,
    next_key: u64,
    next_seq: u64,
    config: SyncConfig,
}

impl ListStore {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&Todo> {
        self.entries.get(position).map(|entry| &entry.todo)
    }

    /// Records in display order
    pub fn todos(&self) -> impl Iterator<Item = &Todo> + '_ {
        self.entries.iter().map(|entry| &entry.todo)
    }

    pub fn position_of(&self, key: LocalKey) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    pub fn edit_pointer(&self) -> EditPointer {
        self.edit
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_active()
    }

    pub fn draft(&self) -> &Draft {
        self.form.draft()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Keystroke-level draft edits go through here
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn unsynced_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.sync == SyncState::Unsynced)
            .count()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.edit.is_active() {
            "Update Todo"
        } else {
            "Create Todo"
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Replace the whole collection with a fresh remote listing.
    ///
    /// An active edit follows its record by server id; if the record is gone
    /// (or never had an id) the edit is cancelled.
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        let edited_id = self
            .edit
            .target()
            .and_then(|position| self.entries.get(position))
            .and_then(|entry| entry.todo.id.clone());

        let entries: Vec<Entry> = todos
            .into_iter()
            .map(|todo| Entry {
                key: self.allocate_key(),
                todo,
                sync: SyncState::Synced,
                last_seq: 0,
            })
            .collect();
        self.entries = entries;

        if self.edit.is_active() {
            let found = edited_id.and_then(|id| {
                self.entries
                    .iter()
                    .position(|entry| entry.todo.id.as_ref() == Some(&id))
            });
            match found {
                Some(position) => self.edit = EditPointer::Editing(position),
                None => {
                    log::debug!("[LIST] edit target gone after refetch");
                    self.edit = EditPointer::Inactive;
                    self.form.reset();
                }
            }
        }
        log::debug!("[LIST] loaded {} todos", self.entries.len());
    }

    /// Create vs. update is decided solely by the edit pointer
    pub fn submit(&mut self) -> Option<PendingSync> {
        let draft = self.form.draft().clone();
        match self.edit {
            EditPointer::Editing(position) => self.update(position, &draft),
            EditPointer::Inactive => self.create(&draft),
        }
    }

    pub fn create(&mut self, draft: &Draft) -> Option<PendingSync> {
        if !draft.is_complete() {
            return None;
        }

        let key = self.allocate_key();
        let seq = self.allocate_seq();
        self.entries.push(Entry {
            key,
            todo: Todo::unsaved(draft.name.clone(), draft.description.clone()),
            sync: SyncState::Pending,
            last_seq: seq,
        });
        self.form.reset();
        log::debug!("[LIST] appended {} at {}", key, self.entries.len() - 1);

        Some(PendingSync::Create {
            key,
            seq,
            input: CreateTodoInput {
                name: draft.name.clone(),
                description: draft.description.clone(),
            },
        })
    }

    /// Only the position currently being edited can be updated
    pub fn update(&mut self, position: usize, draft: &Draft) -> Option<PendingSync> {
        if self.edit != EditPointer::Editing(position) || !draft.is_complete() {
            return None;
        }
        if position >= self.entries.len() {
            return None;
        }
        let seq = self.allocate_seq();
        let entry = &mut self.entries[position];

        entry.todo.name = draft.name.clone();
        entry.todo.description = draft.description.clone();
        entry.last_seq = seq;
        // a failure stays visible until a later call succeeds
        if entry.sync != SyncState::Unsynced {
            entry.sync = SyncState::Pending;
        }
        let pending = PendingSync::Update {
            key: entry.key,
            seq,
            id: entry.todo.id.clone(),
            name: draft.name.clone(),
            description: draft.description.clone(),
        };

        self.edit = EditPointer::Inactive;
        self.form.reset();
        log::debug!("[LIST] updated position {}", position);
        Some(pending)
    }

    pub fn delete(&mut self, position: usize) -> Option<PendingSync> {
        if position >= self.entries.len() {
            return None;
        }

        match self.edit {
            EditPointer::Editing(target) if target == position => {
                self.form.set_fields(DraftPatch::both("", ""));
                self.edit = EditPointer::Inactive;
            }
            // keep pointing at the same record once later rows shift down
            EditPointer::Editing(target) if target > position => {
                self.edit = EditPointer::Editing(target - 1);
            }
            _ => {}
        }

        let removed = self.entries.remove(position);
        log::debug!("[LIST] removed {} from position {}", removed.key, position);

        Some(PendingSync::Delete {
            key: removed.key,
            seq: self.allocate_seq(),
            id: removed.todo.id,
        })
    }

    /// Point the form at `position`, overwriting any unsaved draft
    pub fn begin_edit(&mut self, position: usize) {
        let Some(entry) = self.entries.get(position) else {
            return;
        };
        let patch = DraftPatch::both(entry.todo.name.clone(), entry.todo.description.clone());
        self.edit = EditPointer::Editing(position);
        self.form.set_fields(patch);
    }

    /// Record what the remote said about an operation.
    ///
    /// Only the sync marker (and, when configured, a created id) changes;
    /// optimistic edits are never rolled back. Outcomes of operations older
    /// than the entry's latest one leave the marker alone. Returns `true`
    /// when the caller should refetch the list.
    pub fn apply_outcome(&mut self, outcome: &SyncOutcome) -> bool {
        let adopt_ids = self.config.adopt_created_ids;
        let failed = outcome.result.is_err();

        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == outcome.key) {
            match &outcome.result {
                Ok(saved) => {
                    if outcome.kind == SyncKind::Create && adopt_ids && entry.todo.id.is_none() {
                        entry.todo.id = saved.id.clone();
                    }
                    if outcome.seq == entry.last_seq {
                        entry.sync = SyncState::Synced;
                    }
                }
                Err(_) if outcome.seq == entry.last_seq => entry.sync = SyncState::Unsynced,
                Err(_) => {}
            }
        }

        failed && self.config.refetch_on_failure
    }

    fn allocate_key(&mut self) -> LocalKey {
        self.next_key += 1;
        LocalKey(self.next_key)
    }

    fn allocate_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}
