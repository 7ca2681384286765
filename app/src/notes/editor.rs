use super::{NoteKey, NoteStore};
use crate::error::NoteStoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteMode {
    /// Nothing saved: only the "add note" affordance is shown.
    Silent,
    /// A saved note is shown read-only; clicking it starts editing.
    Display,
    Editing,
}

/// Edit/view state of the note attached to one timeline entry.
///
/// Every transition out of `Editing` performs exactly one store call (write or
/// remove). Typing only touches the draft. `commit` and `delete` outside
/// `Editing` are no-ops, so a late blur after the editor already closed cannot
/// write a stale draft back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEditorState {
    key: NoteKey,
    saved: Option<String>,
    draft: String,
    editing: bool,
}

impl NoteEditorState {
    /// Reads the entry's note; a blank stored value counts as no note.
    pub fn load(key: NoteKey, store: &dyn NoteStore) -> Self {
        let saved = store
            .read(&key)
            .map(|text| trim_note(&text).to_string())
            .filter(|text| !text.is_empty());
        Self {
            key,
            saved,
            draft: String::new(),
            editing: false,
        }
    }

    pub fn key(&self) -> &NoteKey {
        &self.key
    }

    pub fn mode(&self) -> NoteMode {
        match (&self.saved, self.editing) {
            (_, true) => NoteMode::Editing,
            (Some(_), false) => NoteMode::Display,
            (None, false) => NoteMode::Silent,
        }
    }

    /// The persisted note text, empty when there is none.
    pub fn text(&self) -> &str {
        self.saved.as_deref().unwrap_or("")
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn begin_edit(&mut self) {
        if self.editing {
            return;
        }
        self.draft = self.saved.clone().unwrap_or_default();
        self.editing = true;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.editing {
            self.draft = text.into();
        }
    }

    /// Saves the trimmed draft, or removes the note when the draft is blank.
    ///
    /// The state leaves `Editing` even when the store call fails; the error is
    /// returned for logging only.
    pub fn commit(&mut self, store: &dyn NoteStore) -> Result<(), NoteStoreError> {
        if !self.editing {
            return Ok(());
        }
        self.editing = false;

        let trimmed = trim_note(&self.draft).to_string();
        if trimmed.is_empty() {
            self.saved = None;
            self.draft.clear();
            store.remove(&self.key)
        } else {
            self.draft = trimmed.clone();
            let result = store.write(&self.key, &trimmed);
            self.saved = Some(trimmed);
            result
        }
    }

    /// Drops the note whatever the draft holds.
    pub fn delete(&mut self, store: &dyn NoteStore) -> Result<(), NoteStoreError> {
        if !self.editing {
            return Ok(());
        }
        self.editing = false;
        self.saved = None;
        self.draft.clear();
        store.remove(&self.key)
    }
}

/// Whitespace plus the byte-order mark, which some pastes carry along.
fn trim_note(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::notes::MemoryNoteStore;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Write(String, String),
        Remove(String),
    }

    /// Wraps a memory store and records every mutating call.
    #[derive(Default)]
    struct RecordingStore {
        inner: MemoryNoteStore,
        calls: RefCell<Vec<Call>>,
        fail: bool,
    }

    impl RecordingStore {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn seeded(key: &NoteKey, text: &str) -> Self {
            let store = Self::default();
            store.inner.write(key, text).unwrap();
            store
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl NoteStore for RecordingStore {
        fn read(&self, key: &NoteKey) -> Option<String> {
            self.inner.read(key)
        }

        fn write(&self, key: &NoteKey, text: &str) -> Result<(), NoteStoreError> {
            self.calls
                .borrow_mut()
                .push(Call::Write(key.storage_key(), text.to_string()));
            if self.fail {
                return Err(NoteStoreError::Rejected("QuotaExceededError".into()));
            }
            self.inner.write(key, text)
        }

        fn remove(&self, key: &NoteKey) -> Result<(), NoteStoreError> {
            self.calls.borrow_mut().push(Call::Remove(key.storage_key()));
            if self.fail {
                return Err(NoteStoreError::Unavailable);
            }
            self.inner.remove(key)
        }
    }

    fn key() -> NoteKey {
        NoteKey::position(1, 0)
    }

    #[test]
    fn starts_silent_without_a_stored_note() {
        let store = RecordingStore::default();
        let state = NoteEditorState::load(key(), &store);
        assert_eq!(state.mode(), NoteMode::Silent);
        assert_eq!(state.text(), "");
    }

    #[test]
    fn starts_in_display_with_a_stored_note() {
        let store = RecordingStore::seeded(&key(), "Remember passport");
        let state = NoteEditorState::load(key(), &store);
        assert_eq!(state.mode(), NoteMode::Display);
        assert_eq!(state.text(), "Remember passport");
    }

    #[test]
    fn whitespace_only_stored_value_reads_as_no_note() {
        let store = RecordingStore::seeded(&key(), " \n\t ");
        let state = NoteEditorState::load(key(), &store);
        assert_eq!(state.mode(), NoteMode::Silent);
    }

    #[test]
    fn byte_order_mark_is_trimmed_like_whitespace() {
        let store = RecordingStore::seeded(&key(), "\u{feff}");
        assert_eq!(NoteEditorState::load(key(), &store).mode(), NoteMode::Silent);

        let store = RecordingStore::default();
        let mut state = NoteEditorState::load(key(), &store);
        state.begin_edit();
        state.set_draft("\u{feff}Octopus card\u{feff}");
        state.commit(&store).unwrap();
        assert_eq!(store.inner.get(&key()).as_deref(), Some("Octopus card"));
    }

    #[test]
    fn add_type_and_blur_saves_the_note() {
        let store = RecordingStore::default();
        let mut state = NoteEditorState::load(key(), &store);

        state.begin_edit();
        assert_eq!(state.mode(), NoteMode::Editing);
        assert_eq!(state.draft(), "");
        state.set_draft("Remember passport");
        state.commit(&store).unwrap();

        assert_eq!(state.mode(), NoteMode::Display);
        assert_eq!(state.text(), "Remember passport");
        assert_eq!(store.inner.get(&key()).as_deref(), Some("Remember passport"));
    }

    #[test]
    fn clearing_a_displayed_note_and_blurring_removes_it() {
        let store = RecordingStore::seeded(&key(), "Remember passport");
        let mut state = NoteEditorState::load(key(), &store);

        state.begin_edit();
        assert_eq!(state.draft(), "Remember passport");
        state.set_draft("");
        state.commit(&store).unwrap();

        assert_eq!(state.mode(), NoteMode::Silent);
        assert_eq!(store.inner.get(&key()), None);
    }

    #[test]
    fn whitespace_commit_removes_existing_note() {
        let store = RecordingStore::seeded(&key(), "A");
        let mut state = NoteEditorState::load(key(), &store);

        state.begin_edit();
        state.set_draft("   ");
        state.commit(&store).unwrap();

        assert_eq!(state.mode(), NoteMode::Silent);
        assert_eq!(store.inner.get(&key()), None);
        assert_eq!(store.calls(), vec![Call::Remove("note-day1-0".into())]);
    }

    #[test]
    fn blank_inputs_never_leave_a_stored_entry() {
        for blank in ["", " ", "\n", "\t \r\n", "\u{3000}", "\u{feff}", " \u{feff}\n"] {
            let store = RecordingStore::seeded(&key(), "old");
            let mut state = NoteEditorState::load(key(), &store);
            state.begin_edit();
            state.set_draft(blank);
            state.commit(&store).unwrap();
            assert_eq!(state.mode(), NoteMode::Silent, "input {blank:?}");
            assert!(store.inner.is_empty(), "input {blank:?}");
        }
    }

    #[test]
    fn commit_stores_exactly_the_trimmed_text() {
        for (input, expected) in [
            ("  padded  ", "padded"),
            ("\nline one\nline two\n", "line one\nline two"),
            ("x", "x"),
        ] {
            let store = RecordingStore::default();
            let mut state = NoteEditorState::load(key(), &store);
            state.begin_edit();
            state.set_draft(input);
            state.commit(&store).unwrap();
            assert_eq!(state.mode(), NoteMode::Display);
            assert_eq!(state.text(), expected);
            assert_eq!(store.inner.get(&key()).as_deref(), Some(expected));
        }
    }

    #[test]
    fn reopening_and_committing_unchanged_does_not_drift() {
        let store = RecordingStore::default();
        let mut state = NoteEditorState::load(key(), &store);
        state.begin_edit();
        state.set_draft("  Octopus card top-up  ");
        state.commit(&store).unwrap();
        let first = state.clone();

        for _ in 0..3 {
            state.begin_edit();
            state.commit(&store).unwrap();
            assert_eq!(state, first);
            assert_eq!(store.inner.get(&key()).as_deref(), Some("Octopus card top-up"));
        }
    }

    #[test]
    fn delete_discards_unsaved_edits() {
        let store = RecordingStore::seeded(&key(), "keep?");
        let mut state = NoteEditorState::load(key(), &store);

        state.begin_edit();
        state.set_draft("half-typed replacement");
        state.delete(&store).unwrap();

        assert_eq!(state.mode(), NoteMode::Silent);
        assert_eq!(state.draft(), "");
        assert_eq!(store.inner.get(&key()), None);
    }

    #[test]
    fn delete_wins_over_a_trailing_blur() {
        let store = RecordingStore::seeded(&key(), "old");
        let mut state = NoteEditorState::load(key(), &store);

        state.begin_edit();
        state.set_draft("leftover");
        state.delete(&store).unwrap();
        // A blur that still slips through after the delete must not resurrect the draft.
        state.commit(&store).unwrap();

        assert_eq!(state.mode(), NoteMode::Silent);
        assert_eq!(store.inner.get(&key()), None);
        assert_eq!(store.calls(), vec![Call::Remove("note-day1-0".into())]);
    }

    #[test]
    fn keystrokes_do_not_touch_the_store() {
        let store = RecordingStore::default();
        let mut state = NoteEditorState::load(key(), &store);
        state.begin_edit();
        for draft in ["R", "Re", "Rem", "Remember"] {
            state.set_draft(draft);
        }
        assert!(store.calls().is_empty());

        state.commit(&store).unwrap();
        assert_eq!(
            store.calls(),
            vec![Call::Write("note-day1-0".into(), "Remember".into())]
        );
    }

    #[test]
    fn commit_and_delete_outside_editing_are_noops() {
        let store = RecordingStore::seeded(&key(), "saved");
        let mut state = NoteEditorState::load(key(), &store);

        state.commit(&store).unwrap();
        state.delete(&store).unwrap();
        state.set_draft("ignored");

        assert_eq!(state.mode(), NoteMode::Display);
        assert_eq!(state.draft(), "");
        assert!(store.calls().is_empty());
    }

    #[test]
    fn begin_edit_twice_keeps_the_draft() {
        let store = RecordingStore::default();
        let mut state = NoteEditorState::load(key(), &store);
        state.begin_edit();
        state.set_draft("typing");
        state.begin_edit();
        assert_eq!(state.draft(), "typing");
    }

    #[test]
    fn entries_never_see_each_others_notes() {
        let store = RecordingStore::default();
        let a_key = NoteKey::position(1, 0);
        let b_key = NoteKey::position(2, 0);
        let c_key = NoteKey::position(1, 1);

        let mut a = NoteEditorState::load(a_key.clone(), &store);
        a.begin_edit();
        a.set_draft("same text");
        a.commit(&store).unwrap();

        let mut b = NoteEditorState::load(b_key.clone(), &store);
        assert_eq!(b.mode(), NoteMode::Silent);
        b.begin_edit();
        b.set_draft("same text");
        b.commit(&store).unwrap();

        let c = NoteEditorState::load(c_key.clone(), &store);
        assert_eq!(c.mode(), NoteMode::Silent);

        let mut b = NoteEditorState::load(b_key.clone(), &store);
        b.begin_edit();
        b.delete(&store).unwrap();

        assert_eq!(store.inner.get(&a_key).as_deref(), Some("same text"));
        assert_eq!(store.inner.get(&b_key), None);
        assert_eq!(store.inner.get(&c_key), None);
    }

    #[test]
    fn store_failures_do_not_block_transitions() {
        let store = RecordingStore::failing();
        let mut state = NoteEditorState::load(key(), &store);

        state.begin_edit();
        state.set_draft("not persisted");
        assert!(state.commit(&store).is_err());
        assert_eq!(state.mode(), NoteMode::Display);
        assert_eq!(state.text(), "not persisted");

        state.begin_edit();
        assert_eq!(state.delete(&store), Err(NoteStoreError::Unavailable));
        assert_eq!(state.mode(), NoteMode::Silent);
    }

    #[test]
    fn remount_reads_the_latest_value() {
        let store = RecordingStore::default();
        let mut first = NoteEditorState::load(key(), &store);
        first.begin_edit();
        first.set_draft("from tab one");
        first.commit(&store).unwrap();

        let remounted = NoteEditorState::load(key(), &store);
        assert_eq!(remounted.mode(), NoteMode::Display);
        assert_eq!(remounted.text(), "from tab one");
    }
}
