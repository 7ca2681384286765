mod editor;
mod store;

use std::fmt;

pub use editor::{NoteEditorState, NoteMode};
pub use store::{LocalNoteStore, MemoryNoteStore, NoteStore, NoteStoreHandle};

use crate::model::TimelineEntry;

const KEY_PREFIX: &str = "note-";

/// Address of one note in the store.
///
/// Positional keys reproduce the layout earlier builds of the page wrote
/// (`note-day{day}-{index}`), so notes already saved in a browser are picked up.
/// Entries that carry an authored `note_id` use `note-id-{id}` instead and keep
/// their note when the timeline is reordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NoteKey {
    Position { day: u8, index: usize },
    Authored(String),
}

impl NoteKey {
    pub fn position(day: u8, index: usize) -> Self {
        NoteKey::Position { day, index }
    }

    pub fn for_entry(day: u8, index: usize, entry: &TimelineEntry) -> Self {
        match entry.note_id() {
            Some(id) => NoteKey::Authored(id.to_string()),
            None => NoteKey::position(day, index),
        }
    }

    pub fn storage_key(&self) -> String {
        match self {
            NoteKey::Position { day, index } => format!("{KEY_PREFIX}day{day}-{index}"),
            NoteKey::Authored(id) => format!("{KEY_PREFIX}id-{id}"),
        }
    }
}

impl fmt::Display for NoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}
