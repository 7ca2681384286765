use std::{cell::RefCell, collections::HashMap, fmt, ops::Deref, rc::Rc};

use gloo::console;
use web_sys::{window, Storage};

use super::NoteKey;
use crate::error::NoteStoreError;

/// Synchronous string store the note editors persist into.
///
/// Reads never fail observably: an unreadable entry is simply absent.
/// `remove` on a missing key is not an error.
pub trait NoteStore {
    fn read(&self, key: &NoteKey) -> Option<String>;
    fn write(&self, key: &NoteKey, text: &str) -> Result<(), NoteStoreError>;
    fn remove(&self, key: &NoteKey) -> Result<(), NoteStoreError>;
}

/// Shared store handle handed to components through a Yew context.
#[derive(Clone)]
pub struct NoteStoreHandle(Rc<dyn NoteStore>);

impl NoteStoreHandle {
    pub fn new(store: impl NoteStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn local() -> Self {
        Self::new(LocalNoteStore)
    }

    pub fn memory() -> Self {
        Self::new(MemoryNoteStore::default())
    }
}

impl Deref for NoteStoreHandle {
    type Target = dyn NoteStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for NoteStoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NoteStoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteStoreHandle").finish_non_exhaustive()
    }
}

// ---------- localStorage ----------

/// Notes in `window.localStorage`, stored as plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalNoteStore;

fn get_storage() -> Result<Storage, NoteStoreError> {
    window()
        .ok_or(NoteStoreError::Unavailable)?
        .local_storage()
        .map_err(|_| NoteStoreError::Unavailable)?
        .ok_or(NoteStoreError::Unavailable)
}

impl NoteStore for LocalNoteStore {
    fn read(&self, key: &NoteKey) -> Option<String> {
        let storage = match get_storage() {
            Ok(st) => st,
            Err(err) => {
                console::warn!(format!("notes: cannot read {key}: {err}"));
                return None;
            }
        };
        match storage.get_item(&key.storage_key()) {
            Ok(value) => value,
            Err(e) => {
                console::warn!(format!("notes: reading {key} failed: {e:?}"));
                None
            }
        }
    }

    fn write(&self, key: &NoteKey, text: &str) -> Result<(), NoteStoreError> {
        get_storage()?
            .set_item(&key.storage_key(), text)
            .map_err(|e| NoteStoreError::Rejected(format!("{e:?}")))
    }

    fn remove(&self, key: &NoteKey) -> Result<(), NoteStoreError> {
        get_storage()?
            .remove_item(&key.storage_key())
            .map_err(|e| NoteStoreError::Rejected(format!("{e:?}")))
    }
}

// ---------- in-memory ----------

/// Process-local store. Used in tests and when no store was provided.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryNoteStore {
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (NoteKey, &'a str)>) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, text)| (key.storage_key(), text.to_string())),
        );
        store
    }

    pub fn get(&self, key: &NoteKey) -> Option<String> {
        self.entries.borrow().get(&key.storage_key()).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl NoteStore for MemoryNoteStore {
    fn read(&self, key: &NoteKey) -> Option<String> {
        self.get(key)
    }

    fn write(&self, key: &NoteKey, text: &str) -> Result<(), NoteStoreError> {
        self.entries
            .borrow_mut()
            .insert(key.storage_key(), text.to_string());
        Ok(())
    }

    fn remove(&self, key: &NoteKey) -> Result<(), NoteStoreError> {
        self.entries.borrow_mut().remove(&key.storage_key());
        Ok(())
    }
}
