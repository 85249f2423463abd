//! In-process store.

use super::{DocumentStore, StoreError, StoreResult};
use crate::model::item::AppData;
use std::cell::{Cell, RefCell};

/// Keeps the document in memory; can be switched to fail writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RefCell<AppData>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: AppData) -> Self {
        Self {
            data: RefCell::new(data),
            ..Self::default()
        }
    }

    /// Copy of the stored document.
    pub fn snapshot(&self) -> AppData {
        self.data.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Makes subsequent saves fail with `StoreError::Unavailable`.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Replaces the stored document, as another writer would.
    pub fn replace(&self, data: AppData) {
        *self.data.borrow_mut() = data;
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> StoreResult<AppData> {
        Ok(self.snapshot())
    }

    fn save(&self, data: &AppData) -> StoreResult<()> {
        if self.fail_saves.get() {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        *self.data.borrow_mut() = data.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
