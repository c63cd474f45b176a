use super::*;

use std::cell::{Cell, RefCell};

/// Keeps the "persisted" list in memory. Counts saves so callers can
/// observe whether a write happened.
#[derive(Default)]
pub struct MemStorage {
    pub data: RefCell<Vec<Contact>>,
    saves: Cell<usize>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
            saves: Cell::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl ContactStorage for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
