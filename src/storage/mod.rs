pub mod memory;
pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use memory::MemStorage;
pub use stores::JsonStorage;

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/birthdays.json";

/// Persistence backend for the contact list.
///
/// `load` returns an empty list when nothing has been persisted yet and
/// `AppError::StoreRead` when something was persisted but cannot be decoded.
pub trait ContactStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
