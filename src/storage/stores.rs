use super::*;

use log::debug;
use std::fs::OpenOptions;
use std::io::Write;

pub struct JsonStorage {
    pub medium: String,
    pub path: String,
}

impl JsonStorage {
    pub fn new(path: &str) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.to_string(),
        }
    }

    fn write_error(&self, source: std::io::Error) -> AppError {
        AppError::StoreWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonStorage {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}

impl ContactStorage for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            debug!("no contact file at {}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let data = fs::read(&self.path)?;

        // serde_json will give an error if data is empty
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        // non-UTF-8 bytes are a read error as well
        let contacts: Vec<Contact> =
            serde_json::from_slice(&data).map_err(|e| AppError::StoreRead {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        debug!("loaded {} contacts from {}", contacts.len(), self.path);
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path).map_err(|e| match e {
            AppError::Io(source) => self.write_error(source),
            other => other,
        })?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e))?;

        let json_contacts = serde_json::to_string_pretty(contacts)?;
        file.write_all(json_contacts.as_bytes())
            .map_err(|e| self.write_error(e))?;

        debug!("saved {} contacts to {}", contacts.len(), self.path);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn contact(name: &str, y: i32, m: u32, d: u32, email: &str) -> Contact {
        Contact::new(
            name.to_string(),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            email.to_string(),
        )
    }

    #[test]
    fn json_store_is_persistent() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("nested/birthdays.json");
        let storage = JsonStorage::new(path.to_str().unwrap());

        let contacts = vec![
            contact("Uche", 1990, 3, 5, "ucheuche@gmail.com"),
            contact("Alex", 2000, 2, 29, "alex@example.com"),
        ];

        storage.save(&contacts)?;

        assert_eq!(storage.load()?, contacts);
        Ok(())
    }

    #[test]
    fn missing_file_loads_empty() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("absent.json");
        let storage = JsonStorage::new(path.to_str().unwrap());

        assert!(storage.load()?.is_empty());
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn empty_file_loads_empty() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("empty.json");
        fs::write(&path, "")?;

        let storage = JsonStorage::new(path.to_str().unwrap());

        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn corrupt_file_is_a_read_error() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("corrupt.json");
        fs::write(&path, "{ not json")?;

        let storage = JsonStorage::new(path.to_str().unwrap());

        assert!(matches!(storage.load(), Err(AppError::StoreRead { .. })));
        Ok(())
    }

    #[test]
    fn non_utf8_file_is_a_read_error() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("binary.json");
        fs::write(&path, [0x80, 0xff, 0x00, 0x9c])?;

        let storage = JsonStorage::new(path.to_str().unwrap());

        assert!(matches!(storage.load(), Err(AppError::StoreRead { .. })));
        Ok(())
    }

    #[test]
    fn unwritable_path_is_a_write_error() -> Result<(), AppError> {
        let dir = tempdir()?;
        // A directory cannot be opened as a file
        let storage = JsonStorage::new(dir.path().to_str().unwrap());

        assert!(matches!(
            storage.save(&[]),
            Err(AppError::StoreWrite { .. })
        ));
        Ok(())
    }
}
