use super::*;

use super::birthday::{days_until_birthday, next_birthday};
use chrono::{Local, NaiveDate};
use log::{debug, warn};

use crate::storage::{ContactStorage, JsonStorage};

/// A contact paired with the distance to its next birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub contact: Contact,
    pub next_birthday: NaiveDate,
    pub days_remaining: i64,
}

/// Result of an upcoming-birthday listing: sorted entries plus one
/// `AppError::DateParse` for every contact whose stored date is unreadable.
#[derive(Debug, Default)]
pub struct BirthdayReport {
    pub upcoming: Vec<UpcomingBirthday>,
    pub invalid: Vec<AppError>,
}

impl BirthdayReport {
    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.invalid.is_empty()
    }
}

pub struct ContactStore<S: ContactStorage = JsonStorage> {
    contacts: Vec<Contact>,
    storage: S,
    load_warning: Option<AppError>,
}

impl<S: ContactStorage> ContactStore<S> {
    /// Loads the persisted contacts. A corrupt store is logged and replaced by
    /// an empty list; the error stays available through `load_warning`.
    pub fn open(storage: S) -> Result<Self, AppError> {
        let mut store = Self {
            contacts: Vec::new(),
            storage,
            load_warning: None,
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> Result<(), AppError> {
        match self.storage.load() {
            Ok(contacts) => {
                self.contacts = contacts;
                self.load_warning = None;
                Ok(())
            }
            Err(e @ AppError::StoreRead { .. }) => {
                warn!("{}; starting with an empty contact list", e);
                self.contacts = Vec::new();
                self.load_warning = Some(e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        debug!(
            "persisting {} contacts ({})",
            self.contacts.len(),
            self.storage.get_medium()
        );
        self.storage.save(&self.contacts)
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        birth_date: NaiveDate,
        email: &str,
    ) -> Result<(), AppError> {
        Contact::validate_presence(name, email)?;

        self.contacts.push(Contact::new(
            name.to_string(),
            birth_date,
            email.to_string(),
        ));
        self.save()
    }

    /// Removes every contact named exactly `name` and persists, even when
    /// nothing matched. Returns how many contacts were removed.
    pub fn remove_contact(&mut self, name: &str) -> Result<usize, AppError> {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.name != name);
        let removed = before - self.contacts.len();

        self.save()?;
        Ok(removed)
    }

    pub fn upcoming_birthdays(&self) -> BirthdayReport {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> BirthdayReport {
        let mut report = BirthdayReport::default();

        for contact in &self.contacts {
            match contact.birth_date() {
                Ok(born) => report.upcoming.push(UpcomingBirthday {
                    contact: contact.clone(),
                    next_birthday: next_birthday(born, today),
                    days_remaining: days_until_birthday(born, today),
                }),
                Err(e) => report.invalid.push(e),
            }
        }

        // ties keep insertion order
        report.upcoming.sort_by_key(|entry| entry.days_remaining);
        report
    }

    /// Re-reads the persisted contacts, then lists upcoming birthdays.
    pub fn load_and_list(&mut self) -> Result<BirthdayReport, AppError> {
        self.load()?;
        Ok(self.upcoming_birthdays())
    }

    pub fn list_names(&self) -> Vec<&str> {
        self.contacts.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn load_warning(&self) -> Option<&AppError> {
        self.load_warning.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
