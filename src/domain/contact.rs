use std::fmt;

use super::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,

    /// ISO-8601 calendar date, `YYYY-MM-DD`
    pub birth_date: String,

    pub email: String,
}

impl Contact {
    pub fn new(name: String, birth_date: NaiveDate, email: String) -> Self {
        Contact {
            name,
            birth_date: birth_date.format(DATE_FORMAT).to_string(),
            email,
        }
    }

    /// Parses the stored birth date. Fails only for data edited outside the store.
    pub fn birth_date(&self) -> Result<NaiveDate, AppError> {
        NaiveDate::parse_from_str(&self.birth_date, DATE_FORMAT).map_err(|source| {
            AppError::DateParse {
                name: self.name.clone(),
                value: self.birth_date.clone(),
                source,
            }
        })
    }

    pub fn validate_presence(name: &str, email: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }

        if email.trim().is_empty() {
            return Err(AppError::Validation("Email is required".to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.name, self.birth_date, self.email)
    }
}
