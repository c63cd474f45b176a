pub use crate::cli::{command, run_app};
pub use crate::domain::{
    birthday::{anniversary_in, days_until_birthday, next_birthday},
    contact::{self, Contact},
    manager::{BirthdayReport, ContactStore, UpcomingBirthday},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStorage, JsonStorage, MemStorage};
