pub mod birthday;
pub mod contact;
pub mod manager;

use crate::errors::AppError;
use contact::Contact;
