pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::manager::UpcomingBirthday;

pub fn display_upcoming(upcoming: &UpcomingBirthday) -> String {
    let unit = if upcoming.days_remaining == 1 { "day" } else { "days" };
    format!(
        "🎂 {}: {} {} left ({})",
        upcoming.contact.name, upcoming.days_remaining, unit, upcoming.contact.birth_date
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::Contact;
    use chrono::NaiveDate;

    fn upcoming(days_remaining: i64) -> UpcomingBirthday {
        let born = NaiveDate::from_ymd_opt(1990, 3, 5).unwrap();
        UpcomingBirthday {
            contact: Contact::new("Uche".to_string(), born, "u@x.com".to_string()),
            next_birthday: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            days_remaining,
        }
    }

    #[test]
    fn formats_upcoming_line() {
        assert_eq!(
            display_upcoming(&upcoming(4)),
            "🎂 Uche: 4 days left (1990-03-05)"
        );
        assert_eq!(
            display_upcoming(&upcoming(1)),
            "🎂 Uche: 1 day left (1990-03-05)"
        );
    }
}
