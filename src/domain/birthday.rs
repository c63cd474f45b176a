use chrono::{Datelike, NaiveDate};

/// The birth date's month and day projected onto `year`.
///
/// A Feb 29 birthday falls on Feb 28 in years without a leap day.
pub fn anniversary_in(birth_date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(birth_date)
}

/// Next anniversary on or after `today`.
pub fn next_birthday(birth_date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(birth_date, today.year());
    if this_year < today {
        anniversary_in(birth_date, today.year() + 1)
    } else {
        this_year
    }
}

/// Whole days from `today` until the next anniversary; 0 on the day itself.
pub fn days_until_birthday(birth_date: NaiveDate, today: NaiveDate) -> i64 {
    (next_birthday(birth_date, today) - today).num_days()
}
