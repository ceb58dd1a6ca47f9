use chrono::{Datelike, Months, NaiveDate};

/// A label pinned to a calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub label: String,
    pub date: NaiveDate,
}

/// Append-only collection of calendar entries, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct CalendarBook {
    entries: Vec<CalendarEntry>,
}

impl CalendarBook {
    pub fn add(&mut self, label: impl Into<String>, date: NaiveDate) {
        self.entries.push(CalendarEntry {
            label: label.into(),
            date,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarEntry> {
        self.entries.iter()
    }

    /// Entries on the given day, in insertion order
    pub fn on(&self, date: NaiveDate) -> impl Iterator<Item = &CalendarEntry> {
        self.entries.iter().filter(move |e| e.date == date)
    }

    /// Whether the day cell for `date` should carry a marker
    pub fn has_entries_on(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|e| e.date == date)
    }
}

/// Shift a date by whole months, clamping the day to the target month's length
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    let next = shift_months(first, 1);
    next.signed_duration_since(first).num_days() as u32
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
