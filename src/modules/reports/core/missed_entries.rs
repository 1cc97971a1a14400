// Missed working days in a trailing one-month window.
//
// A working day is missed when the hours logged on it add up to less than a full day.
// Pure: the reference date is a parameter and nothing is read from the clock.

use crate::modules::reports::core::entry::TimeEntry;
use crate::shared::core::calendar::{FULL_DAY_HOURS, format_short, one_month_before, working_days};
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MissedEntry {
    pub date: NaiveDate,
    pub total_hours: f64,
    pub formatted_date: String,
}

/// Working days in `[as_of - 1 month, as_of]` with less than a full day logged,
/// most recent first. Entries outside the window or on weekends are ignored.
pub fn find_missed_entries(entries: &[TimeEntry], as_of: NaiveDate) -> Vec<MissedEntry> {
    let days = working_days(one_month_before(as_of), as_of);

    let mut daily_hours: HashMap<NaiveDate, f64> = days.iter().map(|day| (*day, 0.0)).collect();
    for entry in entries {
        if let Some(total) = daily_hours.get_mut(&entry.date) {
            *total += entry.countable_hours();
        }
    }

    days.into_iter()
        .rev()
        .filter_map(|date| {
            let total_hours = daily_hours.get(&date).copied().unwrap_or_default();
            (total_hours < FULL_DAY_HOURS).then(|| MissedEntry {
                date,
                total_hours,
                formatted_date: format_short(date),
            })
        })
        .collect()
}
