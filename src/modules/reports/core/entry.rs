// Time entry as the reports see it.
//
// Purpose
// - Decouple the pure report functions from the read model of the time_entries module.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub hours: f64,
    pub date: NaiveDate,
    pub description: String,
}

impl TimeEntry {
    /// Hours that count towards a sum. Non-finite values count as nothing.
    pub fn countable_hours(&self) -> f64 {
        if self.hours.is_finite() {
            self.hours
        } else {
            0.0
        }
    }
}

/// Sum of countable hours of the entries dated within `[start, end]`.
pub fn hours_between<'a>(
    entries: impl IntoIterator<Item = &'a TimeEntry>,
    start: NaiveDate,
    end: NaiveDate,
) -> f64 {
    entries
        .into_iter()
        .filter(|entry| entry.date >= start && entry.date <= end)
        .map(TimeEntry::countable_hours)
        .sum()
}
