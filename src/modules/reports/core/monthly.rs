// Monthly aggregates: hours logged in a month against the hours a month expects.

use crate::modules::reports::core::entry::{TimeEntry, hours_between};
use crate::shared::core::calendar::{FULL_DAY_HOURS, working_days};
use chrono::NaiveDate;
use std::collections::HashMap;

pub fn total_hours_in_month(
    entries: &[TimeEntry],
    month_start: NaiveDate,
    month_end: NaiveDate,
) -> f64 {
    hours_between(entries, month_start, month_end)
}

pub fn total_hours_for_user_in_month(
    entries: &[TimeEntry],
    user_id: &str,
    month_start: NaiveDate,
    month_end: NaiveDate,
) -> f64 {
    hours_between(
        entries.iter().filter(|entry| entry.user_id == user_id),
        month_start,
        month_end,
    )
}

pub fn working_days_in_month(month_start: NaiveDate, month_end: NaiveDate) -> usize {
    working_days(month_start, month_end).len()
}

pub fn expected_hours_for_month(month_start: NaiveDate, month_end: NaiveDate) -> f64 {
    working_days_in_month(month_start, month_end) as f64 * FULL_DAY_HOURS
}

/// Never negative: logging more than expected leaves nothing remaining.
pub fn remaining_hours(expected: f64, actual: f64) -> f64 {
    (expected - actual).max(0.0)
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MonthlySummary {
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
    pub total_hours: f64,
    pub user_hours: f64,
    pub working_days: usize,
    pub expected_hours: f64,
    pub remaining_hours: f64,
}

impl MonthlySummary {
    pub fn compute(
        entries: &[TimeEntry],
        user_id: &str,
        month_start: NaiveDate,
        month_end: NaiveDate,
    ) -> Self {
        let user_hours = total_hours_for_user_in_month(entries, user_id, month_start, month_end);
        let expected_hours = expected_hours_for_month(month_start, month_end);
        Self {
            month_start,
            month_end,
            total_hours: total_hours_in_month(entries, month_start, month_end),
            user_hours,
            working_days: working_days_in_month(month_start, month_end),
            expected_hours,
            remaining_hours: remaining_hours(expected_hours, user_hours),
        }
    }
}

/// Hours per project, largest first. Ties keep project ids in ascending order.
pub fn hours_by_project(entries: &[TimeEntry]) -> Vec<(String, f64)> {
    let mut by_project: HashMap<&str, f64> = HashMap::new();
    for entry in entries {
        *by_project.entry(entry.project_id.as_str()).or_default() += entry.countable_hours();
    }
    let mut totals: Vec<(String, f64)> = by_project
        .into_iter()
        .map(|(project_id, hours)| (project_id.to_string(), hours))
        .collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    totals
}
