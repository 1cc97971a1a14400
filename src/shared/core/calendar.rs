// Calendar primitives shared by the reports.
//
// Purpose
// - Express working days, trailing windows and month bounds on plain calendar dates.
//
// Boundaries
// - Dates are `NaiveDate` values: no time of day, no time zone. Nothing here re-zones a date.
// - No input or output.

use chrono::{Datelike, Months, NaiveDate, Weekday};

/// Hours that make up a full working day.
pub const FULL_DAY_HOURS: f64 = 8.0;

pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Monday to Friday dates in `[start, end]`, ascending. Empty when `start > end`.
pub fn working_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| is_working_day(*day))
        .collect()
}

/// First day of the trailing one-month window ending at `as_of`.
///
/// Same day of month one month earlier, clamped to the last day of a shorter month
/// (2024-03-31 gives 2024-02-29).
pub fn one_month_before(as_of: NaiveDate) -> NaiveDate {
    months_before(as_of, 1)
}

pub fn months_before(as_of: NaiveDate, months: u32) -> NaiveDate {
    as_of
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap_or(date);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (start, end)
}

/// Parse a `YYYY-MM` month into its first day.
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok()
}

/// Short display form, e.g. `Fri, Mar 15`.
pub fn format_short(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Day-first display form used by the admin report, e.g. `15/03/2024`.
pub fn format_day_first(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
