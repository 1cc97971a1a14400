// Factories for the TimeEntry values the report functions consume.

use crate::modules::reports::core::entry::TimeEntry;
use crate::modules::time_entries::adapters::outbound::projections::TimeEntryProjectionRepository;
use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryRow;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn entry_for(user_id: &str, project_id: &str, day: &str, hours: f64) -> TimeEntry {
    TimeEntry {
        id: format!("te-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)),
        project_id: project_id.to_string(),
        user_id: user_id.to_string(),
        hours,
        date: date(day),
        description: String::new(),
    }
}

pub fn entry_on(day: &str, hours: f64) -> TimeEntry {
    entry_for("user-fixed-0001", "project-fixed-0001", day, hours)
}

/// Store entries as live read model rows.
pub async fn seed(projections: &InMemoryProjections, entries: &[TimeEntry]) {
    for entry in entries {
        projections
            .upsert(TimeEntryRow {
                time_entry_id: entry.id.clone(),
                user_id: entry.user_id.clone(),
                project_id: entry.project_id.clone(),
                hours: entry.hours,
                date: entry.date,
                description: entry.description.clone(),
                created_at: 1_700_000_000_000,
                created_by: entry.user_id.clone(),
                updated_at: 1_700_000_000_000,
                updated_by: entry.user_id.clone(),
                deleted_at: None,
                last_event_id: None,
            })
            .await
            .unwrap();
    }
}
