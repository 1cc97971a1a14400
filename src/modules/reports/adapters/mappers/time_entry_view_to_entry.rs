use crate::modules::reports::core::entry::TimeEntry;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;

impl From<TimeEntryView> for TimeEntry {
    fn from(view: TimeEntryView) -> Self {
        Self {
            id: view.time_entry_id,
            project_id: view.project_id,
            user_id: view.user_id,
            hours: view.hours,
            date: view.date,
            description: view.description,
        }
    }
}

pub fn to_entries(views: Vec<TimeEntryView>) -> Vec<TimeEntry> {
    views.into_iter().map(TimeEntry::from).collect()
}
