// Root event enumeration for a time entry stream.
//
// Versioning
// - Prefer additive changes. For a breaking change add a new version and a new variant.

pub mod v1 {
    pub mod time_entry_deleted;
    pub mod time_entry_registered;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum TimeEntryEvent {
    TimeEntryRegisteredV1(v1::time_entry_registered::TimeEntryRegisteredV1),
    TimeEntryDeletedV1(v1::time_entry_deleted::TimeEntryDeletedV1),
}

impl TimeEntryEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            TimeEntryEvent::TimeEntryRegisteredV1(_) => "TimeEntryRegistered",
            TimeEntryEvent::TimeEntryDeletedV1(_) => "TimeEntryDeleted",
        }
    }
}
