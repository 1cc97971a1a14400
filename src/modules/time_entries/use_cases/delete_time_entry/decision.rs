use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::intents::TimeEntryIntent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeleteDecideError {
    #[error("time entry not found")]
    NotFound,

    #[error("time entry already deleted")]
    AlreadyDeleted,

    #[error("time entry belongs to another user")]
    NotOwner,
}

pub enum Decision {
    Accepted {
        events: Vec<TimeEntryEvent>,
        intents: Vec<TimeEntryIntent>,
    },
    Rejected {
        reason: DeleteDecideError,
    },
}
