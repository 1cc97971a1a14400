use crate::modules::time_entries::core::{
    events::{TimeEntryEvent, v1::time_entry_registered::TimeEntryRegisteredV1},
    intents::TimeEntryIntent,
    state::TimeEntryState,
};
use crate::modules::time_entries::use_cases::register_time_entry::{
    command::RegisterTimeEntry,
    decision::{DecideError, Decision},
};

pub fn decide_register(state: &TimeEntryState, command: RegisterTimeEntry) -> Decision {
    match state {
        TimeEntryState::None => {
            if !command.hours.is_finite() || command.hours <= 0.0 {
                return Decision::Rejected {
                    reason: DecideError::InvalidHours,
                };
            }
            if command.project_id.trim().is_empty() {
                return Decision::Rejected {
                    reason: DecideError::MissingProject,
                };
            }
            let payload = TimeEntryRegisteredV1 {
                time_entry_id: command.time_entry_id,
                user_id: command.user_id,
                project_id: command.project_id,
                hours: command.hours,
                date: command.date,
                description: command.description,
                created_at: command.created_at,
                created_by: command.created_by,
            };
            Decision::Accepted {
                events: vec![TimeEntryEvent::TimeEntryRegisteredV1(payload.clone())],
                intents: vec![TimeEntryIntent::PublishTimeEntryRegistered { payload }],
            }
        }
        _ => Decision::Rejected {
            reason: DecideError::AlreadyExists,
        },
    }
}
