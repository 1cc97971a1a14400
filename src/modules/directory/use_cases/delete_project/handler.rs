// Delete project use case.
//
// Responsibilities
// - Only admins and project owners may remove projects.
// - Delete every live time entry booked on the project before the project goes.
// - Return the touched time entry streams so the caller can project them.

use crate::modules::directory::adapters::outbound::directory::{
    ProjectDirectory, RoleDirectory, has_any_role,
};
use crate::modules::directory::use_cases::create_project::handler::PROJECT_MANAGERS;
use crate::modules::directory::use_cases::errors::DirectoryError;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProject {
    pub project_id: String,
    pub requested_by: String,
    pub requested_at: i64,
}

pub struct DeleteProjectHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    projects: Arc<dyn ProjectDirectory>,
    roles: Arc<dyn RoleDirectory>,
    queries: Arc<dyn TimeEntryQueries + Send + Sync>,
    delete_entry: Arc<DeleteTimeEntryHandler<TEventStore, TOutbox>>,
}

impl<TEventStore, TOutbox> DeleteProjectHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        projects: Arc<dyn ProjectDirectory>,
        roles: Arc<dyn RoleDirectory>,
        queries: Arc<dyn TimeEntryQueries + Send + Sync>,
        delete_entry: Arc<DeleteTimeEntryHandler<TEventStore, TOutbox>>,
    ) -> Self {
        Self {
            projects,
            roles,
            queries,
            delete_entry,
        }
    }

    pub async fn handle(&self, command: DeleteProject) -> Result<Vec<String>, DirectoryError> {
        if !has_any_role(&*self.roles, &command.requested_by, &PROJECT_MANAGERS).await? {
            tracing::warn!(
                requester = command.requested_by.as_str(),
                "project deletion refused"
            );
            return Err(DirectoryError::Forbidden(command.requested_by));
        }

        let known = self.projects.list_projects().await?;
        if !known.iter().any(|project| project.id == command.project_id) {
            return Err(DirectoryError::NotFound(command.project_id));
        }

        let booked: Vec<String> = self
            .queries
            .list_all()
            .await?
            .into_iter()
            .filter(|entry| entry.project_id == command.project_id)
            .map(|entry| entry.time_entry_id)
            .collect();

        let mut streams = Vec::with_capacity(booked.len());
        for time_entry_id in booked {
            let stream_id = format!("TimeEntry-{time_entry_id}");
            self.delete_entry
                .handle(
                    &stream_id,
                    DeleteTimeEntry {
                        time_entry_id,
                        deleted_by: command.requested_by.clone(),
                        deleted_at: command.requested_at,
                        cascade: true,
                    },
                )
                .await?;
            streams.push(stream_id);
        }

        if !self.projects.remove_project(&command.project_id).await? {
            return Err(DirectoryError::NotFound(command.project_id));
        }
        tracing::info!(
            project_id = command.project_id.as_str(),
            entries = streams.len(),
            "project deleted"
        );
        Ok(streams)
    }
}
