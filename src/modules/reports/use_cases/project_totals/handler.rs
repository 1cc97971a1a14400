use crate::modules::directory::adapters::outbound::directory::ProjectDirectory;
use crate::modules::reports::adapters::mappers::time_entry_view_to_entry::to_entries;
use crate::modules::reports::core::admin::UNKNOWN_PROJECT;
use crate::modules::reports::core::monthly::hours_by_project;
use crate::modules::reports::use_cases::errors::ReportError;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectTotal {
    pub project_id: String,
    pub project_name: String,
    pub hours: f64,
}

pub struct ProjectTotalsHandler {
    queries: Arc<dyn TimeEntryQueries + Send + Sync>,
    projects: Arc<dyn ProjectDirectory>,
}

impl ProjectTotalsHandler {
    pub fn new(
        queries: Arc<dyn TimeEntryQueries + Send + Sync>,
        projects: Arc<dyn ProjectDirectory>,
    ) -> Self {
        Self { queries, projects }
    }

    /// Hours `user_id` logged per project, largest first.
    pub async fn handle(&self, user_id: &str) -> Result<Vec<ProjectTotal>, ReportError> {
        let entries = to_entries(self.queries.list_all_by_user_id(user_id).await?);
        let names: HashMap<String, String> = self
            .projects
            .list_projects()
            .await?
            .into_iter()
            .map(|project| (project.id, project.name))
            .collect();

        Ok(hours_by_project(&entries)
            .into_iter()
            .map(|(project_id, hours)| ProjectTotal {
                project_name: names
                    .get(&project_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_PROJECT.to_string()),
                project_id,
                hours,
            })
            .collect())
    }
}
