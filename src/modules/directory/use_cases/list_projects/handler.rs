use crate::modules::directory::adapters::outbound::directory::ProjectDirectory;
use crate::modules::directory::core::model::Project;
use crate::modules::directory::use_cases::errors::DirectoryError;
use std::sync::Arc;

pub struct ListProjectsHandler {
    projects: Arc<dyn ProjectDirectory>,
}

impl ListProjectsHandler {
    pub fn new(projects: Arc<dyn ProjectDirectory>) -> Self {
        Self { projects }
    }

    /// All projects by name, ids breaking ties.
    pub async fn handle(&self) -> Result<Vec<Project>, DirectoryError> {
        let mut projects = self.projects.list_projects().await?;
        projects.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(projects)
    }
}
