// Create project use case.
//
// Responsibilities
// - Only admins and project owners may add projects.
// - Validate the name, color and budget before saving.

use crate::modules::directory::adapters::outbound::directory::{
    ProjectDirectory, RoleDirectory, has_any_role,
};
use crate::modules::directory::core::model::{
    DEFAULT_PROJECT_COLOR, Project, UserRole, amount, project_name,
};
use crate::modules::directory::use_cases::errors::DirectoryError;
use std::sync::Arc;

/// Roles allowed to add and remove projects.
pub const PROJECT_MANAGERS: [UserRole; 2] = [UserRole::Admin, UserRole::ProjectOwner];

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProject {
    pub project_id: String,
    pub name: String,
    pub color: Option<String>,
    pub budget: Option<f64>,
    pub requested_by: String,
}

pub struct CreateProjectHandler {
    projects: Arc<dyn ProjectDirectory>,
    roles: Arc<dyn RoleDirectory>,
}

impl CreateProjectHandler {
    pub fn new(projects: Arc<dyn ProjectDirectory>, roles: Arc<dyn RoleDirectory>) -> Self {
        Self { projects, roles }
    }

    pub async fn handle(&self, command: CreateProject) -> Result<Project, DirectoryError> {
        if !has_any_role(&*self.roles, &command.requested_by, &PROJECT_MANAGERS).await? {
            tracing::warn!(
                requester = command.requested_by.as_str(),
                "project creation refused"
            );
            return Err(DirectoryError::Forbidden(command.requested_by));
        }

        let project = Project {
            id: command.project_id,
            name: project_name(&command.name)?,
            color: command
                .color
                .map(|color| color.trim().to_string())
                .filter(|color| !color.is_empty())
                .unwrap_or_else(|| DEFAULT_PROJECT_COLOR.to_string()),
            budget: amount("budget", command.budget.unwrap_or(0.0))?,
        };
        self.projects.save_project(project.clone()).await?;
        tracing::info!(
            project_id = project.id.as_str(),
            name = project.name.as_str(),
            "project created"
        );
        Ok(project)
    }
}
