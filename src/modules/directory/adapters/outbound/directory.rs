use crate::modules::directory::core::model::{Profile, Project, UserRole};
use async_trait::async_trait;

#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    async fn list_projects(&self) -> anyhow::Result<Vec<Project>>;

    /// Insert or replace by project id.
    async fn save_project(&self, project: Project) -> anyhow::Result<()>;

    /// False when no project had that id.
    async fn remove_project(&self, project_id: &str) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    async fn list_profiles(&self) -> anyhow::Result<Vec<Profile>>;

    async fn profile_of(&self, user_id: &str) -> anyhow::Result<Option<Profile>>;

    /// Insert or replace by user id.
    async fn save_profile(&self, profile: Profile) -> anyhow::Result<()>;
}

#[async_trait]
pub trait RoleDirectory: Send + Sync {
    /// Roles granted to a user. Unknown users have none.
    async fn roles_of(&self, user_id: &str) -> anyhow::Result<Vec<UserRole>>;

    /// Granting a role twice keeps one grant.
    async fn grant(&self, user_id: &str, role: UserRole) -> anyhow::Result<()>;
}

/// True when `user_id` holds at least one of `wanted`.
pub async fn has_any_role(
    roles: &dyn RoleDirectory,
    user_id: &str,
    wanted: &[UserRole],
) -> anyhow::Result<bool> {
    let held = roles.roles_of(user_id).await?;
    Ok(held.iter().any(|role| wanted.contains(role)))
}
