// In memory projects, profiles and roles.
//
// Responsibilities
// - Back the directory ports in tests and in the binary until a real identity store exists.

use crate::modules::directory::adapters::outbound::directory::{
    ProfileDirectory, ProjectDirectory, RoleDirectory,
};
use crate::modules::directory::core::model::{Profile, Project, UserRole};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDirectory {
    projects: RwLock<BTreeMap<String, Project>>,
    profiles: RwLock<BTreeMap<String, Profile>>,
    roles: RwLock<HashMap<String, Vec<UserRole>>>,
    is_offline: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Directory offline");
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectDirectory for InMemoryDirectory {
    async fn list_projects(&self) -> anyhow::Result<Vec<Project>> {
        self.ensure_online()?;
        Ok(self.projects.read().await.values().cloned().collect())
    }

    async fn save_project(&self, project: Project) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.projects
            .write()
            .await
            .insert(project.id.clone(), project);
        Ok(())
    }

    async fn remove_project(&self, project_id: &str) -> anyhow::Result<bool> {
        self.ensure_online()?;
        Ok(self.projects.write().await.remove(project_id).is_some())
    }
}

#[async_trait]
impl ProfileDirectory for InMemoryDirectory {
    async fn list_profiles(&self) -> anyhow::Result<Vec<Profile>> {
        self.ensure_online()?;
        Ok(self.profiles.read().await.values().cloned().collect())
    }

    async fn profile_of(&self, user_id: &str) -> anyhow::Result<Option<Profile>> {
        self.ensure_online()?;
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn save_profile(&self, profile: Profile) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.profiles
            .write()
            .await
            .insert(profile.user_id.clone(), profile);
        Ok(())
    }
}

#[async_trait]
impl RoleDirectory for InMemoryDirectory {
    async fn roles_of(&self, user_id: &str) -> anyhow::Result<Vec<UserRole>> {
        self.ensure_online()?;
        Ok(self
            .roles
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn grant(&self, user_id: &str, role: UserRole) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.roles.write().await;
        let roles = guard.entry(user_id.to_string()).or_default();
        if !roles.contains(&role) {
            roles.push(role);
        }
        Ok(())
    }
}
