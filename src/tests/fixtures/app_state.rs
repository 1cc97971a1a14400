// AppState wired with in-memory adapters for inbound adapter tests.

use crate::modules::directory::adapters::outbound::directory::{
    ProfileDirectory, ProjectDirectory, RoleDirectory,
};
use crate::modules::directory::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::directory::core::model::{Profile, Project, UserRole};
use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::shared::infrastructure::clock::FixedClock;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;
use crate::tests::fixtures::entries::date;
use std::sync::Arc;

pub const TODAY: &str = "2024-03-15";
pub const ADMIN_ID: &str = "u-admin";

pub struct AppStateBuilder {
    event_store: InMemoryEventStore<TimeEntryEvent>,
    projections: InMemoryProjections,
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AppStateBuilder {
    pub fn new() -> Self {
        Self {
            event_store: InMemoryEventStore::new(),
            projections: InMemoryProjections::new(),
        }
    }

    pub fn offline_event_store(mut self) -> Self {
        self.event_store.toggle_offline();
        self
    }

    pub fn offline_projections(mut self) -> Self {
        self.projections.toggle_offline();
        self
    }

    /// State plus the projections behind it, for seeding the read model.
    pub async fn build_with_projections(self) -> (AppState, Arc<InMemoryProjections>) {
        let projections = Arc::new(self.projections);
        let directory = Arc::new(InMemoryDirectory::new());
        directory.grant(ADMIN_ID, UserRole::Admin).await.unwrap();
        directory.grant("u-ada", UserRole::User).await.unwrap();
        directory
            .save_project(Project {
                id: "p-web".into(),
                name: "Website".into(),
                color: "#3b82f6".into(),
                budget: 10_000.0,
            })
            .await
            .unwrap();
        directory
            .save_profile(Profile {
                user_id: "u-ada".into(),
                display_name: "Ada Lovelace".into(),
                daily_cost: 400.0,
            })
            .await
            .unwrap();

        let config = AppConfig::from_lookup(|_| None).unwrap();
        let state = AppState::new(
            &config,
            Arc::new(self.event_store),
            Arc::new(InMemoryDomainOutbox::new()),
            projections.clone(),
            directory,
            Arc::new(FixedClock::new(date(TODAY))),
        );
        (state, projections)
    }

    pub async fn build(self) -> AppState {
        self.build_with_projections().await.0
    }
}
