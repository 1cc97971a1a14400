use crate::modules::directory::adapters::outbound::directory::RoleDirectory;
use crate::modules::directory::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::directory::core::model::UserRole;
use crate::modules::directory::use_cases::create_project::handler::CreateProjectHandler;
use crate::modules::directory::use_cases::delete_project::handler::DeleteProjectHandler;
use crate::modules::directory::use_cases::grant_role::handler::GrantRoleHandler;
use crate::modules::directory::use_cases::list_projects::handler::ListProjectsHandler;
use crate::modules::directory::use_cases::update_profile::handler::UpdateProfileHandler;
use crate::modules::reports::use_cases::admin_report::handler::AdminReportHandler;
use crate::modules::reports::use_cases::missed_entries::handler::MissedEntriesHandler;
use crate::modules::reports::use_cases::monthly_summary::handler::MonthlySummaryHandler;
use crate::modules::reports::use_cases::project_totals::handler::ProjectTotalsHandler;
use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::handler::Projector;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::register_time_entry::handler::RegisterTimeEntryHandler;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::config::AppConfig;
use std::sync::Arc;

pub type TimeEntryEventStore = InMemoryEventStore<TimeEntryEvent>;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn TimeEntryQueries + Send + Sync>,
    pub register_handler: Arc<RegisterTimeEntryHandler<TimeEntryEventStore, InMemoryDomainOutbox>>,
    pub delete_handler: Arc<DeleteTimeEntryHandler<TimeEntryEventStore, InMemoryDomainOutbox>>,
    pub event_store: Arc<TimeEntryEventStore>,
    pub projector: Arc<Projector<InMemoryProjections, InMemoryProjections>>,
    pub missed_entries_handler: Arc<MissedEntriesHandler>,
    pub monthly_summary_handler: Arc<MonthlySummaryHandler>,
    pub project_totals_handler: Arc<ProjectTotalsHandler>,
    pub admin_report_handler: Arc<AdminReportHandler>,
    pub create_project_handler: Arc<CreateProjectHandler>,
    pub delete_project_handler:
        Arc<DeleteProjectHandler<TimeEntryEventStore, InMemoryDomainOutbox>>,
    pub list_projects_handler: Arc<ListProjectsHandler>,
    pub update_profile_handler: Arc<UpdateProfileHandler>,
    pub grant_role_handler: Arc<GrantRoleHandler>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        event_store: Arc<TimeEntryEventStore>,
        outbox: Arc<InMemoryDomainOutbox>,
        projections: Arc<InMemoryProjections>,
        directory: Arc<InMemoryDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let queries: Arc<dyn TimeEntryQueries + Send + Sync> = projections.clone();
        let delete_handler = Arc::new(DeleteTimeEntryHandler::new(
            config.topic.clone(),
            event_store.clone(),
            outbox.clone(),
        ));
        Self {
            register_handler: Arc::new(RegisterTimeEntryHandler::new(
                config.topic.clone(),
                event_store.clone(),
                outbox,
            )),
            delete_project_handler: Arc::new(DeleteProjectHandler::new(
                directory.clone(),
                directory.clone(),
                queries.clone(),
                delete_handler.clone(),
            )),
            delete_handler,
            projector: Arc::new(Projector::new(
                config.projector_name.clone(),
                projections.clone(),
                projections,
            )),
            missed_entries_handler: Arc::new(MissedEntriesHandler::new(
                queries.clone(),
                clock.clone(),
            )),
            monthly_summary_handler: Arc::new(MonthlySummaryHandler::new(
                queries.clone(),
                clock.clone(),
            )),
            project_totals_handler: Arc::new(ProjectTotalsHandler::new(
                queries.clone(),
                directory.clone(),
            )),
            admin_report_handler: Arc::new(AdminReportHandler::new(
                queries.clone(),
                directory.clone(),
                directory.clone(),
                directory.clone(),
                clock.clone(),
            )),
            create_project_handler: Arc::new(CreateProjectHandler::new(
                directory.clone(),
                directory.clone(),
            )),
            list_projects_handler: Arc::new(ListProjectsHandler::new(directory.clone())),
            update_profile_handler: Arc::new(UpdateProfileHandler::new(
                directory.clone(),
                directory.clone(),
            )),
            grant_role_handler: Arc::new(GrantRoleHandler::new(directory)),
            queries,
            event_store,
            clock,
        }
    }

    /// Inline projection of the latest event of a stream, so queries see a write at once.
    pub async fn project_latest(&self, stream_id: &str) -> anyhow::Result<()> {
        let loaded = self.event_store.load(stream_id).await?;
        if let Some(last) = loaded.events.last() {
            self.projector
                .apply_one(stream_id, loaded.version, last)
                .await?;
        }
        Ok(())
    }
}

/// Grants the configured admin, so a fresh deployment has someone who can manage the rest.
pub async fn seed_admin(config: &AppConfig, roles: &dyn RoleDirectory) -> anyhow::Result<()> {
    if let Some(admin_id) = &config.admin_id {
        roles.grant(admin_id, UserRole::Admin).await?;
        tracing::info!(admin_id = admin_id.as_str(), "admin seeded from config");
    }
    Ok(())
}
