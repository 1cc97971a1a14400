// Admin report use case.
//
// Responsibilities
// - Refuse requesters without the admin role.
// - Gather entries, projects and profiles and hand them to the pure admin report functions.
// - Serve the same searched entries as a page or as a CSV export.

use crate::modules::directory::adapters::outbound::directory::{
    ProfileDirectory, ProjectDirectory, RoleDirectory, has_any_role,
};
use crate::modules::directory::core::model::UserRole;
use crate::modules::reports::adapters::mappers::time_entry_view_to_entry::to_entries;
use crate::modules::reports::core::admin::{
    Page, ProjectBudget, ReportEntry, budget_vs_cost, enrich, paginate, search, total_hours,
    within_report_period,
};
use crate::modules::reports::use_cases::admin_report::export::{CsvExport, export};
use crate::modules::reports::use_cases::errors::ReportError;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::shared::infrastructure::clock::Clock;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AdminReport {
    pub entries: Page<ReportEntry>,
    pub total_hours: f64,
    pub budgets: Vec<ProjectBudget>,
}

pub struct AdminReportHandler {
    queries: Arc<dyn TimeEntryQueries + Send + Sync>,
    projects: Arc<dyn ProjectDirectory>,
    profiles: Arc<dyn ProfileDirectory>,
    roles: Arc<dyn RoleDirectory>,
    clock: Arc<dyn Clock>,
}

impl AdminReportHandler {
    pub fn new(
        queries: Arc<dyn TimeEntryQueries + Send + Sync>,
        projects: Arc<dyn ProjectDirectory>,
        profiles: Arc<dyn ProfileDirectory>,
        roles: Arc<dyn RoleDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            queries,
            projects,
            profiles,
            roles,
            clock,
        }
    }

    pub async fn handle(
        &self,
        requester: &str,
        term: &str,
        page: usize,
    ) -> Result<AdminReport, ReportError> {
        self.authorize(requester).await?;

        let all_entries = to_entries(self.queries.list_all().await?);
        let projects = self.projects.list_projects().await?;
        let profiles = self.profiles.list_profiles().await?;

        let recent = within_report_period(&all_entries, self.clock.today());
        let filtered = search(&enrich(&recent, &projects, &profiles), term);
        tracing::debug!(requester, term, matches = filtered.len(), "admin report computed");

        Ok(AdminReport {
            total_hours: total_hours(&filtered),
            budgets: budget_vs_cost(&filtered, &all_entries, &projects, &profiles),
            entries: paginate(&filtered, page),
        })
    }

    /// Every searched entry of the report period, unpaged, as CSV.
    pub async fn export(&self, requester: &str, term: &str) -> Result<CsvExport, ReportError> {
        self.authorize(requester).await?;

        let entries = to_entries(self.queries.list_all().await?);
        let projects = self.projects.list_projects().await?;
        let profiles = self.profiles.list_profiles().await?;

        let today = self.clock.today();
        let recent = within_report_period(&entries, today);
        let filtered = search(&enrich(&recent, &projects, &profiles), term);
        tracing::info!(requester, rows = filtered.len(), "admin report exported");
        Ok(export(&filtered, today)?)
    }

    async fn authorize(&self, requester: &str) -> Result<(), ReportError> {
        if has_any_role(&*self.roles, requester, &[UserRole::Admin]).await? {
            Ok(())
        } else {
            tracing::warn!(requester, "admin report refused");
            Err(ReportError::Forbidden(requester.to_string()))
        }
    }
}

#[cfg(test)]
mod admin_report_handler_tests {
    use super::*;
    use crate::modules::directory::adapters::outbound::directory_in_memory::InMemoryDirectory;
    use crate::modules::directory::core::model::{Profile, Project};
    use crate::modules::reports::core::entry::TimeEntry;
    use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
    use crate::shared::infrastructure::clock::FixedClock;
    use crate::tests::fixtures::entries::{date, entry_for, seed};
    use rstest::rstest;

    async fn make_handler(entries: &[TimeEntry]) -> AdminReportHandler {
        let projections = InMemoryProjections::new();
        seed(&projections, entries).await;

        let directory = Arc::new(InMemoryDirectory::new());
        directory.grant("u-admin", UserRole::Admin).await.unwrap();
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

        AdminReportHandler::new(
            Arc::new(projections),
            directory.clone(),
            directory.clone(),
            directory,
            Arc::new(FixedClock::new(date("2024-03-15"))),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_non_admin() {
        let handler = make_handler(&[]).await;
        let err = handler.handle("u-ada", "", 1).await.unwrap_err();
        assert!(matches!(err, ReportError::Forbidden(user) if user == "u-ada"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_page_recent_entries_and_cost_all_of_them() {
        let mut entries: Vec<_> = (1..=21)
            .map(|day| entry_for("u-ada", "p-web", &format!("2024-02-{day:02}"), 1.0))
            .collect();
        entries.push(entry_for("u-ada", "p-web", "2023-06-01", 8.0));
        let handler = make_handler(&entries).await;

        let report = handler.handle("u-admin", "", 2).await.unwrap();

        assert_eq!(report.entries.total_items, 21);
        assert_eq!(report.entries.total_pages, 2);
        assert_eq!(report.entries.items.len(), 1);
        assert_eq!(report.entries.items[0].date, date("2024-02-01"));
        assert_eq!(report.total_hours, 21.0);
        assert_eq!(report.budgets[0].cost, 1_450.0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_export_the_searched_entries() {
        let handler = make_handler(&[
            entry_for("u-ada", "p-web", "2024-03-04", 2.0),
            entry_for("u-bob", "p-web", "2024-03-05", 3.0),
        ])
        .await;

        let csv = handler.export("u-admin", "ada").await.unwrap();

        assert_eq!(csv.filename, "report_entries_2024-03-15.csv");
        assert_eq!(csv.content.lines().count(), 2);
        assert!(csv.content.contains("04/03/2024,Website,Ada Lovelace,,2"));
    }
}
