// In memory projection repository, watermark repository and query side.
//
// Responsibilities
// - Store read model rows keyed by (user_id, time_entry_id).
// - Track the last processed event per projector.
// - Serve queries, hiding soft-deleted rows.

use crate::modules::time_entries::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::{
    TimeEntryRow, TimeEntryView,
};
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<(String, String), TimeEntryRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self, what: &str) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("{what} repository offline");
        }
        Ok(())
    }

    async fn live_rows<F>(&self, keep: F) -> anyhow::Result<Vec<TimeEntryRow>>
    where
        F: Fn(&TimeEntryRow) -> bool,
    {
        self.ensure_online("Projections")?;
        let guard = self.rows.read().await;
        let mut items: Vec<TimeEntryRow> = guard
            .values()
            .filter(|row| row.deleted_at.is_none() && keep(row))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then(a.created_at.cmp(&b.created_at))
                .then_with(|| a.time_entry_id.cmp(&b.time_entry_id))
        });
        Ok(items)
    }
}

#[async_trait::async_trait]
impl TimeEntryProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: TimeEntryRow) -> anyhow::Result<()> {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        guard.insert((row.user_id.clone(), row.time_entry_id.clone()), row);
        Ok(())
    }

    async fn mark_deleted(
        &self,
        user_id: &str,
        time_entry_id: &str,
        deleted_at: i64,
        deleted_by: &str,
        last_event_id: &str,
    ) -> anyhow::Result<()> {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        if let Some(row) = guard.get_mut(&(user_id.to_string(), time_entry_id.to_string())) {
            row.deleted_at = Some(deleted_at);
            row.updated_at = deleted_at;
            row.updated_by = deleted_by.to_string();
            row.last_event_id = Some(last_event_id.to_string());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online("Watermark")?;
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.ensure_online("Watermark")?;
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimeEntryQueries for InMemoryProjections {
    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_date_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntryView>> {
        let mut items = self.live_rows(|row| row.user_id == user_id).await?;
        if sort_by_date_desc {
            items.reverse();
        }
        Ok(items
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(TimeEntryView::from)
            .collect())
    }

    async fn list_all_by_user_id(&self, user_id: &str) -> anyhow::Result<Vec<TimeEntryView>> {
        let items = self.live_rows(|row| row.user_id == user_id).await?;
        Ok(items.into_iter().map(TimeEntryView::from).collect())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<TimeEntryView>> {
        let items = self.live_rows(|_| true).await?;
        Ok(items.into_iter().map(TimeEntryView::from).collect())
    }
}
