// Shared test fixture for the RegisterTimeEntry command.
// The canonical values live in json/register_time_entry.json.

use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterTimeEntryDto {
    pub time_entry_id: String,
    pub user_id: String,
    pub project_id: String,
    pub hours: f64,
    pub date: NaiveDate,
    pub description: String,
}

pub struct RegisterTimeEntryBuilder {
    inner: RegisterTimeEntry,
}

impl Default for RegisterTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterTimeEntryBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/register_time_entry.json")
                .unwrap();
        let dto: RegisterTimeEntryDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RegisterTimeEntry {
                time_entry_id: dto.time_entry_id,
                user_id: dto.user_id.clone(),
                project_id: dto.project_id,
                hours: dto.hours,
                date: dto.date,
                description: dto.description,
                created_at: 1_700_000_000_000,
                created_by: dto.user_id,
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn date(mut self, v: &str) -> Self {
        self.inner.date = NaiveDate::parse_from_str(v, "%Y-%m-%d").unwrap();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = v.into();
        self
    }

    pub fn build(self) -> RegisterTimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod register_time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegisterTimeEntryBuilder::default().build();
        assert_eq!(built.time_entry_id, "te-fixed-0001");
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.project_id, "project-fixed-0001");
        assert_eq!(built.hours, 8.0);
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        assert_eq!(built.description, "Development");
        assert_eq!(built.created_by, "user-fixed-0001");
        assert_eq!(built.created_at, 1_700_000_000_000i64);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RegisterTimeEntryBuilder::new()
            .time_entry_id("tid-123")
            .user_id("uid-456")
            .project_id("pid-789")
            .hours(2.5)
            .date("2024-02-29")
            .description("Meeting")
            .created_by("tester")
            .created_at(3333)
            .build();

        assert_eq!(custom.time_entry_id, "tid-123");
        assert_eq!(custom.user_id, "uid-456");
        assert_eq!(custom.project_id, "pid-789");
        assert_eq!(custom.hours, 2.5);
        assert_eq!(custom.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(custom.description, "Meeting");
        assert_eq!(custom.created_by, "tester");
        assert_eq!(custom.created_at, 3333);
    }
}
