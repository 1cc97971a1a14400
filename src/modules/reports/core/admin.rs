// Cross-user report for administrators.
//
// Purpose
// - Enrich raw entries with project and user names.
// - Search, paginate and total the enriched entries.
// - Compare each project's budget with the cost of the hours logged against it.
//
// Boundaries
// - Pure. Callers fetch entries, projects and profiles and pass them in.

use crate::modules::directory::core::model::{Profile, Project};
use crate::modules::reports::core::entry::TimeEntry;
use crate::shared::core::calendar::{FULL_DAY_HOURS, format_day_first, months_before};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap, HashSet};

pub const PAGE_SIZE: usize = 20;

/// Calendar months covered by the admin report, counting back from today.
pub const REPORT_MONTHS: u32 = 3;

pub const UNKNOWN_PROJECT: &str = "Unknown project";
pub const UNKNOWN_USER: &str = "Unknown user";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportEntry {
    pub id: String,
    pub date: NaiveDate,
    pub project_id: String,
    pub project_name: String,
    pub user_id: String,
    pub user_name: String,
    pub description: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectBudget {
    pub project_id: String,
    pub project_name: String,
    pub budget: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Entries dated on or after `REPORT_MONTHS` months before `today`.
pub fn within_report_period(entries: &[TimeEntry], today: NaiveDate) -> Vec<TimeEntry> {
    let from = months_before(today, REPORT_MONTHS);
    entries
        .iter()
        .filter(|entry| entry.date >= from)
        .cloned()
        .collect()
}

/// Attach display names, newest entries first.
pub fn enrich(entries: &[TimeEntry], projects: &[Project], profiles: &[Profile]) -> Vec<ReportEntry> {
    let project_names: HashMap<&str, &str> = projects
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();
    let user_names: HashMap<&str, &str> = profiles
        .iter()
        .map(|p| (p.user_id.as_str(), p.display_name.as_str()))
        .collect();

    let mut enriched: Vec<ReportEntry> = entries
        .iter()
        .map(|entry| ReportEntry {
            id: entry.id.clone(),
            date: entry.date,
            project_id: entry.project_id.clone(),
            project_name: project_names
                .get(entry.project_id.as_str())
                .copied()
                .unwrap_or(UNKNOWN_PROJECT)
                .to_string(),
            user_id: entry.user_id.clone(),
            user_name: user_names
                .get(entry.user_id.as_str())
                .copied()
                .unwrap_or(UNKNOWN_USER)
                .to_string(),
            description: entry.description.clone(),
            hours: entry.countable_hours(),
        })
        .collect();
    enriched.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
    enriched
}

/// Case-insensitive match on project name, user name, description or `dd/mm/yyyy` date.
/// A blank term keeps everything.
pub fn search(entries: &[ReportEntry], term: &str) -> Vec<ReportEntry> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|entry| {
            entry.project_name.to_lowercase().contains(&term)
                || entry.user_name.to_lowercase().contains(&term)
                || entry.description.to_lowercase().contains(&term)
                || format_day_first(entry.date).contains(&term)
        })
        .cloned()
        .collect()
}

/// One page of `PAGE_SIZE` items. Pages are 1-based; page 0 reads as page 1 and a page
/// past the end is empty.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Page<T> {
    let page = page.max(1);
    let total_items = items.len();
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    Page {
        items: items.iter().skip(start).take(PAGE_SIZE).cloned().collect(),
        page,
        total_pages: total_items.div_ceil(PAGE_SIZE),
        total_items,
    }
}

pub fn total_hours(entries: &[ReportEntry]) -> f64 {
    entries.iter().map(|entry| entry.hours).sum()
}

/// Budget against cost for the projects present in `filtered`.
///
/// Cost sums `hours / 8 × daily_cost` over every entry in `all_entries` of those projects,
/// so it is not limited to the report period. Projects without a positive budget are left
/// out. Sorted by project name.
pub fn budget_vs_cost(
    filtered: &[ReportEntry],
    all_entries: &[TimeEntry],
    projects: &[Project],
    profiles: &[Profile],
) -> Vec<ProjectBudget> {
    let project_ids: HashSet<&str> = filtered.iter().map(|e| e.project_id.as_str()).collect();
    let daily_costs: HashMap<&str, f64> = profiles
        .iter()
        .map(|p| (p.user_id.as_str(), p.daily_cost))
        .collect();

    let mut costs: BTreeMap<&str, f64> = BTreeMap::new();
    for entry in all_entries
        .iter()
        .filter(|entry| project_ids.contains(entry.project_id.as_str()))
    {
        let daily_cost = daily_costs
            .get(entry.user_id.as_str())
            .copied()
            .unwrap_or_default();
        *costs.entry(entry.project_id.as_str()).or_default() +=
            entry.countable_hours() / FULL_DAY_HOURS * daily_cost;
    }

    let mut budgets: Vec<ProjectBudget> = projects
        .iter()
        .filter(|project| project.budget > 0.0 && project_ids.contains(project.id.as_str()))
        .map(|project| ProjectBudget {
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            budget: project.budget,
            cost: costs
                .get(project.id.as_str())
                .copied()
                .unwrap_or_default()
                .round(),
        })
        .collect();
    budgets.sort_by(|a, b| a.project_name.cmp(&b.project_name));
    budgets
}
