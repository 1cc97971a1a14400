use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::reports::use_cases::missed_entries::inbound::graphql::MissedEntriesQuery;
use crate::modules::reports::use_cases::monthly_summary::inbound::graphql::MonthlySummaryQuery;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::graphql::DeleteTimeEntryMutation;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::graphql::ListTimeEntriesQuery;
use crate::modules::time_entries::use_cases::register_time_entry::inbound::graphql::RegisterTimeEntryMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListTimeEntriesQuery, MissedEntriesQuery, MonthlySummaryQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(RegisterTimeEntryMutation, DeleteTimeEntryMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
