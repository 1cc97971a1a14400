use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::handler::Projector;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::register_time_entry::handler::RegisterTimeEntryHandler;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::tests::fixtures::commands::delete_time_entry::DeleteTimeEntryBuilder;
use crate::tests::fixtures::commands::register_time_entry::RegisterTimeEntryBuilder;
use std::sync::Arc;

async fn project_latest(
    store: &InMemoryEventStore<TimeEntryEvent>,
    projector: &Projector<InMemoryProjections, InMemoryProjections>,
    stream_id: &str,
) {
    let loaded = store.load(stream_id).await.unwrap();
    projector
        .apply_one(stream_id, loaded.version, loaded.events.last().unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn lists_time_entries_by_user() {
    let store = Arc::new(InMemoryEventStore::<TimeEntryEvent>::new());
    let outbox = Arc::new(InMemoryDomainOutbox::new());
    let projections = Arc::new(InMemoryProjections::new());
    let projector = Projector::new("time_entry_summary", projections.clone(), projections.clone());
    let register = RegisterTimeEntryHandler::new("time-entries", store.clone(), outbox.clone());
    let delete = DeleteTimeEntryHandler::new("time-entries", store.clone(), outbox.clone());

    let commands: Vec<_> = ["2024-03-11", "2024-03-13", "2024-03-12"]
        .into_iter()
        .enumerate()
        .map(|(iteration, day)| {
            RegisterTimeEntryBuilder::new()
                .time_entry_id(format!("te-{iteration}"))
                .date(day)
                .build()
        })
        .collect();

    for command in commands.iter().cloned() {
        let stream_id = format!("TimeEntry-{}", command.time_entry_id);
        register.handle(&stream_id, command).await.unwrap();
        project_latest(&store, &projector, &stream_id).await;
    }

    let list = projections
        .list_by_user_id("user-fixed-0001", 0, 10, true)
        .await
        .unwrap();

    assert_eq!(list.len(), 3);
    assert!(list[0].date >= list[1].date);
    assert_eq!(list[0].time_entry_id, commands[1].time_entry_id);

    delete
        .handle(
            "TimeEntry-te-1",
            DeleteTimeEntryBuilder::new().time_entry_id("te-1").build(),
        )
        .await
        .unwrap();
    project_latest(&store, &projector, "TimeEntry-te-1").await;

    let list = projections
        .list_all_by_user_id("user-fixed-0001")
        .await
        .unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|view| view.time_entry_id != "te-1"));
    assert_eq!(
        outbox.event_types().await,
        vec![
            "TimeEntryRegistered",
            "TimeEntryRegistered",
            "TimeEntryRegistered",
            "TimeEntryDeleted"
        ]
    );
}
