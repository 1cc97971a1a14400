pub mod commands {
    pub mod delete_time_entry;
    pub mod register_time_entry;
}

pub mod events {
    pub mod time_entry_deleted_v1;
    pub mod time_entry_registered_v1;
}

pub mod app_state;
pub mod entries;
