pub mod shared {
    pub mod core {
        pub mod calendar;
    }
    pub mod infrastructure {
        pub mod clock;
        pub mod event_store;
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod stream;
            pub mod register_time_entry {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_time_entries_by_user {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod intent_outbox;
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }

    pub mod reports {
        pub mod core {
            pub mod admin;
            pub mod entry;
            pub mod missed_entries;
            pub mod monthly;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod missed_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod monthly_summary {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod project_totals {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod admin_report {
                pub mod export;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod mappers {
                pub mod time_entry_view_to_entry;
            }
        }
    }

    pub mod directory {
        pub mod core {
            pub mod model;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod create_project {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_project {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_projects {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_profile {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod grant_role {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod directory;
                pub mod directory_in_memory;
            }
        }
    }
}

pub mod shell;
