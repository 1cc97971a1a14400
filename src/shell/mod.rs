// Composition root for the time tracking service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory infrastructure.
// - Wire it into the use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
