// Composition root for the activities bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory activity directory.
// - Wire it into use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
