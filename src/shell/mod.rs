// Composition root for the products service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory store once and wire it into the use case handlers.
// - Expose the HTTP and GraphQL surfaces with tracing, request ids and CORS.

pub mod config;
pub mod errors;
pub mod graphql;
pub mod http;
pub mod state;
