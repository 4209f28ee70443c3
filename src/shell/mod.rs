// Composition root for the feedback board.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Expose the HTTP router, including the status endpoints.

pub mod config;
pub mod http;
pub mod state;
pub mod status;
