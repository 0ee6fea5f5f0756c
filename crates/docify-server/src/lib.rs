//! Mock HTTP API for the Docify demo platform.
//!
//! Serves the landing page and the fabricated job-lifecycle JSON API. No
//! real builds happen behind any of these endpoints; jobs live in an
//! in-memory store and advance on a fixed schedule.

pub mod error;
pub mod handlers;
pub mod responses;
pub mod server;
pub mod state;
pub mod templates;

pub use error::ApiError;
pub use server::{router, ApiServer, ServeConfig, ServerError, Tier};
pub use state::{AppState, JobStore};
