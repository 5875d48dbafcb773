//! MailCheck API - HTTP interface
//!
//! This crate provides the router, handlers and shared state for the
//! domain check endpoint.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
