//! MailCheck Common - Shared types and utilities
//!
//! This crate provides the configuration, error type and wire types
//! shared across all MailCheck components.

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{CheckRequest, DomainCheckResult};
