//! MailCheck Core - domain email-authentication checks
//!
//! This crate provides the MX/SPF/DMARC checker, the DNS lookup
//! abstraction it runs on, and the in-memory check history.

pub mod email_auth;
pub mod history;

pub use email_auth::{DnsLookup, DomainChecker, SystemResolver};
pub use history::{HistoryStore, MemoryHistoryStore};
