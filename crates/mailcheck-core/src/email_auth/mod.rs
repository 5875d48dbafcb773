//! Email Authentication Module
//!
//! Checks whether a domain publishes MX, SPF and DMARC records.

pub mod dmarc;
pub mod resolver;
pub mod spf;

pub use resolver::{DnsLookup, SystemResolver};

use mailcheck_common::DomainCheckResult;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs the three lookups behind a domain check
#[derive(Clone)]
pub struct DomainChecker {
    resolver: Arc<dyn DnsLookup>,
}

impl DomainChecker {
    /// Create a new checker
    pub fn new(resolver: Arc<dyn DnsLookup>) -> Self {
        Self { resolver }
    }

    /// Check MX, SPF and DMARC for `domain`
    ///
    /// Lookups run one after another. A failed lookup is logged and counts
    /// as "record not present"; this never returns an error.
    pub async fn check(&self, domain: &str) -> DomainCheckResult {
        let mut result = DomainCheckResult::empty(domain);

        match self.resolver.lookup_mx(domain).await {
            Ok(exchanges) => result.has_mx = !exchanges.is_empty(),
            Err(e) => warn!(domain = %domain, "MX lookup failed: {:#}", e),
        }

        match self.resolver.lookup_txt(domain).await {
            Ok(records) => {
                if let Some(record) = spf::find_spf_record(&records) {
                    result.has_spf = true;
                    result.spf_record = record.to_string();
                }
            }
            Err(e) => warn!(domain = %domain, "TXT lookup failed: {:#}", e),
        }

        let dmarc_name = dmarc::dmarc_name(domain);
        match self.resolver.lookup_txt(&dmarc_name).await {
            Ok(records) => {
                if let Some(record) = dmarc::find_dmarc_record(&records) {
                    result.has_dmarc = true;
                    result.dmarc_record = record.to_string();
                }
            }
            Err(e) => warn!(domain = %domain, "DMARC lookup for {} failed: {:#}", dmarc_name, e),
        }

        info!(
            domain = %result.domain,
            has_mx = result.has_mx,
            has_spf = result.has_spf,
            spf_record = %result.spf_record,
            has_dmarc = result.has_dmarc,
            dmarc_record = %result.dmarc_record,
            "Domain check completed"
        );

        result
    }
}
