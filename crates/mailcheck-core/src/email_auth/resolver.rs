//! DNS access for email authentication checks

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use mailcheck_common::config::DnsConfig;
use std::time::Duration;
use tracing::{debug, warn};
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::ResolveErrorKind;
use trust_dns_resolver::proto::rr::rdata::TXT;
use trust_dns_resolver::TokioAsyncResolver;

/// Record lookups needed by the domain checker
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Mail exchanger host names for `domain`, in resolver order
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<String>>;

    /// TXT records for `name`, in resolver order
    ///
    /// Each record's character-strings are concatenated without a separator.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>>;
}

/// Resolver backed by trust-dns
pub struct SystemResolver {
    resolver: TokioAsyncResolver,
}

impl SystemResolver {
    /// Create a resolver from configuration
    ///
    /// With `use_system_config` the host's resolver configuration is used,
    /// falling back to the built-in upstream set if it cannot be read.
    pub fn from_config(config: &DnsConfig) -> Self {
        let (resolver_config, mut opts) = if config.use_system_config {
            match trust_dns_resolver::system_conf::read_system_conf() {
                Ok(conf) => conf,
                Err(e) => {
                    warn!("Failed to read system resolver configuration, using defaults: {}", e);
                    (ResolverConfig::default(), ResolverOpts::default())
                }
            }
        } else {
            (ResolverConfig::default(), ResolverOpts::default())
        };

        if let Some(secs) = config.timeout_secs {
            opts.timeout = Duration::from_secs(secs);
        }
        if let Some(attempts) = config.attempts {
            opts.attempts = attempts;
        }

        debug!(
            nameservers = resolver_config.name_servers().len(),
            timeout_ms = opts.timeout.as_millis() as u64,
            attempts = opts.attempts,
            "DNS resolver configured"
        );

        Self {
            resolver: TokioAsyncResolver::tokio(resolver_config, opts),
        }
    }
}

#[async_trait]
impl DnsLookup for SystemResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<String>> {
        let lookup = self
            .resolver
            .mx_lookup(domain)
            .await
            .map_err(|e| lookup_error("MX", domain, e.kind()))?;

        Ok(lookup
            .iter()
            .map(|mx| {
                debug!("Found MX record: {} (priority: {})", mx.exchange(), mx.preference());
                mx.exchange().to_string().trim_end_matches('.').to_string()
            })
            .collect())
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>> {
        let lookup = self
            .resolver
            .txt_lookup(name)
            .await
            .map_err(|e| lookup_error("TXT", name, e.kind()))?;

        Ok(lookup.iter().map(txt_to_string).collect())
    }
}

fn lookup_error(record_type: &str, name: &str, kind: &ResolveErrorKind) -> anyhow::Error {
    match kind {
        ResolveErrorKind::NoRecordsFound { .. } => {
            anyhow!("no {} records found for {}", record_type, name)
        }
        other => anyhow!("{} lookup for {} failed: {}", record_type, name, other),
    }
}

/// Join the character-strings of a TXT record
pub fn txt_to_string(txt: &TXT) -> String {
    txt.txt_data()
        .iter()
        .map(|data| String::from_utf8_lossy(data))
        .collect::<String>()
}
