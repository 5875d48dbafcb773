#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::Router;
use mailcheck_api::{create_router, AppState};
use mailcheck_common::Config;
use mailcheck_core::{DnsLookup, HistoryStore};
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Scripted resolver
// ============================================================================

/// Resolver answering from fixed tables; unknown names fail like NXDOMAIN
#[derive(Default, Clone)]
pub struct ScriptedResolver {
    mx: HashMap<String, Vec<String>>,
    txt: HashMap<String, Vec<String>>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mx(mut self, name: &str, hosts: &[&str]) -> Self {
        self.mx
            .insert(name.to_string(), hosts.iter().map(|h| h.to_string()).collect());
        self
    }

    pub fn with_txt(mut self, name: &str, records: &[&str]) -> Self {
        self.txt
            .insert(name.to_string(), records.iter().map(|r| r.to_string()).collect());
        self
    }

    /// `example.com` with MX, SPF and DMARC published
    pub fn example_com() -> Self {
        Self::new()
            .with_mx("example.com", &["mx1.example.com"])
            .with_txt(
                "example.com",
                &[
                    "google-site-verification=abc",
                    "v=spf1 include:_spf.example.com ~all",
                ],
            )
            .with_txt("_dmarc.example.com", &["v=DMARC1; p=reject;"])
    }
}

#[async_trait]
impl DnsLookup for ScriptedResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<String>> {
        self.mx
            .get(domain)
            .cloned()
            .ok_or_else(|| anyhow!("no MX records found for {}", domain))
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>> {
        self.txt
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow!("no TXT records found for {}", name))
    }
}

// ============================================================================
// App builder
// ============================================================================

/// Router plus a handle on its history for assertions
pub struct TestApp {
    pub router: Router,
    pub history: Arc<dyn HistoryStore>,
}

pub fn test_app(resolver: ScriptedResolver) -> TestApp {
    test_app_with_config(resolver, &Config::default())
}

pub fn test_app_with_config(resolver: ScriptedResolver, config: &Config) -> TestApp {
    let state = AppState::new(Arc::new(resolver));
    let history = state.history.clone();
    let router = create_router(state, config).unwrap();
    TestApp { router, history }
}
