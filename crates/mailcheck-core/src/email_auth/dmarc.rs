//! DMARC (Domain-based Message Authentication, Reporting, and Conformance) record discovery

/// Version tag every DMARC record starts with
pub const DMARC_PREFIX: &str = "v=DMARC1";

/// Name holding the DMARC policy of `domain`
///
/// The domain is used as given; no normalization is applied.
pub fn dmarc_name(domain: &str) -> String {
    format!("_dmarc.{}", domain)
}

/// First record starting with [`DMARC_PREFIX`], in the order given
pub fn find_dmarc_record(records: &[String]) -> Option<&str> {
    records
        .iter()
        .map(String::as_str)
        .find(|r| r.starts_with(DMARC_PREFIX))
}
