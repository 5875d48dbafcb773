//! SPF (Sender Policy Framework) record discovery
//!
//! Only presence is checked: the first TXT record carrying the SPF version
//! tag is reported verbatim, its mechanisms are not evaluated.

/// Version tag every SPF record starts with
pub const SPF_PREFIX: &str = "v=spf1";

/// First record starting with [`SPF_PREFIX`], in the order given
pub fn find_spf_record(records: &[String]) -> Option<&str> {
    records
        .iter()
        .map(String::as_str)
        .find(|r| r.starts_with(SPF_PREFIX))
}
