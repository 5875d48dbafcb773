//! Common types for MailCheck

use serde::{Deserialize, Serialize};

/// Body of a check request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Domain to check, used exactly as supplied
    #[serde(rename = "domainurl")]
    pub domain_url: String,
}

/// Outcome of one domain email-authentication check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCheckResult {
    pub domain: String,

    #[serde(rename = "hasMX")]
    pub has_mx: bool,

    #[serde(rename = "hasSPF")]
    pub has_spf: bool,

    /// First TXT record starting with `v=spf1`, or empty
    #[serde(rename = "spfRecord")]
    pub spf_record: String,

    #[serde(rename = "hasDMARC")]
    pub has_dmarc: bool,

    /// First `_dmarc` TXT record starting with `v=DMARC1`, or empty
    #[serde(rename = "dmarcRecord")]
    pub dmarc_record: String,
}

impl DomainCheckResult {
    /// Result with every flag unset
    pub fn empty(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_result_wire_names() {
        let result = DomainCheckResult {
            domain: "example.com".to_string(),
            has_mx: true,
            has_spf: true,
            spf_record: "v=spf1 include:_spf.example.com ~all".to_string(),
            has_dmarc: true,
            dmarc_record: "v=DMARC1; p=reject;".to_string(),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"domain":"example.com","hasMX":true,"hasSPF":true,"spfRecord":"v=spf1 include:_spf.example.com ~all","hasDMARC":true,"dmarcRecord":"v=DMARC1; p=reject;"}"#
        );
    }

    #[test]
    fn test_empty_result() {
        let result = DomainCheckResult::empty("doesnotexist.invalid");
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"domain":"doesnotexist.invalid","hasMX":false,"hasSPF":false,"spfRecord":"","hasDMARC":false,"dmarcRecord":""}"#
        );
    }

    #[test]
    fn test_check_request_field_name() {
        let req: CheckRequest =
            serde_json::from_str(r#"{"domainurl":"example.org","extra":1}"#).unwrap();
        assert_eq!(req.domain_url, "example.org");

        assert!(serde_json::from_str::<CheckRequest>(r#"{"domain":"example.org"}"#).is_err());
        assert!(serde_json::from_str::<CheckRequest>(r#"{"domainurl":42}"#).is_err());
    }
}
