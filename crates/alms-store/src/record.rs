//! Donation record schema and canonical codec

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A donation record as persisted in the ledger
///
/// The JSON member names and their order are fixed: `AppraisedValue`,
/// `DonationType`, `ID`, `Donor`, `Size`. Independent implementations of the
/// same ledger logic must produce byte-identical encodings for identical
/// records, so the field declaration order below is load-bearing
/// (serde_json emits struct members in declaration order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Donation {
    /// Assessed monetary value
    #[serde(rename = "AppraisedValue")]
    pub appraised_value: u64,

    /// Free-form classification (e.g. "money", "ssd")
    #[serde(rename = "DonationType")]
    pub donation_type: String,

    /// Unique key in the ledger namespace; immutable after creation
    #[serde(rename = "ID")]
    pub id: String,

    /// Name of the contributor; reassigned by transfer
    #[serde(rename = "Donor")]
    pub donor: String,

    /// Quantity / unit count
    #[serde(rename = "Size")]
    pub size: u64,
}

impl Donation {
    /// Create a record from its five fields
    pub fn new(
        id: impl Into<String>,
        donation_type: impl Into<String>,
        size: u64,
        donor: impl Into<String>,
        appraised_value: u64,
    ) -> Self {
        Self {
            appraised_value,
            donation_type: donation_type.into(),
            id: id.into(),
            donor: donor.into(),
            size,
        }
    }

    /// Encode to the canonical persisted form
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode from the persisted form
    ///
    /// Unknown members are rejected so schema drift surfaces as a codec
    /// error instead of decoding to a truncated record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// The bootstrap set a fresh ledger is seeded with
pub fn sample_donations() -> Vec<Donation> {
    vec![
        Donation::new("donation1", "money", 5, "Tomoko", 300),
        Donation::new("donation2", "ssd", 5, "Brad", 400),
        Donation::new("donation3", "laptop", 10, "Jin Soo", 500),
        Donation::new("donation4", "money", 10, "Max", 600),
        Donation::new("donation5", "monitor", 15, "Adriana", 700),
        Donation::new("donation6", "money", 15, "Michel", 800),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_order_is_canonical() {
        let donation = Donation::new("d1", "money", 0, "Alice", 300);
        let bytes = donation.to_bytes().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"AppraisedValue":300,"DonationType":"money","ID":"d1","Donor":"Alice","Size":0}"#
        );
    }

    #[test]
    fn test_round_trip_is_byte_stable() {
        let bytes =
            br#"{"AppraisedValue":400,"DonationType":"ssd","ID":"d2","Donor":"Brad","Size":5}"#;
        let decoded = Donation::from_bytes(bytes).unwrap();
        assert_eq!(decoded.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_unknown_member_is_rejected() {
        let bytes = br#"{"AppraisedValue":1,"DonationType":"money","ID":"d1","Donor":"A","Size":0,"Color":"blue"}"#;
        assert!(Donation::from_bytes(bytes).is_err());
    }

    #[test]
    fn test_garbage_is_a_codec_error() {
        assert!(Donation::from_bytes(b"not json").is_err());
    }
}
