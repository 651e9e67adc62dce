//! # Wire Contract Tests
//!
//! This crate provides "golden" tests for FrameFit's cross-document wire
//! contract to ensure it doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: The wire shape is written as literal bytes
//! - **Testability first**: Contract tests fail when the encoding changes
//! - **Mechanism not policy**: Define what must be stable, not how to use it
//!
//! ## Structure
//!
//! The height report is the system's only wire message; its tests verify:
//! - The three-element array shape
//! - The literal `setHeight` action tag
//! - Token derivation from the location search
//! - Byte-for-byte stability of known scenarios

pub mod height_report;

/// Common test helpers for contract validation
pub mod test_helpers {
    use serde_json::Value;

    /// Parses a wire payload and asserts it is a three-element array
    pub fn parse_triple(raw: &[u8]) -> (Value, Value, Value) {
        let value: Value = serde_json::from_slice(raw).expect("payload is not valid JSON");
        let elements = value.as_array().expect("payload is not an array");
        assert_eq!(
            elements.len(),
            3,
            "wire contract is a three-element array, got {}",
            elements.len()
        );
        (
            elements[0].clone(),
            elements[1].clone(),
            elements[2].clone(),
        )
    }

    /// Verifies a payload carries the expected token, action, and height
    pub fn verify_report_contract(raw: &[u8], token: &str, action: &str, height: u64) {
        let (first, second, third) = parse_triple(raw);
        assert_eq!(first.as_str(), Some(token), "token element changed");
        assert_eq!(second.as_str(), Some(action), "action element changed");
        assert_eq!(third.as_u64(), Some(height), "height element changed");
    }
}
