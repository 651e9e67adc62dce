//! The height report and its wire encoding

use frame_types::{ContentHeight, EmbedToken};
use serde::ser::{Serialize, SerializeTuple, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Action tag carried in every height report
///
/// Consumers react to this literal and must ignore or reject anything else.
pub const SET_HEIGHT_ACTION: &str = "setHeight";

/// Errors for wire encoding and decoding
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("Serialization error: {0}")]
    Encode(String),

    #[error("Payload is not a three-element report: {0}")]
    Malformed(String),

    #[error("Unexpected action tag: expected '{expected}', got '{actual}'")]
    UnexpectedAction {
        expected: &'static str,
        actual: String,
    },

    #[error("Height is not a non-negative integer: {0}")]
    InvalidHeight(String),
}

/// A guest's height report to its embedding parent
///
/// Encodes to the ordered triple `[token, "setHeight", height]` as a JSON
/// array. Equal reports encode to identical bytes; there is no sequence
/// number and no deduplication, so re-sending an unchanged report is
/// observable as a second identical message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightReport {
    token: EmbedToken,
    height: ContentHeight,
}

impl HeightReport {
    /// Creates a new height report
    pub fn new(token: EmbedToken, height: ContentHeight) -> Self {
        Self { token, height }
    }

    /// Returns the embed token
    pub fn token(&self) -> &EmbedToken {
        &self.token
    }

    /// Returns the reported height
    pub fn height(&self) -> ContentHeight {
        self.height
    }

    /// Encodes the report as the wire triple
    pub fn encode(&self) -> Result<Vec<u8>, WireError> {
        serde_json::to_vec(self).map_err(|err| WireError::Encode(err.to_string()))
    }

    /// Decodes a wire triple back into a report
    ///
    /// Rejects payloads that are not a three-element array of
    /// `[string, "setHeight", non-negative integer]`.
    pub fn decode(raw: &[u8]) -> Result<Self, WireError> {
        let value: Value = serde_json::from_slice(raw)
            .map_err(|err| WireError::Malformed(err.to_string()))?;

        let elements = match &value {
            Value::Array(elements) if elements.len() == 3 => elements,
            Value::Array(elements) => {
                return Err(WireError::Malformed(format!(
                    "expected 3 elements, got {}",
                    elements.len()
                )))
            }
            other => {
                return Err(WireError::Malformed(format!(
                    "expected an array, got {}",
                    json_kind(other)
                )))
            }
        };

        let token = elements[0]
            .as_str()
            .ok_or_else(|| WireError::Malformed("token is not a string".to_string()))?;

        let action = elements[1]
            .as_str()
            .ok_or_else(|| WireError::Malformed("action is not a string".to_string()))?;
        if action != SET_HEIGHT_ACTION {
            return Err(WireError::UnexpectedAction {
                expected: SET_HEIGHT_ACTION,
                actual: action.to_string(),
            });
        }

        let height = elements[2]
            .as_u64()
            .and_then(|px| u32::try_from(px).ok())
            .ok_or_else(|| WireError::InvalidHeight(elements[2].to_string()))?;

        Ok(Self {
            token: EmbedToken::new(token),
            height: ContentHeight::from_px(height),
        })
    }
}

/// The wire form is the ordered triple, not a struct with named fields.
impl Serialize for HeightReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut triple = serializer.serialize_tuple(3)?;
        triple.serialize_element(self.token.as_str())?;
        triple.serialize_element(SET_HEIGHT_ACTION)?;
        triple.serialize_element(&self.height.px())?;
        triple.end()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_wire_shape() {
        let report = HeightReport::new(EmbedToken::new("foo=bar"), ContentHeight::from_px(842));
        let raw = report.encode().unwrap();
        assert_eq!(raw, br#"["foo=bar","setHeight",842]"#.to_vec());
    }

    #[test]
    fn test_encode_empty_token() {
        let report = HeightReport::new(EmbedToken::new(""), ContentHeight::from_px(300));
        let raw = report.encode().unwrap();
        assert_eq!(raw, br#"["","setHeight",300]"#.to_vec());
    }

    #[test]
    fn test_equal_reports_encode_identically() {
        let first = HeightReport::new(EmbedToken::new("a=1"), ContentHeight::from_px(500));
        let second = HeightReport::new(EmbedToken::new("a=1"), ContentHeight::from_px(500));
        assert_eq!(first.encode().unwrap(), second.encode().unwrap());
    }

    #[test]
    fn test_decode_roundtrip() {
        let report = HeightReport::new(EmbedToken::new("foo=bar"), ContentHeight::from_px(842));
        let raw = report.encode().unwrap();
        let decoded = HeightReport::decode(&raw).unwrap();
        assert_eq!(decoded, report);
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = HeightReport::decode(br#"{"setHeight":842}"#).unwrap_err();
        assert!(matches!(err, WireError::Malformed(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_arity() {
        let err = HeightReport::decode(br#"["foo","setHeight"]"#).unwrap_err();
        assert!(matches!(err, WireError::Malformed(_)));

        let err = HeightReport::decode(br#"["foo","setHeight",842,"extra"]"#).unwrap_err();
        assert!(matches!(err, WireError::Malformed(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_action() {
        let err = HeightReport::decode(br#"["foo","setWidth",842]"#).unwrap_err();
        assert_eq!(
            err,
            WireError::UnexpectedAction {
                expected: SET_HEIGHT_ACTION,
                actual: "setWidth".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_rejects_bad_height() {
        let err = HeightReport::decode(br#"["foo","setHeight",-1]"#).unwrap_err();
        assert!(matches!(err, WireError::InvalidHeight(_)));

        let err = HeightReport::decode(br#"["foo","setHeight",84.2]"#).unwrap_err();
        assert!(matches!(err, WireError::InvalidHeight(_)));

        let err = HeightReport::decode(br#"["foo","setHeight","842"]"#).unwrap_err();
        assert!(matches!(err, WireError::InvalidHeight(_)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = HeightReport::decode(b"not json").unwrap_err();
        assert!(matches!(err, WireError::Malformed(_)));
    }

    #[test]
    fn test_decode_non_string_token() {
        let err = HeightReport::decode(br#"[42,"setHeight",842]"#).unwrap_err();
        assert!(matches!(err, WireError::Malformed(_)));
    }

    #[test]
    fn test_serde_serialization_matches_encode() {
        let report = HeightReport::new(EmbedToken::new("foo=bar"), ContentHeight::from_px(842));
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json.into_bytes(), report.encode().unwrap());
    }
}
