//! Boundary Codec
//!
//! Everything crossing the engine boundary is raw bytes. This module turns
//! editable text into that form and parses the engine's result payload back
//! into [`ValidationOutcome`].

use thiserror::Error;

use crate::report::records::{ValidationOutcome, Violation};

/// Input accepted at the engine boundary: either editable text, or bytes
/// that already went through encoding once.
#[derive(Debug, Clone, PartialEq)]
pub enum EnginePayload {
    Text(String),
    Raw(Vec<u8>),
}

impl EnginePayload {
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            EnginePayload::Text(text) => text.into_bytes(),
            EnginePayload::Raw(bytes) => bytes,
        }
    }
}

impl From<String> for EnginePayload {
    fn from(text: String) -> Self {
        EnginePayload::Text(text)
    }
}

impl From<&str> for EnginePayload {
    fn from(text: &str) -> Self {
        EnginePayload::Text(text.to_string())
    }
}

impl From<Vec<u8>> for EnginePayload {
    fn from(bytes: Vec<u8>) -> Self {
        EnginePayload::Raw(bytes)
    }
}

/// Encode one input for the engine boundary. Text becomes UTF-8 bytes, raw
/// bytes pass through unchanged.
pub fn encode(input: impl Into<EnginePayload>) -> Vec<u8> {
    input.into().into_bytes()
}

/// Encode a batch of inputs with the same rule, e.g. the two constraint
/// sets of a loading call.
pub fn encode_all<I>(inputs: I) -> Vec<Vec<u8>>
where
    I: IntoIterator,
    I::Item: Into<EnginePayload>,
{
    inputs.into_iter().map(encode).collect()
}

/// The engine's success payload could not be decoded as validation records.
///
/// This is a contract violation between console and engine, not a user
/// input problem.
#[derive(Debug, Error)]
#[error("malformed validation result: {0}")]
pub struct MalformedResult(#[from] serde_json::Error);

/// Decode an engine result payload.
///
/// `null`, an empty payload, and an empty record sequence all mean the
/// document is valid; a non-empty sequence of violation records means it is
/// not. Anything else fails with [`MalformedResult`].
pub fn decode_outcome(raw: &[u8]) -> Result<ValidationOutcome, MalformedResult> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(ValidationOutcome::Valid);
    }

    let violations: Option<Vec<Violation>> = serde_json::from_slice(raw)?;

    Ok(match violations {
        None => ValidationOutcome::Valid,
        Some(violations) if violations.is_empty() => ValidationOutcome::Valid,
        Some(violations) => ValidationOutcome::Invalid(violations),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::records::EntityRef;

    #[test]
    fn text_encodes_to_utf8() {
        assert_eq!(encode("{\"uuid\":\"x\"}"), b"{\"uuid\":\"x\"}".to_vec());
    }

    #[test]
    fn raw_bytes_pass_through_unchanged() {
        let bytes = vec![0u8, 159, 146, 150];
        assert_eq!(encode(bytes.clone()), bytes);
    }

    #[test]
    fn encode_all_handles_mixed_inputs() {
        let encoded = encode_all([
            EnginePayload::Text("core".to_string()),
            EnginePayload::Raw(b"tt".to_vec()),
        ]);
        assert_eq!(encoded, vec![b"core".to_vec(), b"tt".to_vec()]);
    }

    #[test]
    fn null_payload_is_valid() {
        assert_eq!(decode_outcome(b"null").unwrap(), ValidationOutcome::Valid);
    }

    #[test]
    fn empty_payload_is_valid() {
        assert_eq!(decode_outcome(b"").unwrap(), ValidationOutcome::Valid);
        assert_eq!(decode_outcome(b"  \n").unwrap(), ValidationOutcome::Valid);
    }

    #[test]
    fn empty_sequence_is_valid() {
        assert_eq!(decode_outcome(b"[]").unwrap(), ValidationOutcome::Valid);
    }

    #[test]
    fn violations_decode_in_engine_order() {
        let payload = r#"[
            {"error":"missing required attribute",
             "entity":[{"refType":"data attribute","name":"title"},
                       {"refType":"block","kind":"section","index":0}]}
        ]"#;

        let outcome = decode_outcome(payload.as_bytes()).unwrap();
        let ValidationOutcome::Invalid(violations) = outcome else {
            panic!("expected violations");
        };

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].error, "missing required attribute");
        assert_eq!(
            violations[0].entity[0],
            EntityRef::Data {
                name: "title".to_string()
            }
        );
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let err = decode_outcome(b"{not json").unwrap_err();
        assert!(err.to_string().starts_with("malformed validation result"));

        // Well-formed JSON of the wrong shape is rejected too.
        assert!(decode_outcome(b"42").is_err());
        assert!(decode_outcome(b"{\"error\":\"x\"}").is_err());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        assert!(decode_outcome(&[0xff, 0xfe, 0x01]).is_err());
    }
}
