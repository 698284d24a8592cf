//! Composite datapoint codec contract.
//!
//! A datapoint type (DPT) declares a fixed payload length and converts
//! between a structured value and its byte payload. Concrete types implement
//! the [`Dpt`] trait once each; dispatch is static.

use crate::telegram::TelegramPayload;

/// Conversion failure raised by `encode`/`decode`.
///
/// Carries the DPT name and, where one exists, the offending value. Never
/// raised for routing mismatches: those are reported by the bridge through
/// its boolean return.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Payload length does not match the type's declared fixed length.
    #[error("{dpt}: payload is {actual} bytes, expected {expected}")]
    PayloadLength {
        dpt: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Payload is of the wrong static kind (e.g. single-bit where a byte
    /// array is declared).
    #[error("{dpt}: wrong payload kind")]
    PayloadKind { dpt: &'static str },
    /// A present field falls outside its declared domain.
    #[error("{dpt}: value out of range: {value}")]
    OutOfRange { dpt: &'static str, value: String },
    /// An atomic multi-part field was only partially supplied.
    #[error("{dpt}: incomplete value: {value}")]
    IncompleteValue { dpt: &'static str, value: String },
}

/// A composite datapoint type: a fixed-length byte-array payload packing
/// several independently optional fields plus a trailing validity bitmask.
pub trait Dpt {
    /// Structured in-memory representation of one value.
    type Value;

    /// Type name used in conversion errors.
    const NAME: &'static str;

    /// Declared payload length in bytes.
    const PAYLOAD_LENGTH: usize;

    /// Serialize a structured value to its byte payload.
    ///
    /// Every present field is validated against its domain before packing;
    /// out-of-domain values fail, they are never clamped or dropped. Absent
    /// fields emit zero bytes with their validity bit cleared.
    fn encode(value: &Self::Value) -> Result<Vec<u8>, ConversionError>;

    /// Deserialize a byte payload.
    ///
    /// The length is checked against [`PAYLOAD_LENGTH`] first. Field presence
    /// is decided by the validity bitmask alone: bytes of a field marked
    /// invalid are ignored, never parsed or range-checked.
    ///
    /// [`PAYLOAD_LENGTH`]: Dpt::PAYLOAD_LENGTH
    fn decode(raw: &[u8]) -> Result<Self::Value, ConversionError>;

    /// Check an incoming payload's static kind, returning the raw bytes for
    /// [`decode`](Dpt::decode).
    fn validate_payload(payload: &TelegramPayload) -> Result<&[u8], ConversionError> {
        match payload {
            TelegramPayload::Array(raw) => Ok(raw),
            TelegramPayload::Binary(_) => Err(ConversionError::PayloadKind { dpt: Self::NAME }),
        }
    }

    /// Decode straight from a telegram payload (kind check, then decode).
    fn from_payload(payload: &TelegramPayload) -> Result<Self::Value, ConversionError> {
        Self::decode(Self::validate_payload(payload)?)
    }

    /// Wrap an encoded payload for transmission.
    fn to_payload(raw: Vec<u8>) -> TelegramPayload {
        TelegramPayload::Array(raw)
    }
}
