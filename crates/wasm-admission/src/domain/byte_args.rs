//! # Byte-Argument Resolution
//!
//! The `byteArgs` wire field is ambiguous by design: it may be absent,
//! structured JSON, or a CB58 string. Resolution follows a fixed priority -
//! the structured-JSON check runs first, the string/codec check second - so
//! a value that is syntactically a JSON array is treated as JSON even when
//! it would also decode as base58.

use crate::domain::wire::WireValue;
use crate::errors::ByteArgsError;
use shared_codec::cb58_decode;

/// Resolves one byte-argument source to its canonical byte payload.
///
/// - Absent → empty byte sequence (not an error).
/// - Top-level JSON array/object → its canonical JSON byte encoding.
/// - String → CB58-decoded bytes; decode failures propagate.
/// - Anything else → ambiguous, never a default.
pub fn resolve_byte_args(value: &WireValue) -> Result<Vec<u8>, ByteArgsError> {
    match value {
        WireValue::Absent => Ok(Vec::new()),
        // WireValue::Json only ever holds a top-level array or object
        WireValue::Json(structured) => {
            serde_json::to_vec(structured).map_err(|err| ByteArgsError::Encode(err.to_string()))
        }
        WireValue::Text(text) => Ok(cb58_decode(text)?),
        WireValue::Bool(_)
        | WireValue::Int32(_)
        | WireValue::Int64(_)
        | WireValue::Float32(_)
        | WireValue::Float64(_) => Err(ByteArgsError::Ambiguous),
    }
}
