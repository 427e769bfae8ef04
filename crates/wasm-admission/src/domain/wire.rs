//! # Wire Values
//!
//! The untyped wire format reaches this subsystem as arbitrary JSON.
//! `WireValue` turns that dynamic value into an explicit sum type so every
//! decision point downstream matches exhaustively: "neither JSON nor string"
//! is an explicit error branch, not a forgotten case.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One untyped value from the wire, tagged by its syntactic shape.
///
/// `Json` is only ever constructed for a top-level array or object; a bare
/// string is always `Text`, a bare number always a numeric variant. The
/// `Int32`/`Float32` variants cannot arise from JSON input (which carries
/// 64-bit numbers) but are part of the closed set so direct in-process
/// callers can pass narrow values without widening.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WireValue {
    /// Field absent or JSON `null`.
    #[default]
    Absent,
    /// JSON boolean.
    Bool(bool),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// 32-bit float.
    Float32(f32),
    /// 64-bit float.
    Float64(f64),
    /// JSON string.
    Text(String),
    /// Structured JSON: a top-level array or object.
    Json(Value),
}

impl WireValue {
    /// True if the value is a top-level JSON array or object.
    pub fn is_structured_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

impl From<Value> for WireValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int64(i)
                } else {
                    // Fractional, or an unsigned integer beyond i64: the
                    // wire's dynamic decoding treats both as 64-bit floats.
                    Self::Float64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Self::Text(s),
            structured @ (Value::Array(_) | Value::Object(_)) => Self::Json(structured),
        }
    }
}

impl std::fmt::Display for WireValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Json(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for WireValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int32(v) => serializer.serialize_i32(*v),
            Self::Int64(v) => serializer.serialize_i64(*v),
            Self::Float32(v) => serializer.serialize_f32(*v),
            Self::Float64(v) => serializer.serialize_f64(*v),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Json(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for WireValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Value::deserialize(deserializer)?.into())
    }
}
