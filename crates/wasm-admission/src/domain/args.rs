//! # Numeric Argument Coercion
//!
//! Converts a loosely-typed wire value plus its declared type tag into a
//! fixed-width integer function argument. Pure; applied independently and in
//! order to every element of a request's argument sequence.

use crate::domain::wire::WireValue;
use crate::errors::ArgError;
use serde::{Deserialize, Serialize};

/// The closed set of declarable argument types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
}

impl ArgType {
    /// Parses a declared type tag, case-insensitively. Unknown tags are
    /// rejected, never defaulted.
    pub fn parse(tag: &str) -> Result<Self, ArgError> {
        match tag.to_ascii_lowercase().as_str() {
            "int32" => Ok(Self::Int32),
            "int64" => Ok(Self::Int64),
            _ => Err(ArgError::UnknownType(tag.to_string())),
        }
    }
}

impl std::fmt::Display for ArgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int32 => f.write_str("int32"),
            Self::Int64 => f.write_str("int64"),
        }
    }
}

/// One function argument as it appears on the wire: a type tag plus an
/// untyped value. Constructed per request and consumed immediately by
/// [`coerce_argument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedArgument {
    /// Declared type tag, matched case-insensitively against [`ArgType`].
    #[serde(rename = "type")]
    pub ty: String,
    /// The untyped wire value.
    pub value: WireValue,
}

/// A coerced function argument ready for the contract VM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FnArg {
    /// 32-bit signed integer argument.
    I32(i32),
    /// 64-bit signed integer argument.
    I64(i64),
}

/// Coerces one typed wire argument to a fixed-width integer.
///
/// Accepts 32/64-bit integer and float sources, narrowing or widening
/// numerically; floats truncate toward zero, never round. Any other source
/// shape, or an unrecognized type tag, fails naming the offending value and
/// the declared type.
pub fn coerce_argument(argument: &TypedArgument) -> Result<FnArg, ArgError> {
    let target = ArgType::parse(&argument.ty)?;
    let not_convertible = || ArgError::NotConvertible {
        value: argument.value.to_string(),
        target,
    };

    match target {
        ArgType::Int32 => match argument.value {
            WireValue::Int32(v) => Ok(FnArg::I32(v)),
            WireValue::Int64(v) => Ok(FnArg::I32(v as i32)),
            WireValue::Float32(v) => Ok(FnArg::I32(v as i32)),
            WireValue::Float64(v) => Ok(FnArg::I32(v as i32)),
            WireValue::Absent
            | WireValue::Bool(_)
            | WireValue::Text(_)
            | WireValue::Json(_) => Err(not_convertible()),
        },
        ArgType::Int64 => match argument.value {
            WireValue::Int32(v) => Ok(FnArg::I64(i64::from(v))),
            WireValue::Int64(v) => Ok(FnArg::I64(v)),
            WireValue::Float32(v) => Ok(FnArg::I64(v as i64)),
            WireValue::Float64(v) => Ok(FnArg::I64(v as i64)),
            WireValue::Absent
            | WireValue::Bool(_)
            | WireValue::Text(_)
            | WireValue::Json(_) => Err(not_convertible()),
        },
    }
}
