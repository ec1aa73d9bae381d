//! Scalar codec for primitive and enum leaf fields.

use std::fmt;

use serde_json::Value;

use crate::catalog::ScalarType;
use crate::codec::EncodeOptions;
use crate::error::CodecError;

/// A leaf field value. Absent fields hold `Default::default()`.
pub trait Scalar: Sized + Default {
    const TYPE: ScalarType;

    fn encode(&self, options: &EncodeOptions) -> Value;

    fn decode(value: &Value) -> Result<Self, CodecError>;
}

impl Scalar for bool {
    const TYPE: ScalarType = ScalarType::Bool;

    fn encode(&self, _options: &EncodeOptions) -> Value {
        Value::Bool(*self)
    }

    fn decode(value: &Value) -> Result<Self, CodecError> {
        value
            .as_bool()
            .ok_or_else(|| CodecError::mismatch("boolean", value))
    }
}

impl Scalar for String {
    const TYPE: ScalarType = ScalarType::String;

    fn encode(&self, _options: &EncodeOptions) -> Value {
        Value::String(self.clone())
    }

    fn decode(value: &Value) -> Result<Self, CodecError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| CodecError::mismatch("string", value))
    }
}

fn decode_int<T: TryFrom<i64>>(value: &Value, expected: &'static str) -> Result<T, CodecError> {
    value
        .as_i64()
        .and_then(|n| T::try_from(n).ok())
        .ok_or_else(|| CodecError::mismatch(expected, value))
}

impl Scalar for i16 {
    const TYPE: ScalarType = ScalarType::Int16;

    fn encode(&self, _options: &EncodeOptions) -> Value {
        Value::from(*self)
    }

    fn decode(value: &Value) -> Result<Self, CodecError> {
        decode_int(value, "i16")
    }
}

impl Scalar for i32 {
    const TYPE: ScalarType = ScalarType::Int32;

    fn encode(&self, _options: &EncodeOptions) -> Value {
        Value::from(*self)
    }

    fn decode(value: &Value) -> Result<Self, CodecError> {
        decode_int(value, "i32")
    }
}

impl Scalar for u32 {
    const TYPE: ScalarType = ScalarType::UInt32;

    fn encode(&self, _options: &EncodeOptions) -> Value {
        Value::from(*self)
    }

    fn decode(value: &Value) -> Result<Self, CodecError> {
        decode_int(value, "u32")
    }
}

impl Scalar for i64 {
    const TYPE: ScalarType = ScalarType::Int64;

    fn encode(&self, _options: &EncodeOptions) -> Value {
        Value::from(*self)
    }

    fn decode(value: &Value) -> Result<Self, CodecError> {
        decode_int(value, "i64")
    }
}

impl Scalar for u64 {
    const TYPE: ScalarType = ScalarType::UInt64;

    fn encode(&self, _options: &EncodeOptions) -> Value {
        Value::from(*self)
    }

    fn decode(value: &Value) -> Result<Self, CodecError> {
        value
            .as_u64()
            .ok_or_else(|| CodecError::mismatch("u64", value))
    }
}

// ── Enums ─────────────────────────────────────────────────────────────────

/// A closed PostgreSQL enum. Variants are listed in declaration order, so a
/// variant's ordinal is its C enum value.
pub trait PgEnum: Copy + PartialEq + Default + fmt::Debug + 'static {
    /// PostgreSQL type name, e.g. `CmdType`.
    const NAME: &'static str;
    const VARIANTS: &'static [Self];

    /// Token name, e.g. `CMD_SELECT`.
    fn token(self) -> &'static str;

    fn ordinal(self) -> usize {
        Self::VARIANTS
            .iter()
            .position(|v| *v == self)
            .unwrap_or_default()
    }

    fn from_token(token: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.token() == token)
    }

    fn from_ordinal(ordinal: u64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::VARIANTS.get(i).copied())
    }
}

/// Encodes an enum as its token name, or as its ordinal when
/// [`EncodeOptions::numeric_enums`] is set.
pub fn encode_enum<E: PgEnum>(value: E, options: &EncodeOptions) -> Value {
    if options.numeric_enums {
        Value::from(value.ordinal())
    } else {
        Value::from(value.token())
    }
}

/// Decodes an enum from either its token name or its ordinal.
pub fn decode_enum<E: PgEnum>(value: &Value) -> Result<E, CodecError> {
    match value {
        Value::String(token) => E::from_token(token).ok_or_else(|| CodecError::UnknownEnumValue {
            ty: E::NAME,
            token: token.clone(),
        }),
        Value::Number(n) => n
            .as_u64()
            .and_then(E::from_ordinal)
            .ok_or_else(|| CodecError::UnknownEnumValue {
                ty: E::NAME,
                token: n.to_string(),
            }),
        other => Err(CodecError::mismatch("enum token", other)),
    }
}
