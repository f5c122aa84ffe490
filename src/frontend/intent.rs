//! Validated type intent and typed literal values.
//!
//! A [`TypeIntent`] is the synthesis-ready description of one wrapper type: name, resolved
//! primitive kind, shape, hook flags, and predefined instances with their literals already
//! parsed into [`TypedValue`]s. Intents are created once per valid declaration per batch,
//! are immutable, and carry no cross-batch identity.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};
use minted_core::taxonomy::PrimitiveKind;
use uuid::Uuid;

use crate::frontend::facts::{ContainerKind, ValueCategory};

/// A literal parsed into the value space of its primitive kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Text(String),
    Bool(bool),
    Identifier(Uuid),
    Date(NaiveDate),
    TimeOfDay(NaiveTime),
    DateTime(DateTime<Utc>),
    DateTimeWithOffset(DateTime<FixedOffset>),
    Duration(TimeDelta),
}

/// Why a raw literal did not fit its declared primitive kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("expected {expected} literal, got {literal:?}")]
    Malformed {
        expected: &'static str,
        literal: String,
    },
    #[error("literal {literal:?} does not fit {target}")]
    OutOfRange {
        target: &'static str,
        literal: String,
    },
}

impl TypedValue {
    /// Parse a raw literal against a primitive kind, applying the numeric widening rules:
    /// integer literals widen to `i64` and (exactly) to `f64`; an `i32` target requires the
    /// value to fit. Identifier kinds accept parseable textual UUIDs. Temporal kinds use
    /// their ISO 8601 / RFC 3339 text forms; durations take integer nanoseconds or an
    /// `ns`/`ms`/`s`/`m`/`h` suffix form.
    pub fn parse(kind: PrimitiveKind, literal: &str) -> Result<TypedValue, LiteralError> {
        let text = literal.trim();
        let malformed = |expected: &'static str| LiteralError::Malformed {
            expected,
            literal: literal.to_owned(),
        };
        match kind {
            PrimitiveKind::Int32 => {
                let wide: i64 = text.parse().map_err(|_| malformed("integer"))?;
                let narrow = i32::try_from(wide).map_err(|_| LiteralError::OutOfRange {
                    target: "i32",
                    literal: literal.to_owned(),
                })?;
                Ok(TypedValue::Int32(narrow))
            }
            PrimitiveKind::Int64 => Ok(TypedValue::Int64(
                text.parse().map_err(|_| malformed("integer"))?,
            )),
            PrimitiveKind::Float64 => {
                let value: f64 = text.parse().map_err(|_| malformed("number"))?;
                if !value.is_finite() {
                    return Err(malformed("finite number"));
                }
                Ok(TypedValue::Float64(value))
            }
            PrimitiveKind::Text => Ok(TypedValue::Text(literal.to_owned())),
            PrimitiveKind::Bool => match text {
                "true" => Ok(TypedValue::Bool(true)),
                "false" => Ok(TypedValue::Bool(false)),
                _ => Err(malformed("boolean")),
            },
            PrimitiveKind::Identifier => Ok(TypedValue::Identifier(
                Uuid::parse_str(text).map_err(|_| malformed("UUID"))?,
            )),
            PrimitiveKind::Date => Ok(TypedValue::Date(
                NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| malformed("YYYY-MM-DD date"))?,
            )),
            PrimitiveKind::TimeOfDay => Ok(TypedValue::TimeOfDay(
                NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
                    .map_err(|_| malformed("HH:MM:SS time"))?,
            )),
            PrimitiveKind::DateTime => Ok(TypedValue::DateTime(
                DateTime::parse_from_rfc3339(text)
                    .map_err(|_| malformed("RFC 3339 datetime"))?
                    .with_timezone(&Utc),
            )),
            PrimitiveKind::DateTimeWithOffset => Ok(TypedValue::DateTimeWithOffset(
                DateTime::parse_from_rfc3339(text).map_err(|_| malformed("RFC 3339 datetime"))?,
            )),
            PrimitiveKind::Duration => parse_duration(literal, text),
        }
    }

    /// The kind this value belongs to.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            TypedValue::Int32(_) => PrimitiveKind::Int32,
            TypedValue::Int64(_) => PrimitiveKind::Int64,
            TypedValue::Float64(_) => PrimitiveKind::Float64,
            TypedValue::Text(_) => PrimitiveKind::Text,
            TypedValue::Bool(_) => PrimitiveKind::Bool,
            TypedValue::Identifier(_) => PrimitiveKind::Identifier,
            TypedValue::Date(_) => PrimitiveKind::Date,
            TypedValue::TimeOfDay(_) => PrimitiveKind::TimeOfDay,
            TypedValue::DateTime(_) => PrimitiveKind::DateTime,
            TypedValue::DateTimeWithOffset(_) => PrimitiveKind::DateTimeWithOffset,
            TypedValue::Duration(_) => PrimitiveKind::Duration,
        }
    }
}

/// Durations: bare integer nanoseconds, or an integer with an `ns`/`ms`/`s`/`m`/`h` suffix.
/// The value must fit the i64 nanosecond range so downstream rendering stays total.
fn parse_duration(literal: &str, text: &str) -> Result<TypedValue, LiteralError> {
    let malformed = || LiteralError::Malformed {
        expected: "duration (nanoseconds or ns/ms/s/m/h suffix)",
        literal: literal.to_owned(),
    };
    let out_of_range = || LiteralError::OutOfRange {
        target: "i64 nanoseconds",
        literal: literal.to_owned(),
    };

    // Longer suffixes first so "ms" is not read as "m<s".
    let (digits, nanos_per_unit) = if let Some(rest) = text.strip_suffix("ns") {
        (rest, 1i64)
    } else if let Some(rest) = text.strip_suffix("ms") {
        (rest, 1_000_000)
    } else if let Some(rest) = text.strip_suffix('s') {
        (rest, 1_000_000_000)
    } else if let Some(rest) = text.strip_suffix('m') {
        (rest, 60 * 1_000_000_000)
    } else if let Some(rest) = text.strip_suffix('h') {
        (rest, 3_600 * 1_000_000_000)
    } else {
        (text, 1)
    };

    let count: i64 = digits.trim().parse().map_err(|_| malformed())?;
    let nanos = count.checked_mul(nanos_per_unit).ok_or_else(out_of_range)?;
    Ok(TypedValue::Duration(TimeDelta::nanoseconds(nanos)))
}

/// Validated, synthesis-ready description of one wrapper type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeIntent {
    pub name: String,
    pub namespace: String,
    pub kind: PrimitiveKind,
    pub value_category: ValueCategory,
    pub container_kind: ContainerKind,
    pub has_normalize: bool,
    pub has_validate: bool,
    pub predefined: Vec<(String, TypedValue)>,
}
