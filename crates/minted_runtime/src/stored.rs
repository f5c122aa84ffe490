//! Scalar/document model of the backing document store.
//!
//! [`StoredValue`] is the store's native value space as seen by generated codecs. Documents
//! use a `BTreeMap` so field order is deterministic across runs.

use std::collections::BTreeMap;

use minted_core::taxonomy::StorageEncoding;
use uuid::Uuid;

use crate::rules::InvariantViolation;

/// One value in the document store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Text(String),
    Bool(bool),
    /// Native identifier scalar.
    Identifier(Uuid),
    /// Native datetime scalar: milliseconds since the Unix epoch, UTC.
    DateTime(i64),
    /// Nested document.
    Document(BTreeMap<String, StoredValue>),
}

impl StoredValue {
    /// The variant name, for decode-side diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            StoredValue::Int32(_) => "Int32",
            StoredValue::Int64(_) => "Int64",
            StoredValue::Float64(_) => "Float64",
            StoredValue::Text(_) => "Text",
            StoredValue::Bool(_) => "Bool",
            StoredValue::Identifier(_) => "Identifier",
            StoredValue::DateTime(_) => "DateTime",
            StoredValue::Document(_) => "Document",
        }
    }

    /// Whether this value has a shape the given taxonomy storage encoding can produce.
    ///
    /// A generic mapper uses this to reject store contents that cannot belong to the
    /// encoding a wrapper type is committed to, before handing the value to the codec.
    pub fn conforms_to(&self, encoding: StorageEncoding) -> bool {
        match encoding {
            StorageEncoding::NativeScalar => !matches!(self, StoredValue::Document(_)),
            StorageEncoding::EpochDayNumber
            | StorageEncoding::NanosSinceMidnight
            | StorageEncoding::NanosecondCount => matches!(self, StoredValue::Int64(_)),
            StorageEncoding::EpochMilliseconds => matches!(self, StoredValue::DateTime(_)),
            StorageEncoding::InstantWithOffsetDocument => matches!(self, StoredValue::Document(_)),
        }
    }
}

/// Failure while decoding a stored value back into a wrapper type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The stored value does not have the shape the codec committed to.
    #[error("{type_name}: expected stored {expected}, found {found}")]
    UnexpectedShape {
        type_name: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    /// A stored integer does not fit the target representation.
    #[error("stored value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: i64 },
    /// A composite document is missing a required field.
    #[error("{type_name}: stored document missing field {field:?}")]
    MissingField {
        type_name: &'static str,
        field: &'static str,
    },
    /// The decoded raw value was rejected by the type's validate hook.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl StoreError {
    /// Shape-mismatch constructor used by generated codecs.
    pub fn unexpected_shape(
        type_name: &'static str,
        expected: &'static str,
        found: &StoredValue,
    ) -> Self {
        StoreError::UnexpectedShape {
            type_name,
            expected,
            found: found.shape_name(),
        }
    }
}
