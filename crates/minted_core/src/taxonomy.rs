//! Primitive-kind taxonomy.
//!
//! This registry covers the closed set of primitive kinds a value object may wrap, the
//! canonical Rust spelling of each kind's raw type, the accepted source aliases, and the
//! wire/storage encoding the kind is committed to.
//!
//! ## Notes
//! - Lookup via [`resolve`] is **case-insensitive ASCII** and ignores surrounding whitespace.
//! - Every kind maps to exactly one wire and one storage encoding, and the mapping is total
//!   over the kind set. There is no reflection-based fallback.
//!
//! ## Examples
//! ```rust
//! use minted_core::taxonomy::{self, PrimitiveKind};
//!
//! assert_eq!(taxonomy::resolve("i64"), Some(PrimitiveKind::Int64));
//! assert_eq!(taxonomy::resolve("uuid::Uuid"), Some(PrimitiveKind::Identifier));
//! assert_eq!(taxonomy::spec_for(PrimitiveKind::Date).rust_path, "chrono::NaiveDate");
//! ```

/// Stable identifier for the primitive kind wrapped by a value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Int32,
    Int64,
    Float64,
    Text,
    Bool,
    /// GUID-like opaque identifier.
    Identifier,
    /// Calendar date without a time component.
    Date,
    /// Time of day without a date component.
    TimeOfDay,
    /// Instant normalized to UTC.
    DateTime,
    /// Instant carrying an explicit UTC offset.
    DateTimeWithOffset,
    /// Signed span of time.
    Duration,
}

/// How a kind is written to the generic wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireEncoding {
    /// The raw value's own serde form (scalars as themselves, temporal kinds as their
    /// RFC 3339 / ISO 8601 text forms, identifiers as hyphenated text).
    NativeScalar,
    /// Integer nanosecond count; the wire format has no native duration scalar.
    NanosecondCount,
}

/// How a kind is written to the document store's scalar/document model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageEncoding {
    /// The store's matching native scalar, unchanged.
    NativeScalar,
    /// Integer count of whole days from the Common Era. Exact.
    EpochDayNumber,
    /// Integer nanoseconds since midnight. Exact.
    NanosSinceMidnight,
    /// Integer milliseconds since the Unix epoch, normalized to UTC before storing.
    /// Sub-millisecond components truncate.
    EpochMilliseconds,
    /// Integer nanosecond count. Exact within the representable range.
    NanosecondCount,
    /// Composite document `{ instant, offset_seconds }`; stores without an offset-aware
    /// scalar would otherwise lose the offset.
    InstantWithOffsetDocument,
}

/// Metadata for one taxonomy entry.
#[derive(Debug, Clone, Copy)]
pub struct KindSpec {
    pub kind: PrimitiveKind,
    /// Canonical Rust spelling of the raw type.
    pub rust_path: &'static str,
    /// Accepted spellings in `primitive_type_name` (canonical path included).
    pub aliases: &'static [&'static str],
    pub wire: WireEncoding,
    pub storage: StorageEncoding,
    /// Normalization note surfaced in docs and design discussions.
    pub note: &'static str,
}

/// Registry of supported primitive kinds.
pub const KINDS: &[KindSpec] = &[
    KindSpec {
        kind: PrimitiveKind::Int32,
        rust_path: "i32",
        aliases: &["i32"],
        wire: WireEncoding::NativeScalar,
        storage: StorageEncoding::NativeScalar,
        note: "pass-through",
    },
    KindSpec {
        kind: PrimitiveKind::Int64,
        rust_path: "i64",
        aliases: &["i64"],
        wire: WireEncoding::NativeScalar,
        storage: StorageEncoding::NativeScalar,
        note: "pass-through",
    },
    KindSpec {
        kind: PrimitiveKind::Float64,
        rust_path: "f64",
        aliases: &["f64"],
        wire: WireEncoding::NativeScalar,
        storage: StorageEncoding::NativeScalar,
        note: "pass-through; equality and hashing use the bit pattern",
    },
    KindSpec {
        kind: PrimitiveKind::Text,
        rust_path: "String",
        aliases: &["String", "std::string::String", "string"],
        wire: WireEncoding::NativeScalar,
        storage: StorageEncoding::NativeScalar,
        note: "pass-through",
    },
    KindSpec {
        kind: PrimitiveKind::Bool,
        rust_path: "bool",
        aliases: &["bool"],
        wire: WireEncoding::NativeScalar,
        storage: StorageEncoding::NativeScalar,
        note: "pass-through",
    },
    KindSpec {
        kind: PrimitiveKind::Identifier,
        rust_path: "uuid::Uuid",
        aliases: &["uuid::Uuid", "Uuid", "uuid"],
        wire: WireEncoding::NativeScalar,
        storage: StorageEncoding::NativeScalar,
        note: "hyphenated text on the wire, native identifier scalar in the store",
    },
    KindSpec {
        kind: PrimitiveKind::Date,
        rust_path: "chrono::NaiveDate",
        aliases: &["chrono::NaiveDate", "NaiveDate", "date"],
        wire: WireEncoding::NativeScalar,
        storage: StorageEncoding::EpochDayNumber,
        note: "exact, no precision loss",
    },
    KindSpec {
        kind: PrimitiveKind::TimeOfDay,
        rust_path: "chrono::NaiveTime",
        aliases: &["chrono::NaiveTime", "NaiveTime", "time"],
        wire: WireEncoding::NativeScalar,
        storage: StorageEncoding::NanosSinceMidnight,
        note: "exact",
    },
    KindSpec {
        kind: PrimitiveKind::DateTime,
        rust_path: "chrono::DateTime<chrono::Utc>",
        aliases: &[
            "chrono::DateTime<chrono::Utc>",
            "DateTime<Utc>",
            "datetime",
        ],
        wire: WireEncoding::NativeScalar,
        storage: StorageEncoding::EpochMilliseconds,
        note: "normalized to UTC before storing to avoid ambiguous offsets",
    },
    KindSpec {
        kind: PrimitiveKind::DateTimeWithOffset,
        rust_path: "chrono::DateTime<chrono::FixedOffset>",
        aliases: &[
            "chrono::DateTime<chrono::FixedOffset>",
            "DateTime<FixedOffset>",
            "datetime-with-offset",
        ],
        wire: WireEncoding::NativeScalar,
        storage: StorageEncoding::InstantWithOffsetDocument,
        note: "offset stored alongside the UTC instant; reconstruction reapplies it",
    },
    KindSpec {
        kind: PrimitiveKind::Duration,
        rust_path: "chrono::TimeDelta",
        aliases: &["chrono::TimeDelta", "TimeDelta", "chrono::Duration", "duration"],
        wire: WireEncoding::NanosecondCount,
        storage: StorageEncoding::NanosecondCount,
        note: "exact within the i64 nanosecond range",
    },
];

/// Resolve a primitive type name to a [`PrimitiveKind`].
///
/// ## Notes
/// - Matching is **case-insensitive ASCII**; surrounding whitespace is ignored.
pub fn resolve(name: &str) -> Option<PrimitiveKind> {
    let name = name.trim();
    KINDS
        .iter()
        .find(|spec| spec.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name)))
        .map(|spec| spec.kind)
}

/// Return the full registry entry for a kind.
///
/// ## Panics
/// - If the registry is missing an entry for `kind` (this indicates a programming error;
///   the guardrail tests enforce totality).
pub fn spec_for(kind: PrimitiveKind) -> &'static KindSpec {
    KINDS
        .iter()
        .find(|spec| spec.kind == kind)
        .expect("taxonomy entry missing")
}

/// Return the canonical Rust spelling of a kind's raw type.
pub fn rust_path(kind: PrimitiveKind) -> &'static str {
    spec_for(kind).rust_path
}

/// Whether the kind's raw type is `Copy` in Rust.
///
/// Every kind except `Text` wraps a `Copy` raw type.
pub fn is_copy(kind: PrimitiveKind) -> bool {
    !matches!(kind, PrimitiveKind::Text)
}

/// Whether the kind is one of the five temporal kinds.
pub fn is_temporal(kind: PrimitiveKind) -> bool {
    matches!(
        kind,
        PrimitiveKind::Date
            | PrimitiveKind::TimeOfDay
            | PrimitiveKind::DateTime
            | PrimitiveKind::DateTimeWithOffset
            | PrimitiveKind::Duration
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_case_insensitive() {
        assert_eq!(resolve("I64"), Some(PrimitiveKind::Int64));
        assert_eq!(resolve("  string "), Some(PrimitiveKind::Text));
        assert_eq!(resolve("UUID"), Some(PrimitiveKind::Identifier));
    }

    #[test]
    fn test_unknown_names_do_not_resolve() {
        assert_eq!(resolve("u64"), None);
        assert_eq!(resolve("Decimal"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_temporal_partition() {
        assert!(is_temporal(PrimitiveKind::Duration));
        assert!(!is_temporal(PrimitiveKind::Identifier));
    }
}
