//! Parity checks between the runtime and the surface the engine generates.
//!
//! The three wrapper types below are hand-expanded copies of synthesized artifacts (a text
//! wrapper with both hooks customized, an identifier wrapper with a predefined constant, and
//! an offset-carrying datetime wrapper). They pin down the semantics generated code gets
//! from this crate: factory ordering, equality across construction paths, predefined-constant
//! bypass, wire adapters, and storage round-trips.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use minted_runtime::{InvariantViolation, StoreCodec, StoreError, StoredValue, ValueRules};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ---------------------------------------------------------------------------
// Callsign: text wrapper, custom normalize (trim + lowercase) and validate
// (at least 3 characters), reference-aware equality.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Callsign {
    value: String,
}

impl Callsign {
    fn from_raw(value: String) -> Self {
        Self { value }
    }

    pub fn from_value(raw: String) -> Result<Self, InvariantViolation> {
        let normalized = <Self as ValueRules>::normalize(raw);
        <Self as ValueRules>::validate(&normalized)?;
        Ok(Self::from_raw(normalized))
    }

    pub fn value(&self) -> &String {
        &self.value
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

// User-supplied hooks, as they would sit next to the declaration.
impl ValueRules for Callsign {
    type Raw = String;

    fn normalize(raw: String) -> String {
        raw.trim().to_ascii_lowercase()
    }

    fn validate(raw: &String) -> Result<(), InvariantViolation> {
        if raw.chars().count() < 3 {
            return Err(InvariantViolation::new(
                "Callsign",
                "must be at least 3 characters",
            ));
        }
        Ok(())
    }
}

impl PartialEq for Callsign {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.value == other.value
    }
}

impl Eq for Callsign {}

impl Hash for Callsign {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl std::fmt::Display for Callsign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}

impl From<Callsign> for String {
    fn from(wrapper: Callsign) -> Self {
        wrapper.value
    }
}

impl TryFrom<String> for Callsign {
    type Error = InvariantViolation;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Callsign::from_value(raw)
    }
}

impl serde::Serialize for Callsign {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Callsign {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Callsign::from_value(raw).map_err(serde::de::Error::custom)
    }
}

impl StoreCodec for Callsign {
    fn to_stored(&self) -> StoredValue {
        StoredValue::Text(self.value.clone())
    }

    fn from_stored(stored: StoredValue) -> Result<Self, StoreError> {
        let raw = match stored {
            StoredValue::Text(value) => value,
            other => return Err(StoreError::unexpected_shape("Callsign", "Text", &other)),
        };
        Callsign::from_value(raw).map_err(StoreError::from)
    }
}

// ---------------------------------------------------------------------------
// BatchId: identifier wrapper, user validate hook rejecting the nil identifier,
// predefined `Empty` constant built from exactly that literal.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct BatchId {
    value: uuid::Uuid,
}

impl BatchId {
    fn from_raw(value: uuid::Uuid) -> Self {
        Self { value }
    }

    pub fn from_value(raw: uuid::Uuid) -> Result<Self, InvariantViolation> {
        let normalized = <Self as ValueRules>::normalize(raw);
        <Self as ValueRules>::validate(&normalized)?;
        Ok(Self::from_raw(normalized))
    }

    pub fn value(&self) -> &uuid::Uuid {
        &self.value
    }

    /// `Empty` predefined instance.
    pub fn empty() -> &'static Self {
        static EMPTY: LazyLock<BatchId> =
            LazyLock::new(|| BatchId::from_raw(uuid::Uuid::from_u128(0u128)));
        &EMPTY
    }
}

impl ValueRules for BatchId {
    type Raw = uuid::Uuid;

    fn validate(raw: &uuid::Uuid) -> Result<(), InvariantViolation> {
        if raw.is_nil() {
            return Err(InvariantViolation::new("BatchId", "must not be nil"));
        }
        Ok(())
    }
}

impl PartialEq for BatchId {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for BatchId {}

impl Hash for BatchId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl StoreCodec for BatchId {
    fn to_stored(&self) -> StoredValue {
        StoredValue::Identifier(self.value)
    }

    fn from_stored(stored: StoredValue) -> Result<Self, StoreError> {
        let raw = match stored {
            StoredValue::Identifier(value) => value,
            other => return Err(StoreError::unexpected_shape("BatchId", "Identifier", &other)),
        };
        BatchId::from_value(raw).map_err(StoreError::from)
    }
}

// ---------------------------------------------------------------------------
// Scheduled: offset-carrying datetime wrapper, no customized hooks.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Scheduled {
    value: DateTime<FixedOffset>,
}

impl Scheduled {
    fn from_raw(value: DateTime<FixedOffset>) -> Self {
        Self { value }
    }

    pub fn from_value(raw: DateTime<FixedOffset>) -> Result<Self, InvariantViolation> {
        let normalized = <Self as ValueRules>::normalize(raw);
        <Self as ValueRules>::validate(&normalized)?;
        Ok(Self::from_raw(normalized))
    }

    pub fn value(&self) -> &DateTime<FixedOffset> {
        &self.value
    }
}

// Neither hook customized: the generator emits the defaults-only impl.
impl ValueRules for Scheduled {
    type Raw = DateTime<FixedOffset>;
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Scheduled {}

impl Hash for Scheduled {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl StoreCodec for Scheduled {
    fn to_stored(&self) -> StoredValue {
        minted_runtime::encode::encode_date_time_with_offset(self.value)
    }

    fn from_stored(stored: StoredValue) -> Result<Self, StoreError> {
        let raw = match stored {
            StoredValue::Document(doc) => {
                minted_runtime::encode::decode_date_time_with_offset("Scheduled", &doc)?
            }
            other => return Err(StoreError::unexpected_shape("Scheduled", "Document", &other)),
        };
        Scheduled::from_value(raw).map_err(StoreError::from)
    }
}

/// Mirrored registration artifact body.
pub fn register_generated_codecs() {
    let registry = minted_runtime::registry::global();
    registry.register::<Callsign>();
    registry.register::<BatchId>();
    registry.register::<Scheduled>();
}

// ---------------------------------------------------------------------------
// Factory pipeline
// ---------------------------------------------------------------------------

#[test]
fn normalize_runs_strictly_before_validate() {
    // Raw input too short only until normalization lowercases/trims: still too short.
    assert!(Callsign::from_value("  AB ".to_owned()).is_err());
    // Becomes valid after normalization.
    let ok = Callsign::from_value("  ABC ".to_owned()).expect("normalized input is valid");
    assert_eq!(ok.value(), "abc");
    // Valid before normalization, invalid after: three chars raw, two after the trim.
    assert!(Callsign::from_value("ab ".to_owned()).is_err());
}

#[test]
fn hookless_factory_is_the_identity_pipeline() {
    let instant = DateTime::parse_from_rfc3339("2024-06-01T12:00:00+05:30").expect("valid rfc3339");
    let wrapped = Scheduled::from_value(instant).expect("no hooks reject anything");
    assert_eq!(*wrapped.value(), instant);
}

#[test]
fn validation_failure_surfaces_to_the_caller() {
    let err = BatchId::from_value(uuid::Uuid::nil()).expect_err("nil is rejected");
    assert_eq!(err.type_name(), "BatchId");
    assert_eq!(err.to_string(), "invalid BatchId: must not be nil");
}

// ---------------------------------------------------------------------------
// Equality and hashing
// ---------------------------------------------------------------------------

#[test]
fn equal_primitives_compare_and_hash_equal_regardless_of_construction_path() {
    let via_factory = Callsign::from_value("  TOWER ".to_owned()).expect("valid");
    let via_conversion = Callsign::try_from("tower".to_owned()).expect("valid");

    assert_eq!(via_factory, via_conversion);
    assert_eq!(hash_of(&via_factory), hash_of(&via_conversion));
}

#[test]
fn reference_identity_short_circuit_agrees_with_value_equality() {
    let one = Callsign::from_value("tower".to_owned()).expect("valid");
    #[allow(clippy::eq_op)]
    {
        assert_eq!(one, one);
    }
    let other = one.clone();
    assert_eq!(one, other);
}

// ---------------------------------------------------------------------------
// Predefined instances
// ---------------------------------------------------------------------------

#[test]
fn predefined_instances_bypass_validation() {
    // A runtime `from_value` of the same literal is rejected by the user's validate hook.
    assert!(BatchId::from_value(uuid::Uuid::nil()).is_err());
    // The predefined constant still exists and holds exactly the nil identifier.
    assert!(BatchId::empty().value().is_nil());
}

#[test]
fn predefined_instances_compare_equal_to_factory_instances_of_the_same_value() {
    let id = uuid::Uuid::from_u128(7);
    let via_factory = BatchId::from_value(id).expect("non-nil is valid");
    let copy = *BatchId::empty();
    assert_eq!(copy, *BatchId::empty());
    assert_ne!(via_factory, copy);
    assert_eq!(hash_of(BatchId::empty()), hash_of(&copy));
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

#[test]
fn conversions_are_explicit_and_factory_gated() {
    let callsign = Callsign::from_value("tower".to_owned()).expect("valid");
    assert_eq!(String::from(callsign.clone()), "tower");
    assert_eq!(callsign.into_inner(), "tower");

    // Primitive to wrapper only exists as TryFrom, and it runs the full pipeline.
    assert!(Callsign::try_from("x".to_owned()).is_err());
}

// ---------------------------------------------------------------------------
// String conversion
// ---------------------------------------------------------------------------

#[test]
fn display_renders_the_bare_value_and_debug_the_structured_form() {
    let callsign = Callsign::from_value("tower".to_owned()).expect("valid");
    assert_eq!(callsign.to_string(), "tower");
    assert_eq!(format!("{:?}", callsign), "Callsign { value: \"tower\" }");
}

// ---------------------------------------------------------------------------
// Wire adapters
// ---------------------------------------------------------------------------

#[test]
fn wire_adapters_round_trip_through_the_factory() {
    let callsign = Callsign::from_value("tower".to_owned()).expect("valid");
    let json = serde_json::to_string(&callsign).expect("serializes");
    assert_eq!(json, "\"tower\"");

    let back: Callsign = serde_json::from_str("\"  TOWER \"").expect("normalizes on decode");
    assert_eq!(back, callsign);

    let rejected: Result<Callsign, _> = serde_json::from_str("\"x\"");
    assert!(rejected.is_err(), "wire decode is hook-gated");
}

// ---------------------------------------------------------------------------
// Storage adapters
// ---------------------------------------------------------------------------

#[test]
fn text_storage_round_trips() {
    let callsign = Callsign::from_value("tower".to_owned()).expect("valid");
    let back = Callsign::from_stored(callsign.to_stored()).expect("round-trips");
    assert_eq!(back, callsign);
}

#[test]
fn storage_decode_is_hook_gated() {
    let err = Callsign::from_stored(StoredValue::Text("x".to_owned())).expect_err("too short");
    assert!(matches!(err, StoreError::Invariant(_)));
}

#[test]
fn storage_decode_rejects_mismatched_shapes() {
    let err = Callsign::from_stored(StoredValue::Int64(3)).expect_err("wrong shape");
    assert_eq!(err.to_string(), "Callsign: expected stored Text, found Int64");
}

#[test]
fn offset_storage_preserves_offset_exactly_and_instant_to_the_millisecond() {
    let instant =
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00.250+05:30").expect("valid rfc3339");
    let wrapped = Scheduled::from_value(instant).expect("valid");

    let back = Scheduled::from_stored(wrapped.to_stored()).expect("round-trips");
    assert_eq!(back, wrapped);
    assert_eq!(
        back.value().offset().local_minus_utc(),
        5 * 3600 + 30 * 60,
        "offset survives storage exactly"
    );
}

#[test]
fn offset_storage_truncates_below_the_millisecond() {
    let instant =
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00.123456789+02:00").expect("valid rfc3339");
    let wrapped = Scheduled::from_value(instant).expect("valid");

    let back = Scheduled::from_stored(wrapped.to_stored()).expect("round-trips");
    assert_eq!(back.value().timestamp_millis(), wrapped.value().timestamp_millis());
    assert_eq!(back.value().timestamp_subsec_nanos(), 123_000_000);
    assert_ne!(back, wrapped, "sub-millisecond precision does not survive storage");
}

// ---------------------------------------------------------------------------
// Registration artifact behavior
// ---------------------------------------------------------------------------

#[test]
fn repeated_registration_is_a_noop_and_adapters_resolve_by_type() {
    register_generated_codecs();
    let before = minted_runtime::registry::global().len();
    register_generated_codecs();
    assert_eq!(minted_runtime::registry::global().len(), before);

    let callsign = Callsign::from_value("tower".to_owned()).expect("valid");
    let stored = minted_runtime::registry::global()
        .serialize(&callsign)
        .expect("registered");
    assert_eq!(stored, StoredValue::Text("tower".to_owned()));

    let decoded: Callsign = minted_runtime::registry::global()
        .deserialize(stored)
        .expect("registered")
        .expect("valid stored value");
    assert_eq!(decoded, callsign);
}
