//! Storage adapter interface implemented by generated value objects.

use crate::stored::{StoreError, StoredValue};

/// Conversion between a wrapper type and the document store's value model.
///
/// ## Notes
/// - `to_stored` is total: anything a validated wrapper holds can be stored.
/// - `from_stored` routes the decoded raw value through the type's validated factory, so
///   stored data is subject to the same normalize/validate pipeline as any other input.
///   A predefined instance whose literal would be rejected by `validate` therefore does
///   not survive a store round-trip; constants bypass hooks at construction only.
pub trait StoreCodec: Sized {
    /// Encode the wrapped value into the store's scalar/document model.
    fn to_stored(&self) -> StoredValue;

    /// Decode a stored value back into the wrapper.
    fn from_stored(stored: StoredValue) -> Result<Self, StoreError>;
}
