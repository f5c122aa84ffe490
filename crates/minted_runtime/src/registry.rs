//! Global store mapper registry.
//!
//! The registry is the one piece of process-wide mutable state in the system. It maps a
//! wrapper type to its erased `(serialize, deserialize)` pair so a generic store mapper can
//! look adapters up by type. First use runs behind a one-time-initialization barrier and
//! double registration is a safe no-op, so the generated registration function may be called
//! from arbitrary application code, repeatedly and concurrently.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use crate::codec::StoreCodec;
use crate::stored::{StoreError, StoredValue};

type ErasedSerialize = fn(&dyn Any) -> Option<StoredValue>;
type ErasedDeserialize = fn(StoredValue) -> Result<Box<dyn Any>, StoreError>;

/// Erased codec entry for one registered wrapper type.
#[derive(Clone, Copy)]
struct CodecEntry {
    type_name: &'static str,
    serialize: ErasedSerialize,
    deserialize: ErasedDeserialize,
}

fn serialize_erased<T: StoreCodec + 'static>(value: &dyn Any) -> Option<StoredValue> {
    value.downcast_ref::<T>().map(StoreCodec::to_stored)
}

fn deserialize_erased<T: StoreCodec + 'static>(
    stored: StoredValue,
) -> Result<Box<dyn Any>, StoreError> {
    T::from_stored(stored).map(|value| Box::new(value) as Box<dyn Any>)
}

/// Keyed-by-type registry of storage adapters.
#[derive(Default)]
pub struct MapperRegistry {
    entries: RwLock<HashMap<TypeId, CodecEntry>>,
}

impl MapperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T`'s storage adapter pair.
    ///
    /// Returns `true` if the registration was new, `false` if `T` was already registered
    /// (in which case the call is a no-op, not an error).
    pub fn register<T: StoreCodec + 'static>(&self) -> bool {
        let entry = CodecEntry {
            type_name: std::any::type_name::<T>(),
            serialize: serialize_erased::<T>,
            deserialize: deserialize_erased::<T>,
        };
        let mut entries = match self.entries.write() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        match entries.entry(TypeId::of::<T>()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    /// Whether `T` has a registered adapter pair.
    pub fn is_registered<T: 'static>(&self) -> bool {
        self.read_entries().contains_key(&TypeId::of::<T>())
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// The registered type name for `T`, if any.
    pub fn type_name_of<T: 'static>(&self) -> Option<&'static str> {
        self.read_entries().get(&TypeId::of::<T>()).map(|e| e.type_name)
    }

    /// Serialize a registered wrapper through its erased adapter.
    ///
    /// Returns `None` when `T` is not registered.
    pub fn serialize<T: 'static>(&self, value: &T) -> Option<StoredValue> {
        let entry = *self.read_entries().get(&TypeId::of::<T>())?;
        (entry.serialize)(value)
    }

    /// Deserialize a stored value into a registered wrapper through its erased adapter.
    ///
    /// Returns `None` when `T` is not registered.
    pub fn deserialize<T: 'static>(&self, stored: StoredValue) -> Option<Result<T, StoreError>> {
        let entry = *self.read_entries().get(&TypeId::of::<T>())?;
        Some((entry.deserialize)(stored).map(|boxed| {
            match boxed.downcast::<T>() {
                Ok(value) => *value,
                // The entry was registered under T's TypeId, so the erased pair can only
                // produce a T.
                Err(_) => unreachable!("registry entry produced a foreign type"),
            }
        }))
    }

    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, HashMap<TypeId, CodecEntry>> {
        match self.entries.read() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// The process-wide registry the generated registration artifact targets.
///
/// Initialization is guarded by a one-time barrier; concurrent first use from multiple
/// call sites observes a single instance.
pub fn global() -> &'static MapperRegistry {
    static GLOBAL: OnceLock<MapperRegistry> = OnceLock::new();
    GLOBAL.get_or_init(MapperRegistry::new)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Sample(i64);

    impl StoreCodec for Sample {
        fn to_stored(&self) -> StoredValue {
            StoredValue::Int64(self.0)
        }

        fn from_stored(stored: StoredValue) -> Result<Self, StoreError> {
            match stored {
                StoredValue::Int64(value) => Ok(Sample(value)),
                other => Err(StoreError::unexpected_shape("Sample", "Int64", &other)),
            }
        }
    }

    #[test]
    fn test_register_then_round_trip_through_erased_pair() {
        let registry = MapperRegistry::new();
        assert!(registry.register::<Sample>());
        assert!(registry.is_registered::<Sample>());

        let stored = registry.serialize(&Sample(7)).unwrap();
        assert_eq!(stored, StoredValue::Int64(7));

        let decoded: Sample = registry.deserialize(stored).unwrap().unwrap();
        assert_eq!(decoded, Sample(7));
    }

    #[test]
    fn test_double_registration_is_a_noop() {
        let registry = MapperRegistry::new();
        assert!(registry.register::<Sample>());
        assert!(!registry.register::<Sample>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregistered_type_yields_none() {
        let registry = MapperRegistry::new();
        assert!(registry.serialize(&Sample(1)).is_none());
        assert!(registry.deserialize::<Sample>(StoredValue::Int64(1)).is_none());
    }

    #[test]
    fn test_concurrent_first_use_observes_one_instance() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    global().register::<Sample>();
                    global() as *const MapperRegistry as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert!(global().is_registered::<Sample>());
    }
}
