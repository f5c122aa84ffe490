//! Runtime support for Minted-generated value objects.
//!
//! This crate provides the traits and helpers that generated code depends on: the
//! normalize/validate extension points, the document store's scalar model with the per-kind
//! encode/decode helpers, and the global store mapper registry.
//!
//! ## Panic Policy
//!
//! Production code uses `Result` with `?` / `ok_or` / `map_err`; `.unwrap()` and `.expect()`
//! are acceptable in tests only.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]

pub mod codec;
pub mod encode;
pub mod registry;
pub mod rules;
pub mod stored;

pub use codec::StoreCodec;
pub use registry::MapperRegistry;
pub use rules::{InvariantViolation, ValueRules};
pub use stored::{StoreError, StoredValue};
