//! Provide the canonical primitive-kind vocabulary for the Minted engine and runtime.
//!
//! This crate is intentionally small and dependency-free. It contains the closed taxonomy of
//! primitive kinds a value object may wrap, together with the wire and storage encoding each
//! kind is committed to. Both the synthesis engine (to validate declarations and select
//! strategies) and tooling around the runtime (to reason about stored shapes) consume the
//! same table, so the two sides can never disagree about an encoding.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state, no engine-specific types.
//! - The taxonomy is registry-first: a const table plus lookup helpers, guarded by
//!   `tests/taxonomy_guardrails.rs`.

pub mod taxonomy;

pub use taxonomy::{KindSpec, PrimitiveKind, StorageEncoding, WireEncoding};
