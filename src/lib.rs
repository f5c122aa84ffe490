#![forbid(unsafe_code)]
//! Minted value-object synthesis engine
//!
//! Minted turns lightweight wrapper declarations into complete single-field value objects:
//! validated factory pipeline, equality, conversions, wire and storage adapters, plus a
//! batch-wide store registration artifact. This crate provides the engine: frontend
//! (declaration facts, validation, problems) and backend (strategy selection, code
//! synthesis, batch orchestration). Generated code depends on the `minted_runtime` crate.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The crate
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: The emit modules render `.unwrap()` as *string tokens* in generated
//!   Rust (constructing constants from already-validated literals). This is acceptable —
//!   these are output tokens, not method calls in the engine.
//!
//! - **True invariants**: If a panic represents an engine bug (logic error), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod frontend;
pub mod version;

pub use frontend::facts::{ContainerKind, DeclarationFacts, PredefinedFact, SourceLocation, ValueCategory};
pub use frontend::problems::{Problem, ProblemCode, Severity};
pub use frontend::validator::{Validated, validate};

pub use backend::artifact::{GeneratedArtifact, RegistrationArtifact};
pub use backend::batch::{Batch, BatchOutput};
pub use backend::emit::{EmitError, GenConfig};
