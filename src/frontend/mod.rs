//! Discovery-side model and validation.
//!
//! The frontend owns everything up to the validated type intent: the normalized
//! [`facts::DeclarationFacts`] shape supplied by the host's declaration scanner, the
//! [`problems::Problem`] taxonomy surfaced to the host's diagnostic sink, typed literal
//! values, and the validator that turns facts into [`intent::TypeIntent`]s.

pub mod facts;
pub mod intent;
pub mod problems;
pub mod validator;
