//! Synthesis-side pipeline.
//!
//! The backend turns validated intents into generated source: [`strategy`] picks the
//! equality/conversion/serialization strategies, [`emit`] renders the member set with
//! `quote!` and formats it with `prettyplease`, [`artifact`] keys the outputs, and
//! [`batch`] orchestrates whole discovery passes.

pub mod artifact;
pub mod batch;
pub mod emit;
pub mod naming;
pub mod strategy;
