//! Minted engine version information.
//!
//! This module exposes the engine version as a single constant so all subsystems
//! (artifact headers, tooling) agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The Minted engine version string (for example, `0.1.0-alpha.1`).
pub const MINTED_VERSION: &str = env!("CARGO_PKG_VERSION");
