//! Normalize/validate extension points for generated value objects.
//!
//! Every generated factory runs the same fixed pipeline: normalize strictly before validate,
//! then construct. The two hooks live on [`ValueRules`] as default methods, so from the
//! factory's point of view both are always present; a type that customizes neither gets the
//! identity/no-op defaults through the impl the generator emits, and a type that customizes
//! either supplies its own `impl ValueRules` next to the declaration.

/// Rejection raised by a `validate` hook, surfaced to the factory caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {type_name}: {reason}")]
pub struct InvariantViolation {
    type_name: &'static str,
    reason: String,
}

impl InvariantViolation {
    /// Construct a violation for the named wrapper type.
    pub fn new(type_name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            type_name,
            reason: reason.into(),
        }
    }

    /// The wrapper type that rejected the value.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Human-readable rejection reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Extension points a value object may customize.
///
/// ## Notes
/// - `normalize` runs strictly before `validate`; validation never sees a value the
///   customization has not had a chance to normalize.
/// - Predefined instances are constructed from trusted literals and never pass through
///   these hooks.
pub trait ValueRules {
    /// The wrapped primitive type.
    type Raw;

    /// Pre-validation transformation of the raw input. Defaults to identity.
    fn normalize(raw: Self::Raw) -> Self::Raw {
        raw
    }

    /// Rejection rule applied to the normalized input. Defaults to accepting everything.
    fn validate(raw: &Self::Raw) -> Result<(), InvariantViolation> {
        let _ = raw;
        Ok(())
    }
}
