//! Strategy selection.
//!
//! Selection is deterministic over the intent: equality follows the container shape and
//! value category, conversion is uniformly factory-gated, and serialization is the
//! taxonomy row for the primitive kind. Emission consults the selected plan and never
//! re-decides any of this ad hoc.

use minted_core::taxonomy::{self, KindSpec};

use crate::frontend::facts::{ContainerKind, ValueCategory};
use crate::frontend::intent::TypeIntent;

/// How equality members are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqualityStrategy {
    /// Record-like containers: structural equality defined only over the wrapped value,
    /// overriding anything the container would otherwise synthesize.
    Structural,
    /// Plain reference-semantics containers: a reference-identity short-circuit before the
    /// value comparison.
    ReferenceAware,
    /// Plain value-semantics containers: plain value comparison, no short-circuit.
    InlineValue,
}

/// How conversions are generated. Uniform: wrapper-to-primitive is explicit, and
/// primitive-to-wrapper routes through the validated factory so no conversion can bypass
/// normalization or validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStrategy {
    FactoryGated,
}

/// The full set of strategies one synthesis run commits to.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisPlan {
    pub equality: EqualityStrategy,
    pub conversion: ConversionStrategy,
    pub serialization: &'static KindSpec,
}

/// Pick the strategies for a validated intent.
pub fn select(intent: &TypeIntent) -> SynthesisPlan {
    let equality = match (intent.container_kind, intent.value_category) {
        (ContainerKind::AlgebraicRecord, _) => EqualityStrategy::Structural,
        (ContainerKind::PlainType, ValueCategory::Reference) => EqualityStrategy::ReferenceAware,
        (ContainerKind::PlainType, ValueCategory::Value) => EqualityStrategy::InlineValue,
        (ContainerKind::Other, _) => {
            unreachable!("INVARIANT: the validator rejects non-synthesizable container shapes")
        }
    };

    SynthesisPlan {
        equality,
        conversion: ConversionStrategy::FactoryGated,
        serialization: taxonomy::spec_for(intent.kind),
    }
}
