//! Problems surfaced to the host toolchain's diagnostic sink.
//!
//! A [`Problem`] is classification plus location plus message — presentation (squiggles,
//! build-log formatting) belongs to the host. Fatal problems exclude the affected type from
//! synthesis; informational problems are advisory and never block generation.

use std::fmt;

use crate::frontend::facts::SourceLocation;

/// How a problem affects generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Excludes the affected type from synthesis.
    Fatal,
    /// Advisory only.
    Informational,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "fatal"),
            Severity::Informational => write!(f, "info"),
        }
    }
}

/// Closed catalog of problem codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemCode {
    NotExtensible,
    UnsupportedContainerKind,
    MustBeImmutable,
    UnsupportedPrimitive,
    NullablePrimitiveNotAllowed,
    PredefinedValueTypeMismatch,
    PredefinedMemberNotExtensible,
    NormalizeHookAvailable,
    ValidateHookAvailable,
}

impl ProblemCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ProblemCode::NotExtensible => "NotExtensible",
            ProblemCode::UnsupportedContainerKind => "UnsupportedContainerKind",
            ProblemCode::MustBeImmutable => "MustBeImmutable",
            ProblemCode::UnsupportedPrimitive => "UnsupportedPrimitive",
            ProblemCode::NullablePrimitiveNotAllowed => "NullablePrimitiveNotAllowed",
            ProblemCode::PredefinedValueTypeMismatch => "PredefinedValueTypeMismatch",
            ProblemCode::PredefinedMemberNotExtensible => "PredefinedMemberNotExtensible",
            ProblemCode::NormalizeHookAvailable => "NormalizeHookAvailable",
            ProblemCode::ValidateHookAvailable => "ValidateHookAvailable",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            ProblemCode::NormalizeHookAvailable | ProblemCode::ValidateHookAvailable => {
                Severity::Informational
            }
            _ => Severity::Fatal,
        }
    }
}

/// One diagnostic, ready for the host's reporting sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub code: ProblemCode,
    pub severity: Severity,
    pub location: SourceLocation,
    pub message: String,
}

impl Problem {
    pub fn new(code: ProblemCode, location: SourceLocation, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            location,
            message: message.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} ({})",
            self.severity,
            self.code.as_str(),
            self.message,
            self.location
        )
    }
}

/// Problem constructors with canonical messages.
pub mod catalog {
    use super::*;
    use crate::frontend::facts::DeclarationFacts;

    pub fn not_extensible(facts: &DeclarationFacts) -> Problem {
        Problem::new(
            ProblemCode::NotExtensible,
            facts.declared_at.clone(),
            format!(
                "declaration '{}' must be partial-like so generated members can attach to it",
                facts.name
            ),
        )
    }

    pub fn unsupported_container_kind(facts: &DeclarationFacts) -> Problem {
        Problem::new(
            ProblemCode::UnsupportedContainerKind,
            facts.declared_at.clone(),
            format!(
                "declaration '{}' has an unsupported container shape; only plain types and algebraic records are synthesizable",
                facts.name
            ),
        )
    }

    pub fn must_be_immutable(facts: &DeclarationFacts) -> Problem {
        Problem::new(
            ProblemCode::MustBeImmutable,
            facts.declared_at.clone(),
            format!(
                "declaration '{}' carries value semantics and must be immutable",
                facts.name
            ),
        )
    }

    pub fn unsupported_primitive(facts: &DeclarationFacts) -> Problem {
        Problem::new(
            ProblemCode::UnsupportedPrimitive,
            facts.declared_at.clone(),
            format!(
                "declaration '{}' wraps unsupported primitive '{}'",
                facts.name, facts.primitive_type_name
            ),
        )
    }

    pub fn nullable_primitive_not_allowed(facts: &DeclarationFacts) -> Problem {
        Problem::new(
            ProblemCode::NullablePrimitiveNotAllowed,
            facts.declared_at.clone(),
            format!(
                "declaration '{}' wraps nullable primitive '{}'; wrap the non-nullable primitive instead",
                facts.name, facts.primitive_type_name
            ),
        )
    }

    pub fn predefined_value_type_mismatch(
        facts: &DeclarationFacts,
        member_name: &str,
        detail: impl fmt::Display,
    ) -> Problem {
        Problem::new(
            ProblemCode::PredefinedValueTypeMismatch,
            facts.declared_at.clone(),
            format!(
                "predefined instance '{}.{}' does not fit primitive '{}': {}",
                facts.name, member_name, facts.primitive_type_name, detail
            ),
        )
    }

    pub fn predefined_member_not_extensible(facts: &DeclarationFacts, member_name: &str) -> Problem {
        Problem::new(
            ProblemCode::PredefinedMemberNotExtensible,
            facts.declared_at.clone(),
            format!(
                "predefined instance '{}.{}' must be declared as an overridable accessor",
                facts.name, member_name
            ),
        )
    }

    pub fn normalize_hook_available(facts: &DeclarationFacts) -> Problem {
        Problem::new(
            ProblemCode::NormalizeHookAvailable,
            facts.declared_at.clone(),
            format!(
                "declaration '{}' can customize a 'normalize' hook; the identity default is in effect",
                facts.name
            ),
        )
    }

    pub fn validate_hook_available(facts: &DeclarationFacts) -> Problem {
        Problem::new(
            ProblemCode::ValidateHookAvailable,
            facts.declared_at.clone(),
            format!(
                "declaration '{}' can customize a 'validate' hook; the accept-all default is in effect",
                facts.name
            ),
        )
    }
}
