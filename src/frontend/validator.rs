//! Declaration validation.
//!
//! The validator turns one [`DeclarationFacts`] into a [`TypeIntent`] or a list of fatal
//! [`Problem`]s. Structural checks run in a fixed order and stop at the first failure;
//! predefined-member checks run over every member and collect every failure, so a single bad
//! literal reports precisely and still excludes only its own type. Successfully validated
//! declarations additionally get informational advisories for each hook left uncustomized.

use minted_core::taxonomy;

use crate::frontend::facts::{ContainerKind, DeclarationFacts, ValueCategory};
use crate::frontend::intent::{TypeIntent, TypedValue};
use crate::frontend::problems::{Problem, catalog};

/// Outcome of validating one declaration.
///
/// `intent` is present exactly when no fatal problem was found; informational advisories
/// ride along either way they apply.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub intent: Option<TypeIntent>,
    pub problems: Vec<Problem>,
}

impl Validated {
    fn fatal(problems: Vec<Problem>) -> Self {
        Self {
            intent: None,
            problems,
        }
    }
}

/// Validate one declaration.
///
/// Check order: extensibility, container shape, immutability for value semantics, primitive
/// kind resolution, nullability, then per-member literal typing and overridability.
#[tracing::instrument(skip_all, fields(declaration = %facts.name))]
pub fn validate(facts: &DeclarationFacts) -> Validated {
    if !facts.is_partial_like {
        return Validated::fatal(vec![catalog::not_extensible(facts)]);
    }

    match facts.container_kind {
        ContainerKind::PlainType | ContainerKind::AlgebraicRecord => {}
        ContainerKind::Other => {
            return Validated::fatal(vec![catalog::unsupported_container_kind(facts)]);
        }
    }

    if facts.value_category == ValueCategory::Value && !facts.is_immutable_like {
        return Validated::fatal(vec![catalog::must_be_immutable(facts)]);
    }

    let (base_name, nullable) = strip_nullable(&facts.primitive_type_name);
    let Some(kind) = taxonomy::resolve(base_name) else {
        return Validated::fatal(vec![catalog::unsupported_primitive(facts)]);
    };

    if nullable {
        return Validated::fatal(vec![catalog::nullable_primitive_not_allowed(facts)]);
    }

    let mut member_problems = Vec::new();
    let mut predefined = Vec::new();
    for member in &facts.predefined {
        match TypedValue::parse(kind, &member.raw_literal) {
            Ok(value) => predefined.push((member.member_name.clone(), value)),
            Err(err) => {
                member_problems.push(catalog::predefined_value_type_mismatch(
                    facts,
                    &member.member_name,
                    err,
                ));
            }
        }
        if !member.is_overridable {
            member_problems.push(catalog::predefined_member_not_extensible(
                facts,
                &member.member_name,
            ));
        }
    }
    if !member_problems.is_empty() {
        return Validated::fatal(member_problems);
    }

    let mut advisories = Vec::new();
    if !facts.has_user_normalize {
        advisories.push(catalog::normalize_hook_available(facts));
    }
    if !facts.has_user_validate {
        advisories.push(catalog::validate_hook_available(facts));
    }

    tracing::debug!(kind = ?kind, predefined = predefined.len(), "declaration validated");

    Validated {
        intent: Some(TypeIntent {
            name: facts.name.clone(),
            namespace: facts.namespace.clone(),
            kind,
            value_category: facts.value_category,
            container_kind: facts.container_kind,
            has_normalize: facts.has_user_normalize,
            has_validate: facts.has_user_validate,
            predefined,
        }),
        problems: advisories,
    }
}

/// Split `Option<...>`-shaped spellings into the inner primitive name and a nullability flag,
/// so kind resolution and the nullability check each see what they are about.
fn strip_nullable(primitive_type_name: &str) -> (&str, bool) {
    let trimmed = primitive_type_name.trim();
    for prefix in ["Option<", "std::option::Option<", "core::option::Option<"] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            if let Some(inner) = rest.strip_suffix('>') {
                return (inner.trim(), true);
            }
        }
    }
    (trimmed, false)
}
