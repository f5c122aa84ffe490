//! Normalized declaration facts.
//!
//! [`DeclarationFacts`] is the entire input surface of the engine: the host's declaration
//! scanner resolves annotations and shapes into this record, and the engine never asks the
//! scanner for anything else. Facts are produced fresh per discovery pass and are immutable.

use std::fmt;

/// Shape of the declaring container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// An ordinary nominal type.
    PlainType,
    /// A record-like container with compiler-synthesized structural members.
    AlgebraicRecord,
    /// Any other shape the scanner saw (interface-like, enum-like, ...). Never
    /// synthesizable; the validator rejects it.
    Other,
}

/// Whether the declaration carries reference or inline value semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCategory {
    Reference,
    Value,
}

/// Where a declaration (or one of its members) lives in the host source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// One declared predefined instance, before literal typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredefinedFact {
    /// Declared member name, e.g. `Empty`.
    pub member_name: String,
    /// Literal text as written in the declaration.
    pub raw_literal: String,
    /// Whether the member is declared as an open/overridable accessor.
    pub is_overridable: bool,
}

impl PredefinedFact {
    pub fn new(member_name: impl Into<String>, raw_literal: impl Into<String>) -> Self {
        Self {
            member_name: member_name.into(),
            raw_literal: raw_literal.into(),
            is_overridable: true,
        }
    }

    pub fn sealed(mut self) -> Self {
        self.is_overridable = false;
        self
    }
}

/// Everything the engine knows about one candidate declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationFacts {
    pub name: String,
    /// Target module path, `::`-separated; may be empty for the crate root.
    pub namespace: String,
    pub container_kind: ContainerKind,
    pub value_category: ValueCategory,
    pub is_partial_like: bool,
    pub is_immutable_like: bool,
    /// Spelling of the wrapped primitive as written in the declaration.
    pub primitive_type_name: String,
    pub has_user_normalize: bool,
    pub has_user_validate: bool,
    pub predefined: Vec<PredefinedFact>,
    pub declared_at: SourceLocation,
}

impl DeclarationFacts {
    /// Facts with the permissive defaults a well-formed declaration usually has; tests and
    /// scanners adjust the shape flags from here.
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        primitive_type_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            container_kind: ContainerKind::PlainType,
            value_category: ValueCategory::Reference,
            is_partial_like: true,
            is_immutable_like: true,
            primitive_type_name: primitive_type_name.into(),
            has_user_normalize: false,
            has_user_validate: false,
            predefined: Vec::new(),
            declared_at: SourceLocation::new("<unknown>", 0, 0),
        }
    }

    pub fn with_container_kind(mut self, kind: ContainerKind) -> Self {
        self.container_kind = kind;
        self
    }

    pub fn with_value_category(mut self, category: ValueCategory) -> Self {
        self.value_category = category;
        self
    }

    pub fn with_partial_like(mut self, flag: bool) -> Self {
        self.is_partial_like = flag;
        self
    }

    pub fn with_immutable_like(mut self, flag: bool) -> Self {
        self.is_immutable_like = flag;
        self
    }

    pub fn with_normalize(mut self) -> Self {
        self.has_user_normalize = true;
        self
    }

    pub fn with_validate(mut self) -> Self {
        self.has_user_validate = true;
        self
    }

    pub fn with_predefined(mut self, member: PredefinedFact) -> Self {
        self.predefined.push(member);
        self
    }

    pub fn declared_at(mut self, location: SourceLocation) -> Self {
        self.declared_at = location;
        self
    }
}
