//! Generated artifacts and their keys.
//!
//! An artifact key is a pure function of `(namespace, name)`, so re-generation from the
//! same facts is idempotent down to the byte: the host toolchain may cache on the key.

use crate::backend::naming::snake_case;

/// One generated source file for one wrapper type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub file_key: String,
    pub source: String,
}

/// The single per-batch artifact registering every generated type's storage adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationArtifact {
    pub file_key: String,
    pub source: String,
}

/// Fixed key of the registration artifact.
pub const REGISTRATION_FILE_KEY: &str = "minted_registrations.rs";

/// Derive the artifact key for a wrapper type.
pub fn file_key(namespace: &str, name: &str) -> String {
    let type_part = snake_case(name);
    let namespace = namespace.trim();
    if namespace.is_empty() {
        format!("{type_part}.rs")
    } else {
        format!("{}_{type_part}.rs", namespace.replace("::", "_"))
    }
}
