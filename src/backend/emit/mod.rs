//! Emit generated Rust source from validated intents.
//!
//! This module defines [`Synthesizer`] and wires together the focused submodules that
//! implement intent-to-Rust emission. The heavy lifting lives in those submodules;
//! `mod.rs` holds the entry point, configuration, and formatting.
//!
//! ## Notes
//! - Emission produces a Rust syntax tree (`syn`) from `quote!` tokens and formats it via
//!   `prettyplease`; every artifact gets the engine version header.
//! - Strategy decisions come from [`crate::backend::strategy`] and are never re-made here.
//!
//! ## See also
//! - [`members`]: struct, factory pipeline, and hook wiring
//! - [`equality`]: equality members per strategy
//! - [`convert`]: string conversion and explicit conversions
//! - [`predefined`]: predefined-instance accessors
//! - [`adapters`]: wire and storage adapters
//! - [`registration`]: the per-batch store registration artifact

mod adapters;
mod convert;
mod equality;
mod members;
mod predefined;
mod registration;

use minted_core::taxonomy::PrimitiveKind;
use proc_macro2::TokenStream;
use quote::quote;

use crate::backend::artifact::{GeneratedArtifact, file_key};
use crate::backend::strategy::SynthesisPlan;
use crate::frontend::intent::TypeIntent;
use crate::version::MINTED_VERSION;

/// Error during source emission.
///
/// The validator excludes every per-declaration failure before emission runs, so these
/// errors only arise at the rendering boundary (an identifier or module path that cannot
/// be spelled in Rust, or generated tokens that fail to re-parse). Any of them firing on a
/// validated intent indicates an engine bug.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("cannot render identifier {0:?}")]
    InvalidIdentifier(String),
    #[error("cannot render module path {0:?}")]
    InvalidModulePath(String),
    #[error("generated code failed to re-parse: {0}")]
    SynParse(String),
}

/// Engine configuration.
///
/// The one knob the host may turn is where the runtime crate lives in the generated
/// code's dependency graph (a host that re-exports `minted_runtime` under another path
/// points the generated references there).
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Path generated code uses to reach the runtime crate.
    pub runtime_path: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            runtime_path: "minted_runtime".to_owned(),
        }
    }
}

/// Emit generated Rust source from validated intents.
///
/// Stateless apart from configuration: emission is a pure function of
/// `(intent, plan, config)`, which is what makes re-generation byte-identical.
pub struct Synthesizer<'a> {
    config: &'a GenConfig,
}

impl<'a> Synthesizer<'a> {
    pub fn new(config: &'a GenConfig) -> Self {
        Self { config }
    }

    /// Render the complete artifact for one intent.
    #[tracing::instrument(skip_all, fields(type_name = %intent.name))]
    pub fn synthesize(
        &self,
        intent: &TypeIntent,
        plan: &SynthesisPlan,
    ) -> Result<GeneratedArtifact, EmitError> {
        let name = parse_ident(&intent.name)?;
        let rt = self.runtime_path_tokens()?;
        let raw = raw_type_tokens(intent.kind);

        let mut items = TokenStream::new();
        items.extend(self.emit_struct(intent, plan, &name, &raw));
        items.extend(self.emit_inherent_impl(intent, &name, &raw, &rt)?);
        items.extend(self.emit_hook_wiring(intent, &name, &raw, &rt));
        items.extend(self.emit_equality(intent, plan, &name));
        items.extend(self.emit_display(&name));
        items.extend(self.emit_conversions(&name, &raw, &rt));
        items.extend(self.emit_wire_adapters(plan, &name, &raw, &rt));
        items.extend(self.emit_storage_adapter(intent, plan, &name, &rt));

        let source = format!("{}{}", artifact_header(intent), format_tokens(items)?);
        Ok(GeneratedArtifact {
            file_key: file_key(&intent.namespace, &intent.name),
            source,
        })
    }

    fn runtime_path_tokens(&self) -> Result<TokenStream, EmitError> {
        path_tokens(&self.config.runtime_path)
    }
}

/// Version header and target-module note prepended to every generated file.
fn artifact_header(intent: &TypeIntent) -> String {
    let mut header = format!("// Generated by the minted engine v{}. Do not edit.\n", MINTED_VERSION);
    if !intent.namespace.trim().is_empty() {
        header.push_str(&format!("// Target module: {}\n", intent.namespace.trim()));
    }
    header.push('\n');
    header
}

/// Parse emitted tokens back into a `syn` file and pretty-print it.
fn format_tokens(tokens: TokenStream) -> Result<String, EmitError> {
    let file = syn::parse2::<syn::File>(tokens).map_err(|e| EmitError::SynParse(e.to_string()))?;
    Ok(prettyplease::unparse(&file))
}

/// Spell an identifier, rejecting anything Rust cannot name.
pub(crate) fn parse_ident(name: &str) -> Result<syn::Ident, EmitError> {
    syn::parse_str::<syn::Ident>(name).map_err(|_| EmitError::InvalidIdentifier(name.to_owned()))
}

/// Spell a `::`-separated path, rejecting anything Rust cannot name.
pub(crate) fn path_tokens(path: &str) -> Result<TokenStream, EmitError> {
    let parsed = syn::parse_str::<syn::Path>(path)
        .map_err(|_| EmitError::InvalidModulePath(path.to_owned()))?;
    Ok(quote!(#parsed))
}

/// The raw type each kind wraps, as emitted tokens. Total over the taxonomy.
pub(crate) fn raw_type_tokens(kind: PrimitiveKind) -> TokenStream {
    match kind {
        PrimitiveKind::Int32 => quote!(i32),
        PrimitiveKind::Int64 => quote!(i64),
        PrimitiveKind::Float64 => quote!(f64),
        PrimitiveKind::Text => quote!(String),
        PrimitiveKind::Bool => quote!(bool),
        PrimitiveKind::Identifier => quote!(uuid::Uuid),
        PrimitiveKind::Date => quote!(chrono::NaiveDate),
        PrimitiveKind::TimeOfDay => quote!(chrono::NaiveTime),
        PrimitiveKind::DateTime => quote!(chrono::DateTime<chrono::Utc>),
        PrimitiveKind::DateTimeWithOffset => quote!(chrono::DateTime<chrono::FixedOffset>),
        PrimitiveKind::Duration => quote!(chrono::TimeDelta),
    }
}
