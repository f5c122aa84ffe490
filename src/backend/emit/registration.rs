//! The per-batch store registration artifact.
//!
//! One function enumerating a `register::<T>()` call per generated type. The runtime
//! registry makes re-registration a no-op, so the host application may call this from any
//! bootstrap path, more than once, and concurrently.

use proc_macro2::TokenStream;
use quote::quote;

use super::{EmitError, Synthesizer, format_tokens, parse_ident};
use crate::backend::artifact::{REGISTRATION_FILE_KEY, RegistrationArtifact, file_key};
use crate::frontend::intent::TypeIntent;
use crate::version::MINTED_VERSION;

impl Synthesizer<'_> {
    /// Render the aggregate registration artifact for the batch's generated types.
    #[tracing::instrument(skip_all, fields(type_count = intents.len()))]
    pub fn synthesize_registration(
        &self,
        intents: &[&TypeIntent],
    ) -> Result<RegistrationArtifact, EmitError> {
        let rt = self.runtime_path_tokens()?;

        // Artifact ordering everywhere is by file key.
        let mut ordered: Vec<&TypeIntent> = intents.to_vec();
        ordered.sort_by_key(|intent| file_key(&intent.namespace, &intent.name));

        let mut calls = Vec::with_capacity(ordered.len());
        for intent in &ordered {
            let path = type_path_tokens(intent)?;
            calls.push(quote!(registry.register::<#path>();));
        }

        let body = if calls.is_empty() {
            TokenStream::new()
        } else {
            quote! {
                let registry = #rt::registry::global();
                #(#calls)*
            }
        };

        let items = quote! {
            /// Register every generated value object with the global store mapper registry.
            ///
            /// Safe to call more than once and from concurrent bootstrap paths;
            /// re-registration is a no-op.
            pub fn register_generated_codecs() {
                #body
            }
        };

        let header = format!("// Generated by the minted engine v{}. Do not edit.\n\n", MINTED_VERSION);
        Ok(RegistrationArtifact {
            file_key: REGISTRATION_FILE_KEY.to_owned(),
            source: format!("{}{}", header, format_tokens(items)?),
        })
    }
}

/// `crate::<namespace>::<Name>` tokens for a generated type.
fn type_path_tokens(intent: &TypeIntent) -> Result<TokenStream, EmitError> {
    let mut segments = Vec::new();
    for segment in intent.namespace.split("::").filter(|s| !s.trim().is_empty()) {
        segments.push(parse_ident(segment.trim())?);
    }
    segments.push(parse_ident(&intent.name)?);
    Ok(quote!(crate #(:: #segments)*))
}
