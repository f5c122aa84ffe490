//! Equality members per strategy.
//!
//! `Hash` always agrees with `PartialEq`. Float wrappers compare and hash the bit pattern
//! so `Eq`/`Hash` stay lawful (zero signs and NaN payloads are distinguished, which is the
//! price of a total equality over floats).

use minted_core::taxonomy::PrimitiveKind;
use proc_macro2::TokenStream;
use quote::quote;

use super::Synthesizer;
use crate::backend::strategy::{EqualityStrategy, SynthesisPlan};
use crate::frontend::intent::TypeIntent;

impl Synthesizer<'_> {
    pub(super) fn emit_equality(
        &self,
        intent: &TypeIntent,
        plan: &SynthesisPlan,
        name: &syn::Ident,
    ) -> TokenStream {
        let value_eq = if intent.kind == PrimitiveKind::Float64 {
            quote!(self.value.to_bits() == other.value.to_bits())
        } else {
            quote!(self.value == other.value)
        };
        let eq_body = match plan.equality {
            // Reference semantics: comparing a wrapper to itself never reads the value.
            EqualityStrategy::ReferenceAware => quote!(std::ptr::eq(self, other) || #value_eq),
            EqualityStrategy::Structural | EqualityStrategy::InlineValue => value_eq,
        };
        let hash_body = if intent.kind == PrimitiveKind::Float64 {
            quote!(std::hash::Hash::hash(&self.value.to_bits(), state);)
        } else {
            quote!(std::hash::Hash::hash(&self.value, state);)
        };

        quote! {
            impl PartialEq for #name {
                fn eq(&self, other: &Self) -> bool {
                    #eq_body
                }
            }

            impl Eq for #name {}

            impl std::hash::Hash for #name {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    #hash_body
                }
            }
        }
    }
}
