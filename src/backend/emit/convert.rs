//! String conversion and explicit type conversions.
//!
//! `Display` renders the bare wrapped value; the structured `Type { value: .. }` form comes
//! from the derived `Debug`. Conversions are explicit both ways, and primitive-to-wrapper
//! only exists as `TryFrom` delegating to the validated factory.

use proc_macro2::TokenStream;
use quote::quote;

use super::Synthesizer;

impl Synthesizer<'_> {
    pub(super) fn emit_display(&self, name: &syn::Ident) -> TokenStream {
        quote! {
            impl std::fmt::Display for #name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::Display::fmt(&self.value, f)
                }
            }
        }
    }

    pub(super) fn emit_conversions(
        &self,
        name: &syn::Ident,
        raw: &TokenStream,
        rt: &TokenStream,
    ) -> TokenStream {
        quote! {
            impl From<#name> for #raw {
                fn from(wrapper: #name) -> Self {
                    wrapper.value
                }
            }

            impl TryFrom<#raw> for #name {
                type Error = #rt::InvariantViolation;

                fn try_from(raw: #raw) -> Result<Self, Self::Error> {
                    #name::from_value(raw)
                }
            }
        }
    }
}
