//! Struct definition, factory pipeline, and hook wiring.

use minted_core::taxonomy;
use proc_macro2::TokenStream;
use quote::quote;

use super::{EmitError, Synthesizer};
use crate::backend::strategy::{EqualityStrategy, SynthesisPlan};
use crate::frontend::intent::TypeIntent;

impl Synthesizer<'_> {
    /// The wrapper struct: one private field holding the primitive value.
    pub(super) fn emit_struct(
        &self,
        intent: &TypeIntent,
        plan: &SynthesisPlan,
        name: &syn::Ident,
        raw: &TokenStream,
    ) -> TokenStream {
        let derives = if derives_copy(intent, plan) {
            quote!(#[derive(Debug, Clone, Copy)])
        } else {
            quote!(#[derive(Debug, Clone)])
        };
        quote! {
            #derives
            pub struct #name {
                value: #raw,
            }
        }
    }

    /// Raw constructor, validated factory, and accessors.
    ///
    /// The factory algorithm is fixed: normalize strictly before validate, then construct.
    /// Only the factory runs hooks; `from_raw` assigns directly and stays private so the
    /// only hook-free path is the predefined-instance initializer in this same impl block.
    pub(super) fn emit_inherent_impl(
        &self,
        intent: &TypeIntent,
        name: &syn::Ident,
        raw: &TokenStream,
        rt: &TokenStream,
    ) -> Result<TokenStream, EmitError> {
        let predefined = self.emit_predefined_accessors(intent, name)?;
        Ok(quote! {
            impl #name {
                /// Construct directly from an already-trusted value, bypassing hooks.
                fn from_raw(value: #raw) -> Self {
                    Self { value }
                }

                /// Validated factory: normalize strictly before validate, then construct.
                pub fn from_value(raw: #raw) -> Result<Self, #rt::InvariantViolation> {
                    let normalized = <Self as #rt::ValueRules>::normalize(raw);
                    <Self as #rt::ValueRules>::validate(&normalized)?;
                    Ok(Self::from_raw(normalized))
                }

                /// Borrow the wrapped value.
                pub fn value(&self) -> &#raw {
                    &self.value
                }

                /// Consume the wrapper, returning the wrapped value.
                pub fn into_inner(self) -> #raw {
                    self.value
                }

                #(#predefined)*
            }
        })
    }

    /// Hook wiring.
    ///
    /// When neither hook is customized, emit the defaults-only `ValueRules` impl so the
    /// identity/no-op behavior applies. When the user customizes either hook, their own
    /// `impl ValueRules` next to the declaration is the one the factory resolves, and the
    /// generator emits nothing here.
    pub(super) fn emit_hook_wiring(
        &self,
        intent: &TypeIntent,
        name: &syn::Ident,
        raw: &TokenStream,
        rt: &TokenStream,
    ) -> TokenStream {
        if intent.has_normalize || intent.has_validate {
            return TokenStream::new();
        }
        quote! {
            impl #rt::ValueRules for #name {
                type Raw = #raw;
            }
        }
    }
}

/// `Copy` is derived only for inline-value wrappers over `Copy` primitives.
fn derives_copy(intent: &TypeIntent, plan: &SynthesisPlan) -> bool {
    plan.equality == EqualityStrategy::InlineValue && taxonomy::is_copy(intent.kind)
}
