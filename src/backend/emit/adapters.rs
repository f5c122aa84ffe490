//! Wire and storage adapters.
//!
//! Wire adapters are serde impls attached to the wrapper type; storage adapters implement
//! the runtime's `StoreCodec` against the document store's value model. Both decode paths
//! route through the validated factory, so round-tripping is consistent with the declared
//! hooks. The per-kind branching follows the taxonomy row the strategy selector handed
//! over; the encode/decode arithmetic itself lives in the runtime's `encode` helpers.

use minted_core::taxonomy::{PrimitiveKind, StorageEncoding, WireEncoding};
use proc_macro2::TokenStream;
use quote::quote;

use super::Synthesizer;
use crate::backend::strategy::SynthesisPlan;
use crate::frontend::intent::TypeIntent;

impl Synthesizer<'_> {
    /// `serde::Serialize` / `serde::Deserialize` for the wrapper.
    pub(super) fn emit_wire_adapters(
        &self,
        plan: &SynthesisPlan,
        name: &syn::Ident,
        raw: &TokenStream,
        rt: &TokenStream,
    ) -> TokenStream {
        let (serialize_body, decode_raw) = match plan.serialization.wire {
            WireEncoding::NativeScalar => (
                quote!(serde::Serialize::serialize(&self.value, serializer)),
                quote!(let raw = <#raw as serde::Deserialize>::deserialize(deserializer)?;),
            ),
            // No native duration scalar on the wire: integer nanoseconds.
            WireEncoding::NanosecondCount => (
                quote!(serde::Serialize::serialize(
                    &#rt::encode::encode_duration(self.value),
                    serializer
                )),
                quote! {
                    let nanos = <i64 as serde::Deserialize>::deserialize(deserializer)?;
                    let raw = #rt::encode::decode_duration(nanos);
                },
            ),
        };

        quote! {
            impl serde::Serialize for #name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    #serialize_body
                }
            }

            impl<'de> serde::Deserialize<'de> for #name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    #decode_raw
                    #name::from_value(raw).map_err(serde::de::Error::custom)
                }
            }
        }
    }

    /// `StoreCodec` for the wrapper, per the taxonomy's storage encoding.
    pub(super) fn emit_storage_adapter(
        &self,
        intent: &TypeIntent,
        plan: &SynthesisPlan,
        name: &syn::Ident,
        rt: &TokenStream,
    ) -> TokenStream {
        let name_str = name.to_string();
        let (to_stored, from_match) = match plan.serialization.storage {
            StorageEncoding::NativeScalar => native_scalar_codec(intent.kind, &name_str, rt),
            StorageEncoding::EpochDayNumber => (
                quote!(#rt::StoredValue::Int64(#rt::encode::encode_date(self.value))),
                quote! {
                    #rt::StoredValue::Int64(days) => #rt::encode::decode_date(days)?,
                    other => {
                        return Err(#rt::StoreError::unexpected_shape(#name_str, "Int64", &other));
                    }
                },
            ),
            StorageEncoding::NanosSinceMidnight => (
                quote!(#rt::StoredValue::Int64(#rt::encode::encode_time_of_day(self.value))),
                quote! {
                    #rt::StoredValue::Int64(nanos) => #rt::encode::decode_time_of_day(nanos)?,
                    other => {
                        return Err(#rt::StoreError::unexpected_shape(#name_str, "Int64", &other));
                    }
                },
            ),
            StorageEncoding::EpochMilliseconds => (
                quote!(#rt::StoredValue::DateTime(#rt::encode::encode_date_time(self.value))),
                quote! {
                    #rt::StoredValue::DateTime(millis) => #rt::encode::decode_date_time(millis)?,
                    other => {
                        return Err(#rt::StoreError::unexpected_shape(#name_str, "DateTime", &other));
                    }
                },
            ),
            StorageEncoding::NanosecondCount => (
                quote!(#rt::StoredValue::Int64(#rt::encode::encode_duration(self.value))),
                quote! {
                    #rt::StoredValue::Int64(nanos) => #rt::encode::decode_duration(nanos),
                    other => {
                        return Err(#rt::StoreError::unexpected_shape(#name_str, "Int64", &other));
                    }
                },
            ),
            StorageEncoding::InstantWithOffsetDocument => (
                quote!(#rt::encode::encode_date_time_with_offset(self.value)),
                quote! {
                    #rt::StoredValue::Document(doc) => {
                        #rt::encode::decode_date_time_with_offset(#name_str, &doc)?
                    }
                    other => {
                        return Err(#rt::StoreError::unexpected_shape(#name_str, "Document", &other));
                    }
                },
            ),
        };

        quote! {
            impl #rt::StoreCodec for #name {
                fn to_stored(&self) -> #rt::StoredValue {
                    #to_stored
                }

                fn from_stored(stored: #rt::StoredValue) -> Result<Self, #rt::StoreError> {
                    let raw = match stored {
                        #from_match
                    };
                    #name::from_value(raw).map_err(#rt::StoreError::from)
                }
            }
        }
    }
}

/// Pass-through codec bodies for the kinds stored as their native scalar.
fn native_scalar_codec(
    kind: PrimitiveKind,
    name_str: &str,
    rt: &TokenStream,
) -> (TokenStream, TokenStream) {
    let (variant, variant_str) = match kind {
        PrimitiveKind::Int32 => (quote!(Int32), "Int32"),
        PrimitiveKind::Int64 => (quote!(Int64), "Int64"),
        PrimitiveKind::Float64 => (quote!(Float64), "Float64"),
        PrimitiveKind::Text => (quote!(Text), "Text"),
        PrimitiveKind::Bool => (quote!(Bool), "Bool"),
        PrimitiveKind::Identifier => (quote!(Identifier), "Identifier"),
        _ => unreachable!("INVARIANT: the taxonomy assigns NativeScalar storage only to scalar kinds"),
    };
    let value_expr = if kind == PrimitiveKind::Text {
        quote!(self.value.clone())
    } else {
        quote!(self.value)
    };
    (
        quote!(#rt::StoredValue::#variant(#value_expr)),
        quote! {
            #rt::StoredValue::#variant(value) => value,
            other => {
                return Err(#rt::StoreError::unexpected_shape(#name_str, #variant_str, &other));
            }
        },
    )
}
