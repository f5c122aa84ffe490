//! Predefined-instance accessors.
//!
//! Each predefined instance becomes a one-time-initialized static behind an accessor. The
//! initializer constructs through the raw constructor directly from the validated literal:
//! predefined constants are trusted by construction and must not be rejected by rules
//! written for external input. Literal decomposition happens at generation time, so the
//! emitted initializers contain only plain integer arguments.

use proc_macro2::TokenStream;
use quote::quote;

use super::{EmitError, Synthesizer, parse_ident};
use crate::backend::naming::{screaming_case, snake_case};
use crate::frontend::intent::{TypeIntent, TypedValue};

impl Synthesizer<'_> {
    pub(super) fn emit_predefined_accessors(
        &self,
        intent: &TypeIntent,
        name: &syn::Ident,
    ) -> Result<Vec<TokenStream>, EmitError> {
        let mut accessors = Vec::with_capacity(intent.predefined.len());
        for (member_name, value) in &intent.predefined {
            let accessor = parse_ident(&snake_case(member_name))?;
            let static_name = parse_ident(&screaming_case(member_name))?;
            let ctor = constructor_tokens(value);
            let doc = format!("`{member_name}` predefined instance.");
            accessors.push(quote! {
                #[doc = #doc]
                pub fn #accessor() -> &'static Self {
                    static #static_name: std::sync::LazyLock<#name> =
                        std::sync::LazyLock::new(|| #name::from_raw(#ctor));
                    &#static_name
                }
            });
        }
        Ok(accessors)
    }
}

/// Render a typed literal as the expression handed to `from_raw`.
///
/// Temporal values decompose into integer components here; the `.unwrap()` calls in the
/// output re-assemble components that came from a valid value, so they cannot fail.
fn constructor_tokens(value: &TypedValue) -> TokenStream {
    use chrono::{Datelike, Timelike};

    match value {
        TypedValue::Int32(v) => quote!(#v),
        TypedValue::Int64(v) => quote!(#v),
        TypedValue::Float64(v) => quote!(#v),
        TypedValue::Text(v) => quote!(#v.to_owned()),
        TypedValue::Bool(v) => quote!(#v),
        TypedValue::Identifier(v) => {
            let bits = v.as_u128();
            quote!(uuid::Uuid::from_u128(#bits))
        }
        TypedValue::Date(v) => {
            let days = v.num_days_from_ce();
            quote!(chrono::NaiveDate::from_num_days_from_ce_opt(#days).unwrap())
        }
        TypedValue::TimeOfDay(v) => {
            let secs = v.num_seconds_from_midnight();
            let frac = v.nanosecond();
            quote!(chrono::NaiveTime::from_num_seconds_from_midnight_opt(#secs, #frac).unwrap())
        }
        TypedValue::DateTime(v) => {
            let secs = v.timestamp();
            let nanos = v.timestamp_subsec_nanos();
            quote!(chrono::DateTime::from_timestamp(#secs, #nanos).unwrap())
        }
        TypedValue::DateTimeWithOffset(v) => {
            let secs = v.timestamp();
            let nanos = v.timestamp_subsec_nanos();
            let offset = v.offset().local_minus_utc();
            quote! {
                chrono::DateTime::from_timestamp(#secs, #nanos)
                    .unwrap()
                    .with_timezone(&chrono::FixedOffset::east_opt(#offset).unwrap())
            }
        }
        TypedValue::Duration(v) => {
            let nanos = v
                .num_nanoseconds()
                .expect("INVARIANT: duration literals are validated to fit i64 nanoseconds");
            quote!(chrono::TimeDelta::nanoseconds(#nanos))
        }
    }
}
