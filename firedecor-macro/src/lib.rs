//! Procedural macros for use in firedecor.

use proc_macro2::{Span, TokenStream};

use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, FieldsNamed, LitStr, Meta};

/// Derives the `ConfigSection` trait.
///
/// Every field tagged with `#[key]` is exposed as an option under its
/// field name. `#[key("other_name")]` exposes it under a different name,
/// which is useful when the option store uses a name that is not a valid
/// Rust identifier.
///
/// ## Example
///
/// ```ignore
/// #[derive(ConfigSection)]
/// pub struct ThemeConfig {
///     #[key]
///     button_size: i32,
///     #[key("border-size")]
///     border_size: String,
///
///     cached: u32, // untagged fields are not exposed.
/// }
/// ```
#[proc_macro_derive(ConfigSection, attributes(key))]
pub fn configsection_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_configsection(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_configsection(input: DeriveInput) -> syn::Result<TokenStream> {
    let Data::Struct(datastruct) = input.data else {
        return Err(syn::Error::new(
            Span::call_site(),
            "ConfigSection can only be derived on structs",
        ));
    };

    let Fields::Named(fields) = datastruct.fields else {
        return Err(syn::Error::new(
            Span::call_site(),
            "ConfigSection cannot be derived on structs with unnamed fields",
        ));
    };

    let keys = collect_keys(&fields)?;

    let arms = keys.iter().map(|(name, ident)| quote! { #name => Some(&self.#ident), });
    let names = keys.iter().map(|(name, _)| name);

    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ConfigSection for #name #ty_generics #where_clause {
            fn get_key(&self, name: &str) -> Option<&dyn std::any::Any> {
                match name {
                    #(#arms)*
                    _ => None,
                }
            }

            fn keys(&self) -> &'static [&'static str] {
                &[#(#names),*]
            }
        }
    })
}

/// Collects `(exposed name, field ident)` pairs for every `#[key]` field.
fn collect_keys(fields: &FieldsNamed) -> syn::Result<Vec<(String, syn::Ident)>> {
    let mut keys = Vec::new();

    for field in fields.named.iter() {
        let Some(name) = key_name(field)? else {
            continue;
        };
        // named fields always carry an ident
        if let Some(ident) = field.ident.clone() {
            keys.push((name.unwrap_or_else(|| ident.to_string()), ident));
        }
    }

    Ok(keys)
}

/// Looks for `#[key]` or `#[key("name")]` on a given Field.
///
/// Returns `None` if the field is untagged, and `Some(None)` if it
/// is tagged without an explicit name.
fn key_name(field: &Field) -> syn::Result<Option<Option<String>>> {
    for attr in field.attrs.iter() {
        if !attr.path().is_ident("key") {
            continue;
        }

        return match &attr.meta {
            Meta::Path(_) => Ok(Some(None)),
            Meta::List(_) => {
                let lit: LitStr = attr.parse_args()?;
                Ok(Some(Some(lit.value())))
            }
            Meta::NameValue(nv) => Err(syn::Error::new_spanned(
                nv,
                "expected #[key] or #[key(\"name\")]",
            )),
        };
    }

    Ok(None)
}
