//! `RawEnum` derive.
//!
//! The raw type is taken from the enum's `#[repr(...)]`, and each variant's raw value is its
//! discriminant.

use darling::Error;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::Result;
use syn::{DeriveInput, Ident};

use crate::variant::unit_variants;

const REPR_TYPES: &[&str] = &["u8", "u16", "u32", "u64", "u128", "i8", "i16", "i32", "i64", "i128"];

/// Find the integer type in `#[repr(...)]`.
fn repr_type(ast: &DeriveInput) -> Result<Ident> {
    let mut repr = None;
    for attribute in ast.attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attribute.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if REPR_TYPES.contains(&ident.to_string().as_str()) {
                    repr = Some(ident.clone());
                    return Ok(());
                }
            }
            // repr(align(N)) and friends carry arguments
            if meta.input.peek(syn::token::Paren) {
                let _content;
                syn::parenthesized!(_content in meta.input);
            }
            Ok(())
        })?;
    }
    repr.ok_or_else(|| {
        Error::custom("RawEnum requires an integer representation (i.e. `#[repr(u8)]`)")
            .with_span(&ast.ident)
            .into()
    })
}

pub(crate) fn expand(ast: &DeriveInput) -> Result<TokenStream2> {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    let raw = repr_type(ast)?;
    let variants = unit_variants(ast, "RawEnum")?;
    let idents: Vec<_> = variants.iter().map(|v| &v.ident).collect();

    Ok(quote! {
        impl #impl_generics ::bluecap_kit::enumeration::RawEnum for #name #ty_generics #where_clause {
            type Raw = #raw;

            fn from_raw(raw: #raw) -> ::core::option::Option<Self> {
                #(
                    if raw == Self::#idents as #raw {
                        return ::core::option::Option::Some(Self::#idents);
                    }
                )*
                ::core::option::Option::None
            }

            fn raw_value(&self) -> #raw {
                *self as #raw
            }
        }
    })
}
