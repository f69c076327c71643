//! `StringEnum` derive.
//!
//! Every variant maps to a text label, the variant name unless overridden with
//! `#[string_value(label = "...")]`. Labels must be unique.

use std::collections::HashSet;

use darling::Error;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::Result;
use syn::DeriveInput;

use crate::variant::unit_variants;

pub(crate) fn expand(ast: &DeriveInput) -> Result<TokenStream2> {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    let variants = unit_variants(ast, "StringEnum")?;

    let mut seen = HashSet::new();
    for variant in &variants {
        if !seen.insert(variant.label.as_str()) {
            return Err(Error::custom(format!("duplicate string_value label '{}'", variant.label))
                .with_span(&variant.ident)
                .into());
        }
    }

    let idents: Vec<_> = variants.iter().map(|v| &v.ident).collect();
    let labels: Vec<_> = variants.iter().map(|v| &v.label).collect();

    Ok(quote! {
        impl #impl_generics ::bluecap_kit::enumeration::StringEnum for #name #ty_generics #where_clause {
            const VARIANTS: &'static [Self] = &[#(Self::#idents),*];

            fn string_value(&self) -> &'static str {
                match *self {
                    #(Self::#idents => #labels,)*
                }
            }
        }
    })
}
