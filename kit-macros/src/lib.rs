extern crate proc_macro;

mod raw_enum;
mod string_enum;
mod variant;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive `StringEnum` for a fieldless enum.
///
/// Labels default to the variant name:
///
/// ```ignore
/// #[derive(Clone, Copy, StringEnum)]
/// enum Enabled {
///     #[string_value(label = "No")]
///     Off,
///     #[string_value(label = "Yes")]
///     On,
/// }
/// ```
#[proc_macro_derive(StringEnum, attributes(string_value))]
pub fn derive_string_enum(item: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(item as DeriveInput);
    match string_enum::expand(&ast) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derive `RawEnum` for a fieldless enum with an integer `#[repr]`.
#[proc_macro_derive(RawEnum)]
pub fn derive_raw_enum(item: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(item as DeriveInput);
    match raw_enum::expand(&ast) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
