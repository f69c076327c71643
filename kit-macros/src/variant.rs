//! Variant attribute parsing shared by the enum derives.

use darling::Error;
use syn::parse::Result;
use syn::{DeriveInput, Fields, Ident, LitStr};

/// Arguments of the `#[string_value(...)]` variant attribute.
#[derive(Debug, Default)]
pub(crate) struct StringValueArgs {
    /// Label used instead of the variant name
    pub label: Option<String>,
}

impl StringValueArgs {
    /// Parse the arguments of a string_value attribute
    pub fn parse(attribute: &syn::Attribute) -> Result<Self> {
        let mut label = None;
        attribute.parse_nested_meta(|meta| {
            match meta.path.get_ident().ok_or(Error::custom("no ident"))?.to_string().as_str() {
                "label" => {
                    let value = meta
                        .value()
                        .map_err(|_| Error::custom("label must be followed by '= [text]'.  i.e. label = \"Yes\"".to_string()))?;
                    let text: LitStr = value.parse()?;
                    label = Some(text.value());
                }
                other => {
                    return Err(meta.error(format!(
                        "Unsupported string_value property: '{other}'.\nSupported properties are: label"
                    )))
                }
            };
            Ok(())
        })?;
        Ok(Self { label })
    }
}

/// A fieldless enum variant.
pub(crate) struct UnitVariant {
    pub ident: Ident,
    pub label: String,
}

/// Collect the variants of a fieldless enum, rejecting anything else.
pub(crate) fn unit_variants(ast: &DeriveInput, derive: &str) -> Result<Vec<UnitVariant>> {
    let syn::Data::Enum(data) = &ast.data else {
        return Err(Error::custom(format!("{derive} can only be derived for enums"))
            .with_span(&ast.ident)
            .into());
    };

    let mut variants = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::custom(format!("{derive} variants cannot have fields"))
                .with_span(variant)
                .into());
        }
        let mut args = StringValueArgs::default();
        for attribute in variant.attrs.iter().filter(|a| a.path().is_ident("string_value")) {
            if args.label.is_some() {
                return Err(Error::custom("string_value cannot be specified more than once")
                    .with_span(attribute)
                    .into());
            }
            args = StringValueArgs::parse(attribute)?;
        }
        variants.push(UnitVariant {
            label: args.label.unwrap_or_else(|| variant.ident.to_string()),
            ident: variant.ident.clone(),
        });
    }
    Ok(variants)
}
