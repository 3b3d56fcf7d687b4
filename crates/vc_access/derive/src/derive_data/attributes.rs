use proc_macro2::Span;
use syn::{Attribute, LitStr, spanned::Spanned};

use crate::INSPECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes on the derived type, `#[inspect(...)]`.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[inspect(methods)]`, pull in the `InspectMethods` impl.
    pub methods: Option<Span>,
    /// `#[inspect(auto_register)]`
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(INSPECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("methods") {
                    this.methods = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("auto_register") {
                    this.auto_register = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("unknown type attribute, expected `methods` or `auto_register`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes on a field of the derived type, `#[inspect(...)]`.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[inspect(skip)]`, the field is not registered.
    pub skip: Option<Span>,
    /// `#[inspect(readonly)]`
    pub readonly: Option<Span>,
    /// `#[inspect(parent)]`, the members of the field type are lifted.
    pub parent: Option<Span>,
    /// `#[inspect(rename = "name")]`
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(INSPECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = Some(meta.path.span());
                } else if meta.path.is_ident("readonly") {
                    this.readonly = Some(meta.path.span());
                } else if meta.path.is_ident("parent") {
                    this.parent = Some(meta.path.span());
                } else if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() {
                        return Err(syn::Error::new(name.span(), "property name cannot be empty"));
                    }
                    this.rename = Some(name);
                } else {
                    return Err(meta.error(
                        "unknown field attribute, expected `skip`, `readonly`, `parent` or `rename`",
                    ));
                }
                Ok(())
            })?;
        }

        this.validity()?;
        Ok(this)
    }

    fn validity(&self) -> syn::Result<()> {
        if let Some(span) = self.parent {
            if self.readonly.is_some() {
                return Err(syn::Error::new(span, "`parent` cannot be combined with `readonly`"));
            }
            if self.rename.is_some() {
                return Err(syn::Error::new(span, "`parent` cannot be combined with `rename`"));
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// MethodAttributes

/// Attributes on a method inside `#[inspect_methods]`.
#[derive(Default, Debug)]
pub(crate) struct MethodAttributes {
    /// `#[inspect(skip)]`, the method is not registered.
    pub skip: Option<Span>,
}

impl MethodAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(INSPECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("unknown method attribute, expected `skip`"))
                }
            })?;
        }

        Ok(this)
    }
}
