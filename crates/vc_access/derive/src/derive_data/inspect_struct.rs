use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Visibility, spanned::Spanned};

use super::{FieldAttributes, TypeAttributes};

// -----------------------------------------------------------------------------
// StructField

/// A named field that takes part in the member table.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub vis: &'a Visibility,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// The registered property name, `rename` or the field name.
    pub fn property_name(&self) -> String {
        match &self.attrs.rename {
            Some(name) => name.value(),
            None => self.ident.to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// InspectStruct

/// The parsed input of `#[derive(Inspect)]`.
pub(crate) struct InspectStruct<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub attrs: TypeAttributes,
    pub fields: Vec<StructField<'a>>,
}

impl<'a> InspectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Inspect` cannot be derived for enums, only for structs with named fields",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Inspect` cannot be derived for unions, only for structs with named fields",
                ));
            }
        };

        let named = match &data.fields {
            Fields::Named(named) => named,
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "`Inspect` cannot be derived for tuple structs, implement it by hand",
                ));
            }
            Fields::Unit => {
                return Err(syn::Error::new(
                    input.ident.span(),
                    "`Inspect` cannot be derived for unit structs, they have no fields",
                ));
            }
        };

        crate::utils::reject_lifetimes(&input.generics)?;

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if attrs.skip.is_some() {
                continue;
            }
            // Named fields always have an ident.
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            fields.push(StructField {
                ident,
                ty: &field.ty,
                vis: &field.vis,
                attrs,
            });
        }

        Ok(Self {
            ident: &input.ident,
            generics: &input.generics,
            attrs,
            fields,
        })
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }
}
