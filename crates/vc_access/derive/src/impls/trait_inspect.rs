use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use super::visibility_tokens;
use crate::derive_data::{InspectStruct, StructField};

/// Generate the `Inspect` impl of a struct with named fields.
pub(crate) fn impl_trait_inspect(info: &InspectStruct, vc_access_path: &syn::Path) -> TokenStream {
    let info_ = crate::path::info_(vc_access_path);
    let ident = info.ident;

    let generics = crate::utils::with_static_bounds(info.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_count = info
        .fields
        .iter()
        .filter(|field| field.attrs.parent.is_none())
        .count();

    let pushes = info.fields.iter().map(|field| push_member(&info_, field));

    let methods = match info.attrs.methods {
        Some(span) => quote_spanned! { span =>
            <Self as #info_::InspectMethods>::register_methods(&mut members);
        },
        None => crate::utils::empty(),
    };

    quote! {
        impl #impl_generics #info_::Inspect for #ident #ty_generics #where_clause {
            fn members() -> #info_::Members<Self> {
                let mut members = #info_::Members::<Self>::with_capacity(#field_count, 0);
                #(#pushes)*
                #methods
                members
            }
        }
    }
}

/// Submits `Self` for `TypeRegistry::auto_register`.
///
/// Only for `#[inspect(auto_register)]` on non-generic types, the concrete
/// instances of a generic type are unknown here. Empty without the
/// `auto_register` feature.
pub(crate) fn impl_auto_register(info: &InspectStruct, vc_access_path: &syn::Path) -> TokenStream {
    #[cfg(feature = "auto_register")]
    if let Some(span) = info.attrs.auto_register
        && !info.impl_with_generic()
    {
        let auto_register_ = crate::path::auto_register_(vc_access_path);
        let ident = info.ident;
        let register = quote_spanned! { span =>
            <#ident as #auto_register_::__RegisterType>::__register
        };

        return quote! {
            #auto_register_::inventory::submit! {
                #auto_register_::__AutoRegisterFunc(#register)
            }
        };
    }

    let _ = (info, vc_access_path);
    crate::utils::empty()
}

fn push_member(info_: &TokenStream, field: &StructField) -> TokenStream {
    let member = field.ident;
    let ty = field.ty;

    if let Some(span) = field.attrs.parent {
        return quote_spanned! { span =>
            members.push_parent::<#ty>(
                |this| &this.#member,
                |this| &mut this.#member,
            );
        };
    }

    let name = field.property_name();
    let visibility = visibility_tokens(info_, field.vis);

    let info = if field.attrs.readonly.is_some() {
        quote! {
            #info_::FieldInfo::<Self>::readonly::<#ty>(#name, |this| &this.#member)
        }
    } else {
        quote! {
            #info_::FieldInfo::<Self>::new::<#ty>(
                #name,
                |this| &this.#member,
                |this| &mut this.#member,
            )
        }
    };

    quote! {
        members.push_field(#info.with_visibility(#visibility));
    }
}
