use proc_macro2::TokenStream;
use quote::quote;

use super::visibility_tokens;
use crate::derive_data::{AccessorMethod, InspectImpl, MethodShape};

/// Generate the cleaned impl block followed by its `InspectMethods` impl.
pub(crate) fn impl_trait_inspect_methods(
    info: &InspectImpl,
    vc_access_path: &syn::Path,
) -> TokenStream {
    let info_ = crate::path::info_(vc_access_path);
    let item = &info.item;
    let self_ty = &item.self_ty;

    let generics = crate::utils::with_static_bounds(&item.generics);
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    let pushes = info.methods.iter().map(|method| push_method(&info_, method));

    quote! {
        #item

        impl #impl_generics #info_::InspectMethods for #self_ty #where_clause {
            fn register_methods(members: &mut #info_::Members<Self>) {
                #(#pushes)*
            }
        }
    }
}

fn push_method(info_: &TokenStream, method: &AccessorMethod) -> TokenStream {
    let ident = &method.ident;
    let name = ident.to_string();
    let visibility = visibility_tokens(info_, &method.vis);

    let info = match &method.shape {
        MethodShape::Getter { value } => quote! {
            #info_::MethodInfo::<Self>::getter::<#value>(#name, Self::#ident)
        },
        MethodShape::Setter {
            value,
            returns: false,
        } => quote! {
            #info_::MethodInfo::<Self>::setter::<#value>(#name, Self::#ident)
        },
        MethodShape::Setter {
            value,
            returns: true,
        } => quote! {
            #info_::MethodInfo::<Self>::setter::<#value>(#name, |this, value| {
                let _ = Self::#ident(this, value);
            })
        },
    };

    quote! {
        members.push_method(#info.with_visibility(#visibility));
    }
}
