// -----------------------------------------------------------------------------
// Modules

mod trait_inspect;
mod trait_inspect_methods;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use trait_inspect::{impl_auto_register, impl_trait_inspect};
pub(crate) use trait_inspect_methods::impl_trait_inspect_methods;

use proc_macro2::TokenStream;
use quote::quote;

/// Maps a Rust visibility onto `Visibility`.
pub(crate) fn visibility_tokens(info_: &TokenStream, vis: &syn::Visibility) -> TokenStream {
    match vis {
        syn::Visibility::Public(_) => quote!(#info_::Visibility::Public),
        syn::Visibility::Restricted(_) => quote!(#info_::Visibility::Restricted),
        syn::Visibility::Inherited => quote!(#info_::Visibility::Private),
    }
}
