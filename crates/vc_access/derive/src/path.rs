//! Paths to items of `vc_access`, as seen from the invoking crate.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_access` crate.
///
/// 1. For crates that depend on `vc_access`, `::vc_access` is returned.
/// 2. For crates that depend on `vc_lens`, `::vc_lens::access` is returned.
/// 3. Otherwise `::vc_access` is returned, which may be incorrect.
///
/// Reading the manifest is not cheap, call this once per macro invocation.
pub(crate) fn vc_access() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_access"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn info_(vc_access_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_access_path::info
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(vc_access_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_access_path::__macro_exports::auto_register
    }
}
