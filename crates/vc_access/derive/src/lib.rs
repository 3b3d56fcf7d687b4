//! See following macros:
//!
//! - [`Inspect`]
//! - [`inspect_methods`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

static INSPECT_ATTRIBUTE_NAME: &str = "inspect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Member Table Derivation
///
/// `#[derive(Inspect)]` implements `Inspect` for a struct with named fields.
/// Every field is registered in declaration order, with the visibility
/// it is declared with:
///
/// - `pub` => `Visibility::Public`
/// - `pub(crate)`, `pub(super)`, `pub(in path)` => `Visibility::Restricted`
/// - no modifier => `Visibility::Private`
///
/// Tuple structs, unit structs, enums, unions and types with lifetime
/// parameters are rejected.
///
/// ## Field Attributes
///
/// ```rust, ignore
/// #[derive(Inspect)]
/// struct Foo {
///     #[inspect(skip)]       // not registered
///     cache: Vec<u8>,
///     #[inspect(readonly)]   // registered as immutable
///     pub id: u64,
///     #[inspect(rename = "label")]
///     pub name: String,
///     #[inspect(parent)]     // members of `Base` become inherited members
///     base: Base,
/// }
/// ```
///
/// A `parent` field must implement `Inspect` itself. It is not registered as
/// a field, and cannot be combined with `readonly` or `rename`.
///
/// ## Accessor Methods
///
/// `#[inspect(methods)]` appends the methods registered by
/// [`inspect_methods`] on an inherent impl block of the same type.
///
/// ```rust, ignore
/// #[derive(Inspect)]
/// #[inspect(methods)]
/// struct Foo { /* ... */ }
///
/// #[inspect_methods]
/// impl Foo { /* ... */ }
/// ```
///
/// ## Auto Registration
///
/// `#[inspect(auto_register)]` submits the type for
/// `TypeRegistry::auto_register`. It has no effect on generic types, and is
/// a no-op when the `auto_register` feature is disabled.
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let info = match derive_data::InspectStruct::from_input(&ast) {
        Ok(info) => info,
        Err(err) => return err.into_compile_error().into(),
    };

    let vc_access_path = path::vc_access();

    let inspect_impl = impls::impl_trait_inspect(&info, &vc_access_path);
    let auto_register = impls::impl_auto_register(&info, &vc_access_path);

    TokenStream::from(quote! {
        const _: () = {
            #inspect_impl

            #auto_register
        };
    })
}

/// # Accessor Method Registration
///
/// Placed on an inherent impl block, implements `InspectMethods` for the
/// type with every method shaped like an accessor:
///
/// - getter: `fn(&self) -> V`
/// - setter: `fn(&mut self, V)`, a return value is allowed and discarded
///
/// `V` must be an owned type. Generic, `async` and `unsafe` methods, and
/// methods of any other shape, are left out. Methods are registered under
/// their own name, the getter and setter conventions are applied when
/// accessors are resolved.
///
/// `#[inspect(skip)]` on a method leaves it out as well.
///
/// ```rust, ignore
/// #[inspect_methods]
/// impl Foo {
///     pub fn get_name(&self) -> String { /* ... */ }
///     pub fn set_name(&mut self, name: String) { /* ... */ }
///     #[inspect(skip)]
///     pub fn get_cache(&self) -> Vec<u8> { /* ... */ }
/// }
/// ```
#[proc_macro_attribute]
pub fn inspect_methods(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as ItemImpl);

    let info = match derive_data::InspectImpl::from_item(item) {
        Ok(info) => info,
        Err(err) => return err.into_compile_error().into(),
    };

    let vc_access_path = path::vc_access();

    TokenStream::from(impls::impl_trait_inspect_methods(&info, &vc_access_path))
}
