//! Provide a registry of member tables.
//!
//! ## Menu
//!
//! - [`TypeMeta`]: A registered member table, with the property names it exposes.
//! - [`TypeRegistry`]: A container for storing and looking up `TypeMeta`s.
//! - [`TypeRegistryArc`]: A `TypeRegistry` behind an `Arc<RwLock<_>>`, requires `std`.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`] .
//!
//! We use the [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//! If it is not supported, the function returns `false` without
//! registering anything.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod type_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_meta::TypeMeta;
pub use type_registry::TypeRegistry;

#[cfg(feature = "std")]
pub use type_registry::TypeRegistryArc;
