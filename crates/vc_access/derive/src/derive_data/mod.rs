//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod inspect_impl;
mod inspect_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, MethodAttributes, TypeAttributes};

pub(crate) use inspect_impl::{AccessorMethod, InspectImpl, MethodShape};
pub(crate) use inspect_struct::{InspectStruct, StructField};
