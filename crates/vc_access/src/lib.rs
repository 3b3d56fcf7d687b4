#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macros emit `::vc_access::...` paths, so the crate must be
// reachable under its own name for internal tests and doctests.
extern crate self as vc_access;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod hash;

pub mod factory;
pub mod info;
pub mod inspect;
pub mod lens;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::AccessError;
pub use factory::AccessorFactory;
pub use info::{Inspect, InspectMethods};
pub use inspect::TypeInspector;
pub use vc_access_derive as derive;
