//! Property lookup over member tables.
//!
//! ## Menu
//!
//! - [`TypeInspector`]: finds getter/setter methods and readable/writable
//!   fields for a property name.
//! - [`InspectOptions`]: which members are considered, see [`ScanScope`],
//!   [`AccessLevel`] and [`Conventions`].

mod inspector;
mod naming;
mod options;

pub use inspector::TypeInspector;
pub use options::{AccessLevel, Conventions, InspectOptions, ScanScope};
