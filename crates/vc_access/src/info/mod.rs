//! Provide member tables, the inspectable surface of a type.
//!
//! ## Menu
//!
//! - [`Type`]: A `TypeId` with its type path.
//! - [`Visibility`]: `Public`, `Restricted` or `Private`, as declared in source.
//! - [`Mutability`]: Whether a field may be written.
//! - [`FieldInfo`]: A registered field, readable and possibly writable.
//! - [`MethodInfo`]: A registered accessor method, see [`MethodKind`].
//! - [`Members`]: The ordered table of fields and methods of a type,
//!   including members lifted from embedded parents.
//! - [`Inspect`]: A trait providing the [`Members`] of a type.
//! - [`InspectMethods`]: A trait contributing accessor methods to [`Members`].
//!
//! Rust has no runtime reflection, member tables are generated once per type
//! by the derive macros or built by hand, and then shared by inspectors.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod inspectable;
mod members;
mod method_info;
mod ty;
mod visibility;

pub(crate) mod dispatch;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::FieldInfo;
pub use inspectable::{Inspect, InspectMethods};
pub use members::Members;
pub use method_info::{MethodInfo, MethodKind};
pub use ty::Type;
pub use visibility::{Mutability, Visibility};

pub(crate) use method_info::MethodBody;
