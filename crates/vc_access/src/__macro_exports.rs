//! Items used by the code generated in `vc_access_derive`.
//!
//! Not public API.

// -----------------------------------------------------------------------------
// auto_register

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::info::{Inspect, Members};
    use crate::registry::TypeRegistry;

    /// A registration function submitted by `#[inspect(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// Implemented for every [`Inspect`] type, gives the derive
    /// macro a plain `fn` pointer to submit.
    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: Inspect> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    /// Registered on every platform where `inventory` works.
    pub struct __AvailFlag;

    impl Inspect for __AvailFlag {
        fn members() -> Members<Self> {
            Members::new()
        }
    }

    inventory::submit! {
        __AutoRegisterFunc(<__AvailFlag as __RegisterType>::__register)
    }

    pub fn __register_types(registry: &mut TypeRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
