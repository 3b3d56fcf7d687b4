use crate::info::Members;

// -----------------------------------------------------------------------------
// Inspect

/// A type with a member table.
///
/// The table is built on every call; [`TypeInspector`] and [`TypeRegistry`]
/// build it once and share it.
///
/// # Implementation
///
/// Use [`#[derive(Inspect)]`](crate::derive::Inspect), or implement it by hand:
///
/// ```
/// use vc_access::info::{FieldInfo, Inspect, Members};
///
/// pub struct Meter(pub f64);
///
/// impl Inspect for Meter {
///     fn members() -> Members<Self> {
///         Members::<Self>::new().with_field(FieldInfo::new::<f64>("value", |m| &m.0, |m| &mut m.0))
///     }
/// }
///
/// assert!(Meter::members().field("value").is_some());
/// ```
///
/// [`TypeInspector`]: crate::TypeInspector
/// [`TypeRegistry`]: crate::registry::TypeRegistry
pub trait Inspect: Sized + 'static {
    /// Builds the member table of `Self`.
    fn members() -> Members<Self>;
}

// -----------------------------------------------------------------------------
// InspectMethods

/// Contributes accessor methods to a member table.
///
/// Implemented by [`#[inspect_methods]`](crate::derive::inspect_methods)
/// on an inherent `impl` block, and consumed by `#[derive(Inspect)]`
/// when the type is marked `#[inspect(methods)]`.
pub trait InspectMethods: Sized + 'static {
    /// Appends the accessor methods of `Self` to `members`.
    fn register_methods(members: &mut Members<Self>);
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::{Inspect, inspect_methods};
    use crate::info::{FieldInfo, Inspect, MethodInfo, MethodKind, Mutability, Visibility};

    #[derive(Inspect)]
    pub struct Base {
        pub id: u64,
        pub(crate) kind: u8,
    }

    #[derive(Inspect)]
    #[inspect(methods)]
    pub struct Widget {
        pub width: u32,
        #[inspect(readonly)]
        pub label: String,
        #[inspect(rename = "h")]
        height: u32,
        #[inspect(skip)]
        #[allow(dead_code, reason = "skipped by the derive")]
        cache: Vec<u8>,
        #[inspect(parent)]
        base: Base,
    }

    #[inspect_methods]
    impl Widget {
        pub fn get_area(&self) -> u32 {
            self.width * self.height
        }

        pub fn set_height(&mut self, height: u32) -> u32 {
            core::mem::replace(&mut self.height, height)
        }

        pub(crate) fn is_square(&self) -> bool {
            self.width == self.height
        }

        fn label_ref(&self) -> &str {
            &self.label
        }

        #[inspect(skip)]
        pub fn get_hidden(&self) -> u32 {
            0
        }

        pub fn resize(&mut self, width: u32, height: u32) {
            self.width = width;
            self.height = height;
        }
    }

    #[derive(Inspect)]
    pub struct Wrapper<T> {
        pub value: T,
    }

    fn widget() -> Widget {
        Widget {
            width: 2,
            label: String::from("w"),
            height: 3,
            cache: Vec::new(),
            base: Base { id: 1, kind: 0 },
        }
    }

    #[test]
    fn derived_fields() {
        let members = Widget::members();
        let names: Vec<_> = members.fields().map(FieldInfo::name).collect();
        assert_eq!(names, ["width", "label", "h", "id", "kind"]);

        let label = members.field("label").unwrap();
        assert_eq!(label.mutability(), Mutability::Immutable);
        assert!(label.type_is::<String>());

        assert_eq!(members.field("h").unwrap().visibility(), Visibility::Private);
        assert_eq!(members.field("kind").unwrap().visibility(), Visibility::Restricted);
        assert_eq!(members.field("id").unwrap().depth(), 1);
        assert!(members.field("cache").is_none());
        assert!(members.field("base").is_none());
    }

    #[test]
    fn derived_methods() {
        let members = Widget::members();
        let methods: Vec<(&str, MethodKind, Visibility)> = members
            .methods()
            .map(|m| (m.name(), m.kind(), m.visibility()))
            .collect();

        assert_eq!(
            methods,
            [
                ("get_area", MethodKind::Getter, Visibility::Public),
                ("set_height", MethodKind::Setter, Visibility::Public),
                ("is_square", MethodKind::Getter, Visibility::Restricted),
            ]
        );
        assert!(members.methods().all(|m: &MethodInfo<Widget>| m.depth() == 0));

        // the impl block is kept as written
        let mut w = widget();
        assert_eq!(w.label_ref(), "w");
        assert_eq!(w.get_hidden(), 0);
        w.resize(4, 4);
        assert!(w.is_square());
    }

    #[test]
    fn setter_return_value_is_dropped() {
        let factory = crate::AccessorFactory::<Widget>::of();
        let mut w = widget();

        let height = factory.setter::<u32>("height").unwrap();
        assert!(height.is_method());
        assert_eq!(height.set(&mut w, 5), Ok(5));
        assert_eq!(w.get_area(), 10);
    }

    #[test]
    fn generic_struct() {
        let members = Wrapper::<i16>::members();
        assert!(members.field("value").unwrap().type_is::<i16>());

        let value = crate::AccessorFactory::<Wrapper<i16>>::of()
            .getter::<i16>("value")
            .unwrap();
        assert_eq!(value.get(&Wrapper { value: -2 }), Ok(-2));
    }
}
