use alloc::string::ToString;
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;
use core::marker::PhantomData;

use super::strategy::{ReadStrategy, WriteStrategy};
use crate::AccessError;
use crate::info::Type;
use crate::lens::{Accessor, Getter, Setter, TypeBearer};

#[inline]
fn downcast_target<T: Any>(target: &dyn Any) -> Result<&T, AccessError> {
    target
        .downcast_ref::<T>()
        .ok_or(AccessError::IncompatibleTarget {
            type_path: core::any::type_name::<T>(),
        })
}

#[inline]
fn downcast_target_mut<T: Any>(target: &mut dyn Any) -> Result<&mut T, AccessError> {
    target
        .downcast_mut::<T>()
        .ok_or(AccessError::IncompatibleTarget {
            type_path: core::any::type_name::<T>(),
        })
}

#[inline]
fn invocation_error<T>(property: &str) -> AccessError {
    AccessError::Invocation {
        property: property.to_string(),
        type_path: core::any::type_name::<T>(),
    }
}

// -----------------------------------------------------------------------------
// PropertyGetter

/// A bound reader of one property of `T`.
///
/// Created by [`AccessorFactory::getter`](crate::AccessorFactory::getter).
/// Holds no per-instance state.
pub struct PropertyGetter<T, V> {
    property: Arc<str>,
    ty: Type,
    strategy: ReadStrategy<T>,
    mutable: bool,
    _marker: PhantomData<fn() -> V>,
}

impl<T, V> Clone for PropertyGetter<T, V> {
    fn clone(&self) -> Self {
        Self {
            property: self.property.clone(),
            ty: self.ty,
            strategy: self.strategy.clone(),
            mutable: self.mutable,
            _marker: PhantomData,
        }
    }
}

impl<T: Any, V: Clone + Any> PropertyGetter<T, V> {
    pub(crate) fn new(property: Arc<str>, strategy: ReadStrategy<T>, mutable: bool) -> Self {
        Self {
            property,
            ty: Type::of::<V>(),
            strategy,
            mutable,
            _marker: PhantomData,
        }
    }

    /// Reads the property of `target`.
    pub fn get(&self, target: &T) -> Result<V, AccessError> {
        self.strategy
            .read(target)
            .ok_or_else(|| invocation_error::<T>(&self.property))
    }

    /// Reads the property of a type-erased `target`.
    ///
    /// Fails with [`AccessError::IncompatibleTarget`] if `target` is not a `T`.
    pub fn get_dyn(&self, target: &dyn Any) -> Result<V, AccessError> {
        self.get(downcast_target::<T>(target)?)
    }
}

impl<T, V> PropertyGetter<T, V> {
    #[inline]
    pub fn property_name(&self) -> &str {
        &self.property
    }

    #[inline]
    pub fn value_type(&self) -> Type {
        self.ty
    }

    /// Returns `true` if a setter with the same name and type resolves.
    #[inline]
    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    /// Returns `true` if the property is read through a getter method.
    #[inline]
    pub fn is_method(&self) -> bool {
        matches!(self.strategy, ReadStrategy::Method(_))
    }
}

impl<T: Any, V: Clone + Any> Getter<T, V> for PropertyGetter<T, V> {
    #[inline]
    fn get(&self, target: &T) -> Result<V, AccessError> {
        PropertyGetter::get(self, target)
    }
}

impl<T, V> TypeBearer for PropertyGetter<T, V> {
    #[inline]
    fn value_type(&self) -> Type {
        self.ty
    }
}

impl<T, V> fmt::Debug for PropertyGetter<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyGetter")
            .field("target", &core::any::type_name::<T>())
            .field("property", &self.property)
            .field("ty", &self.ty)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// PropertySetter

/// A bound writer of one property of `T`.
///
/// Created by [`AccessorFactory::setter`](crate::AccessorFactory::setter).
pub struct PropertySetter<T, V> {
    property: Arc<str>,
    ty: Type,
    strategy: WriteStrategy<T>,
    _marker: PhantomData<fn(V)>,
}

impl<T, V> Clone for PropertySetter<T, V> {
    fn clone(&self) -> Self {
        Self {
            property: self.property.clone(),
            ty: self.ty,
            strategy: self.strategy.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Any, V: Clone + Any> PropertySetter<T, V> {
    pub(crate) fn new(property: Arc<str>, strategy: WriteStrategy<T>) -> Self {
        Self {
            property,
            ty: Type::of::<V>(),
            strategy,
            _marker: PhantomData,
        }
    }

    /// Writes `value` into `target` and returns it.
    pub fn set(&self, target: &mut T, value: V) -> Result<V, AccessError> {
        let written = value.clone();
        if self.strategy.write(target, value) {
            Ok(written)
        } else {
            Err(invocation_error::<T>(&self.property))
        }
    }

    /// Writes `value` into a type-erased `target`.
    ///
    /// Fails with [`AccessError::IncompatibleTarget`] if `target` is not a `T`.
    pub fn set_dyn(&self, target: &mut dyn Any, value: V) -> Result<V, AccessError> {
        self.set(downcast_target_mut::<T>(target)?, value)
    }
}

impl<T, V> PropertySetter<T, V> {
    #[inline]
    pub fn property_name(&self) -> &str {
        &self.property
    }

    #[inline]
    pub fn value_type(&self) -> Type {
        self.ty
    }

    /// Always `true`, a setter only exists for writable properties.
    #[inline]
    pub fn is_mutable(&self) -> bool {
        true
    }

    /// Returns `true` if the property is written through a setter method.
    #[inline]
    pub fn is_method(&self) -> bool {
        matches!(self.strategy, WriteStrategy::Method(_))
    }
}

impl<T: Any, V: Clone + Any> Setter<T, V> for PropertySetter<T, V> {
    #[inline]
    fn set(&self, target: &mut T, value: V) -> Result<V, AccessError> {
        PropertySetter::set(self, target, value)
    }
}

impl<T, V> TypeBearer for PropertySetter<T, V> {
    #[inline]
    fn value_type(&self) -> Type {
        self.ty
    }
}

impl<T, V> fmt::Debug for PropertySetter<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertySetter")
            .field("target", &core::any::type_name::<T>())
            .field("property", &self.property)
            .field("ty", &self.ty)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// PropertyLens

/// A getter and a setter for the same property, resolved independently.
///
/// Created by [`AccessorFactory::lens`](crate::AccessorFactory::lens).
pub struct PropertyLens<T, V> {
    getter: PropertyGetter<T, V>,
    setter: PropertySetter<T, V>,
}

impl<T, V> Clone for PropertyLens<T, V> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
        }
    }
}

impl<T, V> PropertyLens<T, V> {
    #[inline]
    pub(crate) fn new(getter: PropertyGetter<T, V>, setter: PropertySetter<T, V>) -> Self {
        Self { getter, setter }
    }

    #[inline]
    pub fn getter(&self) -> &PropertyGetter<T, V> {
        &self.getter
    }

    #[inline]
    pub fn setter(&self) -> &PropertySetter<T, V> {
        &self.setter
    }

    #[inline]
    pub fn into_parts(self) -> (PropertyGetter<T, V>, PropertySetter<T, V>) {
        (self.getter, self.setter)
    }

    #[inline]
    pub fn property_name(&self) -> &str {
        self.getter.property_name()
    }

    #[inline]
    pub fn value_type(&self) -> Type {
        self.getter.ty
    }

    #[inline]
    pub fn is_mutable(&self) -> bool {
        true
    }
}

impl<T: Any, V: Clone + Any> PropertyLens<T, V> {
    #[inline]
    pub fn get(&self, target: &T) -> Result<V, AccessError> {
        self.getter.get(target)
    }

    #[inline]
    pub fn set(&self, target: &mut T, value: V) -> Result<V, AccessError> {
        self.setter.set(target, value)
    }

    #[inline]
    pub fn get_dyn(&self, target: &dyn Any) -> Result<V, AccessError> {
        self.getter.get_dyn(target)
    }

    #[inline]
    pub fn set_dyn(&self, target: &mut dyn Any, value: V) -> Result<V, AccessError> {
        self.setter.set_dyn(target, value)
    }
}

impl<T: Any, V: Clone + Any> Getter<T, V> for PropertyLens<T, V> {
    #[inline]
    fn get(&self, target: &T) -> Result<V, AccessError> {
        self.getter.get(target)
    }
}

impl<T: Any, V: Clone + Any> Setter<T, V> for PropertyLens<T, V> {
    #[inline]
    fn set(&self, target: &mut T, value: V) -> Result<V, AccessError> {
        self.setter.set(target, value)
    }
}

impl<T, V> TypeBearer for PropertyLens<T, V> {
    #[inline]
    fn value_type(&self) -> Type {
        self.getter.ty
    }
}

impl<T: Any, V: Clone + Any> Accessor<T, V> for PropertyLens<T, V> {
    #[inline]
    fn property_name(&self) -> &str {
        self.getter.property_name()
    }

    #[inline]
    fn is_mutable(&self) -> bool {
        true
    }
}

impl<T, V> fmt::Debug for PropertyLens<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyLens")
            .field("getter", &self.getter)
            .field("setter", &self.setter)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// PropertyAccessor

/// A named property with a getter and an optional setter.
///
/// Created by [`AccessorFactory::accessor`](crate::AccessorFactory::accessor).
/// Writing through an accessor without a setter fails with
/// [`AccessError::Immutable`].
pub struct PropertyAccessor<T, V> {
    getter: PropertyGetter<T, V>,
    setter: Option<PropertySetter<T, V>>,
}

impl<T, V> Clone for PropertyAccessor<T, V> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
        }
    }
}

impl<T, V> PropertyAccessor<T, V> {
    #[inline]
    pub(crate) fn new(getter: PropertyGetter<T, V>, setter: Option<PropertySetter<T, V>>) -> Self {
        Self { getter, setter }
    }

    #[inline]
    pub fn getter(&self) -> &PropertyGetter<T, V> {
        &self.getter
    }

    #[inline]
    pub fn setter(&self) -> Option<&PropertySetter<T, V>> {
        self.setter.as_ref()
    }

    #[inline]
    pub fn property_name(&self) -> &str {
        self.getter.property_name()
    }

    #[inline]
    pub fn value_type(&self) -> Type {
        self.getter.ty
    }

    #[inline]
    pub fn is_mutable(&self) -> bool {
        self.setter.is_some()
    }

    fn immutable(&self) -> AccessError {
        AccessError::Immutable {
            property: self.getter.property_name().to_string(),
            type_path: core::any::type_name::<T>(),
        }
    }
}

impl<T: Any, V: Clone + Any> PropertyAccessor<T, V> {
    #[inline]
    pub fn get(&self, target: &T) -> Result<V, AccessError> {
        self.getter.get(target)
    }

    pub fn set(&self, target: &mut T, value: V) -> Result<V, AccessError> {
        match &self.setter {
            Some(setter) => setter.set(target, value),
            None => Err(self.immutable()),
        }
    }

    #[inline]
    pub fn get_dyn(&self, target: &dyn Any) -> Result<V, AccessError> {
        self.getter.get_dyn(target)
    }

    pub fn set_dyn(&self, target: &mut dyn Any, value: V) -> Result<V, AccessError> {
        match &self.setter {
            Some(setter) => setter.set_dyn(target, value),
            None => Err(self.immutable()),
        }
    }
}

impl<T: Any, V: Clone + Any> Getter<T, V> for PropertyAccessor<T, V> {
    #[inline]
    fn get(&self, target: &T) -> Result<V, AccessError> {
        PropertyAccessor::get(self, target)
    }
}

impl<T: Any, V: Clone + Any> Setter<T, V> for PropertyAccessor<T, V> {
    #[inline]
    fn set(&self, target: &mut T, value: V) -> Result<V, AccessError> {
        PropertyAccessor::set(self, target, value)
    }
}

impl<T, V> TypeBearer for PropertyAccessor<T, V> {
    #[inline]
    fn value_type(&self) -> Type {
        self.getter.ty
    }
}

impl<T: Any, V: Clone + Any> Accessor<T, V> for PropertyAccessor<T, V> {
    #[inline]
    fn property_name(&self) -> &str {
        self.getter.property_name()
    }

    #[inline]
    fn is_mutable(&self) -> bool {
        self.setter.is_some()
    }
}

impl<T, V> fmt::Debug for PropertyAccessor<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyAccessor")
            .field("getter", &self.getter)
            .field("setter", &self.setter)
            .finish()
    }
}
