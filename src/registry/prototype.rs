//! Type-erased factories stored by the registry

use crate::{Creatable, error::Error};
use std::{
    any::{Any, TypeId},
    fmt::{Debug, Formatter},
    sync::Arc
};

pub(crate) type ArcElement = Arc<
    dyn Any
    + Send
    + Sync
>;

type FactoryFn = Arc<
    dyn Fn() -> Result<ArcElement, Error>
    + Send
    + Sync
>;

/// A factory that creates instances of a single type with no arguments
///
/// This is the value the registry keeps under a key until the first request
/// for that key.
///
/// # Example
/// ```
/// use lazydi::{Prototype, Registry};
///
/// #[derive(Default)]
/// struct Logger;
///
/// let registry = Registry::new();
/// registry.define_prototype("Logger", Box::new(Prototype::of::<Logger>())).unwrap();
///
/// assert!(registry.get::<Logger>("Logger").is_ok());
/// ```
#[derive(Clone)]
pub struct Prototype {
    factory: FactoryFn,
    type_id: TypeId,
    type_name: &'static str
}

impl Debug for Prototype {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Prototype")
            .field(&self.type_name)
            .finish()
    }
}

impl Prototype {
    /// Creates a prototype of a [`Creatable`] type
    #[inline]
    pub fn of<T: Creatable>() -> Self {
        Self::from_fn(T::create)
    }

    /// Creates a prototype from a factory function
    pub fn from_fn<T, F>(factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> Result<T, Error> + Send + Sync + 'static
    {
        let factory = Arc::new(move || -> Result<ArcElement, Error> {
            factory().map(|t| Arc::new(t) as ArcElement)
        });
        Self {
            factory,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>()
        }
    }

    /// Returns the name of the type this prototype creates
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if this prototype creates instances of `T`
    #[inline]
    pub fn creates<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Returns `true` if the instance is of the type this prototype creates
    #[inline]
    pub(crate) fn created(&self, element: &ArcElement) -> bool {
        let element: &(dyn Any + Send + Sync) = element.as_ref();
        element.type_id() == self.type_id
    }

    /// Calls the factory and returns a new type-erased instance
    #[inline]
    pub(crate) fn create(&self) -> Result<ArcElement, Error> {
        (self.factory)()
    }

    /// Checks whether an arbitrary value is a prototype
    pub(crate) fn try_from_any(value: Box<dyn Any + Send + Sync>) -> Result<Self, Error> {
        value
            .downcast::<Prototype>()
            .map(|prototype| *prototype)
            .map_err(|_| Error::InvalidPrototype)
    }

    /// Returns `true` if both values share the same factory
    #[inline]
    pub(crate) fn same_as(&self, other: &Prototype) -> bool {
        Arc::ptr_eq(&self.factory, &other.factory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Logger {
        level: u8
    }

    #[test]
    fn it_creates_instance_of_type() {
        let prototype = Prototype::of::<Logger>();

        let instance = prototype.create().unwrap();

        assert_eq!(instance.downcast::<Logger>().unwrap().level, 0);
    }

    #[test]
    fn it_creates_new_instance_on_every_call() {
        let prototype = Prototype::of::<Logger>();

        let first = prototype.create().unwrap();
        let second = prototype.create().unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn it_creates_from_fn() {
        let prototype = Prototype::from_fn(|| Ok(Logger { level: 3 }));

        let instance = prototype.create().unwrap();

        assert!(prototype.creates::<Logger>());
        assert_eq!(instance.downcast::<Logger>().unwrap().level, 3);
    }

    #[test]
    fn it_returns_factory_error() {
        let prototype = Prototype::from_fn(|| Err::<Logger, _>(Error::other("disk full")));

        let err = prototype.create().unwrap_err();

        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn it_accepts_prototype_from_any() {
        let value: Box<dyn Any + Send + Sync> = Box::new(Prototype::of::<Logger>());

        let prototype = Prototype::try_from_any(value).unwrap();

        assert!(prototype.creates::<Logger>());
    }

    #[test]
    fn it_rejects_non_prototype_from_any() {
        let value: Box<dyn Any + Send + Sync> = Box::new(Logger::default());

        let result = Prototype::try_from_any(value);

        assert!(matches!(result, Err(Error::InvalidPrototype)));
    }

    #[test]
    fn it_recognizes_own_instances() {
        let prototype = Prototype::of::<Logger>();
        let own = prototype.create().unwrap();
        let other: ArcElement = Arc::new(String::from("Logger"));

        assert!(prototype.created(&own));
        assert!(!prototype.created(&other));
    }

    #[test]
    fn it_compares_by_factory() {
        let prototype = Prototype::of::<Logger>();
        let clone = prototype.clone();
        let other = Prototype::of::<Logger>();

        assert!(prototype.same_as(&clone));
        assert!(!prototype.same_as(&other));
    }

    #[test]
    fn it_prints_type_name_in_debug() {
        let prototype = Prototype::of::<Logger>();

        assert!(format!("{prototype:?}").contains("Logger"));
        assert!(prototype.type_name().ends_with("Logger"));
    }
}
