//! The process-wide registry and static access functions

use super::{Registry, RegistryConfig};
use crate::{Creatable, error::Error};
use std::{
    any::Any,
    sync::{Arc, OnceLock}
};

static GLOBAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Returns the process-wide registry, creating it with the default
    /// configuration on the first call.
    ///
    /// # Example
    /// ```
    /// use lazydi::Registry;
    ///
    /// assert!(std::ptr::eq(Registry::global(), Registry::global()));
    /// ```
    #[inline]
    pub fn global() -> &'static Registry {
        GLOBAL_REGISTRY.get_or_init(Registry::new)
    }

    /// Creates the process-wide registry with a specific configuration.
    ///
    /// Returns [`Error::AlreadyInitialized`] if the process-wide registry
    /// has already been created, either by this method or by [`Registry::global`].
    pub fn init_global(config: RegistryConfig) -> Result<&'static Registry, Error> {
        GLOBAL_REGISTRY
            .set(Registry::with_config(config))
            .map_err(|_| Error::AlreadyInitialized)?;
        Ok(Self::global())
    }

    /// Defines a [`Creatable`] type under the `key` in the process-wide registry
    ///
    /// # Example
    /// ```
    /// use lazydi::Registry;
    ///
    /// #[derive(Default)]
    /// struct Mailer;
    ///
    /// Registry::register::<Mailer>("Mailer");
    ///
    /// assert!(Registry::resolve::<Mailer>("Mailer").is_ok());
    /// ```
    #[inline]
    pub fn register<T: Creatable>(key: impl Into<String>) {
        Self::global().define::<T>(key);
    }

    /// Defines a factory function under the `key` in the process-wide registry
    #[inline]
    pub fn register_with<T, F>(key: impl Into<String>, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn() -> Result<T, Error> + Send + Sync + 'static
    {
        Self::global().define_with(key, factory);
    }

    /// Defines a type-erased value under the `key` in the process-wide registry
    ///
    /// Returns [`Error::InvalidPrototype`] if the value is not a [`Prototype`](crate::Prototype).
    ///
    /// # Example
    /// ```
    /// use lazydi::{Prototype, Registry, error::Error};
    ///
    /// #[derive(Default)]
    /// struct Queue;
    ///
    /// assert!(Registry::register_prototype("Queue", Box::new(Prototype::of::<Queue>())).is_ok());
    /// assert!(matches!(
    ///     Registry::register_prototype("NotAQueue", Box::new(42u8)),
    ///     Err(Error::InvalidPrototype)
    /// ));
    /// ```
    #[inline]
    pub fn register_prototype(key: impl Into<String>, value: Box<dyn Any + Send + Sync>) -> Result<(), Error> {
        Self::global().define_prototype(key, value)
    }

    /// Returns the instance for the `key` from the process-wide registry
    #[inline]
    pub fn resolve<T: Send + Sync + 'static>(key: &str) -> Result<Arc<T>, Error> {
        Self::global().get::<T>(key)
    }
}
