//! Keyed registry of lazily created singletons

use crate::{Creatable, error::Error};
use self::prototype::ArcElement;
use std::{
    any::Any,
    collections::{HashMap, hash_map::Entry as MapEntry},
    fmt::{Debug, Formatter},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard}
};

pub use self::{key::Key, prototype::Prototype};

pub mod key;
pub mod prototype;
mod global;

/// Describes what happens to a created instance when its key is defined again
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RedefinePolicy {
    /// The created instance is kept and returned until the registry is reset
    #[default]
    Preserve,

    /// The created instance is dropped, so the next request uses the new definition
    Evict
}

/// Represents a registry configuration
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryConfig {
    /// Specifies what happens to created instances on redefinition
    ///
    /// Default: [`RedefinePolicy::Preserve`]
    on_redefine: RedefinePolicy
}

impl RegistryConfig {
    /// Creates a default registry configuration
    ///
    /// Defaults:
    /// - on_redefine: [`RedefinePolicy::Preserve`]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the registry to drop a created instance when its key is defined again
    #[inline]
    pub fn with_eviction(self) -> Self {
        self.with_redefine_policy(RedefinePolicy::Evict)
    }

    /// Configures what happens to created instances on redefinition
    #[inline]
    pub fn with_redefine_policy(mut self, policy: RedefinePolicy) -> Self {
        self.on_redefine = policy;
        self
    }

    /// Returns the current redefinition policy
    #[inline]
    pub fn redefine_policy(&self) -> RedefinePolicy {
        self.on_redefine
    }
}

/// Result of a key lookup under the read lock
enum Entry {
    Created(ArcElement),
    Defined(Prototype, u64)
}

#[derive(Default)]
struct Inner {
    /// Factories by key
    definitions: HashMap<String, Prototype>,

    /// Created instances by key
    elements: HashMap<String, ArcElement>,

    /// Incremented on every reset
    generation: u64
}

impl Inner {
    #[inline]
    fn entry(&self, key: &str) -> Result<Entry, Error> {
        let prototype = self.definitions
            .get(key)
            .ok_or_else(|| Error::NotDefined(key.into()))?;
        let entry = match self.elements.get(key) {
            Some(element) => Entry::Created(element.clone()),
            None => Entry::Defined(prototype.clone(), self.generation)
        };
        Ok(entry)
    }
}

/// Represents a registry that maps keys to factories and creates
/// a single instance per key on the first request.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use lazydi::Registry;
///
/// #[derive(Default)]
/// struct Logger;
///
/// let registry = Registry::new();
/// registry.define::<Logger>("Logger");
///
/// let first = registry.get::<Logger>("Logger").unwrap();
/// let second = registry.get::<Logger>("Logger").unwrap();
///
/// assert!(Arc::ptr_eq(&first, &second));
/// assert!(registry.get::<Logger>("Unregistered").is_err());
/// ```
pub struct Registry {
    inner: RwLock<Inner>,
    config: RegistryConfig
}

impl Debug for Registry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let inner = self.read();
        f.debug_struct("Registry")
            .field("definitions", &inner.definitions.len())
            .field("elements", &inner.elements.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for Registry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates an empty registry with the default configuration
    #[inline]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with a specific configuration
    ///
    /// # Example
    /// ```
    /// use lazydi::{Registry, RegistryConfig};
    ///
    /// let registry = Registry::with_config(RegistryConfig::new().with_eviction());
    /// ```
    #[inline]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            config
        }
    }

    /// Returns the configuration of this registry
    #[inline]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Defines a [`Creatable`] type under the `key`
    ///
    /// Defining an existing key replaces its factory. Whether an already created
    /// instance survives depends on [`RedefinePolicy`].
    #[inline]
    pub fn define<T: Creatable>(&self, key: impl Into<String>) {
        self.insert_definition(key.into(), Prototype::of::<T>());
    }

    /// Defines a typed [`Key`] with its [`Creatable`] type
    #[inline]
    pub fn define_key<T: Creatable>(&self, key: &Key<T>) {
        self.define::<T>(key.name());
    }

    /// Defines a factory function under the `key`
    ///
    /// # Example
    /// ```
    /// use lazydi::Registry;
    ///
    /// struct Config {
    ///     port: u16
    /// }
    ///
    /// let registry = Registry::new();
    /// registry.define_with("Config", || Ok(Config { port: 8080 }));
    ///
    /// assert_eq!(registry.get::<Config>("Config").unwrap().port, 8080);
    /// ```
    #[inline]
    pub fn define_with<T, F>(&self, key: impl Into<String>, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn() -> Result<T, Error> + Send + Sync + 'static
    {
        self.insert_definition(key.into(), Prototype::from_fn(factory));
    }

    /// Defines a type-erased value under the `key`
    ///
    /// The value must be a [`Prototype`], otherwise [`Error::InvalidPrototype`]
    /// is returned and nothing is defined.
    pub fn define_prototype(&self, key: impl Into<String>, value: Box<dyn Any + Send + Sync>) -> Result<(), Error> {
        let prototype = Prototype::try_from_any(value)?;
        self.insert_definition(key.into(), prototype);
        Ok(())
    }

    /// Returns the instance for the `key`, creating it on the first request
    ///
    /// Returns [`Error::NotDefined`] if nothing is defined under the `key`
    /// and [`Error::TypeMismatch`] if the key holds something other than `T`.
    /// A factory error is returned as is and the key stays uncreated,
    /// so the next request calls the factory again.
    pub fn get<T: Send + Sync + 'static>(&self, key: &str) -> Result<Arc<T>, Error> {
        let entry = self.read().entry(key)?;
        let element = match entry {
            Entry::Created(element) => element,
            Entry::Defined(prototype, generation) if prototype.creates::<T>() => {
                self.create_element(key, prototype, generation)?
            },
            Entry::Defined(..) => return Err(Self::type_mismatch::<T>(key))
        };
        element
            .downcast::<T>()
            .map_err(|_| Self::type_mismatch::<T>(key))
    }

    /// Returns the instance for a typed [`Key`]
    #[inline]
    pub fn get_key<T: Send + Sync + 'static>(&self, key: &Key<T>) -> Result<Arc<T>, Error> {
        self.get::<T>(key.name())
    }

    /// Returns a clone of the instance for the `key`.
    /// `T` must implement [`Clone`] otherwise use [`get`](Self::get)
    /// that returns a shared pointer.
    #[inline]
    pub fn get_cloned<T: Send + Sync + Clone + 'static>(&self, key: &str) -> Result<T, Error> {
        self.get::<T>(key)
            .map(|t| t.as_ref().clone())
    }

    /// Returns `true` if something is defined under the `key`
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.read().definitions.contains_key(key)
    }

    /// Returns `true` if an instance for the `key` has already been created
    #[inline]
    pub fn is_created(&self, key: &str) -> bool {
        self.read().elements.contains_key(key)
    }

    /// Returns the number of defined keys
    #[inline]
    pub fn len(&self) -> usize {
        self.read().definitions.len()
    }

    /// Returns `true` if nothing is defined
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read().definitions.is_empty()
    }

    /// Drops the created instance for the `key`, keeping its definition.
    /// Returns `true` if there was an instance to drop.
    pub fn evict(&self, key: &str) -> bool {
        let evicted = self.write().elements.remove(key).is_some();

        #[cfg(feature = "tracing")]
        tracing::debug!(evicted, "evicting the instance of {key}");

        evicted
    }

    /// Removes all definitions and created instances
    pub fn reset(&self) {
        let mut inner = self.write();
        inner.elements.clear();
        inner.definitions.clear();
        inner.generation = inner.generation.wrapping_add(1);

        #[cfg(feature = "tracing")]
        tracing::debug!("registry has been reset");
    }

    fn insert_definition(&self, key: String, prototype: Prototype) {
        let mut inner = self.write();
        if inner.definitions.contains_key(&key) {
            #[cfg(feature = "tracing")]
            tracing::debug!("redefining {key} as {}", prototype.type_name());

            if self.config.on_redefine == RedefinePolicy::Evict {
                inner.elements.remove(&key);
            }
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!("defining {key} as {}", prototype.type_name());
        }
        inner.definitions.insert(key, prototype);
    }

    /// Calls the factory outside of the lock and stores the result.
    /// If another caller stored an instance of the same type first, that one is returned.
    fn create_element(&self, key: &str, prototype: Prototype, generation: u64) -> Result<ArcElement, Error> {
        #[cfg(feature = "tracing")]
        tracing::trace!("creating an instance of {} for {key}", prototype.type_name());

        let element = prototype
            .create()
            .inspect_err(|_err| {
                #[cfg(feature = "tracing")]
                tracing::warn!("failed to create an instance for {key}: {_err}");
            })?;

        let mut inner = self.write();
        if inner.generation != generation {
            // registry was reset while the factory was running
            return Ok(element);
        }

        let Inner { definitions, elements, .. } = &mut *inner;
        let element = match definitions.get(key) {
            Some(current) if current.same_as(&prototype) || self.config.on_redefine == RedefinePolicy::Preserve => {
                match elements.entry(key.to_owned()) {
                    MapEntry::Occupied(stored) if prototype.created(stored.get()) => stored.get().clone(),
                    MapEntry::Occupied(_) => element,
                    MapEntry::Vacant(slot) => slot.insert(element).clone()
                }
            },
            // definition was removed or replaced while the factory was running
            _ => element
        };
        Ok(element)
    }

    #[inline]
    fn type_mismatch<T>(key: &str) -> Error {
        Error::TypeMismatch {
            key: key.into(),
            expected: std::any::type_name::<T>()
        }
    }

    #[inline]
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
