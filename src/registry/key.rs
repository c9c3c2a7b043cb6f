//! Typed registry keys

use std::{
    borrow::Cow,
    fmt::{Debug, Display, Formatter},
    marker::PhantomData
};

/// A registry key that also carries the type of the instance stored under it
///
/// # Example
/// ```
/// use lazydi::{Key, Registry};
///
/// #[derive(Default)]
/// struct Logger;
///
/// const LOGGER: Key<Logger> = Key::new("Logger");
///
/// let registry = Registry::new();
/// registry.define_key(&LOGGER);
///
/// let logger = registry.get_key(&LOGGER);
/// assert!(logger.is_ok());
/// ```
pub struct Key<T> {
    name: Cow<'static, str>,
    _marker: PhantomData<fn() -> T>
}

impl<T> Key<T> {
    /// Creates a key from a static name
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self { name: Cow::Borrowed(name), _marker: PhantomData }
    }

    /// Creates a key from an owned name
    #[inline]
    pub fn owned(name: impl Into<String>) -> Self {
        Self { name: Cow::Owned(name.into()), _marker: PhantomData }
    }

    /// Returns the name of this key
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Clone for Key<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { name: self.name.clone(), _marker: PhantomData }
    }
}

impl<T> Debug for Key<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key")
            .field("name", &self.name)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> Display for Key<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl<T> AsRef<str> for Key<T> {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    struct Logger;

    const LOGGER: Key<Logger> = Key::new("Logger");

    #[test]
    fn it_keeps_static_name() {
        assert_eq!(LOGGER.name(), "Logger");
        assert_eq!(LOGGER.to_string(), "Logger");
    }

    #[test]
    fn it_keeps_owned_name() {
        let key = Key::<Logger>::owned(format!("{}-{}", "Logger", 2));

        assert_eq!(key.as_ref(), "Logger-2");
    }

    #[test]
    fn it_clones_without_clone_bound() {
        let key = LOGGER.clone();

        assert_eq!(key.name(), LOGGER.name());
    }

    #[test]
    fn it_prints_type_in_debug() {
        let debug = format!("{LOGGER:?}");

        assert!(debug.contains("Logger"));
        assert!(debug.contains("tests::Logger"));
    }
}
