//! Utilities to mark types as constructible by the registry

use crate::error::Error;

/// A trait for types the [`Registry`](crate::Registry) can create with no arguments
///
/// Every `struct` that implements [`Default`] is [`Creatable`] already.
///
/// # Example
/// ```
/// use lazydi::Registry;
///
/// #[derive(Default)]
/// struct Logger;
///
/// let registry = Registry::new();
/// registry.define::<Logger>("Logger");
///
/// let logger = registry.get::<Logger>("Logger");
/// assert!(logger.is_ok());
/// ```
///
/// If the construction is not trivial or may fail, the trait can be implemented manually
///
/// # Example
/// ```
/// use lazydi::{Registry, Creatable, error::Error};
///
/// struct Connection {
///     url: String
/// }
///
/// impl Creatable for Connection {
///     fn create() -> Result<Self, Error> {
///         let url = std::env::var("DATABASE_URL").map_err(Error::other)?;
///         Ok(Self { url })
///     }
/// }
///
/// let registry = Registry::new();
/// registry.define::<Connection>("Connection");
/// ```
pub trait Creatable: Sized + Send + Sync + 'static {
    /// Creates a new instance of `Self`
    fn create() -> Result<Self, Error>;
}

impl<T: Default + Send + Sync + 'static> Creatable for T {
    #[inline]
    fn create() -> Result<Self, Error> {
        Ok(Self::default())
    }
}

/// A `prototype!` macro that implements the [`Creatable`] trait for one or more types
/// from a constructor expression.
///
/// # Macro Syntax
/// ```ignore
/// prototype! {
///     Type1 => expr1,
///     Type2 => expr2
/// }
/// ```
/// An expression may evaluate either to `Self` or, with the `try` prefix,
/// to `Result<Self, Error>`.
///
/// # Example
/// ```
/// use lazydi::{prototype, Creatable};
///
/// struct Clock {
///     offset: i64
/// }
///
/// struct Port(u16);
///
/// prototype! {
///     Clock => Clock { offset: 0 },
///     Port => try "8080".parse().map(Port).map_err(lazydi::error::Error::other)
/// }
///
/// assert_eq!(Clock::create().unwrap().offset, 0);
/// assert_eq!(Port::create().unwrap().0, 8080);
/// ```
#[macro_export]
macro_rules! prototype {
    () => {};
    ($name:ty => try $ctor:expr $(, $($rest:tt)*)?) => {
        impl $crate::Creatable for $name {
            #[inline]
            fn create() -> Result<Self, $crate::error::Error> {
                $ctor
            }
        }
        $($crate::prototype! { $($rest)* })?
    };
    ($name:ty => $ctor:expr $(, $($rest:tt)*)?) => {
        impl $crate::Creatable for $name {
            #[inline]
            fn create() -> Result<Self, $crate::error::Error> {
                Ok($ctor)
            }
        }
        $($crate::prototype! { $($rest)* })?
    };
}
