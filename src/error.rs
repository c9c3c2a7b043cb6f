//! Describes registry errors

use std::{
    error::Error as StdError,
    fmt::{Display, Formatter}
};

/// Boxed error returned by a failing factory
pub type BoxError = Box<
    dyn StdError
    + Send
    + Sync
>;

/// Errors produced by the [`Registry`](crate::Registry) and by factories
#[derive(Debug)]
pub enum Error {
    /// The value passed to [`Registry::define_prototype`](crate::Registry::define_prototype)
    /// is not a [`Prototype`](crate::Prototype)
    InvalidPrototype,

    /// No definitions were provided for the key
    NotDefined(String),

    /// The key holds an instance of a different type
    TypeMismatch {
        /// Requested key
        key: String,
        /// Type name the caller asked for
        expected: &'static str
    },

    /// The global registry was already created
    AlreadyInitialized,

    /// An error raised by a factory while creating an instance
    Other(BoxError)
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPrototype => write!(f, "Registry Error: provided element is not a prototype"),
            Error::NotDefined(key) => write!(f, "Registry Error: no definitions provided for {key}"),
            Error::TypeMismatch { key, expected } => write!(f, "Registry Error: {key} is not an instance of {expected}"),
            Error::AlreadyInitialized => write!(f, "Registry Error: global registry is already initialized"),
            Error::Other(err) => write!(f, "{err}")
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Other(err) => Some(err.as_ref()),
            _ => None
        }
    }
}

impl Error {
    /// Wraps any error into [`Error::Other`]
    ///
    /// # Example
    /// ```
    /// use lazydi::error::Error;
    ///
    /// let err = Error::other("connection refused");
    /// assert_eq!(err.to_string(), "connection refused");
    /// ```
    #[inline]
    pub fn other(err: impl Into<BoxError>) -> Self {
        Error::Other(err.into())
    }
}
