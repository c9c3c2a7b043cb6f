//! # lazydi
//!
//! A keyed singleton registry: define a factory under a name, and every
//! request for that name receives the same lazily created instance.
//!
//! ```
//! use std::sync::Arc;
//! use lazydi::{Registry, error::Error};
//!
//! #[derive(Default)]
//! struct Logger;
//!
//! let registry = Registry::new();
//! registry.define::<Logger>("Logger");
//!
//! let first = registry.get::<Logger>("Logger").unwrap();
//! let second = registry.get::<Logger>("Logger").unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//!
//! let missing = registry.get::<Logger>("Unregistered");
//! assert!(matches!(missing, Err(Error::NotDefined(_))));
//! ```
//!
//! ## Features
//! - `macros`: `#[derive(Creatable)]` for structs built from [`Creatable`] fields
//! - `tracing`: logs definitions and instance creation with [`tracing`](https://docs.rs/tracing)

pub use crate::{
    create::Creatable,
    registry::{Key, Prototype, RedefinePolicy, Registry, RegistryConfig},
};

#[cfg(feature = "macros")]
pub use lazydi_macros::Creatable;

pub mod error;
pub mod create;
pub mod registry;
