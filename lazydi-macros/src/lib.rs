//! Proc-Macros implementations for lazydi
//!

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod create;

/// Implements the `Creatable` trait for a struct by creating every field
/// with `Creatable::create()`
///
/// All fields must be `Creatable` themselves. The struct must not implement
/// `Default`, since every `Default` type is `Creatable` already.
///
/// # Example
/// ```ignore
/// use lazydi::Creatable;
///
/// #[derive(Default)]
/// struct Logger;
///
/// #[derive(Default)]
/// struct Cache;
///
/// #[derive(Creatable)]
/// struct Service {
///     logger: Logger,
///     cache: Cache,
/// }
///
/// // This expands to:
/// // impl Creatable for Service {
/// //     fn create() -> Result<Self, Error> {
/// //         Ok(Self {
/// //             logger: Creatable::create()?,
/// //             cache: Creatable::create()?,
/// //         })
/// //     }
/// // }
/// ```
#[proc_macro_derive(Creatable)]
pub fn derive_creatable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    create::expand_creatable(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
