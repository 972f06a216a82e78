//! Macros for creating named process-wide singletons.
//!
//! This module provides a macro-based approach to declare a lazily initialized,
//! thread-safe singleton slot behind a module of free functions.

/// Creates a named singleton with a single macro invocation.
///
/// The macro generates a module containing:
/// - Slot static (hidden)
/// - An `Api` struct that implements `SingletonApi`
/// - Free functions delegating to the `API` constant
///
/// The value type is resolved from the invoking module, so types declared next to
/// the macro call can be used directly.
///
/// # Examples
///
/// ```rust
/// use lazy_singleton::define_singleton;
/// use std::sync::Arc;
///
/// define_singleton!(greeting, String);
///
/// let first: Arc<String> = greeting::get_instance(|| "Hello".to_string());
/// let second: Arc<String> = greeting::get_instance(|| "ignored".to_string());
///
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(&*second, "Hello");
/// ```
///
/// # Multiple Singletons
///
/// Every invocation declares its own slot, even for the same value type:
///
/// ```rust
/// use lazy_singleton::define_singleton;
///
/// define_singleton!(primary, String);
/// define_singleton!(replica, String);
///
/// primary::get_instance(|| "db-primary".to_string());
///
/// assert!(primary::is_initialized());
/// assert!(!replica::is_initialized());
/// ```
///
/// # Trait-Based Usage
///
/// ```rust
/// use lazy_singleton::{define_singleton, SingletonApi};
///
/// define_singleton!(counter, u64);
///
/// let value = counter::API.get_instance(|| 100);
/// assert_eq!(*value, 100);
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($name:ident, $ty:ty) => {
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;
            use std::sync::Arc;

            // Slot for the shared value (module-private)
            static SLOT: $crate::LazySingleton<$ty> = $crate::LazySingleton::new();

            /// Zero-sized type that implements the singleton API.
            pub struct Api;

            impl $crate::SingletonApi for Api {
                type Value = $ty;

                fn slot() -> &'static $crate::LazySingleton<$ty> {
                    &SLOT
                }
            }

            /// Convenient constant for accessing the singleton API.
            pub const API: Api = Api;

            /// Return the shared value, constructing it with `init` on first demand.
            pub fn get_instance(init: impl FnOnce() -> $ty) -> Arc<$ty> {
                use $crate::SingletonApi;
                API.get_instance(init)
            }

            /// Return the shared value without constructing it.
            pub fn get() -> Result<Arc<$ty>, $crate::SingletonError> {
                use $crate::SingletonApi;
                API.get()
            }

            /// Initialize the shared value eagerly.
            pub fn try_init(value: $ty) -> Result<Arc<$ty>, $crate::SingletonError> {
                use $crate::SingletonApi;
                API.try_init(value)
            }

            /// Check whether the shared value exists.
            pub fn is_initialized() -> bool {
                use $crate::SingletonApi;
                API.is_initialized()
            }

            /// Set a tracing callback for this singleton.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::SingletonEvent) + Send + Sync + 'static,
            ) {
                use $crate::SingletonApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::SingletonApi;
                API.clear_trace_callback()
            }
        }
    };
}
