//! The string-payload singleton and its explicit registry object.
//!
//! `Singleton` cannot be constructed outside this module. Callers obtain the shared
//! instance through a [`SingletonRegistry`], which constructs it on first demand.
//!
//! # Examples
//!
//! ```
//! use lazy_singleton::SingletonRegistry;
//! use std::sync::Arc;
//!
//! let registry = SingletonRegistry::new();
//!
//! let foo = registry.get_instance("FOO");
//! let bar = registry.get_instance("BAR");
//!
//! assert!(Arc::ptr_eq(&foo, &bar));
//! assert_eq!(bar.value(), "FOO");
//! ```

use std::{fmt, sync::Arc};

use crate::{LazySingleton, SingletonError, SingletonEvent};

/// The single shared value held by a [`SingletonRegistry`].
#[derive(Debug, PartialEq, Eq)]
pub struct Singleton {
    value: String,
}

impl Singleton {
    fn new(value: String) -> Self {
        Self { value }
    }

    /// The payload supplied by the caller that constructed this instance.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Singleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Shared handle to the registry's [`Singleton`]. Identity is `Arc::ptr_eq`.
pub type SingletonHandle = Arc<Singleton>;

/// Holds at most one [`Singleton`], created on first demand and shared afterwards.
///
/// Construct one registry per process (or per test) and pass it by reference, or
/// keep it in a `static`:
///
/// ```
/// use lazy_singleton::SingletonRegistry;
///
/// static REGISTRY: SingletonRegistry = SingletonRegistry::new();
///
/// assert_eq!(REGISTRY.get_instance("only").value(), "only");
/// ```
#[derive(Debug, Default)]
pub struct SingletonRegistry {
    slot: LazySingleton<Singleton>,
}

impl SingletonRegistry {
    /// Creates a registry with an empty slot.
    pub const fn new() -> Self {
        Self {
            slot: LazySingleton::new(),
        }
    }

    /// Returns the shared instance, constructing it with `value` if this call wins
    /// the creation race. Every other caller's `value` is ignored.
    ///
    /// Never fails. Callers racing on an empty registry block briefly.
    pub fn get_instance(&self, value: impl Into<String>) -> SingletonHandle {
        self.slot.get_or_init(|| Singleton::new(value.into()))
    }

    /// Returns the shared instance if it exists.
    ///
    /// # Errors
    ///
    /// - `SingletonError::Uninitialized` if `get_instance` has not been called yet
    pub fn instance(&self) -> Result<SingletonHandle, SingletonError> {
        self.slot.get()
    }

    /// Checks whether the shared instance exists. Never constructs it.
    pub fn is_initialized(&self) -> bool {
        self.slot.is_initialized()
    }

    /// Sets a tracing callback for this registry's slot.
    pub fn set_trace_callback(&self, callback: impl Fn(&SingletonEvent) + Send + Sync + 'static) {
        self.slot.set_trace_callback(callback)
    }

    /// Clears the tracing callback.
    pub fn clear_trace_callback(&self) {
        self.slot.clear_trace_callback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Barrier, Mutex};
    use std::thread;

    #[test]
    fn test_first_value_wins() {
        let registry = SingletonRegistry::new();

        let first = registry.get_instance("FOO");
        let second = registry.get_instance("BAR".to_string());

        assert_eq!(first.value(), "FOO");
        assert_eq!(second.value(), "FOO");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_instance_before_and_after() {
        let registry = SingletonRegistry::default();

        assert!(!registry.is_initialized());
        assert_eq!(
            registry.instance().unwrap_err(),
            SingletonError::Uninitialized {
                type_name: "lazy_singleton::singleton::Singleton"
            }
        );

        let created = registry.get_instance("value");
        let read = registry.instance().unwrap();
        assert!(registry.is_initialized());
        assert!(Arc::ptr_eq(&created, &read));
    }

    #[test]
    fn test_fresh_registries_are_isolated() {
        let a = SingletonRegistry::new();
        let b = SingletonRegistry::new();

        let from_a = a.get_instance("A");
        let from_b = b.get_instance("B");

        assert_eq!(from_a.value(), "A");
        assert_eq!(from_b.value(), "B");
        assert!(!Arc::ptr_eq(&from_a, &from_b));
    }

    #[test]
    fn test_display_prints_payload() {
        let registry = SingletonRegistry::new();
        assert_eq!(registry.get_instance("FOO").to_string(), "FOO");
    }

    #[test]
    fn test_foo_bar_threads_print_same_value() {
        let registry = SingletonRegistry::new();
        let barrier = Barrier::new(2);
        let printed = Mutex::new(Vec::new());

        thread::scope(|s| {
            for value in ["FOO", "BAR"] {
                let (registry, barrier, printed) = (&registry, &barrier, &printed);
                s.spawn(move || {
                    barrier.wait();
                    let singleton = registry.get_instance(value);
                    printed.lock().unwrap().push(singleton.to_string());
                });
            }
        });

        let printed = printed.into_inner().unwrap();
        assert_eq!(printed.len(), 2);
        assert_eq!(printed[0], printed[1]);
        assert!(printed[0] == "FOO" || printed[0] == "BAR");
    }

    #[test]
    fn test_trace_passthrough() {
        let registry = SingletonRegistry::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        registry.set_trace_callback(move |event| {
            events_clone.lock().unwrap().push(event.to_string());
        });
        registry.get_instance("x");
        registry.clear_trace_callback();
        registry.get_instance("y");

        let recorded = events.lock().unwrap();
        assert_eq!(
            *recorded,
            vec!["initialize { type_name: lazy_singleton::singleton::Singleton }"]
        );
    }
}
