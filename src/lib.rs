//! # Lazy Singleton
//!
//! Thread-safe, lazily constructed singletons built on double-checked initialization.
//! A slot holds at most one value; the first caller constructs it and every other
//! caller, on any thread, receives the same `Arc<T>`.
//!
//! ## Quick Start
//!
//! ```rust
//! use lazy_singleton::SingletonRegistry;
//! use std::sync::Arc;
//!
//! let registry = SingletonRegistry::new();
//!
//! let first = registry.get_instance("FOO");
//! let second = registry.get_instance("BAR");
//!
//! assert!(Arc::ptr_eq(&first, &second));
//! assert_eq!(second.value(), "FOO");
//! ```
//!
//! ## Features
//!
//! - **Exactly-once construction**: the initializer runs once per slot, even under a race
//! - **Lock-free steady state**: an initialized slot is read without taking a lock
//! - **Explicit or named slots**: pass a registry object around, or declare one with [`define_singleton!`]
//! - **Tracing support**: optional per-slot callback for monitoring slot operations
//!
//! ## Main Types
//!
//! - [`LazySingleton`] - Generic double-checked slot
//! - [`SingletonRegistry`] - Slot holding the string-payload [`Singleton`]
//! - [`SingletonApi`] - Trait behind [`define_singleton!`]
//! - [`RacySingleton`] - Unsynchronized check-then-act baseline, for comparison only
//! - [`factory`] and [`prototype`] - Companion creational patterns

mod lazy_singleton;
mod macros;
mod racy_singleton;
mod singleton;
mod singleton_error;
mod singleton_event;
mod singleton_trait;

pub mod factory;
pub mod prototype;

pub use lazy_singleton::{LazySingleton, TraceCallback};
pub use racy_singleton::RacySingleton;
pub use singleton::{Singleton, SingletonHandle, SingletonRegistry};
pub use singleton_error::SingletonError;
pub use singleton_event::SingletonEvent;
pub use singleton_trait::SingletonApi;
