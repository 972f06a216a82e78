//! Core trait defining named singleton behavior.
//!
//! This module provides the `SingletonApi` trait with default implementations for
//! lazy initialization, retrieval and tracing of a process-wide value.
//!
//! Each implementor owns exactly one `'static` [`LazySingleton`] slot. The
//! `define_singleton!` macro generates an implementor; implementing the trait by
//! hand gives full control over where the slot lives.

use std::sync::Arc;

use crate::{LazySingleton, SingletonError, SingletonEvent};

/// Core trait defining singleton behavior.
///
/// Provides default implementations for all operations, requiring only the `slot`
/// accessor to be implemented by the implementor.
pub trait SingletonApi {
    /// The type of the shared value.
    type Value: Send + Sync + 'static;

    /// Access the slot static.
    ///
    /// This method must be implemented to provide access to the singleton's storage.
    fn slot() -> &'static LazySingleton<Self::Value>;

    /// Return the shared value, constructing it with `init` on first demand.
    ///
    /// `init` is only called by the caller that wins the creation race.
    fn get_instance(&self, init: impl FnOnce() -> Self::Value) -> Arc<Self::Value> {
        Self::slot().get_or_init(init)
    }

    /// Return the shared value without constructing it.
    ///
    /// # Errors
    ///
    /// - The value has not been initialized yet
    fn get(&self) -> Result<Arc<Self::Value>, SingletonError> {
        Self::slot().get()
    }

    /// Initialize the shared value eagerly.
    ///
    /// # Errors
    ///
    /// - The value was already initialized; `value` is dropped
    fn try_init(&self, value: Self::Value) -> Result<Arc<Self::Value>, SingletonError> {
        Self::slot().try_init(value)
    }

    /// Check whether the shared value exists.
    fn is_initialized(&self) -> bool {
        Self::slot().is_initialized()
    }

    /// Set a tracing callback for this singleton's operations.
    fn set_trace_callback(&self, callback: impl Fn(&SingletonEvent) + Send + Sync + 'static) {
        Self::slot().set_trace_callback(callback)
    }

    /// Clear the tracing callback.
    fn clear_trace_callback(&self) {
        Self::slot().clear_trace_callback()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
