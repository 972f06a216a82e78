//! A lazily constructed, thread-safe singleton slot.
//!
//! The slot holds at most one value for its whole lifetime. The first caller of
//! [`LazySingleton::get_or_init`] constructs it, every caller shares it afterwards.
//!
//! # Examples
//!
//! ```
//! use lazy_singleton::LazySingleton;
//! use std::sync::Arc;
//!
//! static GREETING: LazySingleton<String> = LazySingleton::new();
//!
//! let first = GREETING.get_or_init(|| "Hello".to_string());
//! let second = GREETING.get_or_init(|| "ignored".to_string());
//!
//! assert!(Arc::ptr_eq(&first, &second));
//! assert_eq!(&*second, "Hello");
//! ```

use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, MutexGuard, OnceLock,
    },
    thread::{self, ThreadId},
};

use crate::{SingletonError, SingletonEvent};

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `SingletonEvent` every time the slot is
/// interacted with. It must be thread-safe because the slot itself is shared.
pub type TraceCallback = dyn Fn(&SingletonEvent) + Send + Sync + 'static;

/// Thread-safe slot holding at most one lazily constructed value.
///
/// Initialization is double-checked: an occupied slot is read without taking any
/// lock, an empty slot is re-checked under `init_guard` before construction. The
/// value is published through a `OnceLock`, so a reader that observes the slot as
/// occupied also observes the fully constructed value.
pub struct LazySingleton<T> {
    instance: OnceLock<Arc<T>>,
    init_guard: Mutex<()>,
    initializer: Mutex<Option<ThreadId>>,
    tracing: AtomicBool,
    trace: Mutex<Option<Arc<TraceCallback>>>,
}

impl<T> LazySingleton<T> {
    /// Creates an empty slot. Usable in `static` items.
    pub const fn new() -> Self {
        Self {
            instance: OnceLock::new(),
            init_guard: Mutex::new(()),
            initializer: Mutex::new(None),
            tracing: AtomicBool::new(false),
            trace: Mutex::new(None),
        }
    }
}

/// Clears the initializing thread when construction ends, including by unwinding.
struct InitializerMark<'a>(&'a Mutex<Option<ThreadId>>);

impl Drop for InitializerMark<'_> {
    fn drop(&mut self) {
        *self.0.lock().unwrap_or_else(|p| p.into_inner()) = None;
    }
}

impl<T> Default for LazySingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LazySingleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySingleton")
            .field("instance", &self.instance.get())
            .finish_non_exhaustive()
    }
}

impl<T: Send + Sync + 'static> LazySingleton<T> {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Sets a tracing callback that will be invoked on every slot interaction.
    ///
    /// The callback runs outside of the slot's locks, so it may read the slot.
    /// Calling `get_or_init`, `get` or `try_init` on the same slot from inside the
    /// callback emits another event and recurses.
    ///
    /// # Example
    /// ```rust
    /// use lazy_singleton::LazySingleton;
    ///
    /// let slot: LazySingleton<u8> = LazySingleton::new();
    /// slot.set_trace_callback(|event| println!("[singleton-trace] {}", event));
    /// slot.get_or_init(|| 7);
    /// ```
    pub fn set_trace_callback(&self, callback: impl Fn(&SingletonEvent) + Send + Sync + 'static) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
        self.tracing.store(true, Ordering::Release);
    }

    /// Clears the tracing callback (disables slot tracing).
    pub fn clear_trace_callback(&self) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
        self.tracing.store(false, Ordering::Release);
    }

    /// Emits an event using the current callback.
    ///
    /// Without a callback this is a single atomic load, keeping the fast path lock-free.
    fn emit_event(&self, event: &SingletonEvent) {
        if !self.tracing.load(Ordering::Acquire) {
            return;
        }

        let callback = {
            let guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
            guard.clone()
        };

        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Slot
    // -------------------------------------------------------------------------------------------------

    /// Acquires the init lock, refusing a thread that is already constructing this slot.
    ///
    /// The init lock is not reentrant; without this check a nested call would deadlock.
    fn lock_init(&self, type_name: &'static str) -> MutexGuard<'_, ()> {
        let current = thread::current().id();
        let initializer = *self.initializer.lock().unwrap_or_else(|p| p.into_inner());
        if initializer == Some(current) {
            panic!("reentrant initialization of singleton: {type_name}");
        }

        self.init_guard.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Returns the shared value, constructing it with `init` if the slot is empty.
    ///
    /// `init` runs at most once per slot. Callers racing on an empty slot block on
    /// the init lock until the winner has published its value; their own `init` is
    /// dropped without being called.
    ///
    /// # Panics
    ///
    /// If `init` panics, the panic propagates and the slot stays empty. The next
    /// caller recovers the poisoned init lock and retries construction.
    ///
    /// The init lock is not reentrant: calling `get_or_init` or `try_init` on the
    /// same slot from inside `init` panics with "reentrant initialization of
    /// singleton" instead of deadlocking.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> Arc<T> {
        let type_name = std::any::type_name::<T>();

        // Fast path: no lock once the value is published.
        if let Some(existing) = self.instance.get() {
            self.emit_event(&SingletonEvent::Reuse {
                type_name,
                contended: false,
            });
            return Arc::clone(existing);
        }

        let guard = self.lock_init(type_name);

        // Another caller may have finished while we were waiting for the lock.
        if let Some(existing) = self.instance.get() {
            let existing = Arc::clone(existing);
            drop(guard);

            self.emit_event(&SingletonEvent::Reuse {
                type_name,
                contended: true,
            });
            return existing;
        }

        let current = thread::current().id();
        *self.initializer.lock().unwrap_or_else(|p| p.into_inner()) = Some(current);
        let mark = InitializerMark(&self.initializer);

        // Writers are serialized by `init_guard`, so `init` is the only constructor here.
        let created = Arc::clone(self.instance.get_or_init(|| Arc::new(init())));
        drop(mark);
        drop(guard);

        self.emit_event(&SingletonEvent::Initialize { type_name });
        created
    }

    /// Returns the shared value without constructing it.
    ///
    /// # Errors
    ///
    /// - `SingletonError::Uninitialized` if no caller has initialized the slot yet
    pub fn get(&self) -> Result<Arc<T>, SingletonError> {
        let type_name = std::any::type_name::<T>();
        let found = self.instance.get().cloned();

        self.emit_event(&SingletonEvent::Get {
            type_name,
            found: found.is_some(),
        });

        found.ok_or(SingletonError::Uninitialized { type_name })
    }

    /// Initializes the slot eagerly with `value`.
    ///
    /// # Errors
    ///
    /// - `SingletonError::AlreadyInitialized` if the slot is occupied; `value` is
    ///   dropped and the shared value is left untouched
    pub fn try_init(&self, value: T) -> Result<Arc<T>, SingletonError> {
        let type_name = std::any::type_name::<T>();

        let created = Arc::new(value);

        let guard = self.lock_init(type_name);
        let stored = self.instance.set(Arc::clone(&created));
        drop(guard);

        match stored {
            Ok(()) => {
                self.emit_event(&SingletonEvent::Initialize { type_name });
                Ok(created)
            }
            Err(_) => {
                self.emit_event(&SingletonEvent::Rejected { type_name });
                Err(SingletonError::AlreadyInitialized { type_name })
            }
        }
    }

    /// Checks whether the slot holds a value. Never constructs and never traces.
    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
