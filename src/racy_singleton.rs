//! A deliberately racy singleton, kept as a baseline for comparison.
//!
//! [`RacySingleton`] is memory-safe but logically broken: the occupancy check and the
//! store happen in two separate critical sections. Two callers that both observe an
//! empty slot both construct a value, the last store wins, and the earlier caller is
//! left holding an instance nobody else sees. Use [`LazySingleton`](crate::LazySingleton)
//! for real code.

use std::sync::{Arc, Mutex, MutexGuard};

/// Check-then-act singleton without an initialization lock.
#[derive(Debug)]
pub struct RacySingleton<T> {
    instance: Mutex<Option<Arc<T>>>,
}

impl<T> Default for RacySingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RacySingleton<T> {
    /// Creates an empty slot. Usable in `static` items.
    pub const fn new() -> Self {
        Self {
            instance: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.instance.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Returns the stored value, constructing one with `init` if none was observed.
    ///
    /// Single-threaded this behaves like a singleton. Under concurrent first access
    /// `init` may run more than once and callers may receive different instances.
    pub fn get_instance(&self, init: impl FnOnce() -> T) -> Arc<T> {
        if let Some(existing) = self.peek() {
            return existing;
        }

        let created = Arc::new(init());
        *self.lock() = Some(Arc::clone(&created));
        created
    }

    /// Returns the currently stored value, if any.
    pub fn peek(&self) -> Option<Arc<T>> {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_single_threaded_reuse() {
        let racy: RacySingleton<String> = RacySingleton::new();
        assert!(racy.peek().is_none());

        let first = racy.get_instance(|| "first".to_string());
        let second = racy.get_instance(|| "second".to_string());

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(&*second, "first");
    }

    #[test]
    fn test_overlapping_construction_creates_two_instances() {
        let racy: RacySingleton<&'static str> = RacySingleton::new();
        let calls = AtomicUsize::new(0);
        // Both constructors must be running before either may finish.
        let inside_init = Barrier::new(2);

        let handles: Vec<Arc<&'static str>> = thread::scope(|s| {
            let workers: Vec<_> = ["FOO", "BAR"]
                .into_iter()
                .map(|value| {
                    let (racy, calls, inside_init) = (&racy, &calls, &inside_init);
                    s.spawn(move || {
                        racy.get_instance(|| {
                            calls.fetch_add(1, Ordering::SeqCst);
                            inside_init.wait();
                            value
                        })
                    })
                })
                .collect();

            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!Arc::ptr_eq(&handles[0], &handles[1]));
        assert_ne!(*handles[0], *handles[1]);

        let stored = racy.peek().unwrap();
        assert!(handles.iter().any(|h| Arc::ptr_eq(h, &stored)));
    }
}
