//! Integration tests for exactly-once initialization under concurrent first access.
//!
//! Every test builds its own registry or slot, so nothing here needs `#[serial]`.

use lazy_singleton::{LazySingleton, SingletonHandle, SingletonRegistry};
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

/// Calls `get_instance` once per value, all threads released together.
fn race(registry: &SingletonRegistry, values: &[String]) -> Vec<SingletonHandle> {
    let barrier = Barrier::new(values.len());

    thread::scope(|s| {
        let workers: Vec<_> = values
            .iter()
            .map(|value| {
                let barrier = &barrier;
                s.spawn(move || {
                    barrier.wait();
                    registry.get_instance(value.as_str())
                })
            })
            .collect();

        workers.into_iter().map(|w| w.join().unwrap()).collect()
    })
}

#[test]
fn test_foo_and_bar_agree() {
    for _ in 0..50 {
        let registry = SingletonRegistry::new();
        let handles = race(&registry, &["FOO".to_string(), "BAR".to_string()]);

        assert!(Arc::ptr_eq(&handles[0], &handles[1]));
        assert_eq!(handles[0].value(), handles[1].value());
        assert!(matches!(handles[0].value(), "FOO" | "BAR"));
    }
}

#[test]
fn test_constructor_runs_exactly_once() {
    const THREADS: usize = 32;

    let slot: LazySingleton<Vec<usize>> = LazySingleton::new();
    let constructions = AtomicUsize::new(0);
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for i in 0..THREADS {
            let (slot, constructions, barrier) = (&slot, &constructions, &barrier);
            s.spawn(move || {
                barrier.wait();
                slot.get_or_init(|| {
                    constructions.fetch_add(1, Ordering::SeqCst);
                    vec![i; 8]
                });
            });
        }
    });

    assert_eq!(constructions.load(Ordering::SeqCst), 1);
}

#[test]
fn test_readers_never_observe_partial_value() {
    const LEN: usize = 10_000;
    const READERS: usize = 8;

    #[derive(Debug)]
    struct Payload {
        label: String,
        data: Vec<u64>,
    }

    let slot: LazySingleton<Payload> = LazySingleton::new();
    let barrier = Barrier::new(READERS + 1);

    thread::scope(|s| {
        for _ in 0..READERS {
            let (slot, barrier) = (&slot, &barrier);
            s.spawn(move || {
                barrier.wait();
                loop {
                    if let Ok(payload) = slot.get() {
                        assert_eq!(payload.label, "ready");
                        assert_eq!(payload.data.len(), LEN);
                        assert!(payload.data.iter().all(|&v| v == 7));
                        break;
                    }
                    thread::yield_now();
                }
            });
        }

        barrier.wait();
        slot.get_or_init(|| Payload {
            label: "ready".to_string(),
            data: vec![7; LEN],
        });
    });
}

#[test]
fn test_idempotent_after_initialization() {
    let registry = SingletonRegistry::new();
    let first = registry.get_instance("first");

    for i in 0..1_000 {
        let again = registry.get_instance(format!("call {i}"));
        assert!(Arc::ptr_eq(&first, &again));
    }
    assert_eq!(first.value(), "first");
}

#[test]
fn test_registry_shared_through_arc() {
    let registry = Arc::new(SingletonRegistry::new());

    let workers: Vec<_> = ["FOO", "BAR"]
        .into_iter()
        .map(|value| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.get_instance(value))
        })
        .collect();

    let handles: Vec<SingletonHandle> = workers.into_iter().map(|w| w.join().unwrap()).collect();
    assert!(Arc::ptr_eq(&handles[0], &handles[1]));
    assert!(Arc::ptr_eq(&handles[0], &registry.instance().unwrap()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_all_callers_share_one_supplied_value(
        values in prop::collection::vec("[A-Z]{1,6}", 2..10)
    ) {
        let registry = SingletonRegistry::new();
        let handles = race(&registry, &values);

        let winner = &handles[0];
        prop_assert!(handles.iter().all(|h| Arc::ptr_eq(h, winner)));
        prop_assert!(values.iter().any(|v| v == winner.value()));
    }

    #[test]
    fn prop_construction_count_is_one(threads in 2usize..24) {
        let slot: LazySingleton<usize> = LazySingleton::new();
        let constructions = AtomicUsize::new(0);
        let barrier = Barrier::new(threads);

        let seen: Vec<usize> = thread::scope(|s| {
            let workers: Vec<_> = (0..threads)
                .map(|i| {
                    let (slot, constructions, barrier) = (&slot, &constructions, &barrier);
                    s.spawn(move || {
                        barrier.wait();
                        *slot.get_or_init(|| {
                            constructions.fetch_add(1, Ordering::SeqCst);
                            i
                        })
                    })
                })
                .collect();

            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        prop_assert_eq!(constructions.load(Ordering::SeqCst), 1);
        prop_assert!(seen.iter().all(|&v| v == seen[0]));
        prop_assert!(seen[0] < threads);
    }
}
