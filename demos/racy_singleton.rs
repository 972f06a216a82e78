//! Racy singleton example for lazy-singleton.
//!
//! Demonstrates:
//! - Why check-then-act without an init lock is not a singleton
//! - Two overlapping constructions producing two different instances
//!
//! Run with: `cargo run --example racy_singleton`

use lazy_singleton::{RacySingleton, SingletonRegistry};
use std::sync::{Arc, Barrier};
use std::thread;

static RACY: RacySingleton<String> = RacySingleton::new();
static SAFE: SingletonRegistry = SingletonRegistry::new();

fn main() {
    println!("=== lazy-singleton: Racy vs. Double-Checked ===\n");

    // -------------------------------------------------------------------------
    // 1. Single-threaded, the racy version looks fine
    // -------------------------------------------------------------------------
    println!("1. Single-threaded access...");

    let local: RacySingleton<String> = RacySingleton::new();
    let s1 = local.get_instance(|| "first".to_string());
    let s2 = local.get_instance(|| "second".to_string());

    if Arc::ptr_eq(&s1, &s2) {
        println!("   Singleton works, both variables contain the same instance.");
    } else {
        println!("   Singleton failed, variables contain different instances.");
    }

    // -------------------------------------------------------------------------
    // 2. Force both threads into construction at the same time
    // -------------------------------------------------------------------------
    println!("\n2. Overlapping first access (racy)...");

    let inside_init = Arc::new(Barrier::new(2));
    let racy_threads: Vec<_> = ["FOO", "BAR"]
        .into_iter()
        .map(|value| {
            let inside_init = Arc::clone(&inside_init);
            thread::spawn(move || {
                RACY.get_instance(|| {
                    inside_init.wait();
                    value.to_string()
                })
            })
        })
        .collect();

    for handle in racy_threads {
        let singleton = handle.join().expect("racy thread panicked");
        println!("   {}", singleton);
    }
    println!("   Left in the slot: {:?}", RACY.peek());

    // -------------------------------------------------------------------------
    // 3. The same race against the double-checked registry
    // -------------------------------------------------------------------------
    println!("\n3. Racing first access (double-checked)...");

    let start = Arc::new(Barrier::new(2));
    let safe_threads: Vec<_> = ["FOO", "BAR"]
        .into_iter()
        .map(|value| {
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                SAFE.get_instance(value)
            })
        })
        .collect();

    for handle in safe_threads {
        let singleton = handle.join().expect("safe thread panicked");
        println!("   {}", singleton);
    }

    println!("\n=== Example Complete ===");
}
