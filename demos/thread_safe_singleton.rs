//! Thread-safe singleton example for lazy-singleton.
//!
//! Demonstrates:
//! - Two threads racing on first access to the same registry
//! - Only the winner's value is used; both threads see the same instance
//! - Tracing which caller initialized and which reused the value
//!
//! Run with: `cargo run --example thread_safe_singleton`

use lazy_singleton::{SingletonHandle, SingletonRegistry};
use std::sync::Arc;
use std::thread;

// One registry for the whole process
static REGISTRY: SingletonRegistry = SingletonRegistry::new();

fn test_singleton(value: &str) -> SingletonHandle {
    let singleton = REGISTRY.get_instance(value);
    println!("{}", singleton);
    singleton
}

fn main() {
    println!("If you see the same value, then singleton was reused (yay!)");
    println!("If you see different values, then 2 singletons were created (booo!!)");
    println!("\nRESULT:\n");

    REGISTRY.set_trace_callback(|event| eprintln!("   [trace] {}", event));

    let process1 = thread::spawn(|| test_singleton("FOO"));
    let process2 = thread::spawn(|| test_singleton("BAR"));

    let first = process1.join().expect("FOO thread panicked");
    let second = process2.join().expect("BAR thread panicked");

    REGISTRY.clear_trace_callback();

    println!("\nSame instance? {}", Arc::ptr_eq(&first, &second));
}
