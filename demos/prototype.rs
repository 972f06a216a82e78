//! Prototype example for lazy-singleton.
//!
//! Demonstrates:
//! - Shallow copies sharing the nested id record
//! - Deep copies owning their own id record
//!
//! Run with: `cargo run --example prototype`

use chrono::NaiveDate;
use lazy_singleton::prototype::{IdInfo, Person};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn main() {
    let mut p1 = Person::new("Jovan Petkoski", date(1995, 1, 20), 24, IdInfo::new(23));

    let p2 = p1.shallow_copy();
    let p3 = p1.deep_copy();

    println!("Original values of p1, p2, p3:");
    println!("   p1 instance values:\n{}", p1.display_values());
    println!("   p2 instance values:\n{}", p2.display_values());
    println!("   p3 instance values:\n{}", p3.display_values());

    p1.age = 34;
    p1.birth_date = date(2005, 2, 22);
    p1.name = "Frank".to_string();
    p1.set_id_number(33);

    println!("\nValues of p1, p2 and p3 after changes to p1:");
    println!("   p1 instance values:\n{}", p1.display_values());
    println!(
        "   p2 instance values (reference values have changed):\n{}",
        p2.display_values()
    );
    println!(
        "   p3 instance values (everything was kept the same):\n{}",
        p3.display_values()
    );

    println!("\n");

    let john = Person::new("John Smith", date(2000, 5, 25), 18, IdInfo::new(1));
    let mut jane = john.shallow_copy();
    jane.name = "Jane Smith".to_string();
    jane.age = 28;
    jane.birth_date = date(2005, 6, 26);
    // shared with john
    jane.set_id_number(2);

    println!("{}", john.display_values());
    println!("{}", jane.display_values());
}
