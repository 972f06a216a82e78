//! Factory method example for lazy-singleton.
//!
//! Run with: `cargo run --example factory_method`

use lazy_singleton::factory::{
    client_code, ConcreteCreator1, ConcreteCreator2, Point, PointFactory,
};
use std::f64::consts::FRAC_PI_4;

fn main() {
    println!("App: Launched with the ConcreteCreator1.");
    println!("{}", client_code(&ConcreteCreator1));

    println!();

    println!("App: Launched with the ConcreteCreator2.");
    println!("{}", client_code(&ConcreteCreator2));

    println!();
    println!("{}", Point::new_polar(5.0, FRAC_PI_4));
    println!("{}", Point::new_cartesian(50.0, 45.0));

    println!();
    println!("{}", PointFactory::new_polar(5.0, FRAC_PI_4));
    println!("{}", PointFactory::new_cartesian(50.0, 45.0));
}
