//! Factory Method illustrations.
//!
//! Two flavors are shown: named constructors standing in for overloaded ones
//! ([`Point`], [`PointFactory`]), and a creator trait whose implementors decide which
//! [`Product`] gets built ([`Creator`]).
//!
//! Module privacy stands in for an inner factory type: the fields and raw constructor of
//! [`Point`] are private to this module, so only its associated functions and
//! [`PointFactory`] can build one.
//!
//! ```compile_fail
//! use lazy_singleton::factory::Point;
//!
//! let point = Point { x: 1.0, y: 2.0 };
//! ```

use std::fmt;

/// A point in the plane. Only constructible through its factory functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn new_cartesian(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }

    /// Builds a point from polar coordinates; `theta` is in radians.
    pub fn new_polar(rho: f64, theta: f64) -> Self {
        Self::new(rho * theta.cos(), rho * theta.sin())
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Stand-alone factory for [`Point`], keeping construction logic out of the type.
pub struct PointFactory;

impl PointFactory {
    pub fn new_cartesian(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    pub fn new_polar(rho: f64, theta: f64) -> Point {
        Point::new(rho * theta.cos(), rho * theta.sin())
    }
}

// -------------------------------------------------------------------------------------------------
// Creator / Product
// -------------------------------------------------------------------------------------------------

pub trait Product {
    fn operation(&self) -> String;
}

pub struct ConcreteProduct1;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{Result of ConcreteProduct1}".to_string()
    }
}

pub struct ConcreteProduct2;

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{Result of ConcreteProduct2}".to_string()
    }
}

/// Declares the factory method; implementors pick the concrete [`Product`].
///
/// `some_operation` is shared logic that only ever sees the product through the trait.
pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

pub struct ConcreteCreator1;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

pub struct ConcreteCreator2;

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

/// Client code that works with any creator without knowing its concrete type.
pub fn client_code(creator: &dyn Creator) -> String {
    format!(
        "Client: I'm not aware of the creator's class, but it still works.\n{}",
        creator.some_operation()
    )
}
