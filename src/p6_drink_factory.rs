// Pattern 6: Factory Method and Abstract Factory
// A Point constructible only through named constructors, and a drink registry
// that resolves a drink name to the factory that knows how to build it.
//
// Run with: cargo run --bin p6_drink_factory

use colored::Colorize;
use std::collections::HashMap;
use std::f64::consts::FRAC_PI_4;

// =============================================================================
// Factory method: named constructors for Point
// =============================================================================

/// A plain `Point::new(a, b)` cannot say whether the arguments are Cartesian
/// or polar. The named constructors make the caller spell it out; the raw
/// constructor stays private.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn new_cartesian(x: f64, y: f64) -> Self {
        Point::new(x, y)
    }

    pub fn new_polar(rho: f64, theta: f64) -> Self {
        Point::new(rho * theta.cos(), rho * theta.sin())
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

// =============================================================================
// Abstract factory: the hot drink family
// =============================================================================

pub trait HotDrink {
    fn name(&self) -> &str;

    /// Purely a notification that `volume` millilitres are being drunk.
    fn drink_volume(&self, volume: u32);
}

pub struct Tea;

impl Tea {
    pub fn new(volume: u32) -> Self {
        println!("make Tea: {volume}ml");
        Tea
    }
}

impl HotDrink for Tea {
    fn name(&self) -> &str {
        "Tea"
    }

    fn drink_volume(&self, volume: u32) {
        println!("Drink Tea: {volume}ml");
    }
}

pub struct Coffee;

impl Coffee {
    pub fn new(volume: u32) -> Self {
        println!("make Coffee: {volume}ml");
        Coffee
    }
}

impl HotDrink for Coffee {
    fn name(&self) -> &str {
        "Coffee"
    }

    fn drink_volume(&self, volume: u32) {
        println!("Drink Coffee: {volume}ml");
    }
}

/// One factory per drink kind. Factories hold no state; every call builds a
/// fresh drink owned entirely by the caller.
pub trait HotDrinkFactory {
    fn make(&self, volume: u32) -> Box<dyn HotDrink>;
}

pub struct TeaFactory;

impl HotDrinkFactory for TeaFactory {
    fn make(&self, volume: u32) -> Box<dyn HotDrink> {
        Box::new(Tea::new(volume))
    }
}

pub struct CoffeeFactory;

impl HotDrinkFactory for CoffeeFactory {
    fn make(&self, volume: u32) -> Box<dyn HotDrink> {
        Box::new(Coffee::new(volume))
    }
}

/// Name-keyed registry of drink factories. Populated once in `new`, read-only
/// afterwards; keys are case-sensitive.
pub struct DrinkFactory {
    factories: HashMap<String, Box<dyn HotDrinkFactory>>,
}

impl DrinkFactory {
    pub fn new() -> Self {
        let mut factories: HashMap<String, Box<dyn HotDrinkFactory>> = HashMap::new();
        factories.insert("tea".to_string(), Box::new(TeaFactory));
        factories.insert("coffee".to_string(), Box::new(CoffeeFactory));
        DrinkFactory { factories }
    }

    /// An unknown name is simply "no drink", never an error.
    pub fn make_drink(&self, name: &str, volume: u32) -> Option<Box<dyn HotDrink>> {
        self.factories.get(name).map(|factory| factory.make(volume))
    }
}

impl Default for DrinkFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn main() {
    println!("{}", "=== Factory method: Point ===".bold());
    let cartesian = Point::new_cartesian(2.0, 2.0);
    let polar = Point::new_polar(5.0, FRAC_PI_4);
    println!("cartesian(2, 2)     -> ({}, {})", cartesian.x(), cartesian.y());
    println!("polar(5, pi/4)      -> ({:.4}, {:.4})", polar.x(), polar.y());

    println!("\n{}", "=== Abstract factory: drinks by name ===".bold());
    let bar = DrinkFactory::new();
    for order in ["tea", "coffee", "soda"] {
        match bar.make_drink(order, 100) {
            Some(drink) => drink.drink_volume(100),
            None => println!("{}", format!("no '{order}' on the menu").red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cartesian_constructor_is_exact() {
        let point = Point::new_cartesian(2.0, -3.5);
        assert_eq!(point.x(), 2.0);
        assert_eq!(point.y(), -3.5);
    }

    #[test]
    fn polar_quarter_turn_lands_on_the_diagonal() {
        let point = Point::new_polar(5.0, FRAC_PI_4);
        let expected = 5.0 * FRAC_PI_4.cos();
        assert!((point.x() - expected).abs() < 1e-12);
        assert!((point.y() - expected).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn polar_matches_cartesian_conversion(rho in -100.0f64..100.0, theta in -7.0f64..7.0) {
            let polar = Point::new_polar(rho, theta);
            let cartesian = Point::new_cartesian(rho * theta.cos(), rho * theta.sin());
            prop_assert!((polar.x() - cartesian.x()).abs() < 1e-9);
            prop_assert!((polar.y() - cartesian.y()).abs() < 1e-9);
        }

        #[test]
        fn polar_magnitude_is_rho(rho in -100.0f64..100.0, theta in -7.0f64..7.0) {
            let point = Point::new_polar(rho, theta);
            let magnitude = point.x().hypot(point.y());
            prop_assert!((magnitude - rho.abs()).abs() < 1e-6);
        }
    }

    #[test]
    fn registry_resolves_tea() {
        let bar = DrinkFactory::new();
        let drink = bar.make_drink("tea", 100).expect("tea is registered");
        assert_eq!(drink.name(), "Tea");
        drink.drink_volume(100);
    }

    #[test]
    fn registry_resolves_coffee() {
        let bar = DrinkFactory::new();
        let drink = bar.make_drink("coffee", 100).expect("coffee is registered");
        assert_eq!(drink.name(), "Coffee");
    }

    #[test]
    fn unknown_drink_is_none() {
        let bar = DrinkFactory::new();
        assert!(bar.make_drink("soda", 100).is_none());
    }

    #[test]
    fn keys_are_case_sensitive() {
        let bar = DrinkFactory::new();
        assert!(bar.make_drink("Tea", 100).is_none());
    }

    #[test]
    fn successive_lookups_build_independent_drinks() {
        let bar = DrinkFactory::new();
        let first = bar.make_drink("tea", 50).expect("tea is registered");
        let second = bar.make_drink("tea", 200).expect("tea is registered");
        // Both handles stay usable in any order; nothing is shared between them.
        second.drink_volume(200);
        first.drink_volume(50);
        assert_eq!(first.name(), second.name());
    }

    #[test]
    fn factories_build_their_own_variant() {
        assert_eq!(TeaFactory.make(10).name(), "Tea");
        assert_eq!(CoffeeFactory.make(10).name(), "Coffee");
    }
}
