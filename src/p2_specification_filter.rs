// Pattern 2: Open/Closed Principle
// Filtering products by criteria. The hard-coded filter grows a method for
// every new criterion; the specification pattern adds criteria as new types
// and leaves the filter alone.
//
// Run with: cargo run --bin p2_specification_filter

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Product {
            name: name.into(),
            color,
            size,
        }
    }
}

// =============================================================================
// Wrong design: one filter method per criterion
// =============================================================================

pub struct ProductFilter;

impl ProductFilter {
    pub fn by_color<'a>(&self, items: &'a [Product], color: Color) -> Vec<&'a Product> {
        items.iter().filter(|item| item.color == color).collect()
    }

    pub fn by_size<'a>(&self, items: &'a [Product], size: Size) -> Vec<&'a Product> {
        items.iter().filter(|item| item.size == size).collect()
    }

    // "by size and color" means opening this type up again, and the one after
    // that, forever.
}

// =============================================================================
// Corrected design: specification pattern
// =============================================================================

pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;
}

pub trait Filter<T> {
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T>;
}

/// Works for any item type and any specification. Never needs another method.
pub struct GenericFilter;

impl<T> Filter<T> for GenericFilter {
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
        items.iter().filter(|item| spec.is_satisfied(item)).collect()
    }
}

pub struct ColorSpec {
    pub color: Color,
}

impl Specification<Product> for ColorSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

pub struct SizeSpec {
    pub size: Size,
}

impl Specification<Product> for SizeSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

/// Both specifications must hold. A new criterion built out of existing ones,
/// with no edits to `GenericFilter`.
pub struct AndSpec<'a, T> {
    first: &'a dyn Specification<T>,
    second: &'a dyn Specification<T>,
}

impl<'a, T> AndSpec<'a, T> {
    pub fn new(first: &'a dyn Specification<T>, second: &'a dyn Specification<T>) -> Self {
        AndSpec { first, second }
    }
}

impl<T> Specification<T> for AndSpec<'_, T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

fn print_products(label: &str, items: &[&Product]) {
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    println!("  {label}: {names:?}");
}

fn main() {
    let inventory = vec![
        Product::new("apple", Color::Green, Size::Small),
        Product::new("tree", Color::Green, Size::Large),
        Product::new("house", Color::Blue, Size::Large),
    ];

    println!("=== Wrong: hard-coded filter ===");
    let pf = ProductFilter;
    print_products("green", &pf.by_color(&inventory, Color::Green));
    print_products("large", &pf.by_size(&inventory, Size::Large));

    println!("\n=== Corrected: specification filter ===");
    let gf = GenericFilter;
    let green = ColorSpec {
        color: Color::Green,
    };
    let large = SizeSpec { size: Size::Large };
    print_products("green", &gf.filter(&inventory, &green));
    print_products("large", &gf.filter(&inventory, &large));

    println!("\n=== Extension without modification ===");
    let green_and_large = AndSpec::new(&green, &large);
    print_products("green and large", &gf.filter(&inventory, &green_and_large));
}
