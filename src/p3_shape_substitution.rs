// Pattern 3: Liskov Substitution Principle
// A square is not a resizable rectangle. Code written against the rectangle
// contract breaks when handed a square that keeps its sides equal; siblings
// behind one Shape trait have no contract to break.

// =============================================================================
// Wrong design: Square forced under the Rectangle contract
// =============================================================================

pub trait ResizableRectangle {
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);
    fn area(&self) -> u32;
}

pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Rectangle { width, height }
    }
}

impl ResizableRectangle for Rectangle {
    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    fn area(&self) -> u32 {
        self.width * self.height
    }
}

pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Square { side }
    }
}

impl ResizableRectangle for Square {
    // Keeping the square square means each setter writes both sides. Callers
    // of ResizableRectangle expect the setters to be independent.
    fn set_width(&mut self, width: u32) {
        self.side = width;
    }

    fn set_height(&mut self, height: u32) {
        self.side = height;
    }

    fn area(&self) -> u32 {
        self.side * self.side
    }
}

/// Written against Rectangle expectations: after setting width and height,
/// the area is their product.
pub fn stretch_to(rect: &mut dyn ResizableRectangle, width: u32, height: u32) -> u32 {
    rect.set_width(width);
    rect.set_height(height);
    rect.area()
}

// =============================================================================
// Corrected design: sibling shapes behind one trait
// =============================================================================

pub trait Shape {
    fn area(&self) -> u32;
}

pub struct RectangleShape {
    pub width: u32,
    pub height: u32,
}

impl Shape for RectangleShape {
    fn area(&self) -> u32 {
        self.width * self.height
    }
}

pub struct SquareShape {
    pub side: u32,
}

impl Shape for SquareShape {
    fn area(&self) -> u32 {
        self.side * self.side
    }
}

fn main() {
    println!("=== Wrong: square as a resizable rectangle ===");
    let mut rectangle = Rectangle::new(1, 1);
    let area = stretch_to(&mut rectangle, 5, 4);
    println!("rectangle stretched to 5x4, area = {area} (expected 20)");

    let mut square = Square::new(1);
    let area = stretch_to(&mut square, 5, 4);
    println!("square stretched to 5x4, area = {area} (expected 20!)");

    println!("\n=== Corrected: siblings behind the Shape trait ===");
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(RectangleShape {
            width: 5,
            height: 4,
        }),
        Box::new(SquareShape { side: 5 }),
    ];
    for shape in &shapes {
        println!("area = {}", shape.area());
    }
    println!("No setters, no contract to violate: any Shape substitutes for any other.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_honors_the_stretch_contract() {
        let mut rectangle = Rectangle::new(1, 1);
        assert_eq!(stretch_to(&mut rectangle, 5, 4), 20);
    }

    #[test]
    fn square_breaks_the_stretch_contract() {
        let mut square = Square::new(1);
        // The second setter overwrites the first; both sides end up 4.
        assert_eq!(stretch_to(&mut square, 5, 4), 16);
    }

    #[test]
    fn sibling_shapes_report_their_own_areas() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(RectangleShape {
                width: 5,
                height: 4,
            }),
            Box::new(SquareShape { side: 5 }),
        ];
        let areas: Vec<u32> = shapes.iter().map(|shape| shape.area()).collect();
        assert_eq!(areas, [20, 25]);
    }
}
