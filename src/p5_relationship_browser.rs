// Pattern 5: Dependency Inversion Principle
// High-level research code should not read the low-level relation store
// directly. Both sides depend on a RelationshipBrowser abstraction, so the
// store can change shape (or be replaced by a test double) without breaking
// the research.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Parent,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person { name: name.into() }
    }
}

/// The abstraction both layers depend on.
pub trait RelationshipBrowser {
    fn find_all_children_of(&self, name: &str) -> Vec<Person>;
    fn find_all_parents_of(&self, name: &str) -> Vec<Person>;
}

// =============================================================================
// Low-level module: the relation store
// =============================================================================

#[derive(Default)]
pub struct Relationships {
    // Public so the wrong design below can reach in; the corrected design
    // never touches it.
    pub relations: Vec<(Person, Relation, Person)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_parent_and_child(&mut self, parent: &str, child: &str) {
        self.relations
            .push((Person::new(parent), Relation::Parent, Person::new(child)));
        self.relations
            .push((Person::new(child), Relation::Child, Person::new(parent)));
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<Person> {
        self.relations
            .iter()
            .filter(|(first, relation, _)| first.name == name && *relation == Relation::Parent)
            .map(|(_, _, second)| second.clone())
            .collect()
    }

    fn find_all_parents_of(&self, name: &str) -> Vec<Person> {
        self.relations
            .iter()
            .filter(|(first, relation, _)| first.name == name && *relation == Relation::Child)
            .map(|(_, _, second)| second.clone())
            .collect()
    }
}

// =============================================================================
// Wrong design: high level reads the store directly
// =============================================================================

/// Tightly coupled to the vector of triples. Restrict access to `relations`,
/// or store them differently, and this function no longer compiles.
pub fn research_directly(relationships: &Relationships, parent: &str) {
    for (first, relation, second) in &relationships.relations {
        if first.name == parent && *relation == Relation::Parent {
            println!("{parent} child: {}", second.name);
        }
    }
}

// =============================================================================
// Corrected design: high level depends on the abstraction
// =============================================================================

pub struct Research<'a> {
    browser: &'a dyn RelationshipBrowser,
}

impl<'a> Research<'a> {
    pub fn new(browser: &'a dyn RelationshipBrowser) -> Self {
        Research { browser }
    }

    pub fn children_of(&self, name: &str) -> Vec<Person> {
        self.browser.find_all_children_of(name)
    }

    pub fn parents_of(&self, name: &str) -> Vec<Person> {
        self.browser.find_all_parents_of(name)
    }
}

fn main() {
    let mut relationships = Relationships::new();
    relationships.add_parent_and_child("John", "John's baby1");
    relationships.add_parent_and_child("John", "John's baby2");
    relationships.add_parent_and_child("Tom", "Tom's baby1");

    println!("=== Wrong: research reads the store directly ===");
    research_directly(&relationships, "John");

    println!("\n=== Corrected: research through the browser trait ===");
    let research = Research::new(&relationships);
    for child in research.children_of("John") {
        println!("John child: {}", child.name);
    }
    for parent in research.parents_of("Tom's baby1") {
        println!("Tom's baby1 parent: {}", parent.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_children_of_the_requested_parent() {
        let mut relationships = Relationships::new();
        relationships.add_parent_and_child("John", "John's baby1");
        relationships.add_parent_and_child("John", "John's baby2");
        relationships.add_parent_and_child("Tom", "Tom's baby1");

        let children = relationships.find_all_children_of("John");
        let names: Vec<&str> = children.iter().map(|child| child.name.as_str()).collect();
        assert_eq!(names, ["John's baby1", "John's baby2"]);
    }

    #[test]
    fn finds_parents_through_the_inverse_relation() {
        let mut relationships = Relationships::new();
        relationships.add_parent_and_child("Tom", "Tom's baby1");

        let parents = relationships.find_all_parents_of("Tom's baby1");
        assert_eq!(parents, [Person::new("Tom")]);
    }

    #[test]
    fn unknown_name_yields_no_relatives() {
        let mut relationships = Relationships::new();
        relationships.add_parent_and_child("John", "John's baby1");

        assert!(relationships.find_all_children_of("Alice").is_empty());
        assert!(relationships.find_all_parents_of("Alice").is_empty());
    }

    // The point of the inversion: research runs against any browser, including
    // a canned one with no store behind it.
    struct StubBrowser;

    impl RelationshipBrowser for StubBrowser {
        fn find_all_children_of(&self, name: &str) -> Vec<Person> {
            if name == "John" {
                vec![Person::new("stub child")]
            } else {
                Vec::new()
            }
        }

        fn find_all_parents_of(&self, _name: &str) -> Vec<Person> {
            Vec::new()
        }
    }

    #[test]
    fn research_works_against_a_stub_browser() {
        let research = Research::new(&StubBrowser);
        assert_eq!(research.children_of("John"), [Person::new("stub child")]);
        assert!(research.children_of("Tom").is_empty());
    }
}
