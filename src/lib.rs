//! # SOLID Design Principles in Rust
//!
//! This crate is a collection of small, self-contained demo programs. Each one
//! shows a "wrong" design next to the corrected design for one of the five
//! SOLID principles, plus a closing pattern on factories:
//!
//! ## Pattern 1: Single Responsibility
//! - A journal that persists itself vs. a journal plus a persistence manager
//! - Plain-text and JSON persistence, round-trip loading
//!
//! ## Pattern 2: Open/Closed
//! - A filter type that grows a method per criterion vs. the specification
//!   pattern
//! - Combining specifications without touching the filter
//!
//! ## Pattern 3: Liskov Substitution
//! - A square pretending to be a resizable rectangle
//! - Sibling shapes behind one `Shape` trait
//!
//! ## Pattern 4: Interface Segregation
//! - A fat machine trait forcing printers to stub scan and fax
//! - Segregated `Printer` / `Scanner` / `Fax` capabilities
//!
//! ## Pattern 5: Dependency Inversion
//! - Research code reading a low-level relation store directly
//! - The same research against a `RelationshipBrowser` trait
//!
//! ## Pattern 6: Factory Method and Abstract Factory
//! - `Point` constructible only through named constructors
//! - Hot-drink factories behind a name-keyed registry
//!
//! Run a demo with: `cargo run --bin <name>`, for example
//! `cargo run --bin p6_drink_factory`. Tests live next to the code in each
//! file; run them all with `cargo test`.
