// Pattern 4: Interface Segregation Principle
// A fat machine trait forces a basic printer to carry scan and fax methods it
// cannot honor. Segregated capability traits let each device implement only
// what it actually does, and let clients ask only for what they need.
//
// Run with: cargo run --bin p4_machine_interfaces

use thiserror::Error;

pub struct Document {
    pub name: String,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Document { name: name.into() }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MachineError {
    #[error("{device} does not support {operation}")]
    Unsupported {
        device: &'static str,
        operation: &'static str,
    },
}

// =============================================================================
// Wrong design: one trait for every machine
// =============================================================================

pub trait Machine {
    fn print(&self, doc: &Document) -> Result<(), MachineError>;
    fn scan(&self, doc: &Document) -> Result<(), MachineError>;
    fn fax(&self, doc: &Document) -> Result<(), MachineError>;
}

/// A plain printer has no scanner and no fax line, but the trait demands the
/// methods anyway. Stubs are all it can offer.
pub struct BasicPrinter;

impl Machine for BasicPrinter {
    fn print(&self, doc: &Document) -> Result<(), MachineError> {
        println!("BasicPrinter prints '{}'", doc.name);
        Ok(())
    }

    fn scan(&self, _doc: &Document) -> Result<(), MachineError> {
        Err(MachineError::Unsupported {
            device: "BasicPrinter",
            operation: "scan",
        })
    }

    fn fax(&self, _doc: &Document) -> Result<(), MachineError> {
        Err(MachineError::Unsupported {
            device: "BasicPrinter",
            operation: "fax",
        })
    }
}

// =============================================================================
// Corrected design: one trait per capability
// =============================================================================

pub trait Printer {
    fn print(&self, doc: &Document);
}

pub trait Scanner {
    fn scan(&self, doc: &Document);
}

pub trait Fax {
    fn fax(&self, doc: &Document);
}

pub struct InkjetPrinter;

impl Printer for InkjetPrinter {
    fn print(&self, doc: &Document) {
        println!("InkjetPrinter prints '{}'", doc.name);
    }
}

pub struct OfficeMachine;

impl Printer for OfficeMachine {
    fn print(&self, doc: &Document) {
        println!("OfficeMachine prints '{}'", doc.name);
    }
}

impl Scanner for OfficeMachine {
    fn scan(&self, doc: &Document) {
        println!("OfficeMachine scans '{}'", doc.name);
    }
}

impl Fax for OfficeMachine {
    fn fax(&self, doc: &Document) {
        println!("OfficeMachine faxes '{}'", doc.name);
    }
}

/// A client that needs scanning and printing names exactly those capabilities.
/// A fax-less device qualifies for neither half it does not have.
pub fn duplicate(doc: &Document, scanner: &dyn Scanner, printer: &dyn Printer) {
    scanner.scan(doc);
    printer.print(doc);
}

fn main() {
    let report = Document::new("quarterly report");

    println!("=== Wrong: fat Machine trait ===");
    let basic = BasicPrinter;
    if let Err(err) = basic.print(&report) {
        eprintln!("print failed: {err}");
    }
    match basic.scan(&report) {
        Ok(()) => println!("scanned"),
        Err(err) => println!("stubbed method surfaces at runtime: {err}"),
    }

    println!("\n=== Corrected: segregated capabilities ===");
    let inkjet = InkjetPrinter;
    inkjet.print(&report);

    let office = OfficeMachine;
    office.print(&report);
    office.scan(&report);
    office.fax(&report);

    println!("\n=== Clients depend only on what they use ===");
    duplicate(&report, &office, &inkjet);
}
