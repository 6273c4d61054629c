// Pattern 1: Single Responsibility Principle
// A journal keeps entries. Saving them is a separate concern: once persistence
// lives inside the journal, every change of storage backend touches the
// journal and every other type that copied the trick.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failed to access journal file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode journal: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Wrong design: the journal persists itself
// =============================================================================

pub struct MonolithicJournal {
    title: String,
    entries: Vec<String>,
}

impl MonolithicJournal {
    pub fn new(title: impl Into<String>) -> Self {
        MonolithicJournal {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: &str) {
        let number = self.entries.len() + 1;
        self.entries.push(format!("{number}: {entry}"));
    }

    // Second responsibility. Swap files for a database and this method, and
    // every sibling type that grew one like it, has to change.
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        fs::write(path, out)?;
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

// =============================================================================
// Corrected design: journal + persistence manager
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    title: String,
    entries: Vec<String>,
    next_entry: u32,
}

impl Journal {
    pub fn new(title: impl Into<String>) -> Self {
        Journal {
            title: title.into(),
            entries: Vec::new(),
            next_entry: 1,
        }
    }

    // Entry numbers count per journal, so two journals number independently.
    pub fn add_entry(&mut self, entry: &str) {
        self.entries.push(format!("{}: {entry}", self.next_entry));
        self.next_entry += 1;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// Owns persistence, and nothing else. The journal never learns where or how
/// it is stored.
pub struct PersistenceManager;

impl PersistenceManager {
    /// One entry per line, the format the journal was originally kept in.
    pub fn save(journal: &Journal, path: &Path) -> Result<(), PersistenceError> {
        let mut out = String::new();
        for entry in journal.entries() {
            out.push_str(entry);
            out.push('\n');
        }
        fs::write(path, out)?;
        Ok(())
    }

    /// Full snapshot, including the entry counter, so a loaded journal keeps
    /// numbering where it left off.
    pub fn save_json(journal: &Journal, path: &Path) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(journal)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_json(path: &Path) -> Result<Journal, PersistenceError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn main() {
    println!("=== Wrong: journal that persists itself ===");
    let mut logbook = MonolithicJournal::new("LogBook");
    logbook.add_entry("wreck observation");
    logbook.add_entry("rescue case");
    let path = std::env::temp_dir().join("monolithic_logbook.txt");
    match logbook.save(&path) {
        Ok(()) => println!("'{}' saved itself to {}", logbook.title(), path.display()),
        Err(err) => eprintln!("save failed: {err}"),
    }
    println!("Looks harmless until the storage backend changes.");

    println!("\n=== Corrected: journal + persistence manager ===");
    let mut journal = Journal::new("LogBook");
    journal.add_entry("wreck observation");
    journal.add_entry("rescue case");
    journal.add_entry("boat safari");
    for entry in journal.entries() {
        println!("  {entry}");
    }

    let text_path = std::env::temp_dir().join("logbook.txt");
    let json_path = std::env::temp_dir().join("logbook.json");
    if let Err(err) = PersistenceManager::save(&journal, &text_path) {
        eprintln!("text save failed: {err}");
    }
    match PersistenceManager::save_json(&journal, &json_path) {
        Ok(()) => println!("saved to {} and {}", text_path.display(), json_path.display()),
        Err(err) => eprintln!("json save failed: {err}"),
    }

    match PersistenceManager::load_json(&json_path) {
        Ok(mut restored) => {
            restored.add_entry("night dive");
            println!("restored '{}' continues:", restored.title());
            for entry in restored.entries() {
                println!("  {entry}");
            }
        }
        Err(err) => eprintln!("load failed: {err}"),
    }
}
