//! Shared test infrastructure for the integration tests.
//!
//! Every test gets its own temporary output directory so saved decks never
//! leak between tests.

#![allow(dead_code)]

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tempfile::TempDir;

use deckhand::models::deck::Deck;
use deckhand::models::dispatch::Instruction;
use deckhand::storage::OutputDir;
use deckhand::writer::{DocumentWriter, WriteError};

// ============================================================================
// OUTPUT DIRECTORY
// ============================================================================

/// Returns the TempDir alongside the OutputDir; keep it alive for the test.
pub fn setup_output_dir() -> (TempDir, OutputDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = OutputDir::create(dir.path().join("generated")).expect("Failed to create output dir");
    (dir, output)
}

/// Every entry in the directory, hidden files included.
pub fn dir_entries(output: &OutputDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(output.path())
        .expect("read_dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).single().expect("valid date")
}

// ============================================================================
// INSTRUCTIONS
// ============================================================================

pub fn instr(method: &str, params: Value) -> Instruction {
    let params = match params {
        Value::Array(values) => values,
        other => panic!("params must be an array, got {other}"),
    };
    Instruction::new(method, params)
}

// ============================================================================
// PACKAGES
// ============================================================================

pub fn read_part(path: &Path, name: &str) -> String {
    let file = std::fs::File::open(path).expect("open package");
    let mut archive = zip::ZipArchive::new(file).expect("package is a zip");
    let mut part = archive.by_name(name).expect("part exists");
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("utf-8 part");
    xml
}

pub fn part_names(path: &Path) -> Vec<String> {
    let file = std::fs::File::open(path).expect("open package");
    let archive = zip::ZipArchive::new(file).expect("package is a zip");
    archive.file_names().map(str::to_string).collect()
}

/// Writes a partial file, then fails like a full disk would.
pub struct FailingWriter;

impl DocumentWriter for FailingWriter {
    fn serialize(&self, _deck: &Deck, path: &Path) -> Result<(), WriteError> {
        std::fs::write(path, b"partial")?;
        Err(WriteError::Io(std::io::Error::other("disk full")))
    }
}
