//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lupa::Record;

// Re-export canonical test utilities from lupa::testing
pub use lupa::testing::{make_record, make_record_bare};

/// The two-instrument catalog from the classic scenarios.
pub fn instrument_catalog() -> Vec<Record> {
    vec![
        make_record("Microscope", "Optical tool"),
        make_record("Telescope", "Viewing device"),
    ]
}

/// A wider catalog with deliberately non-alphabetical order.
pub fn workshop_catalog() -> Vec<Record> {
    vec![
        make_record("Vernier caliper", "Precision length measurement"),
        make_record("Oscilloscope", "Displays signal voltage over time"),
        make_record("Soldering iron", "Joins electronic components"),
        make_record("Multimeter", "Measures voltage, current and resistance"),
        make_record("Bench vise", "Holds a workpiece in place"),
    ]
}
