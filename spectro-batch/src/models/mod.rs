//! Result models for conversions and folder runs

pub mod outcome;

pub use outcome::{BatchReport, ConversionOutcome, EntryOutcome, EntryReport};
