//! spectro-batch library interface
//!
//! Converts a folder of audio files into per-file Mel spectrogram PNGs,
//! skipping files whose image already exists.

pub mod audio;
pub mod dsp;
pub mod error;
pub mod models;
pub mod render;
pub mod services;

pub use crate::error::{ExtractError, ProcessError, ProcessResult};
pub use crate::models::{BatchReport, ConversionOutcome, EntryOutcome};
pub use crate::services::{extract_mel_spectrogram, process_folder, Extract, FolderProcessor};
