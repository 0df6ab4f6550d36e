//! Error types for spectro-batch
//!
//! Two tiers:
//! - [`ExtractError`]: one file failed somewhere between decode and PNG write.
//!   Always caught by the extractor and turned into a per-entry outcome.
//! - [`ProcessError`]: the whole run cannot start (bad parameters, missing
//!   input folder, output folder not creatable).

use std::path::PathBuf;
use thiserror::Error;

/// Single-file conversion failure
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Container probe, codec setup or packet decode failed
    #[error("Decode error: {0}")]
    Decode(String),

    /// Sample rate conversion failed
    #[error("Resample error: {0}")]
    Resample(String),

    /// STFT / Mel / dB stage failed
    #[error("Transform error: {0}")]
    Transform(String),

    /// Rasterisation or PNG encoding failed
    #[error("Render error: {0}")]
    Render(String),

    /// Conversion parameters rejected
    #[error(transparent)]
    InvalidParams(#[from] spectro_common::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for single-file conversion stages
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Run-level failure of the folder processor
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Input folder missing or not a directory
    #[error("Input folder not found: {0}")]
    InputFolderNotFound(PathBuf),

    /// Conversion parameters rejected
    #[error(transparent)]
    InvalidParams(#[from] spectro_common::Error),

    /// IO error while listing input or creating output folder
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the folder processor
pub type ProcessResult<T> = Result<T, ProcessError>;
