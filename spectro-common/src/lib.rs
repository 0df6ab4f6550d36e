//! # Spectro Common Library
//!
//! Shared code for the spectrogram batch tools:
//! - Error type used across crates
//! - Conversion parameters and their validation
//! - TOML configuration loading and path resolution

pub mod config;
pub mod error;
pub mod params;

pub use error::{Error, Result};
pub use params::{ConversionParams, RenderOptions};
