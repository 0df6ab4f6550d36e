//! Conversion parameters
//!
//! Every knob of a single audio → spectrogram conversion lives here, with the
//! defaults the batch tool ships with. Values are plain data; nothing in this
//! module is global or mutable after construction.

use crate::{Error, Result};

/// Default number of Mel bands
pub const DEFAULT_N_MELS: usize = 128;

/// Default STFT hop length in samples
pub const DEFAULT_HOP_LENGTH: usize = 512;

/// Default canonical sample rate audio is resampled to before analysis
pub const DEFAULT_SAMPLE_RATE: u32 = 22050;

/// STFT window / FFT size in samples
pub const N_FFT: usize = 2048;

/// Dynamic range kept below the loudest bin, in dB
pub const TOP_DB: f32 = 80.0;

/// Power floor applied before taking the logarithm
pub const AMIN: f32 = 1e-10;

/// Rendered image width in pixels (10 in at 300 DPI)
pub const IMAGE_WIDTH: u32 = 3000;

/// Rendered image height in pixels (4 in at 300 DPI)
pub const IMAGE_HEIGHT: u32 = 1200;

/// Raster canvas size of a rendered spectrogram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
        }
    }
}

/// Parameters for one spectrogram conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionParams {
    /// Number of Mel bands (image rows before scaling)
    pub n_mels: usize,
    /// Samples advanced between successive analysis windows
    pub hop_length: usize,
    /// Target sample rate in Hz
    pub sample_rate: u32,
    /// Output canvas
    pub render: RenderOptions,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            n_mels: DEFAULT_N_MELS,
            hop_length: DEFAULT_HOP_LENGTH,
            sample_rate: DEFAULT_SAMPLE_RATE,
            render: RenderOptions::default(),
        }
    }
}

impl ConversionParams {
    /// Check input constraints
    ///
    /// `n_mels ≥ 1`, `hop_length ≥ 1`, `sample_rate > 0` and a non-empty canvas.
    pub fn validate(&self) -> Result<()> {
        if self.n_mels == 0 {
            return Err(Error::InvalidInput("n_mels must be at least 1".to_string()));
        }
        if self.hop_length == 0 {
            return Err(Error::InvalidInput(
                "hop_length must be at least 1".to_string(),
            ));
        }
        if self.sample_rate == 0 {
            return Err(Error::InvalidInput(
                "sample_rate must be greater than 0".to_string(),
            ));
        }
        if self.render.width == 0 || self.render.height == 0 {
            return Err(Error::InvalidInput(format!(
                "image size must be non-zero (got {}x{})",
                self.render.width, self.render.height
            )));
        }
        Ok(())
    }
}
