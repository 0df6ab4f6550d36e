//! Audio loading: decode + resample to the analysis rate

pub mod decoder;
pub mod resampler;

pub use decoder::{decode_audio_file, DecodedAudio};
pub use resampler::Resampler;

use crate::error::ExtractResult;
use std::path::Path;

/// Mono waveform at a known sample rate
#[derive(Debug, Clone)]
pub struct Waveform {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

/// Decode `path` to mono and resample it to `sample_rate`
pub fn load_audio(path: &Path, sample_rate: u32) -> ExtractResult<Waveform> {
    let decoded = decode_audio_file(path)?;
    tracing::debug!(
        path = %path.display(),
        channels = decoded.channels,
        native_rate = decoded.sample_rate,
        "Resampling mono mix to {}Hz",
        sample_rate
    );
    let samples = Resampler::resample(&decoded.samples, decoded.sample_rate, sample_rate)?;

    Ok(Waveform {
        samples,
        sample_rate,
    })
}
