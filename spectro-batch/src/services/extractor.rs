//! Spectrogram extractor
//!
//! One audio file in, one PNG out:
//! decode → resample → STFT → Mel → dB → colour map → write.
//!
//! Failures never escape [`Extract::extract`]: they are logged with the
//! offending path and returned as [`ConversionOutcome::Failed`], so a single
//! bad file cannot abort a batch. All buffers are locals of one call and are
//! dropped before it returns, whatever the outcome.

use crate::audio::load_audio;
use crate::dsp::MelSpectrogram;
use crate::error::{ExtractError, ExtractResult};
use crate::models::ConversionOutcome;
use crate::render::{render_spectrogram, write_png, Colormap};
use spectro_common::ConversionParams;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, error};

/// Converts a single audio file into a spectrogram image
pub trait Extract {
    fn extract(
        &self,
        audio_path: &Path,
        output_image_path: &Path,
        params: &ConversionParams,
    ) -> ConversionOutcome;
}

/// Mel spectrogram extractor rendering with the viridis scale
#[derive(Debug, Clone)]
pub struct SpectrogramExtractor {
    colormap: Colormap,
}

impl SpectrogramExtractor {
    pub fn new() -> Self {
        Self {
            colormap: Colormap::viridis(),
        }
    }

    /// Run the full pipeline, propagating the first error
    pub fn try_extract(
        &self,
        audio_path: &Path,
        output_image_path: &Path,
        params: &ConversionParams,
    ) -> ExtractResult<()> {
        params.validate()?;

        let waveform = load_audio(audio_path, params.sample_rate)?;
        let mel = MelSpectrogram::compute(&waveform, params.n_mels, params.hop_length)?;
        drop(waveform);

        let mel_db = mel.to_db();
        drop(mel);

        let img = render_spectrogram(&mel_db.data, &self.colormap, params.render)?;
        write_png(&img, output_image_path)?;

        debug!(
            path = %audio_path.display(),
            output = %output_image_path.display(),
            n_frames = mel_db.n_frames(),
            "Mel spectrogram saved"
        );

        Ok(())
    }
}

impl Default for SpectrogramExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extract for SpectrogramExtractor {
    fn extract(
        &self,
        audio_path: &Path,
        output_image_path: &Path,
        params: &ConversionParams,
    ) -> ConversionOutcome {
        // Decoders may panic on malformed streams; contain that to this file
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.try_extract(audio_path, output_image_path, params)
        }))
        .unwrap_or_else(|payload| Err(ExtractError::Decode(panic_message(payload.as_ref()))));

        match result {
            Ok(()) => ConversionOutcome::Converted,
            Err(e) => {
                error!(
                    path = %audio_path.display(),
                    error = %e,
                    "Error processing {}: {}",
                    audio_path.display(),
                    e
                );
                ConversionOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("decoder panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("decoder panicked: {}", s)
    } else {
        "decoder panicked".to_string()
    }
}

/// Convert one file with the default extractor
pub fn extract_mel_spectrogram(
    audio_path: &Path,
    output_image_path: &Path,
    params: &ConversionParams,
) -> ConversionOutcome {
    SpectrogramExtractor::new().extract(audio_path, output_image_path, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_failed_outcome() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let out = temp_dir.path().join("out.png");

        let outcome = extract_mel_spectrogram(
            Path::new("/nonexistent/file.wav"),
            &out,
            &ConversionParams::default(),
        );

        assert!(matches!(outcome, ConversionOutcome::Failed { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_invalid_params_is_failed_outcome() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let out = temp_dir.path().join("out.png");
        let params = ConversionParams {
            hop_length: 0,
            ..Default::default()
        };

        match extract_mel_spectrogram(Path::new("whatever.wav"), &out, &params) {
            ConversionOutcome::Failed { reason } => assert!(reason.contains("hop_length")),
            other => panic!("Expected failure, got {:?}", other),
        }
    }
}
