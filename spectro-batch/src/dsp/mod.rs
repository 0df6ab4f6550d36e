//! Spectral analysis: STFT → Mel filterbank → dB

pub mod db;
pub mod mel;
pub mod stft;

pub use db::power_to_db;
pub use mel::mel_filterbank;
pub use stft::power_spectrogram;

use crate::audio::Waveform;
use crate::error::ExtractResult;
use ndarray::Array2;
use spectro_common::params::{AMIN, N_FFT, TOP_DB};

/// Mel-band energy matrix
///
/// Rows are Mel bands (lowest frequency first), columns are time frames.
#[derive(Debug, Clone)]
pub struct MelSpectrogram {
    pub data: Array2<f32>,
}

impl MelSpectrogram {
    /// Mel power spectrogram of a waveform
    pub fn compute(waveform: &Waveform, n_mels: usize, hop_length: usize) -> ExtractResult<Self> {
        let power = power_spectrogram(&waveform.samples, N_FFT, hop_length)?;
        let filterbank = mel_filterbank(waveform.sample_rate, N_FFT, n_mels);
        let data = filterbank.dot(&power);

        tracing::debug!(
            n_mels = data.nrows(),
            n_frames = data.ncols(),
            "Computed Mel spectrogram"
        );

        Ok(Self { data })
    }

    /// Log-power version referenced to the loudest bin (max = 0 dB)
    pub fn to_db(&self) -> Self {
        Self {
            data: power_to_db(&self.data, AMIN, Some(TOP_DB)),
        }
    }

    pub fn n_mels(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_frames(&self) -> usize {
        self.data.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(freq: f32, sample_rate: u32, len: usize) -> Waveform {
        let samples = (0..len)
            .map(|i| 0.3 * (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin())
            .collect();
        Waveform {
            samples,
            sample_rate,
        }
    }

    #[test]
    fn test_shape_follows_params() {
        let spec = MelSpectrogram::compute(&tone(440.0, 22050, 22050), 64, 256).unwrap();
        assert_eq!(spec.n_mels(), 64);
        assert_eq!(spec.n_frames(), 1 + 22050 / 256);
    }

    #[test]
    fn test_db_property_on_tone() {
        let spec = MelSpectrogram::compute(&tone(440.0, 22050, 11025), 128, 512).unwrap();
        let db = spec.to_db();

        let max = db.data.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        assert_eq!(max, 0.0);
        assert!(db.data.iter().all(|&v| v.is_finite() && v <= 0.0 && v >= -TOP_DB));
    }
}
