//! Audio resampling using rubato
//!
//! Brings decoded mono audio to the canonical analysis rate.

use crate::error::{ExtractError, ExtractResult};
use rubato::{FastFixedIn, PolynomialDegree, Resampler as RubatoResampler};
use tracing::debug;

/// Mono resampler for whole-file buffers
pub struct Resampler;

impl Resampler {
    /// Resample mono audio from `input_rate` to `output_rate`.
    ///
    /// The whole buffer is processed as one chunk. Output length is
    /// `ceil(len * output_rate / input_rate)`.
    ///
    /// # Notes
    /// If the rates already match, returns a copy without resampling.
    pub fn resample(input: &[f32], input_rate: u32, output_rate: u32) -> ExtractResult<Vec<f32>> {
        if input_rate == 0 || output_rate == 0 {
            return Err(ExtractError::Resample(format!(
                "Invalid sample rates: {}Hz -> {}Hz",
                input_rate, output_rate
            )));
        }

        if input_rate == output_rate {
            debug!("Sample rate already at {}Hz, skipping resample", output_rate);
            return Ok(input.to_vec());
        }

        if input.is_empty() {
            return Ok(Vec::new());
        }

        let ratio = output_rate as f64 / input_rate as f64;
        debug!("Resampling from {}Hz to {}Hz", input_rate, output_rate);

        let mut resampler = Self::create_resampler(ratio, input.len())?;

        let waves_in = [input];
        let mut output = resampler
            .process(&waves_in[..], None)
            .map_err(|e| ExtractError::Resample(format!("Resampling failed: {}", e)))?
            .into_iter()
            .next()
            .unwrap_or_default();

        let expected_len = (input.len() as f64 * ratio).ceil() as usize;
        output.resize(expected_len, 0.0);

        debug!(
            "Resampled {} input frames to {} output frames",
            input.len(),
            output.len()
        );

        Ok(output)
    }

    /// FastFixedIn with septic polynomial interpolation
    fn create_resampler(ratio: f64, chunk_size: usize) -> ExtractResult<FastFixedIn<f32>> {
        FastFixedIn::<f32>::new(
            ratio,
            1.0, // max_relative_ratio (no runtime changes)
            PolynomialDegree::Septic,
            chunk_size,
            1,
        )
        .map_err(|e| ExtractError::Resample(format!("Failed to create resampler: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resample_same_rate() {
        let input = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        let output = Resampler::resample(&input, 22050, 22050).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_resample_output_length() {
        let input = vec![0.0f32; 44100];
        let output = Resampler::resample(&input, 44100, 22050).unwrap();
        assert_eq!(output.len(), 22050);

        let input = vec![0.0f32; 1000];
        let output = Resampler::resample(&input, 16000, 22050).unwrap();
        assert_eq!(output.len(), 1379); // ceil(1000 * 22050 / 16000)
    }

    #[test]
    fn test_resample_rejects_zero_rate() {
        assert!(Resampler::resample(&[0.0], 0, 22050).is_err());
    }
}
