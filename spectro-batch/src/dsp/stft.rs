//! Short-time Fourier transform (power spectrum)

use crate::error::{ExtractError, ExtractResult};
use ndarray::Array2;
use realfft::RealFftPlanner;

/// Periodic Hann window of length `size`
pub fn hann_window(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| 0.5 - 0.5 * (2.0 * std::f32::consts::PI * i as f32 / size as f32).cos())
        .collect()
}

/// Power spectrogram `|X|²` with centred frames.
///
/// The signal is zero-padded by `n_fft / 2` on both sides, so frame `t` is
/// centred on sample `t * hop_length` and there are `1 + len / hop_length`
/// frames. Returns an array of shape `(n_fft / 2 + 1, n_frames)`.
pub fn power_spectrogram(
    samples: &[f32],
    n_fft: usize,
    hop_length: usize,
) -> ExtractResult<Array2<f32>> {
    if n_fft < 2 || hop_length == 0 {
        return Err(ExtractError::Transform(format!(
            "Invalid STFT geometry: n_fft={} hop_length={}",
            n_fft, hop_length
        )));
    }

    let pad = n_fft / 2;
    let mut padded = vec![0.0f32; samples.len() + 2 * pad];
    padded[pad..pad + samples.len()].copy_from_slice(samples);

    let n_bins = n_fft / 2 + 1;
    let n_frames = 1 + (padded.len() - n_fft) / hop_length;

    let mut planner = RealFftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(n_fft);
    let window = hann_window(n_fft);

    // Reusable FFT buffers
    let mut input = fft.make_input_vec();
    let mut spectrum = fft.make_output_vec();

    let mut power = Array2::<f32>::zeros((n_bins, n_frames));

    for frame_idx in 0..n_frames {
        let start = frame_idx * hop_length;
        let frame = &padded[start..start + n_fft];

        for (inp, (&s, &w)) in input.iter_mut().zip(frame.iter().zip(window.iter())) {
            *inp = s * w;
        }
        fft.process(&mut input, &mut spectrum)
            .map_err(|e| ExtractError::Transform(format!("FFT failed: {}", e)))?;

        for (bin, value) in spectrum.iter().enumerate() {
            power[[bin, frame_idx]] = value.norm_sqr();
        }
    }

    Ok(power)
}
