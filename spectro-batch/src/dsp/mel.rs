//! Mel filterbank (Slaney scale, Slaney area normalisation)

use mel_spec::mel::mel;
use ndarray::Array2;

/// Triangular Mel filterbank of shape `(n_mels, n_fft / 2 + 1)`
///
/// Bands span 0 Hz to Nyquist on the Slaney Mel scale and each triangle is
/// area-normalised, matching librosa's defaults.
pub fn mel_filterbank(sample_rate: u32, n_fft: usize, n_mels: usize) -> Array2<f32> {
    let nyquist = sample_rate as f64 / 2.0;
    mel(
        sample_rate as f64,
        n_fft,
        n_mels,
        Some(0.0),
        Some(nyquist),
        false, // Slaney scale, not HTK
        true,  // Slaney normalisation
    )
    .mapv(|w| w as f32)
}
