//! Audio Test Fixture Generator
//!
//! WAV fixtures written with hound: short sine tones, silence, or garbage.

use std::path::{Path, PathBuf};

/// Configuration for generated audio
#[derive(Debug, Clone)]
pub struct AudioConfig {
    pub duration_seconds: f64,
    pub sample_rate: u32,
    pub channels: u16,
    /// Tone frequency; `None` writes digital silence
    pub frequency: Option<f32>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 0.5,
            sample_rate: 22050,
            channels: 1,
            frequency: Some(440.0),
        }
    }
}

/// Generate a 16-bit PCM WAV file
pub fn generate_test_wav(path: &Path, config: &AudioConfig) -> anyhow::Result<PathBuf> {
    let spec = hound::WavSpec {
        channels: config.channels,
        sample_rate: config.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    let total_samples = (config.duration_seconds * config.sample_rate as f64) as usize;

    for i in 0..total_samples {
        let sample = match config.frequency {
            Some(freq) => {
                // 30% amplitude tone
                let t = i as f32 / config.sample_rate as f32;
                (0.3 * (2.0 * std::f32::consts::PI * freq * t).sin() * i16::MAX as f32) as i16
            }
            None => 0,
        };

        for _ in 0..config.channels {
            writer.write_sample(sample)?;
        }
    }

    writer.finalize()?;
    Ok(path.to_path_buf())
}

/// Write a file with an audio extension that no decoder accepts
pub fn write_corrupt_audio(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::write(path, b"RIFF\x00\x00\x00\x00WAVEjunkjunkjunk")?;
    Ok(path.to_path_buf())
}
