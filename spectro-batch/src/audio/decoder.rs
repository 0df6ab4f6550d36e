//! Audio decoding
//!
//! Decode any supported container (MP3, FLAC, OGG/Vorbis, WAV) to mono f32 PCM
//! using symphonia. Multi-channel audio is mixed down by averaging channels.

use crate::error::{ExtractError, ExtractResult};
use std::path::Path;
use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::conv::FromSample;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::Sample;
use tracing::{debug, warn};

/// Decoded audio at the file's native sample rate
#[derive(Debug)]
pub struct DecodedAudio {
    /// Mono audio samples (f32, range [-1.0, 1.0])
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Original channel count
    pub channels: usize,
}

impl DecodedAudio {
    /// Duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Decode audio file to mono f32 PCM samples
///
/// **Algorithm:**
/// 1. Probe container (extension used as hint)
/// 2. Pick first track with a real codec
/// 3. Decode every packet of that track
/// 4. Average channels to mono
///
/// # Errors
/// * File cannot be opened
/// * Unsupported container or codec
/// * Unrecoverable decoder error (corrupt packets are skipped)
/// * No samples at all
pub fn decode_audio_file(file_path: &Path) -> ExtractResult<DecodedAudio> {
    debug!(path = %file_path.display(), "Decoding audio file");

    let file = std::fs::File::open(file_path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = file_path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(extension);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| ExtractError::Decode(format!("Failed to probe audio file: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| ExtractError::Decode("No audio track found in file".to_string()))?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| ExtractError::Decode("Sample rate unknown".to_string()))?;
    let channel_count = track
        .codec_params
        .channels
        .map(|c| c.count())
        .unwrap_or(1);

    debug!(
        path = %file_path.display(),
        sample_rate = sample_rate,
        channels = channel_count,
        "Audio file info"
    );

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| ExtractError::Decode(format!("Failed to create decoder: {}", e)))?;

    let mut all_samples: Vec<f32> = Vec::new();
    let mut skipped_packets = 0usize;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                // End of stream
                break;
            }
            Err(e) => {
                return Err(ExtractError::Decode(format!("Error reading packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => append_mono(&decoded, &mut all_samples),
            Err(e) => {
                skip_bad_packet(e)?;
                skipped_packets += 1;
            }
        }
    }

    if skipped_packets > 0 {
        warn!(
            path = %file_path.display(),
            skipped_packets = skipped_packets,
            "Skipped undecodable packets"
        );
    }

    if all_samples.is_empty() {
        return Err(ExtractError::Decode("No audio samples decoded".to_string()));
    }

    let decoded = DecodedAudio {
        samples: all_samples,
        sample_rate,
        channels: channel_count,
    };

    debug!(
        path = %file_path.display(),
        total_samples = decoded.samples.len(),
        duration_seconds = format!("{:.2}", decoded.duration_seconds()),
        "Audio decoding complete"
    );

    Ok(decoded)
}

/// Corrupt packet data is recoverable: the packet is dropped and decoding
/// continues. Any other decoder error ends the file.
fn skip_bad_packet(err: SymphoniaError) -> ExtractResult<()> {
    match err {
        SymphoniaError::DecodeError(reason) => {
            debug!("Decode error in packet, skipping: {}", reason);
            Ok(())
        }
        e => Err(ExtractError::Decode(format!("Failed to decode packet: {}", e))),
    }
}

/// Mix a decoded buffer of any sample format down to mono f32
fn append_mono(decoded: &AudioBufferRef, out: &mut Vec<f32>) {
    match decoded {
        AudioBufferRef::U8(buf) => mix_down(buf, out),
        AudioBufferRef::U16(buf) => mix_down(buf, out),
        AudioBufferRef::U24(buf) => mix_down(buf, out),
        AudioBufferRef::U32(buf) => mix_down(buf, out),
        AudioBufferRef::S8(buf) => mix_down(buf, out),
        AudioBufferRef::S16(buf) => mix_down(buf, out),
        AudioBufferRef::S24(buf) => mix_down(buf, out),
        AudioBufferRef::S32(buf) => mix_down(buf, out),
        AudioBufferRef::F32(buf) => mix_down(buf, out),
        AudioBufferRef::F64(buf) => mix_down(buf, out),
    }
}

fn mix_down<S>(buf: &AudioBuffer<S>, out: &mut Vec<f32>)
where
    S: Sample,
    f32: FromSample<S>,
{
    let num_channels = buf.spec().channels.count();
    let num_frames = buf.frames();
    if num_channels == 0 {
        return;
    }

    out.reserve(num_frames);
    for frame_idx in 0..num_frames {
        let sum: f32 = (0..num_channels)
            .map(|ch| f32::from_sample(buf.chan(ch)[frame_idx]))
            .sum();
        out.push(sum / num_channels as f32);
    }
}
