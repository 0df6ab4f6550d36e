//! Fixtures and log capture shared by the spectro-batch integration tests

pub mod audio_generator;
pub mod log_capture;
