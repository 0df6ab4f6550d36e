//! spectro-batch - Main entry point
//!
//! Converts every audio file of an input folder into a Mel spectrogram PNG in
//! an output folder, skipping files already converted.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spectro_batch::services::{FileScanner, FolderProcessor};
use spectro_batch::ProcessError;
use spectro_common::config::{
    self, ParamsConfig, TomlConfig, DEFAULT_INPUT_FOLDER, DEFAULT_OUTPUT_FOLDER,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for spectro-batch
#[derive(Parser, Debug)]
#[command(name = "spectro-batch")]
#[command(about = "Convert a folder of audio files into Mel spectrogram images")]
#[command(version)]
struct Args {
    /// Folder containing .mp3/.wav/.flac/.ogg files
    input_folder: Option<PathBuf>,

    /// Folder receiving one <name>.png per input file
    output_folder: Option<PathBuf>,

    /// Number of Mel bands
    #[arg(long, env = "SPECTRO_N_MELS")]
    n_mels: Option<usize>,

    /// Samples between successive STFT windows
    #[arg(long, env = "SPECTRO_HOP_LENGTH")]
    hop_length: Option<usize>,

    /// Sample rate audio is resampled to before analysis
    #[arg(long, env = "SPECTRO_SAMPLE_RATE")]
    sample_rate: Option<u32>,

    /// Match audio extensions literally (`a.MP3` is then ignored);
    /// `--case-sensitive-extensions=false` overrides a config file
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    case_sensitive_extensions: Option<bool>,

    /// Config file (default: <config dir>/spectro/config.toml)
    #[arg(short, long, env = "SPECTRO_CONFIG")]
    config: Option<PathBuf>,
}

impl Args {
    fn params_config(&self) -> ParamsConfig {
        ParamsConfig {
            n_mels: self.n_mels,
            hop_length: self.hop_length,
            sample_rate: self.sample_rate,
            case_sensitive_extensions: self.case_sensitive_extensions,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = config::resolve_config_path(args.config.as_deref());
    let file_config = match &config_path {
        Some(path) => config::load_toml_config(path).context("Failed to load config file")?,
        None => TomlConfig::default(),
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("spectro_batch={0},spectro_common={0}", file_config.logging.level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &config_path {
        Some(path) if path.exists() => info!("Config file: {}", path.display()),
        Some(path) => warn!("Config file not found: {}, using defaults", path.display()),
        None => info!("No config file, using defaults"),
    }

    let params_config = args.params_config().merged_over(&file_config.params);
    let params = params_config.to_conversion_params();

    let input_folder = config::resolve_folder(
        args.input_folder.as_deref(),
        file_config.input_folder.as_deref(),
        DEFAULT_INPUT_FOLDER,
    );
    let output_folder = config::resolve_folder(
        args.output_folder.as_deref(),
        file_config.output_folder.as_deref(),
        DEFAULT_OUTPUT_FOLDER,
    );

    info!(
        "Converting {} -> {} (n_mels={}, hop_length={}, sample_rate={})",
        input_folder.display(),
        output_folder.display(),
        params.n_mels,
        params.hop_length,
        params.sample_rate
    );

    let processor = FolderProcessor::new()
        .with_scanner(FileScanner::new().with_case_sensitive(params_config.case_sensitive()));

    match processor.process(&input_folder, &output_folder, &params) {
        Ok(report) => {
            info!(
                "Done: {} converted, {} skipped, {} failed",
                report.converted(),
                report.skipped(),
                report.failed()
            );
            Ok(())
        }
        // Already reported by the processor; not a failed run
        Err(ProcessError::InputFolderNotFound(_)) => Ok(()),
        Err(e) => Err(e).context("Spectrogram batch aborted"),
    }
}
