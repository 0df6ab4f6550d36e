//! Batch conversion services

pub mod extractor;
pub mod file_scanner;
pub mod folder_processor;

pub use extractor::{extract_mel_spectrogram, Extract, SpectrogramExtractor};
pub use file_scanner::{output_path_for, FileScanner, ScanEntry, ScanError};
pub use folder_processor::{process_folder, FolderProcessor};
