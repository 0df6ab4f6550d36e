//! Folder processor
//!
//! Walks the input folder in sorted order and, per entry:
//! 1. extension filter (ineligible entries are recorded and left alone)
//! 2. skip if `<output>/<stem>.png` already exists
//! 3. convert via the extractor
//!
//! Progress is logged for every enumerated index divisible by 10, independent
//! of what happens to the entry. Artifact existence is the only completion
//! marker, so re-running over the same folders converts nothing new.

use crate::error::{ProcessError, ProcessResult};
use crate::models::{BatchReport, EntryOutcome};
use crate::services::extractor::{Extract, SpectrogramExtractor};
use crate::services::file_scanner::{output_path_for, FileScanner, ScanError};
use spectro_common::ConversionParams;
use std::path::Path;
use tracing::{error, info};

/// Entries between two progress lines
pub const PROGRESS_INTERVAL: usize = 10;

/// Batch driver pairing a scanner with an extractor
pub struct FolderProcessor<E: Extract = SpectrogramExtractor> {
    scanner: FileScanner,
    extractor: E,
}

impl FolderProcessor<SpectrogramExtractor> {
    /// Processor with the real extractor and case-insensitive matching
    pub fn new() -> Self {
        Self::with_extractor(SpectrogramExtractor::new())
    }
}

impl Default for FolderProcessor<SpectrogramExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Extract> FolderProcessor<E> {
    pub fn with_extractor(extractor: E) -> Self {
        Self {
            scanner: FileScanner::new(),
            extractor,
        }
    }

    /// Replace the scanner (e.g. for case-sensitive extension matching)
    pub fn with_scanner(mut self, scanner: FileScanner) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Convert every not-yet-converted audio file of `input_folder`
    ///
    /// # Errors
    /// * `InvalidParams` - parameters rejected, nothing touched
    /// * `InputFolderNotFound` - input folder missing, output folder not created
    /// * `Io` - input folder unreadable or output folder not creatable
    ///
    /// Per-file failures are not errors; they show up as
    /// [`EntryOutcome::Failed`] in the returned report.
    pub fn process(
        &self,
        input_folder: &Path,
        output_folder: &Path,
        params: &ConversionParams,
    ) -> ProcessResult<BatchReport> {
        params.validate()?;

        let entries = match self.scanner.list_entries(input_folder) {
            Ok(entries) => entries,
            Err(ScanError::PathNotFound(path)) | Err(ScanError::NotADirectory(path)) => {
                error!(path = %path.display(), "Input folder not found: {}", path.display());
                return Err(ProcessError::InputFolderNotFound(path));
            }
            Err(ScanError::IoError(msg)) => {
                return Err(ProcessError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    msg,
                )));
            }
        };

        std::fs::create_dir_all(output_folder)?;

        let total = entries.len();
        info!(
            input = %input_folder.display(),
            output = %output_folder.display(),
            entries = total,
            "Starting spectrogram batch"
        );

        let mut report = BatchReport::default();

        for (index, entry) in entries.iter().enumerate() {
            if index % PROGRESS_INTERVAL == 0 {
                info!("Processing spectrograms {}/{}", index, total);
            }

            if !self.scanner.is_eligible(entry) {
                report.record(entry.file_name.as_str(), EntryOutcome::Ineligible);
                continue;
            }

            let output_path = output_path_for(output_folder, &entry.path);
            if output_path.exists() {
                info!("Already processed: {}", output_path.display());
                report.record(entry.file_name.as_str(), EntryOutcome::Skipped);
                continue;
            }

            let outcome = self.extractor.extract(&entry.path, &output_path, params);
            report.record(entry.file_name.as_str(), outcome.into());
        }

        info!(
            total = report.total(),
            converted = report.converted(),
            skipped = report.skipped(),
            ineligible = report.ineligible(),
            failed = report.failed(),
            "Spectrogram batch complete"
        );

        Ok(report)
    }
}

/// Process a folder with the default extractor and case-insensitive matching
pub fn process_folder(
    input_folder: &Path,
    output_folder: &Path,
    params: &ConversionParams,
) -> ProcessResult<BatchReport> {
    FolderProcessor::new().process(input_folder, output_folder, params)
}
