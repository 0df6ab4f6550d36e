//! Input folder scanner
//!
//! Lists the direct children of the input folder in a stable (sorted by file
//! name) order and decides which of them are convertible audio files.
//! Subfolders are never descended into.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// File name suffixes accepted as audio input
pub const AUDIO_EXTENSIONS: [&str; 4] = [".mp3", ".wav", ".flac", ".ogg"];

/// Extension of every rendered artifact
pub const IMAGE_EXTENSION: &str = "png";

/// Folder scanner errors
#[derive(Debug, Error)]
pub enum ScanError {
    /// Specified path does not exist
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Listing the folder failed
    #[error("I/O error: {0}")]
    IoError(String),
}

/// One direct child of the scanned folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub file_name: String,
    pub is_file: bool,
}

/// Input folder scanner
#[derive(Debug, Clone, Default)]
pub struct FileScanner {
    case_sensitive: bool,
}

impl FileScanner {
    /// Scanner with case-insensitive extension matching (`a.MP3` is audio)
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to literal, case-sensitive extension matching
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// List every direct child of `root_path`, sorted by file name
    pub fn list_entries(&self, root_path: &Path) -> Result<Vec<ScanEntry>, ScanError> {
        if !root_path.exists() {
            return Err(ScanError::PathNotFound(root_path.to_path_buf()));
        }

        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory(root_path.to_path_buf()));
        }

        let walker = WalkDir::new(root_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) => entries.push(ScanEntry {
                    path: entry.path().to_path_buf(),
                    file_name: entry.file_name().to_string_lossy().into_owned(),
                    is_file: entry.file_type().is_file(),
                }),
                Err(e) if e.depth() == 0 => {
                    return Err(ScanError::IoError(e.to_string()));
                }
                Err(e) => {
                    // Broken symlink or unreadable entry: not listable, keep going
                    tracing::warn!("Error accessing entry: {}", e);
                }
            }
        }

        tracing::debug!(
            path = %root_path.display(),
            entries = entries.len(),
            "Input folder listed"
        );

        Ok(entries)
    }

    /// Regular file with a supported audio extension
    pub fn is_eligible(&self, entry: &ScanEntry) -> bool {
        entry.is_file && self.has_audio_extension(&entry.file_name)
    }

    /// Check if file name ends with one of [`AUDIO_EXTENSIONS`]
    pub fn has_audio_extension(&self, file_name: &str) -> bool {
        if self.case_sensitive {
            AUDIO_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
        } else {
            let lower = file_name.to_lowercase();
            AUDIO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
        }
    }
}

/// Artifact path for an input file: `output_folder/<stem>.png`
///
/// Only the last extension is replaced (`song.final.wav` → `song.final.png`).
pub fn output_path_for(output_folder: &Path, input_file: &Path) -> PathBuf {
    let mut name: OsString = input_file
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(IMAGE_EXTENSION);
    output_folder.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_audio_extension_detection() {
        let scanner = FileScanner::new();
        assert!(scanner.has_audio_extension("a.mp3"));
        assert!(scanner.has_audio_extension("a.flac"));
        assert!(scanner.has_audio_extension("a.ogg"));
        assert!(scanner.has_audio_extension("a.wav"));
        assert!(scanner.has_audio_extension("a.MP3"));
        assert!(!scanner.has_audio_extension("track.txt"));
        assert!(!scanner.has_audio_extension("track"));
        assert!(!scanner.has_audio_extension("a.m4a"));
    }

    #[test]
    fn test_case_sensitive_matching() {
        let scanner = FileScanner::new().with_case_sensitive(true);
        assert!(scanner.has_audio_extension("a.mp3"));
        assert!(!scanner.has_audio_extension("track.MP3"));
        assert!(!scanner.has_audio_extension("track.Wav"));
    }

    #[test]
    fn test_output_path_strips_last_extension_only() {
        let out = Path::new("/out");
        assert_eq!(
            output_path_for(out, Path::new("/in/song.final.wav")),
            PathBuf::from("/out/song.final.png")
        );
        assert_eq!(
            output_path_for(out, Path::new("track.mp3")),
            PathBuf::from("/out/track.png")
        );
    }

    #[test]
    fn test_scan_nonexistent_path() {
        let scanner = FileScanner::new();
        match scanner.list_entries(Path::new("/nonexistent/path")) {
            Err(ScanError::PathNotFound(_)) => {}
            other => panic!("Expected PathNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_file_as_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.wav");
        fs::write(&file, b"").unwrap();

        match FileScanner::new().list_entries(&file) {
            Err(ScanError::NotADirectory(_)) => {}
            other => panic!("Expected NotADirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_entries_sorted_and_not_recursive() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("c.wav"), b"").unwrap();
        fs::write(root.join("a.mp3"), b"").unwrap();
        fs::write(root.join("b.txt"), b"").unwrap();
        fs::create_dir(root.join("nested.wav")).unwrap();
        fs::write(root.join("nested.wav").join("deep.wav"), b"").unwrap();

        let scanner = FileScanner::new();
        let entries = scanner.list_entries(root).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.mp3", "b.txt", "c.wav", "nested.wav"]);

        let eligible: Vec<&str> = entries
            .iter()
            .filter(|e| scanner.is_eligible(e))
            .map(|e| e.file_name.as_str())
            .collect();
        assert_eq!(eligible, vec!["a.mp3", "c.wav"]);
    }
}
