//! Per-file and per-run results

/// Result of one spectrogram conversion attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Image written
    Converted,
    /// Conversion abandoned; reason carries the error detail
    Failed { reason: String },
}

impl ConversionOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionOutcome::Converted)
    }
}

/// Terminal state of one input folder entry within a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Not a regular file with a supported audio extension
    Ineligible,
    /// Output image already present
    Skipped,
    /// Image written
    Converted,
    /// Extractor caught an internal error
    Failed { reason: String },
}

impl From<ConversionOutcome> for EntryOutcome {
    fn from(outcome: ConversionOutcome) -> Self {
        match outcome {
            ConversionOutcome::Converted => EntryOutcome::Converted,
            ConversionOutcome::Failed { reason } => EntryOutcome::Failed { reason },
        }
    }
}

/// One enumerated entry and what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub file_name: String,
    pub outcome: EntryOutcome,
}

/// Summary of a folder run, entries in enumeration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub entries: Vec<EntryReport>,
}

impl BatchReport {
    pub fn record(&mut self, file_name: impl Into<String>, outcome: EntryOutcome) {
        self.entries.push(EntryReport {
            file_name: file_name.into(),
            outcome,
        });
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn converted(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Converted))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Skipped))
    }

    pub fn ineligible(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Ineligible))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Failed { .. }))
    }

    /// Outcome recorded for `file_name`, if it was enumerated
    pub fn outcome_of(&self, file_name: &str) -> Option<&EntryOutcome> {
        self.entries
            .iter()
            .find(|e| e.file_name == file_name)
            .map(|e| &e.outcome)
    }

    fn count(&self, pred: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}
