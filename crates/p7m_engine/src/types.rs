use std::path::PathBuf;

use crate::ConversionError;

/// Everything the worker reports back to the UI thread, in FIFO order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Human-readable status line.
    Status(String),
    /// The install attempt is over.
    InstallFinished { success: bool },
    /// Sentinel: startup work is done and the main window may be shown.
    MainWindowReady,
    FolderScanned {
        folder: PathBuf,
        files: Vec<PathBuf>,
    },
    FileFinished(ConversionResult),
    BatchFinished { processed: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted,
    /// Name did not end in `.p7m`; the toolkit was not invoked.
    Skipped,
    Failed(ConversionError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub index: usize,
    pub total: usize,
    pub source: PathBuf,
    pub output: Option<PathBuf>,
    pub outcome: ConversionOutcome,
}

impl ConversionResult {
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    pub fn output_name(&self) -> Option<String> {
        self.output
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub fn is_converted(&self) -> bool {
        matches!(self.outcome, ConversionOutcome::Converted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub processed: usize,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}
