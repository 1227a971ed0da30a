use std::path::PathBuf;

use crate::ToolkitPhase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRow {
    pub path: PathBuf,
    /// Base name shown in the pending list.
    pub display_name: String,
}

impl PendingRow {
    pub(crate) fn from_path(path: PathBuf) -> Self {
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, display_name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub main_window_visible: bool,
    pub toolkit: ToolkitPhase,
    pub converting: bool,
    pub pending: Vec<PendingRow>,
    pub converted: Vec<String>,
    pub progress_done: usize,
    pub progress_total: usize,
    pub status: String,
    pub convert_enabled: bool,
    pub clear_enabled: bool,
    /// A folder scan is still running on the worker.
    pub scanning: bool,
}

impl AppViewModel {
    /// Progress in `0.0..=1.0`; zero when no batch has run.
    pub fn progress_fraction(&self) -> f32 {
        if self.progress_total == 0 {
            return 0.0;
        }
        self.progress_done.min(self.progress_total) as f32 / self.progress_total as f32
    }

    /// File selection stays locked while a batch runs.
    pub fn selection_enabled(&self) -> bool {
        !self.converting
    }
}
