use std::path::PathBuf;

use crate::file_set::FileSet;
use crate::view_model::{AppViewModel, PendingRow};

const INITIAL_STATUS: &str = "Initializing...";
const SCANNING_STATUS: &str = "Scanning folder for .p7m files...";

/// Where the startup toolkit check stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolkitPhase {
    #[default]
    Checking,
    Installing,
    Ready,
    /// The install attempt failed; conversions will report per-file errors.
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchState {
    #[default]
    Idle,
    Converting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    files: FileSet,
    converted: Vec<String>,
    progress_done: usize,
    progress_total: usize,
    status: String,
    toolkit: ToolkitPhase,
    batch: BatchState,
    main_window_visible: bool,
    convert_enabled: bool,
    clear_enabled: bool,
    /// Folder scans requested but not yet reported back.
    scans_in_flight: usize,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            files: FileSet::new(),
            converted: Vec::new(),
            progress_done: 0,
            progress_total: 0,
            status: INITIAL_STATUS.to_string(),
            toolkit: ToolkitPhase::Checking,
            batch: BatchState::Idle,
            main_window_visible: false,
            convert_enabled: false,
            clear_enabled: true,
            scans_in_flight: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            main_window_visible: self.main_window_visible,
            toolkit: self.toolkit,
            converting: self.batch == BatchState::Converting,
            pending: self
                .files
                .refresh()
                .into_iter()
                .map(PendingRow::from_path)
                .collect(),
            converted: self.converted.clone(),
            progress_done: self.progress_done,
            progress_total: self.progress_total,
            status: self.status.clone(),
            convert_enabled: self.convert_enabled,
            clear_enabled: self.clear_enabled,
            scanning: self.is_scanning(),
        }
    }

    pub fn files(&self) -> &FileSet {
        &self.files
    }

    pub fn toolkit(&self) -> ToolkitPhase {
        self.toolkit
    }

    pub fn batch(&self) -> BatchState {
        self.batch
    }

    pub fn is_main_window_visible(&self) -> bool {
        self.main_window_visible
    }

    pub fn is_scanning(&self) -> bool {
        self.scans_in_flight > 0
    }

    /// Returns the dirty flag and resets it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn files_mut(&mut self) -> &mut FileSet {
        self.dirty = true;
        &mut self.files
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.dirty = true;
    }

    pub(crate) fn set_toolkit(&mut self, phase: ToolkitPhase) {
        self.toolkit = phase;
        self.dirty = true;
    }

    /// Returns true only on the first call.
    pub(crate) fn reveal_main_window(&mut self) -> bool {
        if self.main_window_visible {
            return false;
        }
        self.main_window_visible = true;
        self.dirty = true;
        true
    }

    pub(crate) fn begin_scan(&mut self) {
        self.scans_in_flight += 1;
        self.convert_enabled = false;
        self.status = SCANNING_STATUS.to_string();
        self.dirty = true;
    }

    pub(crate) fn end_scan(&mut self) {
        self.scans_in_flight = self.scans_in_flight.saturating_sub(1);
        self.dirty = true;
    }

    /// Re-derives status and the Convert button from the pending set.
    /// Convert stays off while a folder scan is outstanding.
    pub(crate) fn refresh_pending(&mut self) {
        let count = self.files.len();
        if count > 0 {
            self.status = format!("Ready to convert {count} files.");
            self.convert_enabled = !self.is_scanning();
        } else {
            self.status = "No .p7m files loaded. Drag and drop to begin.".to_string();
            self.convert_enabled = false;
        }
        if self.is_scanning() {
            self.status = SCANNING_STATUS.to_string();
        }
        self.dirty = true;
    }

    pub(crate) fn clear_lists(&mut self) {
        self.files.clear();
        self.converted.clear();
        self.progress_done = 0;
        self.progress_total = 0;
        self.status = "Lists cleared. Drag and drop files to start.".to_string();
        self.convert_enabled = false;
        self.dirty = true;
    }

    /// Locks the controls and hands back the snapshot the worker will convert.
    pub(crate) fn begin_batch(&mut self) -> Vec<PathBuf> {
        let files = self.files.refresh();
        self.batch = BatchState::Converting;
        self.convert_enabled = false;
        self.clear_enabled = false;
        self.converted.clear();
        self.progress_done = 0;
        self.progress_total = files.len();
        self.status = "Converting files...".to_string();
        self.dirty = true;
        files
    }

    pub(crate) fn advance_progress(&mut self, index: usize) {
        self.progress_done = self.progress_done.max(index + 1);
        self.dirty = true;
    }

    pub(crate) fn push_converted(&mut self, output_name: String) {
        self.converted.push(output_name);
        self.dirty = true;
    }

    /// Failed files are not kept for a retry; the whole pending set goes.
    pub(crate) fn finish_batch(&mut self, processed: usize) {
        self.batch = BatchState::Idle;
        self.status = format!("Conversion complete. {processed} files processed.");
        self.convert_enabled = true;
        self.clear_enabled = true;
        self.files.clear();
        self.dirty = true;
    }
}
