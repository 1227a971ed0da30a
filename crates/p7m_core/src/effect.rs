use std::path::PathBuf;

/// Side effects requested by [`crate::update`]; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Download and run the toolkit installer on the background worker.
    AcquireToolkit,
    /// Make the main window visible. Emitted at most once per process.
    RevealMainWindow,
    /// Recursively collect `.p7m` files below `folder` on the background worker.
    ScanFolder { folder: PathBuf },
    /// Convert an immutable snapshot of the pending files.
    ConvertBatch { files: Vec<PathBuf> },
    /// Blocking error notification for a single file.
    ShowError { title: String, message: String },
    /// Close the application.
    Quit,
}
