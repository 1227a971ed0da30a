use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Whether the toolkit binary was found at startup.
    ToolkitChecked { present: bool },
    /// Plain status line posted by background work.
    StatusPosted(String),
    /// The installer run finished, successfully or not.
    InstallFinished { success: bool },
    /// Sentinel from the relay: background startup work is over.
    MainWindowReady,
    /// Files chosen in the file picker.
    FilesPicked(Vec<PathBuf>),
    /// Files dropped onto the window.
    FilesDropped(Vec<PathBuf>),
    /// Folder chosen in the folder picker.
    FolderPicked(PathBuf),
    /// Recursive scan result for a picked folder.
    FolderScanned { folder: PathBuf, files: Vec<PathBuf> },
    ConvertClicked,
    ClearClicked,
    QuitClicked,
    /// One file of the running batch was converted.
    FileConverted {
        index: usize,
        total: usize,
        output_name: String,
    },
    /// One file of the running batch was not a `.p7m` file.
    FileSkipped { index: usize, file_name: String },
    /// One file of the running batch failed.
    FileFailed {
        index: usize,
        file_name: String,
        detail: String,
    },
    /// The running batch is over.
    BatchFinished { processed: usize },
    /// A dialog was dismissed without a selection.
    NoOp,
}
