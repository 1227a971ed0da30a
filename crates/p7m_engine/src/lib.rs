//! Converter engine: toolkit discovery and installation, folder scanning,
//! batch conversion and the worker that runs them off the UI thread.
mod acquire;
mod config;
mod convert;
mod download;
mod engine;
mod naming;
mod persist;
mod process;
mod relay;
mod scan;
mod toolkit;
mod types;

pub use acquire::{acquire_toolkit, InstallError, InstallerRunner, SilentInstaller};
pub use config::{
    DownloadSettings, EngineConfig, InstallerConfig, ToolkitConfig, CONVERSION_TIMEOUT,
    INSTALLER_ARGS, INSTALLER_FILE_NAME, OPENSSL_INSTALLER_URL, OPENSSL_PATH, OUTPUT_DIR_NAME,
};
pub use convert::{convert_all, convert_one, ConversionError};
pub use download::{DownloadError, Downloader, ReqwestDownloader};
pub use engine::EngineHandle;
pub use naming::{is_p7m_name, output_dir_for, output_file_name, output_path_for};
pub use persist::{ensure_output_dir, PersistError, StagedFile};
pub use process::{run_with_timeout, ProcessError, ProcessOutput};
pub use relay::{channel as relay_channel, ProgressSink, RelayReceiver, StatusRelay};
pub use scan::scan_folder;
pub use toolkit::{is_toolkit_present, smime_args, OpensslRunner, ToolkitRunner};
pub use types::{BatchSummary, ConversionOutcome, ConversionResult, EngineEvent};
