use std::path::Path;
use std::process::Command;

use p7m_logging::{p7m_error, p7m_info};
use thiserror::Error;

use crate::process::run_with_timeout;
use crate::toolkit::hide_console;
use crate::{DownloadError, Downloader, EngineEvent, InstallerConfig, ProgressSink};

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("download failed: {0}")]
    Download(#[from] DownloadError),
    #[error("installer could not be started: {0}")]
    Launch(String),
    #[error("installer exited with code {code:?}: {stderr}")]
    ExitStatus { code: Option<i32>, stderr: String },
}

impl InstallError {
    /// Line shown on the status bar for this failure.
    pub fn status_line(&self) -> String {
        match self {
            InstallError::Download(err) => format!("Error installing OpenSSL: {err}"),
            InstallError::Launch(_) | InstallError::ExitStatus { .. } => {
                "OpenSSL installation failed.".to_string()
            }
        }
    }
}

/// Runs a downloaded installer to completion.
pub trait InstallerRunner: Send + Sync {
    fn run(&self, installer: &Path) -> Result<(), InstallError>;
}

/// Runs the installer with its silent/no-restart switches. No timeout: an
/// installer may legitimately take minutes.
#[derive(Debug, Clone)]
pub struct SilentInstaller {
    args: Vec<String>,
}

impl SilentInstaller {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl InstallerRunner for SilentInstaller {
    fn run(&self, installer: &Path) -> Result<(), InstallError> {
        let mut command = Command::new(installer);
        command.args(&self.args);
        hide_console(&mut command);

        let output =
            run_with_timeout(command, None).map_err(|err| InstallError::Launch(err.to_string()))?;
        if output.status.success() {
            Ok(())
        } else {
            Err(InstallError::ExitStatus {
                code: output.status.code(),
                stderr: output.stderr.trim().to_string(),
            })
        }
    }
}

/// Downloads the installer if it is not cached yet, then runs it.
///
/// Whatever happens, the sink receives a status line, the install outcome and
/// finally [`EngineEvent::MainWindowReady`], so the UI never stays hidden.
/// Re-running after a failure starts over from the top.
pub async fn acquire_toolkit(
    config: &InstallerConfig,
    downloader: &dyn Downloader,
    installer: &dyn InstallerRunner,
    sink: &dyn ProgressSink,
) -> Result<(), InstallError> {
    let result = install(config, downloader, installer, sink).await;
    match &result {
        Ok(()) => {
            p7m_info!("OpenSSL installed successfully.");
            sink.post_status("OpenSSL installation complete.");
        }
        Err(err) => {
            p7m_error!("OpenSSL installation failed: {}", err);
            sink.post_status(&err.status_line());
        }
    }
    sink.emit(EngineEvent::InstallFinished {
        success: result.is_ok(),
    });
    sink.emit(EngineEvent::MainWindowReady);
    result
}

async fn install(
    config: &InstallerConfig,
    downloader: &dyn Downloader,
    installer: &dyn InstallerRunner,
    sink: &dyn ProgressSink,
) -> Result<(), InstallError> {
    if !config.installer_path.exists() {
        p7m_info!("Downloading OpenSSL installer...");
        sink.post_status("Downloading OpenSSL installer...");
        downloader
            .download(&config.url, &config.installer_path)
            .await?;
    }
    p7m_info!("Running OpenSSL installer...");
    sink.post_status("Running OpenSSL installer...");
    installer.run(&config.installer_path)
}
