use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use p7m_logging::{p7m_error, p7m_info};

use crate::acquire::{acquire_toolkit, InstallerRunner, SilentInstaller};
use crate::convert::convert_all;
use crate::download::{Downloader, ReqwestDownloader};
use crate::relay::{self, ProgressSink, RelayReceiver, StatusRelay};
use crate::scan::scan_folder;
use crate::toolkit::{OpensslRunner, ToolkitRunner};
use crate::{EngineConfig, EngineEvent};

enum EngineCommand {
    AcquireToolkit,
    ScanFolder { folder: PathBuf },
    ConvertBatch { files: Vec<PathBuf> },
}

/// Handle to the single background worker.
///
/// Commands run one after another on the worker thread, so installation,
/// scans and batches never overlap. Results arrive on the relay.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    events: RelayReceiver,
}

struct Worker {
    config: EngineConfig,
    downloader: Arc<dyn Downloader>,
    installer: Arc<dyn InstallerRunner>,
    runner: Arc<dyn ToolkitRunner>,
    relay: StatusRelay,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let downloader = Arc::new(ReqwestDownloader::new(config.download.clone()));
        let installer = Arc::new(SilentInstaller::new(config.installer.args.clone()));
        let runner = Arc::new(OpensslRunner::new(config.toolkit.clone()));
        Self::with_parts(config, downloader, installer, runner)
    }

    /// Builds a worker around caller-supplied collaborators.
    pub fn with_parts(
        config: EngineConfig,
        downloader: Arc<dyn Downloader>,
        installer: Arc<dyn InstallerRunner>,
        runner: Arc<dyn ToolkitRunner>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (relay, events) = relay::channel();
        let worker = Worker {
            config,
            downloader,
            installer,
            runner,
            relay,
        };

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                worker.handle(command);
            }
        });

        Self { cmd_tx, events }
    }

    pub fn acquire_toolkit(&self) {
        let _ = self.cmd_tx.send(EngineCommand::AcquireToolkit);
    }

    pub fn scan_folder(&self, folder: PathBuf) {
        let _ = self.cmd_tx.send(EngineCommand::ScanFolder { folder });
    }

    pub fn convert_batch(&self, files: Vec<PathBuf>) {
        let _ = self.cmd_tx.send(EngineCommand::ConvertBatch { files });
    }

    pub fn drain(&self) -> Vec<EngineEvent> {
        self.events.drain()
    }
}

impl Worker {
    fn handle(&self, command: EngineCommand) {
        match command {
            EngineCommand::AcquireToolkit => self.acquire(),
            EngineCommand::ScanFolder { folder } => {
                let files = scan_folder(&folder);
                self.relay.emit(EngineEvent::FolderScanned { folder, files });
            }
            EngineCommand::ConvertBatch { files } => {
                p7m_info!("Starting conversion of {} files", files.len());
                convert_all(
                    &files,
                    self.runner.as_ref(),
                    &self.config.output_dir_name,
                    &self.relay,
                );
            }
        }
    }

    fn acquire(&self) {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(err) => {
                p7m_error!("Error during OpenSSL installation: {}", err);
                self.relay
                    .post_status(&format!("Error installing OpenSSL: {err}"));
                self.relay
                    .emit(EngineEvent::InstallFinished { success: false });
                self.relay.emit(EngineEvent::MainWindowReady);
                return;
            }
        };
        // Outcome already reported on the relay.
        let _ = runtime.block_on(acquire_toolkit(
            &self.config.installer,
            self.downloader.as_ref(),
            self.installer.as_ref(),
            &self.relay,
        ));
    }
}
