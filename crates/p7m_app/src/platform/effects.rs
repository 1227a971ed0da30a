use eframe::egui::ViewportCommand;
use p7m_core::{Effect, Msg};
use p7m_engine::{ConversionOutcome, EngineConfig, EngineEvent, EngineHandle};
use p7m_logging::p7m_info;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use super::ui;

/// Executes effects from the pure core. Engine work is handed to the worker;
/// window changes come back as viewport commands for the next frame.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: EngineHandle::new(config),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<ViewportCommand> {
        let mut commands = Vec::new();
        for effect in effects {
            match effect {
                Effect::AcquireToolkit => {
                    p7m_info!("OpenSSL not found. Starting installation...");
                    self.engine.acquire_toolkit();
                }
                Effect::RevealMainWindow => {
                    p7m_info!("Showing main window");
                    commands.extend(ui::layout::reveal_main_window());
                }
                Effect::ScanFolder { folder } => {
                    p7m_info!("Scanning folder {:?}", folder);
                    self.engine.scan_folder(folder);
                }
                Effect::ConvertBatch { files } => {
                    p7m_info!("Converting {} files", files.len());
                    self.engine.convert_batch(files);
                }
                Effect::ShowError { title, message } => show_error(&title, &message),
                Effect::Quit => commands.push(ViewportCommand::Close),
            }
        }
        commands
    }

    /// Everything the worker has posted since the last call, oldest first.
    /// Status lines are written to the log as they are taken off the relay.
    pub fn drain_events(&self) -> Vec<Msg> {
        self.engine
            .drain()
            .into_iter()
            .map(|event| {
                match &event {
                    EngineEvent::Status(text) => p7m_info!("{}", text),
                    EngineEvent::MainWindowReady => p7m_info!("Launching main window"),
                    _ => {}
                }
                event_to_msg(event)
            })
            .collect()
    }
}

pub fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Status(text) => Msg::StatusPosted(text),
        EngineEvent::InstallFinished { success } => Msg::InstallFinished { success },
        EngineEvent::MainWindowReady => Msg::MainWindowReady,
        EngineEvent::FolderScanned { folder, files } => Msg::FolderScanned { folder, files },
        EngineEvent::FileFinished(result) => {
            let file_name = result.file_name();
            let output_name = result.output_name();
            match result.outcome {
                ConversionOutcome::Converted => Msg::FileConverted {
                    index: result.index,
                    total: result.total,
                    output_name: output_name.unwrap_or_default(),
                },
                ConversionOutcome::Skipped => Msg::FileSkipped {
                    index: result.index,
                    file_name,
                },
                ConversionOutcome::Failed(err) => Msg::FileFailed {
                    index: result.index,
                    file_name,
                    detail: err.to_string(),
                },
            }
        }
        EngineEvent::BatchFinished { processed } => Msg::BatchFinished { processed },
    }
}

fn show_error(title: &str, message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
