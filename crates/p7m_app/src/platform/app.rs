use std::path::PathBuf;

use anyhow::{anyhow, Context};
use eframe::egui::{self, ViewportCommand};
use p7m_core::{update, AppState, Msg};
use p7m_engine::{is_toolkit_present, EngineConfig};
use p7m_logging::{log_file_in, p7m_info};
use rfd::FileDialog;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::settings;
use super::ui;
use super::ui::render::UiIntent;

pub fn run_app() -> anyhow::Result<()> {
    let app_data =
        dirs::config_dir().context("could not resolve the per-user application data directory")?;
    logging::initialize(LogDestination::for_build(), &log_file_in(&app_data));
    p7m_info!("Application started.");

    let config = settings::load_engine_config(&app_data);
    let present = is_toolkit_present(&config.toolkit.path);
    if present {
        p7m_info!("OpenSSL is already installed.");
    } else {
        p7m_info!("OpenSSL not found at {:?}", config.toolkit.path);
    }

    let mut app = ConverterApp::new(config);
    app.dispatch_msg(Msg::ToolkitChecked { present });

    let options = ui::layout::native_options(app.state.is_main_window_visible());
    eframe::run_native(
        ui::constants::APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow!("GUI event loop failed: {err}"))?;

    p7m_info!("Application closed.");
    Ok(())
}

struct ConverterApp {
    state: AppState,
    effects: EffectRunner,
    viewport_commands: Vec<ViewportCommand>,
}

impl ConverterApp {
    fn new(config: EngineConfig) -> Self {
        Self {
            state: AppState::new(),
            effects: EffectRunner::new(config),
            viewport_commands: Vec::new(),
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        let commands = self.effects.run(effects);
        self.viewport_commands.extend(commands);
    }

    fn process_relay(&mut self) {
        for msg in self.effects.drain_events() {
            self.dispatch_msg(msg);
        }
    }

    fn process_dropped_files(&mut self, ctx: &egui::Context) {
        if !self.state.is_main_window_visible() {
            return;
        }
        let dropped: Vec<PathBuf> = ctx.input(|input| {
            input
                .raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.dispatch_msg(Msg::FilesDropped(dropped));
        }
    }

    fn handle_intent(&mut self, intent: UiIntent) {
        let msg = match intent {
            UiIntent::PickFiles => match pick_files() {
                Some(files) => Msg::FilesPicked(files),
                None => Msg::NoOp,
            },
            UiIntent::PickFolder => match pick_folder() {
                Some(folder) => Msg::FolderPicked(folder),
                None => Msg::NoOp,
            },
            UiIntent::Convert => Msg::ConvertClicked,
            UiIntent::Clear => Msg::ClearClicked,
            UiIntent::Quit => Msg::QuitClicked,
        };
        self.dispatch_msg(msg);
    }
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_relay();
        self.process_dropped_files(ctx);

        let view = self.state.view();
        let intents = if view.main_window_visible {
            ui::render::render_main(ctx, &view)
        } else {
            ui::render::render_installer(ctx, &view);
            Vec::new()
        };
        for intent in intents {
            self.handle_intent(intent);
        }

        for command in self.viewport_commands.drain(..) {
            ctx.send_viewport_cmd(command);
        }
        if self.state.consume_dirty() {
            ctx.request_repaint();
        }
        ctx.request_repaint_after(ui::constants::RELAY_POLL_INTERVAL);
    }
}

fn pick_files() -> Option<Vec<PathBuf>> {
    FileDialog::new()
        .set_title("Select .p7m files")
        .add_filter("P7M files", &["p7m"])
        .add_filter("All files", &["*"])
        .pick_files()
}

fn pick_folder() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select folder containing .p7m files")
        .pick_folder()
}
