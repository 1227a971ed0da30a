use eframe::egui::{self, RichText};
use p7m_core::{AppViewModel, ToolkitPhase};

use super::constants::*;

/// User actions collected while drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiIntent {
    PickFiles,
    PickFolder,
    Convert,
    Clear,
    Quit,
}

/// Shown until the startup sequence reveals the main window.
pub fn render_installer(ctx: &egui::Context, view: &AppViewModel) {
    let headline = match view.toolkit {
        ToolkitPhase::Checking => TEXT_CHECKING,
        _ => TEXT_INSTALLING,
    };
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(headline);
            ui.add_space(8.0);
            ui.add(egui::Spinner::new().size(24.0));
            ui.add_space(8.0);
            ui.small(&view.status);
        });
    });
}

pub fn render_main(ctx: &egui::Context, view: &AppViewModel) -> Vec<UiIntent> {
    let mut intents = Vec::new();

    egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
        ui.add_space(6.0);
        let progress_text = format!("{}/{}", view.progress_done, view.progress_total);
        ui.add(egui::ProgressBar::new(view.progress_fraction()).text(progress_text));
        ui.horizontal(|ui| {
            if view.scanning {
                ui.spinner();
            }
            ui.label(&view.status);
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(view.convert_enabled, egui::Button::new(BUTTON_CONVERT))
                .clicked()
            {
                intents.push(UiIntent::Convert);
            }
            if ui
                .add_enabled(view.clear_enabled, egui::Button::new(BUTTON_CLEAR))
                .clicked()
            {
                intents.push(UiIntent::Clear);
            }
            if ui.button(BUTTON_QUIT).clicked() {
                intents.push(UiIntent::Quit);
            }
        });
        ui.add_space(4.0);
        ui.small(CREDITS);
        ui.add_space(6.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_enabled_ui(view.selection_enabled(), |ui| {
            let width = ui.available_width();
            if ui
                .add_sized([width, 28.0], egui::Button::new(BUTTON_SELECT_FILES))
                .clicked()
            {
                intents.push(UiIntent::PickFiles);
            }
            if ui
                .add_sized([width, 28.0], egui::Button::new(BUTTON_SELECT_FOLDER))
                .clicked()
            {
                intents.push(UiIntent::PickFolder);
            }
        });
        ui.add_space(8.0);
        ui.columns(2, |columns| {
            file_list(
                &mut columns[0],
                "pending_files",
                HEADER_PENDING,
                view.pending.iter().map(|row| row.display_name.as_str()),
            );
            file_list(
                &mut columns[1],
                "converted_files",
                HEADER_CONVERTED,
                view.converted.iter().map(String::as_str),
            );
        });
    });

    intents
}

fn file_list<'a>(
    ui: &mut egui::Ui,
    id: &str,
    header: &str,
    rows: impl Iterator<Item = &'a str>,
) {
    ui.label(RichText::new(header).strong());
    egui::ScrollArea::vertical()
        .id_salt(id)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for row in rows {
                ui.label(row);
            }
        });
}
