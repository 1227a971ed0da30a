use eframe::egui::{self, ViewportCommand};

use super::constants::*;

/// Window options at startup. The window opens at the small installer size
/// unless the main view is already due.
pub fn native_options(main_visible: bool) -> eframe::NativeOptions {
    let (title, size, min_size) = if main_visible {
        (APP_TITLE, MAIN_SIZE, MAIN_MIN_SIZE)
    } else {
        (INSTALLER_TITLE, INSTALLER_SIZE, INSTALLER_SIZE)
    };
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(size)
            .with_min_inner_size(min_size)
            .with_drag_and_drop(true),
        ..Default::default()
    }
}

/// Turns the installer window into the main window.
pub fn reveal_main_window() -> Vec<ViewportCommand> {
    vec![
        ViewportCommand::Title(APP_TITLE.to_string()),
        ViewportCommand::MinInnerSize(MAIN_MIN_SIZE.into()),
        ViewportCommand::InnerSize(MAIN_SIZE.into()),
        ViewportCommand::Focus,
    ]
}
