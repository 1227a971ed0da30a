use std::time::Duration;

pub const APP_TITLE: &str = "P7M to PDF Converter";
pub const INSTALLER_TITLE: &str = "Installing OpenSSL";

pub const MAIN_SIZE: [f32; 2] = [900.0, 650.0];
pub const MAIN_MIN_SIZE: [f32; 2] = [600.0, 500.0];
pub const INSTALLER_SIZE: [f32; 2] = [300.0, 150.0];

/// How often the UI drains the relay.
pub const RELAY_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub const BUTTON_SELECT_FILES: &str = "Select .p7m Files";
pub const BUTTON_SELECT_FOLDER: &str = "Select Folder (Recursive)";
pub const BUTTON_CONVERT: &str = "Convert All";
pub const BUTTON_CLEAR: &str = "Clear Lists";
pub const BUTTON_QUIT: &str = "Quit";

pub const HEADER_PENDING: &str = "Files to Convert";
pub const HEADER_CONVERTED: &str = "Converted Files";

pub const TEXT_CHECKING: &str = "Checking for OpenSSL...";
pub const TEXT_INSTALLING: &str = "Installing OpenSSL... Please wait.";

pub const CREDITS: &str = "Creato da Riccardo Calia 2026";
