use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use p7m_engine::EngineConfig;
use p7m_logging::{p7m_info, p7m_warn, LOG_DIR_NAME};
use serde::Deserialize;

const SETTINGS_FILENAME: &str = "settings.ron";

/// Optional overrides; every field left out keeps its built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct PersistedSettings {
    toolkit_path: Option<PathBuf>,
    installer_url: Option<String>,
    installer_path: Option<PathBuf>,
    conversion_timeout_secs: Option<u64>,
    output_dir_name: Option<String>,
}

pub(crate) fn settings_path(app_data: &Path) -> PathBuf {
    app_data.join(LOG_DIR_NAME).join(SETTINGS_FILENAME)
}

/// Builds the engine configuration, overlaying `settings.ron` when present.
/// A broken settings file is logged and ignored.
pub(crate) fn load_engine_config(app_data: &Path) -> EngineConfig {
    let mut config = EngineConfig::with_app_data(app_data);
    let path = settings_path(app_data);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return config,
        Err(err) => {
            p7m_warn!("Failed to read settings from {:?}: {}", path, err);
            return config;
        }
    };

    let settings: PersistedSettings = match ron::from_str(&content) {
        Ok(settings) => settings,
        Err(err) => {
            p7m_warn!("Failed to parse settings from {:?}: {}", path, err);
            return config;
        }
    };

    apply(&mut config, settings);
    p7m_info!("Loaded settings from {:?}", path);
    config
}

fn apply(config: &mut EngineConfig, settings: PersistedSettings) {
    if let Some(path) = settings.toolkit_path {
        config.toolkit.path = path;
    }
    if let Some(url) = settings.installer_url {
        config.installer.url = url;
    }
    if let Some(path) = settings.installer_path {
        config.installer.installer_path = path;
    }
    if let Some(secs) = settings.conversion_timeout_secs {
        config.toolkit.timeout = Duration::from_secs(secs);
    }
    if let Some(name) = settings.output_dir_name.filter(|name| !name.trim().is_empty()) {
        config.output_dir_name = name;
    }
}
