use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the toolkit lives after a default install.
pub const OPENSSL_PATH: &str = r"C:\Program Files\OpenSSL-Win64\bin\openssl.exe";
pub const OPENSSL_INSTALLER_URL: &str = "https://slproweb.com/download/Win64OpenSSL-3_3_2.exe";
pub const INSTALLER_FILE_NAME: &str = "Win64OpenSSL-3_3_2.exe";
pub const INSTALLER_ARGS: &[&str] = &["/verysilent", "/norestart"];
/// Sibling directory, next to each input, that receives the PDFs.
pub const OUTPUT_DIR_NAME: &str = "p7m-to-pdf";
pub const CONVERSION_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolkitConfig {
    pub path: PathBuf,
    /// Upper bound for a single toolkit invocation.
    pub timeout: Duration,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(OPENSSL_PATH),
            timeout: CONVERSION_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    pub url: String,
    /// Download target; reused as-is when it already exists.
    pub installer_path: PathBuf,
    pub args: Vec<String>,
}

impl InstallerConfig {
    pub fn in_app_data(app_data: &Path) -> Self {
        Self {
            url: OPENSSL_INSTALLER_URL.to_string(),
            installer_path: app_data.join(INSTALLER_FILE_NAME),
            args: INSTALLER_ARGS.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(30 * 60),
        }
    }
}

/// Everything the worker needs, handed over at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub toolkit: ToolkitConfig,
    pub installer: InstallerConfig,
    pub download: DownloadSettings,
    pub output_dir_name: String,
}

impl EngineConfig {
    pub fn with_app_data(app_data: &Path) -> Self {
        Self {
            toolkit: ToolkitConfig::default(),
            installer: InstallerConfig::in_app_data(app_data),
            download: DownloadSettings::default(),
            output_dir_name: OUTPUT_DIR_NAME.to_string(),
        }
    }
}
