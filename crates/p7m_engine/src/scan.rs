use std::path::{Path, PathBuf};

use p7m_logging::{p7m_info, p7m_warn};
use walkdir::WalkDir;

use p7m_core::is_p7m_name;

/// Recursively collects regular files under `folder` whose name ends in
/// `.p7m`. Unreadable entries are logged and skipped. Result is sorted.
pub fn scan_folder(folder: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                p7m_warn!("Skipping unreadable entry under {:?}: {}", folder, err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_str().is_some_and(is_p7m_name))
        .map(|entry| entry.into_path())
        .collect();
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    p7m_info!("Found {} .p7m files under {:?}", files.len(), folder);
    files
}
