use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// How a path entered the set. Only folder-sourced entries are dropped when a
/// different folder is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOrigin {
    Picked,
    Dropped,
    Folder,
}

impl FileOrigin {
    fn is_individual(self) -> bool {
        !matches!(self, FileOrigin::Folder)
    }
}

/// Sorted, deduplicated collection of input paths.
///
/// Keys are lexically normalized, so `a//b.p7m` and `a/./b.p7m` are the same
/// entry. Entries are ordered by their whole path string, so `/d/a-b/y.p7m`
/// sorts before `/d/a/x.p7m`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileSet {
    entries: BTreeMap<OsString, FileOrigin>,
    active_folder: Option<PathBuf>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds files chosen in the picker. No extension filtering happens here.
    pub fn add_files<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        paths
            .into_iter()
            .filter(|path| self.insert(path, FileOrigin::Picked))
            .count()
    }

    /// Adds dropped files, keeping only `.p7m` names.
    pub fn add_dropped<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        paths
            .into_iter()
            .filter(|path| is_p7m_path(path))
            .filter(|path| self.insert(path, FileOrigin::Dropped))
            .count()
    }

    /// Makes `folder` the active folder and adds its scanned files.
    ///
    /// Files from a previously active, different folder are removed first.
    /// An empty scan leaves the set untouched.
    pub fn add_folder(&mut self, folder: &Path, files: Vec<PathBuf>) -> usize {
        if files.is_empty() {
            return 0;
        }
        let folder = normalize_path(folder);
        if self.active_folder.as_ref() != Some(&folder) {
            self.entries.retain(|_, origin| origin.is_individual());
        }
        self.active_folder = Some(folder);
        files
            .iter()
            .filter(|path| self.insert(path, FileOrigin::Folder))
            .count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.active_folder = None;
    }

    /// Canonical sorted, unique list of paths.
    pub fn refresh(&self) -> Vec<PathBuf> {
        self.entries.keys().map(PathBuf::from).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn active_folder(&self) -> Option<&Path> {
        self.active_folder.as_deref()
    }

    pub fn origin(&self, path: &Path) -> Option<FileOrigin> {
        self.entries.get(&entry_key(path)).copied()
    }

    /// Returns true when the path was not tracked before.
    fn insert(&mut self, path: &Path, origin: FileOrigin) -> bool {
        let key = entry_key(path);
        match self.entries.get_mut(&key) {
            Some(existing) => {
                // An individually added file must survive folder switches.
                if origin.is_individual() && !existing.is_individual() {
                    *existing = origin;
                }
                false
            }
            None => {
                self.entries.insert(key, origin);
                true
            }
        }
    }
}

/// Lexical normalization: repeated separators and interior `.` components
/// collapse. Does not touch the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.components().collect()
}

fn entry_key(path: &Path) -> OsString {
    normalize_path(path).into_os_string()
}

/// True when `name` ends in `.p7m`, ignoring ASCII case.
pub fn is_p7m_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".p7m")
}

/// [`is_p7m_name`] applied to the final path component.
pub fn is_p7m_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(is_p7m_name)
}
