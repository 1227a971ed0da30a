use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory {path:?} unusable: {reason}")]
    OutputDir { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl PersistError {
    fn output_dir(path: &Path, reason: impl ToString) -> Self {
        PersistError::OutputDir {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Ensure the directory exists and is writable; create it if missing.
/// Calling it again on an existing directory is a no-op.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(PersistError::output_dir(dir, "path is not a directory"));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::output_dir(dir, e))?;
    }
    // Writability check; the temp file is removed on drop.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::output_dir(dir, e))?;
    Ok(())
}

/// File written in the destination directory under a temporary name and
/// renamed into place on [`StagedFile::commit`]. Dropping it uncommitted
/// removes the partial file.
pub struct StagedFile {
    tmp: NamedTempFile,
}

impl StagedFile {
    pub fn new_in(dir: &Path) -> Result<Self, PersistError> {
        ensure_output_dir(dir)?;
        Ok(Self {
            tmp: NamedTempFile::new_in(dir)?,
        })
    }

    pub fn write_chunk(&mut self, bytes: &[u8]) -> Result<(), PersistError> {
        self.tmp.write_all(bytes)?;
        Ok(())
    }

    pub fn commit(mut self, target: &Path) -> Result<PathBuf, PersistError> {
        self.tmp.flush()?;
        self.tmp.as_file_mut().sync_all()?;
        if target.exists() {
            fs::remove_file(target)?;
        }
        self.tmp
            .persist(target)
            .map_err(|e| PersistError::Io(e.error))?;
        Ok(target.to_path_buf())
    }
}
