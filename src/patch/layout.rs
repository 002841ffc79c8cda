//! Resolved on-disk layout of the application being patched.

use std::fs;
use std::path::{Path, PathBuf};

use crate::patch::constants::{
    APP_DIR, BACKUP_SUFFIX, DATA_DIR, DATA_SUBDIRS, PATCH_MARKER, TARGET_FILENAME,
};
use crate::patch::error::PatchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    pub root: PathBuf,
    pub app_dir: PathBuf,
    pub target: PathBuf,
    pub backup: PathBuf,
    pub data_dir: PathBuf,
}

impl AppLayout {
    pub fn new(root: &Path) -> Self {
        let app_dir = root.join(APP_DIR);
        let target = app_dir.join(TARGET_FILENAME);
        let backup = app_dir.join(format!("{}{}", TARGET_FILENAME, BACKUP_SUFFIX));
        let data_dir = app_dir.join(DATA_DIR);
        AppLayout {
            root: root.to_path_buf(),
            app_dir,
            target,
            backup,
            data_dir,
        }
    }

    /// Fail unless the application directory exists.
    pub fn ensure_app_dir(&self) -> Result<(), PatchError> {
        if self.app_dir.is_dir() {
            Ok(())
        } else {
            Err(PatchError::AppDirNotFound {
                path: self.app_dir.display().to_string(),
            })
        }
    }

    /// True iff the target contains the patch marker. Unreadable counts as unpatched.
    pub fn is_patched(&self) -> bool {
        fs::read_to_string(&self.target)
            .map(|content| content.contains(PATCH_MARKER))
            .unwrap_or(false)
    }

    pub fn has_backup(&self) -> bool {
        self.backup.exists()
    }

    pub fn has_existing_data(&self) -> bool {
        fs::read_dir(&self.data_dir)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false)
    }

    /// Create the data directory and its subdirectories.
    ///
    /// Returns true if the root data directory had to be created.
    pub fn ensure_data_dirs(&self) -> Result<bool, PatchError> {
        let created = !self.data_dir.exists();
        for dir in std::iter::once(self.data_dir.clone())
            .chain(DATA_SUBDIRS.iter().map(|sub| self.data_dir.join(sub)))
        {
            fs::create_dir_all(&dir).map_err(|e| PatchError::DataDirFailed {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        Ok(created)
    }

    pub fn remove_data_dir(&self) -> Result<(), PatchError> {
        if !self.data_dir.exists() {
            return Ok(());
        }
        fs::remove_dir_all(&self.data_dir).map_err(|e| PatchError::DataDirFailed {
            path: self.data_dir.display().to_string(),
            reason: e.to_string(),
        })
    }
}
