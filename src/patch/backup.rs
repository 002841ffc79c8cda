//! Backup and restore of the target file.

use std::fs;

use crate::patch::error::PatchError;
use crate::patch::layout::AppLayout;
use crate::utils::hash::hash_file;

/// Copy the target to its backup path unless a backup already exists.
///
/// An existing backup holds the pre-patch original and is never overwritten.
/// Returns true if a new backup was written.
pub fn backup_target(layout: &AppLayout) -> Result<bool, PatchError> {
    if layout.has_backup() {
        return Ok(false);
    }

    fs::copy(&layout.target, &layout.backup).map_err(|e| PatchError::BackupFailed {
        file: layout.target.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(true)
}

/// Restore the target from its backup, verify it, then delete the backup.
///
/// The backup is kept if the restored file does not hash to the same value.
pub fn restore_target(layout: &AppLayout) -> Result<(), PatchError> {
    if !layout.has_backup() {
        return Err(PatchError::BackupNotFound {
            path: layout.backup.display().to_string(),
        });
    }

    fs::copy(&layout.backup, &layout.target).map_err(|e| PatchError::RestoreFailed {
        reason: format!("failed to restore '{}': {}", layout.target.display(), e),
    })?;

    let expected = hash_file(&layout.backup).map_err(|e| PatchError::RestoreFailed {
        reason: format!("failed to read backup: {}", e),
    })?;
    let actual = hash_file(&layout.target).map_err(|e| PatchError::RestoreFailed {
        reason: format!("failed to read restored file: {}", e),
    })?;
    if expected != actual {
        return Err(PatchError::VerificationFailed {
            file: layout.target.display().to_string(),
            expected,
            actual,
        });
    }

    fs::remove_file(&layout.backup).map_err(|e| PatchError::RestoreFailed {
        reason: format!("failed to remove backup: {}", e),
    })?;

    Ok(())
}
