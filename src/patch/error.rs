use std::fmt;

/// Error type for patch and revert operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// `resources/app` not found under the patcher root
    AppDirNotFound { path: String },
    /// Revert requested but no backup exists
    BackupNotFound { path: String },
    /// Copying the target to its backup failed
    BackupFailed { file: String, reason: String },
    /// Reading the target failed
    ReadFailed { file: String, reason: String },
    /// Writing the patched target failed
    WriteFailed { file: String, reason: String },
    /// Creating or removing the data directory failed
    DataDirFailed { path: String, reason: String },
    /// Restoring the target from backup failed
    RestoreFailed { reason: String },
    /// Restored target does not match the backup
    VerificationFailed { file: String, expected: String, actual: String },
    /// Reading an answer from the input stream failed
    PromptFailed { reason: String },
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchError::AppDirNotFound { path } => {
                write!(f, "application directory not found: '{}'", path)
            }
            PatchError::BackupNotFound { path } => {
                write!(f, "no backup file found to revert to: '{}'", path)
            }
            PatchError::BackupFailed { file, reason } => {
                write!(f, "backup failed for '{}': {}", file, reason)
            }
            PatchError::ReadFailed { file, reason } => {
                write!(f, "failed to read '{}': {}", file, reason)
            }
            PatchError::WriteFailed { file, reason } => {
                write!(f, "failed to write '{}': {}", file, reason)
            }
            PatchError::DataDirFailed { path, reason } => {
                write!(f, "data directory error for '{}': {}", path, reason)
            }
            PatchError::RestoreFailed { reason } => {
                write!(f, "restore failed: {}", reason)
            }
            PatchError::VerificationFailed { file, expected, actual } => {
                write!(
                    f,
                    "verification failed for '{}': expected hash {}, got {}",
                    file, expected, actual
                )
            }
            PatchError::PromptFailed { reason } => {
                write!(f, "failed to read answer: {}", reason)
            }
        }
    }
}

impl std::error::Error for PatchError {}
