use std::io::{BufRead, Write};

use crate::patch::{restore_target, AppLayout, PatchError};
use crate::utils::session::Session;

/// Restore the original target from its backup.
///
/// If the data directory holds anything, the user is asked whether to keep
/// it; declining removes it before the target is restored.
pub fn run<R: BufRead, W: Write>(
    layout: &AppLayout,
    session: &mut Session<R, W>,
) -> Result<(), PatchError> {
    if !layout.has_backup() {
        return Err(PatchError::BackupNotFound {
            path: layout.backup.display().to_string(),
        });
    }

    if layout.has_existing_data() {
        session.warning(&format!("You have data in: {}", layout.data_dir.display()));
        if !session.ask("Keep this data", true)? {
            session.action("Removing data directory...");
            layout.remove_data_dir()?;
        }
    }

    session.action("Restoring original version...");
    restore_target(layout)?;

    session.success("Successfully reverted to original version!");
    Ok(())
}
