use std::io::{BufRead, Write};
use std::path::Path;

use crate::patch::{AppLayout, PatchError};
use crate::utils::hash::hash_file;
use crate::utils::session::{Session, Tone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub patched: bool,
    pub has_backup: bool,
    pub has_data: bool,
    pub target_hash: Option<String>,
    pub backup_hash: Option<String>,
}

/// Report the current patch state without modifying anything.
pub fn run<R: BufRead, W: Write>(
    layout: &AppLayout,
    session: &mut Session<R, W>,
) -> Result<StatusReport, PatchError> {
    layout.ensure_app_dir()?;

    let report = StatusReport {
        patched: layout.is_patched(),
        has_backup: layout.has_backup(),
        has_data: layout.has_existing_data(),
        target_hash: optional_hash(&layout.target),
        backup_hash: optional_hash(&layout.backup),
    };

    session.info(&format!("Root:   {}", layout.root.display()));
    session.info(&format!("Target: {}", layout.target.display()));
    let state = if report.patched { "patched" } else { "original" };
    session.line(Tone::Plain, &format!("  State:  {}", state));
    session.line(Tone::Plain, &format!("  Backup: {}", yes_no(report.has_backup)));
    session.line(Tone::Plain, &format!("  Data:   {}", yes_no(report.has_data)));
    if let Some(hash) = &report.target_hash {
        session.line(Tone::Plain, &format!("  main.js:        {}", hash));
    }
    if let Some(hash) = &report.backup_hash {
        session.line(Tone::Plain, &format!("  main.js.backup: {}", hash));
    }
    if report.patched != report.has_backup {
        session.warning("Marker and backup disagree; main.js may have been edited by hand");
    }

    Ok(report)
}

fn optional_hash(path: &Path) -> Option<String> {
    if path.exists() { hash_file(path).ok() } else { None }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
