use std::fs;
use std::io::{BufRead, Write};

use crate::commands::revert;
use crate::patch::{apply_rules, backup_target, portable_rules, AppLayout, PatchError, PatchReport};
use crate::utils::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Target was patched; the report lists which rules found their anchors
    Patched(PatchReport),
    /// Target was already patched and the user chose to revert
    Reverted,
    /// Target was already patched and left as is
    Unchanged,
}

/// Patch the target into portable mode, or offer to revert if already patched.
///
/// Workflow:
/// 1. Check the application directory exists
/// 2. If the marker is present, ask whether to revert instead
/// 3. Read the target, before anything is created on disk
/// 4. Create the data directory tree
/// 5. Back up the target (first run only)
/// 6. Apply the insertion rules and write the result
pub fn run<R: BufRead, W: Write>(
    layout: &AppLayout,
    session: &mut Session<R, W>,
) -> Result<ApplyOutcome, PatchError> {
    // Verify we're in the application root
    session.step("Checking application state...");
    layout.ensure_app_dir()?;

    // Already patched: offer a revert instead
    if layout.is_patched() {
        session.notice("The application is already patched!");
        if session.ask("Would you like to revert to the original version", true)? {
            revert::run(layout, session)?;
            return Ok(ApplyOutcome::Reverted);
        }
        return Ok(ApplyOutcome::Unchanged);
    }

    // Load the target so an unreadable file leaves no artifacts behind
    let content = fs::read_to_string(&layout.target).map_err(|e| PatchError::ReadFailed {
        file: layout.target.display().to_string(),
        reason: e.to_string(),
    })?;

    // Create portable data directories
    if !layout.data_dir.exists() {
        session.action("Creating data directory structure...");
    }
    layout.ensure_data_dirs()?;

    // Backup original main.js (never overwrites an existing backup)
    if !layout.has_backup() {
        session.action("Creating backup of main.js...");
    }
    backup_target(layout)?;

    // Insert the portable blocks
    session.action("Applying portable mode patch...");
    let (patched, report) = apply_rules(&content, &portable_rules());
    for rule in report.skipped() {
        session.warning(&format!("Anchor not found, skipped {}", rule.name));
    }

    // Write modified content back
    fs::write(&layout.target, patched).map_err(|e| PatchError::WriteFailed {
        file: layout.target.display().to_string(),
        reason: e.to_string(),
    })?;

    session.success("Patch applied successfully!");
    session.info(&format!("Data directory: {}", layout.data_dir.display()));
    session.info("Run again to revert changes");

    Ok(ApplyOutcome::Patched(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{PATCH_MARKER, PERFORMANCE_SWITCHES, WINDOW_SETTINGS};
    use std::io::Cursor;
    use tempfile::tempdir;

    const ENTRY_SCRIPT: &str = concat!(
        "const { app, BrowserWindow } = require(\"electron\");\n",
        "const path = require(\"node:path\");\n",
        "\n",
        "function createWindow() {\n",
        "  const win = new BrowserWindow({\n",
        "    width: 1200,\n",
        "    webPreferences: {\n",
        "      preload: path.join(__dirname, \"preload.js\"),\n",
        "    }\n",
        "  });\n",
        "}\n",
    );

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn app_with_script(content: &str) -> (tempfile::TempDir, AppLayout) {
        let root = tempdir().unwrap();
        let layout = AppLayout::new(root.path());
        fs::create_dir_all(&layout.app_dir).unwrap();
        fs::write(&layout.target, content).unwrap();
        (root, layout)
    }

    #[test]
    fn missing_app_dir_is_reported() {
        let root = tempdir().unwrap();
        let layout = AppLayout::new(root.path());

        let result = run(&layout, &mut session(""));

        assert!(matches!(result, Err(PatchError::AppDirNotFound { .. })));
        assert!(!layout.data_dir.exists());
    }

    #[test]
    fn apply_then_revert_restores_original() {
        let (_root, layout) = app_with_script(ENTRY_SCRIPT);

        let outcome = run(&layout, &mut session("")).unwrap();
        match outcome {
            ApplyOutcome::Patched(report) => assert!(report.is_complete()),
            other => panic!("Expected Patched, got {:?}", other),
        }

        let patched = fs::read_to_string(&layout.target).unwrap();
        assert!(patched.contains(PATCH_MARKER));
        assert!(patched.contains(PERFORMANCE_SWITCHES));
        assert!(patched.contains("app.commandLine.appendSwitch('enable-zero-copy');"));
        assert!(patched.contains(WINDOW_SETTINGS));
        let prefs = patched.find("webPreferences: {").unwrap();
        let throttling = patched.find("backgroundThrottling: false").unwrap();
        let closing = prefs + patched[prefs..].find("\n    }").unwrap();
        assert!(prefs < throttling && throttling < closing);
        assert!(layout.has_backup());
        for sub in ["logs", "crashes", "temp", "cache"] {
            assert!(layout.data_dir.join(sub).is_dir());
        }

        // Second run sees the marker and reverts on the default answer
        let outcome = run(&layout, &mut session("\n\n")).unwrap();
        assert_eq!(outcome, ApplyOutcome::Reverted);

        assert_eq!(fs::read(&layout.target).unwrap(), ENTRY_SCRIPT.as_bytes());
        assert!(!layout.has_backup());
    }

    #[test]
    fn declining_revert_leaves_file_untouched() {
        let (_root, layout) = app_with_script(ENTRY_SCRIPT);
        run(&layout, &mut session("")).unwrap();
        let patched = fs::read(&layout.target).unwrap();

        let outcome = run(&layout, &mut session("n\n")).unwrap();

        assert_eq!(outcome, ApplyOutcome::Unchanged);
        assert_eq!(fs::read(&layout.target).unwrap(), patched);
        assert!(layout.has_backup());
    }

    #[test]
    fn existing_backup_is_not_overwritten() {
        let (_root, layout) = app_with_script(ENTRY_SCRIPT);
        fs::write(&layout.backup, "pristine original").unwrap();

        run(&layout, &mut session("")).unwrap();

        assert_eq!(
            fs::read_to_string(&layout.backup).unwrap(),
            "pristine original"
        );
    }

    #[test]
    fn missing_anchors_warn_but_still_write() {
        let (_root, layout) = app_with_script("console.log('hello');\n");

        let mut s = session("");
        let outcome = run(&layout, &mut s).unwrap();

        match outcome {
            ApplyOutcome::Patched(report) => assert_eq!(report.skipped().count(), 3),
            other => panic!("Expected Patched, got {:?}", other),
        }
        let out = String::from_utf8(s.into_output()).unwrap();
        assert!(out.contains("[WARNING] Anchor not found, skipped window settings"));
        assert_eq!(
            fs::read_to_string(&layout.target).unwrap(),
            "console.log('hello');\n"
        );
        assert!(!layout.is_patched());
    }

    #[test]
    fn missing_target_fails_before_creating_anything() {
        let root = tempdir().unwrap();
        let layout = AppLayout::new(root.path());
        fs::create_dir_all(&layout.app_dir).unwrap();

        let result = run(&layout, &mut session(""));

        assert!(matches!(result, Err(PatchError::ReadFailed { .. })));
        assert!(!layout.data_dir.exists());
        assert!(!layout.has_backup());
    }

    #[test]
    fn non_utf8_target_leaves_no_artifacts() {
        let root = tempdir().unwrap();
        let layout = AppLayout::new(root.path());
        fs::create_dir_all(&layout.app_dir).unwrap();
        fs::write(&layout.target, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let result = run(&layout, &mut session(""));

        assert!(matches!(result, Err(PatchError::ReadFailed { .. })));
        assert!(!layout.data_dir.exists());
        assert!(!layout.has_backup());
        assert_eq!(fs::read(&layout.target).unwrap(), [0xff, 0xfe, 0x00, 0x80]);
    }

    #[test]
    fn patched_target_without_backup_cannot_revert() {
        let (_root, layout) = app_with_script("const isPortable = true;\n");

        let result = run(&layout, &mut session("\n"));

        assert!(matches!(result, Err(PatchError::BackupNotFound { .. })));
        assert_eq!(
            fs::read_to_string(&layout.target).unwrap(),
            "const isPortable = true;\n"
        );
    }
}
