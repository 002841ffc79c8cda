pub mod backup;
mod constants;
mod error;
pub mod layout;
pub mod rules;

// Re-export public items
pub use backup::{backup_target, restore_target};
pub use constants::{
    APP_DIR, BACKUP_SUFFIX, DATA_DIR, DATA_SUBDIRS, PATCH_MARKER, PATH_REQUIRE_ANCHOR,
    PERFORMANCE_SWITCHES, PORTABLE_CONFIG, TARGET_FILENAME, WEB_PREFERENCES_ANCHOR,
    WEB_PREFERENCES_CLOSING, WINDOW_SETTINGS,
};
pub use error::PatchError;
pub use layout::AppLayout;
pub use rules::{
    apply_rules, insert_after_line, portable_rules, InsertPolicy, InsertRule, PatchReport,
};
