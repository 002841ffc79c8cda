//! Anchor-based text insertion rules.
//!
//! A rule pairs an anchor substring with an insertion policy. Rules are applied
//! in order to a text buffer; a rule whose anchor cannot be found leaves the
//! buffer untouched and is reported as skipped.

use crate::patch::constants::{
    PATH_REQUIRE_ANCHOR, PERFORMANCE_SWITCHES, PORTABLE_CONFIG, WEB_PREFERENCES_ANCHOR,
    WEB_PREFERENCES_CLOSING, WINDOW_SETTINGS,
};

/// Where a rule places its block relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPolicy {
    /// Directly after the line terminator of the anchor's line
    AfterLine { block: &'static str },
    /// Directly before the first `closing` found at or after the anchor
    BeforeClosing {
        closing: &'static str,
        block: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertRule {
    pub name: &'static str,
    pub anchor: &'static str,
    pub policy: InsertPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub name: &'static str,
    pub applied: bool,
}

/// Result of running a rule set over a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    pub rules: Vec<RuleOutcome>,
}

impl PatchReport {
    pub fn skipped(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.rules.iter().filter(|r| !r.applied)
    }

    pub fn is_complete(&self) -> bool {
        self.rules.iter().all(|r| r.applied)
    }
}

impl InsertRule {
    /// Apply this rule, returning `None` when the anchor (or closing) is missing.
    pub fn apply(&self, content: &str) -> Option<String> {
        match self.policy {
            InsertPolicy::AfterLine { block } => try_insert_after_line(content, self.anchor, block),
            InsertPolicy::BeforeClosing { closing, block } => {
                try_insert_before_closing(content, self.anchor, closing, block)
            }
        }
    }
}

/// The portable-mode rule set, in application order.
///
/// The first two rules share an anchor, so the second block ends up directly
/// below the anchor line with the first block after it.
pub fn portable_rules() -> [InsertRule; 3] {
    [
        InsertRule {
            name: "performance switches",
            anchor: PATH_REQUIRE_ANCHOR,
            policy: InsertPolicy::AfterLine {
                block: PERFORMANCE_SWITCHES,
            },
        },
        InsertRule {
            name: "portable configuration",
            anchor: PATH_REQUIRE_ANCHOR,
            policy: InsertPolicy::AfterLine {
                block: PORTABLE_CONFIG,
            },
        },
        InsertRule {
            name: "window settings",
            anchor: WEB_PREFERENCES_ANCHOR,
            policy: InsertPolicy::BeforeClosing {
                closing: WEB_PREFERENCES_CLOSING,
                block: WINDOW_SETTINGS,
            },
        },
    ]
}

/// Apply each rule in turn to `content`.
pub fn apply_rules(content: &str, rules: &[InsertRule]) -> (String, PatchReport) {
    let mut current = content.to_string();
    let mut report = PatchReport::default();

    for rule in rules {
        let applied = match rule.apply(&current) {
            Some(next) => {
                current = next;
                true
            }
            None => false,
        };
        report.rules.push(RuleOutcome {
            name: rule.name,
            applied,
        });
    }

    (current, report)
}

/// Insert `block` right after the line containing the first `search`.
///
/// Returns the input unchanged when `search` is absent or its line has no
/// terminating newline.
pub fn insert_after_line(content: &str, search: &str, block: &str) -> String {
    try_insert_after_line(content, search, block).unwrap_or_else(|| content.to_string())
}

/// Insert `block` before the first `closing` at or after the first `anchor`.
pub fn insert_before_closing(content: &str, anchor: &str, closing: &str, block: &str) -> String {
    try_insert_before_closing(content, anchor, closing, block)
        .unwrap_or_else(|| content.to_string())
}

fn try_insert_after_line(content: &str, search: &str, block: &str) -> Option<String> {
    let pos = content.find(search)?;
    let end_of_line = pos + content[pos..].find('\n')?;
    Some(splice(content, end_of_line + 1, block))
}

fn try_insert_before_closing(
    content: &str,
    anchor: &str,
    closing: &str,
    block: &str,
) -> Option<String> {
    let pos = content.find(anchor)?;
    let closing_pos = pos + content[pos..].find(closing)?;
    Some(splice(content, closing_pos, block))
}

fn splice(content: &str, at: usize, block: &str) -> String {
    let mut out = String::with_capacity(content.len() + block.len());
    out.push_str(&content[..at]);
    out.push_str(block);
    out.push_str(&content[at..]);
    out
}
