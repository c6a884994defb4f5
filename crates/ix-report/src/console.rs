//! The console summary contract
//!
//! The summary text is an observable interface: a count line, one bullet
//! per finding in discovery order, and a clickable pointer at the persisted
//! report. Tooling greps for these lines; the wording is load-bearing.

use ix_check::SealedViolations;
use std::fmt::Write as _;

/// The count line, pluralized for anything but exactly one finding.
pub(crate) fn count_line(count: usize) -> String {
    let noun = if count == 1 { "issue" } else { "issues" };
    format!("{count} instant execution {noun} found:")
}

/// Render the full console summary for a non-empty violation set.
///
/// Callers must not invoke this for an empty set; a clean build prints
/// nothing at all.
#[must_use]
pub fn summary_text(violations: &SealedViolations, report_url: &str) -> String {
    debug_assert!(!violations.is_empty(), "summary for a clean build");

    let mut out = count_line(violations.len());
    out.push('\n');
    for violation in violations {
        let _ = writeln!(out, "  - {violation}");
    }
    let _ = writeln!(out, "See the complete report at {report_url}");
    out
}
