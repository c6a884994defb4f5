//! Capture session orchestration
//!
//! One session covers one build invocation:
//!
//! 1. Fingerprint the cacheable configuration into a [`CacheKey`].
//! 2. Run the capture pass over every scheduled task.
//! 3. Seal the findings.
//! 4. Clean: the cache entry is reusable, nothing is printed or written.
//!    Degraded: the report is persisted first, then the summary naming it
//!    is printed.

use crate::config::SessionOptions;
use ix_check::{capture_pass, ScheduledTask, SealedViolations};
use ix_codec::SerializerRegistry;
use ix_report::{file_url, summary_text, Report, ReportError, ReportLayout, ReportStore};
use ix_state::{CacheKey, Fingerprint, StateValue};
use std::path::PathBuf;

/// What the build may do with its captured state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDecision {
    /// Everything reachable is serializable; the entry can be stored and
    /// replayed.
    Reuse,
    /// Unsupported state was found; this run falls back to live objects
    /// and the entry is not stored.
    Degraded {
        /// Number of recorded findings, repeats included.
        issues: usize,
    },
}

/// Result of one capture session.
#[derive(Debug)]
pub struct SessionOutcome {
    /// Cache key of this build configuration.
    pub key: CacheKey,
    /// Reuse or degrade.
    pub decision: CacheDecision,
    /// The sealed findings (empty on a clean build).
    pub violations: SealedViolations,
    /// Where the report was written, when one was.
    pub report_path: Option<PathBuf>,
    /// The console summary exactly as printed, when one was.
    pub summary: Option<String>,
}

/// Fatal session failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The diagnostic report could not be persisted.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Runs the serializability check for one build invocation.
#[derive(Debug)]
pub struct CaptureSession {
    options: SessionOptions,
    registry: SerializerRegistry,
}

impl CaptureSession {
    /// Create a session from options and a populated registry.
    #[inline]
    #[must_use]
    pub fn new(options: SessionOptions, registry: SerializerRegistry) -> Self {
        Self { options, registry }
    }

    /// The registry the session checks against.
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &SerializerRegistry {
        &self.registry
    }

    /// Check every scheduled task and emit diagnostics for what cannot be
    /// cached.
    ///
    /// # Errors
    /// Only report persistence can fail; checking itself never does.
    pub fn run(&self, schedule: &[ScheduledTask]) -> Result<SessionOutcome, SessionError> {
        let key = self.fingerprint(schedule);
        tracing::info!(
            tasks = schedule.len(),
            key = %key.short(),
            "capturing build state"
        );

        let violations = capture_pass(&self.registry, schedule, self.options.parallel);
        if violations.is_empty() {
            tracing::info!(key = %key.short(), "state is serializable; cache entry reusable");
            return Ok(SessionOutcome {
                key,
                decision: CacheDecision::Reuse,
                violations,
                report_path: None,
                summary: None,
            });
        }

        let report = Report::new(
            key,
            self.options.tool_version.clone(),
            violations.clone(),
        );
        let store = ReportStore::new(ReportLayout::new(
            self.options.state_dir.clone(),
            self.options.tool_version.clone(),
        ));
        // The file must exist before the console names it.
        let report_path = store.write(&report)?;

        let summary = summary_text(&violations, &file_url(&report_path));
        print!("{summary}");

        tracing::warn!(
            issues = violations.len(),
            key = %key.short(),
            "cache entry discarded; falling back to live objects"
        );
        Ok(SessionOutcome {
            key,
            decision: CacheDecision::Degraded {
                issues: violations.len(),
            },
            violations,
            report_path: Some(report_path),
            summary: Some(summary),
        })
    }

    /// Hash the cacheable configuration: tool version, then every task's
    /// name, type, captured state and extra properties, in schedule order.
    fn fingerprint(&self, schedule: &[ScheduledTask]) -> CacheKey {
        let mut fp = Fingerprint::new();
        fp.push_str("tool-version", &self.options.tool_version);
        fp.push_u64("task-count", schedule.len() as u64);
        for task in schedule {
            fp.push_str("task", task.name());
            fp.push_str("type", task.type_name());
            fp.push_value("state", &StateValue::from(task.capture()));
            fp.push_value("extras", &task.extras().to_value());
        }
        fp.finish()
    }
}
