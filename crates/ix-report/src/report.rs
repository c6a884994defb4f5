//! The report aggregate

use chrono::{DateTime, Utc};
use ix_check::SealedViolations;
use ix_state::CacheKey;
use serde::Serialize;

/// Everything known about one degraded build invocation.
///
/// Constructed once, from the sealed violation set, after the capture pass
/// has completed; the console summary and the HTML artifact both derive
/// from the same instance.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    key: CacheKey,
    version: String,
    violations: SealedViolations,
    generated_at: DateTime<Utc>,
}

impl Report {
    /// Build the report for a sealed violation set.
    #[must_use]
    pub fn new(key: CacheKey, version: impl Into<String>, violations: SealedViolations) -> Self {
        Self {
            key,
            version: version.into(),
            violations,
            generated_at: Utc::now(),
        }
    }

    /// Cache key of the build configuration this report describes.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &CacheKey {
        &self.key
    }

    /// Tool version that produced the report.
    #[inline]
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The sealed findings, in discovery order.
    #[inline]
    #[must_use]
    pub fn violations(&self) -> &SealedViolations {
        &self.violations
    }

    /// Generation timestamp.
    #[inline]
    #[must_use]
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}
