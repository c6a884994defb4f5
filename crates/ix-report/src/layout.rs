//! Content-addressed report layout
//!
//! Report artifacts live under a tool-wide state directory, partitioned by
//! tool version and addressed by the build's cache key. The path is a pure
//! function of (state dir, version, key): rerunning an identical build
//! configuration lands on the identical file.

use ix_state::CacheKey;
use std::path::{Path, PathBuf};

/// Resolves where one build's report artifact lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    state_dir: PathBuf,
    version: String,
}

impl ReportLayout {
    /// Create a layout rooted at `state_dir` for the given tool version.
    #[must_use]
    pub fn new(state_dir: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            state_dir: state_dir.into(),
            version: version.into(),
        }
    }

    /// Tool-wide state directory root.
    #[inline]
    #[must_use]
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    /// Tool version partition.
    #[inline]
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Path of the report for the given cache key:
    /// `<state-dir>/<version>/<key>.html`.
    #[must_use]
    pub fn report_path(&self, key: &CacheKey) -> PathBuf {
        self.state_dir
            .join(&self.version)
            .join(format!("{key}.html"))
    }
}
