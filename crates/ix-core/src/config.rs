//! Session configuration

use std::path::PathBuf;

/// Environment variable overriding the state directory root.
pub const STATE_DIR_ENV: &str = "IX_STATE_DIR";

const DEFAULT_STATE_DIR: &str = ".instant-execution/reports";

/// Configuration for one capture session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Tool-wide configuration-cache storage root.
    pub state_dir: PathBuf,
    /// Version string partitioning report artifacts.
    pub tool_version: String,
    /// Walk scheduled tasks on the rayon pool instead of sequentially.
    pub parallel: bool,
}

impl SessionOptions {
    /// Create default options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options with the `IX_STATE_DIR` override applied.
    #[must_use]
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Some(dir) = std::env::var_os(STATE_DIR_ENV) {
            options.state_dir = PathBuf::from(dir);
        }
        options
    }

    /// With a specific state directory root.
    #[inline]
    #[must_use]
    pub fn with_state_dir(mut self, state_dir: impl Into<PathBuf>) -> Self {
        self.state_dir = state_dir.into();
        self
    }

    /// With a specific tool version partition.
    #[inline]
    #[must_use]
    pub fn with_tool_version(mut self, version: impl Into<String>) -> Self {
        self.tool_version = version.into();
        self
    }

    /// Walk the schedule sequentially.
    #[inline]
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            tool_version: crate::VERSION.to_string(),
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_point_at_tool_state_dir() {
        let options = SessionOptions::new();
        assert_eq!(options.state_dir, PathBuf::from(DEFAULT_STATE_DIR));
        assert_eq!(options.tool_version, crate::VERSION);
        assert!(options.parallel);
    }

    #[test]
    fn builders_override_fields() {
        let options = SessionOptions::new()
            .with_state_dir("/var/cache/ix")
            .with_tool_version("8.0")
            .sequential();

        assert_eq!(options.state_dir, PathBuf::from("/var/cache/ix"));
        assert_eq!(options.tool_version, "8.0");
        assert!(!options.parallel);
    }

    #[test]
    fn env_override_wins() {
        std::env::set_var(STATE_DIR_ENV, "/tmp/ix-env-test");
        let options = SessionOptions::from_env();
        std::env::remove_var(STATE_DIR_ENV);

        assert_eq!(options.state_dir, PathBuf::from("/tmp/ix-env-test"));
    }
}
