//! Durable report persistence
//!
//! The console message promises a file; the store therefore writes and
//! syncs the artifact before handing the announced path back to the caller.
//! Any I/O failure here is fatal to the session.

use crate::html::render_html;
use crate::layout::ReportLayout;
use crate::report::Report;
use std::fs::{self, File};
use std::io::{self, Write as _};
use std::path::PathBuf;

/// Writes report artifacts into the content-addressed layout.
#[derive(Debug, Clone)]
pub struct ReportStore {
    layout: ReportLayout,
}

impl ReportStore {
    /// Create a store over the given layout.
    #[inline]
    #[must_use]
    pub fn new(layout: ReportLayout) -> Self {
        Self { layout }
    }

    /// The layout the store writes into.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &ReportLayout {
        &self.layout
    }

    /// Render and persist the report.
    ///
    /// Returns the canonical path of the written file; when this returns
    /// `Ok`, the file exists and is synced to disk.
    ///
    /// # Errors
    /// Any failure preparing the directory, writing, syncing or resolving
    /// the artifact path.
    pub fn write(&self, report: &Report) -> Result<PathBuf, ReportError> {
        let path = self.layout.report_path(report.key());
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let page = render_html(report);
        let mut file = File::create(&path).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;
        file.write_all(page.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|source| ReportError::Write {
                path: path.clone(),
                source,
            })?;

        let canonical = path.canonicalize().map_err(|source| ReportError::Resolve {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %canonical.display(), "report artifact written");
        Ok(canonical)
    }
}

/// Fatal report-persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The version partition directory could not be created.
    #[error("failed to prepare report directory '{path}': {source}")]
    CreateDir {
        /// Directory being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The artifact could not be written or synced.
    #[error("failed to write report '{path}': {source}")]
    Write {
        /// Artifact path being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The written artifact path could not be resolved.
    #[error("failed to resolve report path '{path}': {source}")]
    Resolve {
        /// Artifact path being resolved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
