//! IX Diagnostic Reporting
//!
//! Turns a sealed violation set into the two user-visible artifacts of a
//! degraded build: a persisted, content-addressed HTML report and the exact
//! console summary that points at it.
//!
//! # Core Concepts
//!
//! - [`ReportLayout`]: `<state-dir>/<version>/<cache-key>.html` addressing
//! - [`Report`]: sealed findings plus their cache key and metadata
//! - [`ReportStore`]: durable write-then-announce persistence
//! - [`summary_text`]: the console contract
//! - [`file_url`]: clickable-URL formatting for the console pointer

#![warn(unreachable_pub)]

mod console;
mod html;
mod layout;
mod report;
mod store;
mod url;

pub use console::summary_text;
pub use html::render_html;
pub use layout::ReportLayout;
pub use report::Report;
pub use store::{ReportError, ReportStore};
pub use url::file_url;
