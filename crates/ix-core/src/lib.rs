//! IX Core
//!
//! Session-level orchestration of the serializability check: fingerprint
//! the cacheable configuration, walk every scheduled task, seal the
//! findings, decide whether the cache entry is reusable, and when it is
//! not, persist the diagnostic report and print the console summary that
//! points at it.
//!
//! # Example
//!
//! ```rust,ignore
//! use ix_codec::SerializerRegistry;
//! use ix_core::{CaptureSession, SessionOptions};
//!
//! let session = CaptureSession::new(
//!     SessionOptions::from_env(),
//!     SerializerRegistry::with_defaults(),
//! );
//! let outcome = session.run(&schedule)?;
//! if let Some(path) = &outcome.report_path {
//!     eprintln!("degraded; see {}", path.display());
//! }
//! ```

#![warn(unreachable_pub)]

mod config;
mod session;

pub use config::SessionOptions;
pub use session::{CacheDecision, CaptureSession, SessionError, SessionOutcome};

/// Version of this crate; the default tool-version partition for reports.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
