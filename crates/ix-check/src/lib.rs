//! IX Serializability Checker
//!
//! Walks the field graph captured from every scheduled task and records a
//! [`Violation`] for each field whose runtime type has no registered
//! serializer. Findings never abort the pass; they accumulate in a shared
//! [`ViolationSink`] and are sealed into a deterministic, discovery-ordered
//! set once every task has been walked.
//!
//! # Core Concepts
//!
//! - [`Violation`]: one unsupported-field finding
//! - [`ViolationSink`] / [`SealedViolations`]: append-only accumulation,
//!   sealed in task-scheduling order
//! - [`StateWalker`]: declared-order, depth-first traversal of one task
//! - [`ScheduledTask`] / [`capture_pass`]: the build-wide checking pass

#![warn(unreachable_pub)]

mod pass;
mod sink;
mod violation;
mod walker;

pub use pass::{capture_pass, check_task, ScheduledTask};
pub use sink::{SealedViolations, ViolationSink};
pub use violation::Violation;
pub use walker::StateWalker;
