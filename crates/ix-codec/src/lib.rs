//! IX Serializer Registry
//!
//! Answers one question for the serializability checker: can the runtime
//! type behind a captured field be persisted and restored?
//!
//! - [`SerializerRegistry`]: name-keyed registry of codec strategies
//! - [`Support`]: the per-type answer, including diagnostic reason text

#![warn(unreachable_pub)]

mod registry;
mod support;

pub use registry::SerializerRegistry;
pub use support::{no_serializer_reason, Support};
