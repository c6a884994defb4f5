//! IX State Model
//!
//! Captured task state and cacheable-configuration fingerprinting.
//!
//! # Core Concepts
//!
//! - [`StateValue`]: the value tree captured from a task's declared fields
//! - [`ObjectState`]: a typed bean with its fields in declaration order
//! - [`CaptureState`]: the introspection seam tasks implement
//! - [`ExtraProperties`]: ad hoc key/value state attached to a task
//! - [`CacheKey`]: 32-byte BLAKE3 key addressing one build configuration
//! - [`Fingerprint`]: framed hashing of the cacheable inputs
//!
//! # Example
//!
//! ```rust,ignore
//! use ix_state::{Fingerprint, ObjectState, StateValue};
//!
//! let state = ObjectState::new("CopyTask")
//!     .with_field("destination", StateValue::from("build/out"));
//!
//! let mut fp = Fingerprint::new();
//! fp.push_value("state", &StateValue::from(state));
//! println!("key: {}", fp.finish());
//! ```

#![warn(unreachable_pub)]

mod capture;
mod extras;
mod fingerprint;
mod key;
mod value;

pub use capture::CaptureState;
pub use extras::ExtraProperties;
pub use fingerprint::Fingerprint;
pub use key::{CacheKey, KeyError};
pub use value::{Field, ObjectState, StateValue};
