//! Field-graph introspection seam
//!
//! The checker never reflects on concrete Rust types. Anything that wants
//! its state checked implements [`CaptureState`] and hands back an
//! [`ObjectState`] snapshot of its declared fields.

use crate::value::ObjectState;

/// Supplies a task's declared type name and captured field values.
///
/// Implementations must return fields in declaration order; traversal and
/// report ordering depend on it.
pub trait CaptureState: Send + Sync {
    /// Declared type name of the implementing task.
    fn type_name(&self) -> &str;

    /// Snapshot of declared fields and their current values.
    fn capture(&self) -> ObjectState;
}

/// A prebuilt snapshot is its own introspector.
impl CaptureState for ObjectState {
    fn type_name(&self) -> &str {
        ObjectState::type_name(self)
    }

    fn capture(&self) -> ObjectState {
        self.clone()
    }
}
