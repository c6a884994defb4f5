//! Declared-order depth-first state traversal

use crate::violation::Violation;
use ix_codec::{no_serializer_reason, SerializerRegistry, Support};
use ix_state::{ExtraProperties, ObjectState, StateValue};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::sync::Arc;

/// Walks one task's captured field graph and collects its violations.
///
/// Traversal visits declared fields in declaration order and descends
/// depth-first into nested beans the registry supports structurally. A field
/// holding an unsupported value is recorded as one [`Violation`] and not
/// descended into; its sub-fields are never separately reported. Null fields
/// are skipped. A per-task visited set keyed on instance identity guarantees
/// termination on shared or cyclic object graphs; a shared bean is checked
/// once per task.
#[derive(Debug)]
pub struct StateWalker<'a> {
    registry: &'a SerializerRegistry,
    visited: HashSet<usize>,
    path: SmallVec<[String; 8]>,
    found: Vec<Violation>,
}

impl<'a> StateWalker<'a> {
    /// Create a walker backed by the given registry.
    #[must_use]
    pub fn new(registry: &'a SerializerRegistry) -> Self {
        Self {
            registry,
            visited: HashSet::new(),
            path: SmallVec::new(),
            found: Vec::new(),
        }
    }

    /// Walk one task's state and extra properties, consuming the walker.
    ///
    /// Extra properties are checked after declared fields, attributed to the
    /// task's own type as owner.
    #[must_use]
    pub fn walk(mut self, state: &ObjectState, extras: &ExtraProperties) -> Vec<Violation> {
        for field in state.fields() {
            self.walk_field(state.type_name(), &field.name, &field.value);
        }
        for (key, value) in extras.iter() {
            self.walk_field(state.type_name(), key, value);
        }
        self.found
    }

    fn walk_field(&mut self, owner: &str, field: &str, value: &StateValue) {
        match value {
            StateValue::Null => {}
            StateValue::List(elements) => {
                for element in elements {
                    self.walk_field(owner, field, element);
                }
            }
            StateValue::Map(entries) => {
                for entry in entries.values() {
                    self.walk_field(owner, field, entry);
                }
            }
            StateValue::Object(object) => match self.registry.support(object.type_name()) {
                Support::Structural => self.walk_object(object),
                Support::Direct => {}
                Support::Unsupported { reason } => self.record(owner, field, reason),
            },
            StateValue::Opaque { type_name } => {
                self.record(owner, field, no_serializer_reason(type_name));
            }
            scalar => {
                if let Support::Unsupported { reason } = self.registry.support(scalar.type_name())
                {
                    self.record(owner, field, reason);
                }
            }
        }
    }

    fn walk_object(&mut self, object: &Arc<ObjectState>) {
        let identity = Arc::as_ptr(object) as usize;
        if !self.visited.insert(identity) {
            return;
        }
        self.path.push(object.type_name().to_string());
        tracing::trace!(
            bean = object.type_name(),
            depth = self.path.len(),
            "descending into nested bean"
        );
        for field in object.fields() {
            self.walk_field(object.type_name(), &field.name, &field.value);
        }
        self.path.pop();
    }

    fn record(&mut self, owner: &str, field: &str, reason: String) {
        tracing::debug!(owner, field, at = %self.path.join("."), %reason, "unsupported field");
        self.found.push(Violation::new(owner, field, reason));
    }
}
