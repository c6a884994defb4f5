//! Captured state value tree
//!
//! Tasks expose their declared fields as a [`StateValue`] tree at scheduling
//! time. The tree is what the serializability checker walks and what the
//! configuration fingerprint is computed from.

use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

/// A value captured from a task field.
///
/// Nested beans are reference-counted ([`StateValue::Object`]) so one
/// instance can be shared between fields, or between tasks, without copying.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateValue {
    /// Absent value. Skipped by traversal and never reported.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    Str(String),
    /// Ordered element list. Elements are checked individually.
    List(Vec<StateValue>),
    /// String-keyed map preserving insertion order.
    Map(IndexMap<String, StateValue>),
    /// Nested bean with declared fields.
    Object(Arc<ObjectState>),
    /// Runtime handle with no value representation (live service, open
    /// connection, thread pool). Always a serializability violation.
    Opaque {
        /// Runtime type name of the handle.
        type_name: String,
    },
}

impl StateValue {
    /// Runtime type name used for serializer-registry lookups.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Object(object) => object.type_name(),
            Self::Opaque { type_name } => type_name,
        }
    }

    /// Construct an opaque handle value.
    #[inline]
    #[must_use]
    pub fn opaque(type_name: impl Into<String>) -> Self {
        Self::Opaque {
            type_name: type_name.into(),
        }
    }

    /// True for [`StateValue::Null`].
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for StateValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<StateValue>> for StateValue {
    fn from(value: Vec<StateValue>) -> Self {
        Self::List(value)
    }
}

impl From<ObjectState> for StateValue {
    fn from(value: ObjectState) -> Self {
        Self::Object(Arc::new(value))
    }
}

impl From<Arc<ObjectState>> for StateValue {
    fn from(value: Arc<ObjectState>) -> Self {
        Self::Object(value)
    }
}

/// One declared field and its captured value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Field name exactly as declared.
    pub name: String,
    /// Value captured at scheduling time.
    pub value: StateValue,
}

impl Field {
    /// Create a field record.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<StateValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A typed bean with its declared fields in declaration order.
///
/// Field order is an observable contract: traversal, reporting and
/// fingerprinting all follow it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectState {
    type_name: String,
    fields: Vec<Field>,
}

impl ObjectState {
    /// Create an empty bean of the given declared type.
    #[inline]
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, preserving declaration order.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<StateValue>) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }

    /// Append a field in place.
    pub fn push_field(&mut self, name: impl Into<String>, value: impl Into<StateValue>) {
        self.fields.push(Field::new(name, value));
    }

    /// Declared type name.
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Declared fields in declaration order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of declared fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are declared.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_type_names() {
        assert_eq!(StateValue::Null.type_name(), "null");
        assert_eq!(StateValue::from(true).type_name(), "boolean");
        assert_eq!(StateValue::from(3_i64).type_name(), "int");
        assert_eq!(StateValue::from(1.5_f64).type_name(), "float");
        assert_eq!(StateValue::from("x").type_name(), "string");
    }

    #[test]
    fn object_type_name_is_declared_name() {
        let bean = ObjectState::new("SomeBean").with_field("value", "a");
        let value = StateValue::from(bean);
        assert_eq!(value.type_name(), "SomeBean");
    }

    #[test]
    fn opaque_type_name_is_runtime_name() {
        let value = StateValue::opaque("Project");
        assert_eq!(value.type_name(), "Project");
    }

    #[test]
    fn fields_keep_declaration_order() {
        let bean = ObjectState::new("SomeTask")
            .with_field("zeta", 1_i64)
            .with_field("alpha", 2_i64)
            .with_field("mid", 3_i64);

        let names: Vec<&str> = bean.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn shared_bean_compares_equal_to_copy() {
        let bean = Arc::new(ObjectState::new("SomeBean").with_field("value", 1_i64));
        let shared = StateValue::from(Arc::clone(&bean));
        let copied = StateValue::from(bean.as_ref().clone());
        assert_eq!(shared, copied);
    }

    #[test]
    fn value_serializes_to_tagged_json() {
        let value = StateValue::from(ObjectState::new("B").with_field("flag", true));
        let json = serde_json::to_string(&value).unwrap();
        assert!(json.contains("\"object\""));
        assert!(json.contains("\"flag\""));
    }
}
