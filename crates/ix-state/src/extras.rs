//! Ad hoc task properties
//!
//! Build scripts attach free-form properties to tasks. In captured state
//! this is an explicit, ordered key/value map with typed accessors; the
//! entries take part in checking and fingerprinting exactly like declared
//! fields.

use crate::value::StateValue;
use indexmap::IndexMap;
use serde::Serialize;

/// Ordered key/value properties attached to a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtraProperties {
    entries: IndexMap<String, StateValue>,
}

impl ExtraProperties {
    /// Create an empty property map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value under the same key.
    ///
    /// First insertion fixes the key's position in iteration order.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StateValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StateValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Raw value under `key`, if present.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StateValue> {
        self.entries.get(key)
    }

    /// Boolean property, if present and boolean-typed.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(StateValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Integer property, if present and integer-typed.
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(StateValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Float property, if present and float-typed.
    #[must_use]
    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.entries.get(key) {
            Some(StateValue::Float(value)) => Some(*value),
            _ => None,
        }
    }

    /// String property, if present and string-typed.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(StateValue::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no properties are set.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View the map as a [`StateValue`] for fingerprinting.
    #[must_use]
    pub fn to_value(&self) -> StateValue {
        StateValue::Map(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors() {
        let extras = ExtraProperties::new()
            .with("springVersion", "3.1.0.RELEASE")
            .with("emailNotification", "build@master.org")
            .with("retries", 3_i64)
            .with("parallel", true);

        assert_eq!(extras.get_str("springVersion"), Some("3.1.0.RELEASE"));
        assert_eq!(extras.get_int("retries"), Some(3));
        assert_eq!(extras.get_bool("parallel"), Some(true));
        assert_eq!(extras.get_float("retries"), None);
        assert!(extras.get("missing").is_none());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let extras = ExtraProperties::new()
            .with("b", 1_i64)
            .with("a", 2_i64)
            .with("c", 3_i64);

        let keys: Vec<&str> = extras.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn replacing_keeps_original_position() {
        let mut extras = ExtraProperties::new().with("a", 1_i64).with("b", 2_i64);
        extras.set("a", 10_i64);

        let keys: Vec<&str> = extras.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(extras.get_int("a"), Some(10));
    }

    #[test]
    fn to_value_round_trips_entries() {
        let extras = ExtraProperties::new().with("key", "value");
        match extras.to_value() {
            StateValue::Map(map) => {
                assert_eq!(map.len(), 1);
                assert_eq!(map.get("key"), Some(&StateValue::from("value")));
            }
            other => panic!("expected map, got {other:?}"),
        }
    }
}
