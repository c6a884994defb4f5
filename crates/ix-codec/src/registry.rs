//! Serializer registry
//!
//! Maps runtime type names to codec strategies. The checker queries it once
//! per field occurrence, so answers (including the formatted reason text for
//! rejections) are memoized in a concurrent map.

use crate::support::Support;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Type names with builtin leaf codecs.
static BUILTIN_LEAVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["null", "boolean", "int", "float", "string", "list", "map"]
        .into_iter()
        .collect()
});

/// Registry of serialization strategies, keyed by runtime type name.
///
/// Scalars and containers are supported out of the box. Bean types must be
/// registered to be descended into; everything else answers
/// [`Support::Unsupported`].
#[derive(Debug, Default)]
pub struct SerializerRegistry {
    leaves: HashSet<String>,
    beans: HashSet<String>,
    memo: DashMap<String, Support>,
}

impl SerializerRegistry {
    /// Create an empty registry with no codecs at all.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the builtin scalar and container codecs.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for name in BUILTIN_LEAVES.iter() {
            registry.register_leaf(*name);
        }
        registry
    }

    /// Register a leaf codec for `type_name`.
    pub fn register_leaf(&mut self, type_name: impl Into<String>) {
        self.leaves.insert(type_name.into());
        self.memo.clear();
    }

    /// Register `type_name` as a bean whose fields persist individually.
    pub fn register_bean(&mut self, type_name: impl Into<String>) {
        self.beans.insert(type_name.into());
        self.memo.clear();
    }

    /// Remove any registration for `type_name`. Returns whether one existed.
    pub fn deregister(&mut self, type_name: &str) -> bool {
        let removed = self.leaves.remove(type_name) | self.beans.remove(type_name);
        if removed {
            self.memo.clear();
        }
        removed
    }

    /// Whether any codec is registered for `type_name`.
    #[inline]
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.leaves.contains(type_name) || self.beans.contains(type_name)
    }

    /// Answer the serializability query for `type_name`.
    #[must_use]
    pub fn support(&self, type_name: &str) -> Support {
        if let Some(answer) = self.memo.get(type_name) {
            return answer.clone();
        }

        let answer = if self.leaves.contains(type_name) {
            Support::Direct
        } else if self.beans.contains(type_name) {
            Support::Structural
        } else {
            Support::unsupported_for(type_name)
        };

        self.memo.insert(type_name.to_string(), answer.clone());
        answer
    }

    /// Number of registered codecs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leaves.len() + self.beans.len()
    }

    /// True when no codecs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty() && self.beans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_registry_rejects_everything() {
        let registry = SerializerRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.support("string").is_supported());
    }

    #[test]
    fn defaults_cover_scalars_and_containers() {
        let registry = SerializerRegistry::with_defaults();
        for name in ["null", "boolean", "int", "float", "string", "list", "map"] {
            assert_eq!(registry.support(name), Support::Direct, "{name}");
        }
    }

    #[test]
    fn registered_bean_is_structural() {
        let mut registry = SerializerRegistry::with_defaults();
        registry.register_bean("SomeBean");
        assert_eq!(registry.support("SomeBean"), Support::Structural);
    }

    #[test]
    fn unknown_type_gets_reasoned_rejection() {
        let registry = SerializerRegistry::with_defaults();
        match registry.support("Project") {
            Support::Unsupported { reason } => {
                assert_eq!(reason, "there's no serializer for type 'Project'");
            }
            other => panic!("expected unsupported, got {other:?}"),
        }
    }

    #[test]
    fn deregister_invalidates_memoized_answer() {
        let mut registry = SerializerRegistry::with_defaults();
        assert_eq!(registry.support("string"), Support::Direct);

        assert!(registry.deregister("string"));
        assert!(!registry.support("string").is_supported());
        assert!(!registry.deregister("string"));
    }

    #[test]
    fn registration_invalidates_memoized_answer() {
        let mut registry = SerializerRegistry::with_defaults();
        assert!(!registry.support("SomeBean").is_supported());

        registry.register_bean("SomeBean");
        assert_eq!(registry.support("SomeBean"), Support::Structural);
    }

    #[test]
    fn answers_are_memoized() {
        let registry = SerializerRegistry::with_defaults();
        let _ = registry.support("Project");
        assert!(registry.memo.contains_key("Project"));
    }
}
