//! Cacheable-configuration fingerprinting
//!
//! Feeds the build's cacheable inputs into a BLAKE3 hasher with explicit
//! framing (tag bytes and length prefixes), so distinct input sequences can
//! never collide by concatenation. Object subtrees hash to their own digest,
//! memoized per instance: a bean shared between fields contributes the same
//! bytes as an identical copy would, and shared subtrees are walked once.

use crate::key::CacheKey;
use crate::value::{ObjectState, StateValue};
use std::collections::HashMap;
use std::sync::Arc;

const TAG_NULL: u8 = 0;
const TAG_BOOL: u8 = 1;
const TAG_INT: u8 = 2;
const TAG_FLOAT: u8 = 3;
const TAG_STR: u8 = 4;
const TAG_LIST: u8 = 5;
const TAG_MAP: u8 = 6;
const TAG_OBJECT: u8 = 7;
const TAG_OPAQUE: u8 = 8;
const TAG_LABEL: u8 = 9;

/// Memoized subtree digests, keyed by instance identity.
type DigestMemo = HashMap<usize, [u8; 32]>;

/// Incremental builder for a [`CacheKey`].
///
/// Inputs are pushed under a label; the label is part of the framing, so
/// `push_str("a", "bc")` and `push_str("ab", "c")` produce different keys.
#[derive(Debug, Default)]
pub struct Fingerprint {
    hasher: blake3::Hasher,
}

impl Fingerprint {
    /// Create an empty fingerprint.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a labeled string input.
    pub fn push_str(&mut self, label: &str, value: &str) {
        self.label(label);
        frame(&mut self.hasher, TAG_STR, value.as_bytes());
    }

    /// Push a labeled integer input.
    pub fn push_u64(&mut self, label: &str, value: u64) {
        self.label(label);
        self.hasher.update(&[TAG_INT]);
        self.hasher.update(&value.to_le_bytes());
    }

    /// Push a labeled captured-value tree.
    pub fn push_value(&mut self, label: &str, value: &StateValue) {
        self.label(label);
        let mut memo = DigestMemo::new();
        hash_value(&mut self.hasher, value, &mut memo);
    }

    /// Finalize into the configuration cache key.
    #[must_use]
    pub fn finish(self) -> CacheKey {
        CacheKey::from_bytes(*self.hasher.finalize().as_bytes())
    }

    fn label(&mut self, label: &str) {
        frame(&mut self.hasher, TAG_LABEL, label.as_bytes());
    }
}

fn frame(hasher: &mut blake3::Hasher, tag: u8, bytes: &[u8]) {
    hasher.update(&[tag]);
    hasher.update(&(bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

fn hash_value(hasher: &mut blake3::Hasher, value: &StateValue, memo: &mut DigestMemo) {
    match value {
        StateValue::Null => {
            hasher.update(&[TAG_NULL]);
        }
        StateValue::Bool(b) => {
            hasher.update(&[TAG_BOOL, u8::from(*b)]);
        }
        StateValue::Int(i) => {
            hasher.update(&[TAG_INT]);
            hasher.update(&i.to_le_bytes());
        }
        StateValue::Float(f) => {
            hasher.update(&[TAG_FLOAT]);
            hasher.update(&f.to_bits().to_le_bytes());
        }
        StateValue::Str(s) => frame(hasher, TAG_STR, s.as_bytes()),
        StateValue::List(elements) => {
            hasher.update(&[TAG_LIST]);
            hasher.update(&(elements.len() as u64).to_le_bytes());
            for element in elements {
                hash_value(hasher, element, memo);
            }
        }
        StateValue::Map(entries) => {
            hasher.update(&[TAG_MAP]);
            hasher.update(&(entries.len() as u64).to_le_bytes());
            for (key, entry) in entries {
                frame(hasher, TAG_STR, key.as_bytes());
                hash_value(hasher, entry, memo);
            }
        }
        StateValue::Object(object) => {
            let digest = object_digest(object, memo);
            hasher.update(&[TAG_OBJECT]);
            hasher.update(&digest);
        }
        StateValue::Opaque { type_name } => frame(hasher, TAG_OPAQUE, type_name.as_bytes()),
    }
}

fn object_digest(object: &Arc<ObjectState>, memo: &mut DigestMemo) -> [u8; 32] {
    let identity = Arc::as_ptr(object) as usize;
    if let Some(digest) = memo.get(&identity) {
        return *digest;
    }

    let mut hasher = blake3::Hasher::new();
    frame(&mut hasher, TAG_STR, object.type_name().as_bytes());
    hasher.update(&(object.len() as u64).to_le_bytes());
    for field in object.fields() {
        frame(&mut hasher, TAG_STR, field.name.as_bytes());
        hash_value(&mut hasher, &field.value, memo);
    }

    let digest = *hasher.finalize().as_bytes();
    memo.insert(identity, digest);
    digest
}
