//! Build-wide violation accumulation
//!
//! Task traversals may run in parallel, but the report's bullet order is an
//! observable contract. The sink therefore buckets findings by schedule
//! index under a mutex and merges them in index order at seal time, so the
//! sealed order is (schedule order, then per-task discovery order) and
//! never append-arrival order.

use crate::violation::Violation;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::BTreeMap;

/// Append-only sink shared by all task traversals of one capture pass.
#[derive(Debug, Default)]
pub struct ViolationSink {
    buckets: Mutex<BTreeMap<usize, Vec<Violation>>>,
}

impl ViolationSink {
    /// Create an empty sink.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one task's findings under its schedule index.
    ///
    /// Repeated calls for the same index extend the bucket in call order.
    pub fn record(&self, schedule_index: usize, findings: Vec<Violation>) {
        if findings.is_empty() {
            return;
        }
        self.buckets
            .lock()
            .entry(schedule_index)
            .or_default()
            .extend(findings);
    }

    /// Seal the sink into the final discovery-ordered set.
    #[must_use]
    pub fn seal(self) -> SealedViolations {
        let buckets = self.buckets.into_inner();
        let ordered = buckets.into_values().flatten().collect();
        SealedViolations(ordered)
    }
}

/// The sealed, discovery-ordered violation set of one build invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SealedViolations(Vec<Violation>);

impl SealedViolations {
    /// Number of recorded findings, repeats included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the pass found nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate findings in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Findings as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a SealedViolations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(owner: &str, field: &str) -> Violation {
        Violation::new(owner, field, "there's no serializer for type 'X'")
    }

    #[test]
    fn seal_merges_in_schedule_order() {
        let sink = ViolationSink::new();
        // Out-of-order arrival, as under parallel traversal.
        sink.record(2, vec![v("C", "f")]);
        sink.record(0, vec![v("A", "f"), v("A", "g")]);
        sink.record(1, vec![v("B", "f")]);

        let sealed = sink.seal();
        let owners: Vec<&str> = sealed.iter().map(|x| x.owner.as_str()).collect();
        assert_eq!(owners, ["A", "A", "B", "C"]);
    }

    #[test]
    fn repeats_are_kept() {
        let sink = ViolationSink::new();
        sink.record(0, vec![v("SomeTask", "bean")]);
        sink.record(1, vec![v("SomeTask", "bean")]);

        let sealed = sink.seal();
        assert_eq!(sealed.len(), 2);
        assert_eq!(sealed.as_slice()[0], sealed.as_slice()[1]);
    }

    #[test]
    fn empty_recordings_are_dropped() {
        let sink = ViolationSink::new();
        sink.record(0, Vec::new());
        let sealed = sink.seal();
        assert!(sealed.is_empty());
    }

    #[test]
    fn same_index_extends_in_call_order() {
        let sink = ViolationSink::new();
        sink.record(0, vec![v("A", "first")]);
        sink.record(0, vec![v("A", "second")]);

        let sealed = sink.seal();
        let fields: Vec<&str> = sealed.iter().map(|x| x.field.as_str()).collect();
        assert_eq!(fields, ["first", "second"]);
    }
}
