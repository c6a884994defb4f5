//! The build-wide capture pass
//!
//! One pass walks every task selected for execution. Tasks are independent,
//! so the pass may fan out over rayon; determinism of the sealed output is
//! guaranteed by the schedule-indexed sink, and parallel and sequential
//! passes produce identical results.

use crate::sink::{SealedViolations, ViolationSink};
use crate::violation::Violation;
use crate::walker::StateWalker;
use ix_codec::SerializerRegistry;
use ix_state::{CaptureState, ExtraProperties, ObjectState};
use rayon::prelude::*;

/// One task selected for execution, with its captured state source.
pub struct ScheduledTask {
    name: String,
    state: Box<dyn CaptureState>,
    extras: ExtraProperties,
}

impl ScheduledTask {
    /// Schedule a task under its build-script name.
    #[must_use]
    pub fn new(name: impl Into<String>, state: impl CaptureState + 'static) -> Self {
        Self {
            name: name.into(),
            state: Box::new(state),
            extras: ExtraProperties::new(),
        }
    }

    /// Attach ad hoc properties.
    #[must_use]
    pub fn with_extras(mut self, extras: ExtraProperties) -> Self {
        self.extras = extras;
        self
    }

    /// Build-script name of the task (unique within the schedule).
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type name of the task.
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.state.type_name()
    }

    /// Snapshot the task's declared fields.
    #[must_use]
    pub fn capture(&self) -> ObjectState {
        self.state.capture()
    }

    /// Ad hoc properties attached to the task.
    #[inline]
    #[must_use]
    pub fn extras(&self) -> &ExtraProperties {
        &self.extras
    }
}

impl std::fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("name", &self.name)
            .field("type_name", &self.type_name())
            .field("extras", &self.extras)
            .finish_non_exhaustive()
    }
}

/// Walk one task and return its findings in discovery order.
#[must_use]
pub fn check_task(registry: &SerializerRegistry, task: &ScheduledTask) -> Vec<Violation> {
    let state = task.capture();
    let found = StateWalker::new(registry).walk(&state, task.extras());
    tracing::debug!(task = task.name(), findings = found.len(), "task state captured");
    found
}

/// Run the checking pass over the whole schedule and seal the result.
///
/// Every scheduled task is always walked; findings never abort the pass.
/// Sealing happens only after the last traversal has finished.
#[must_use]
pub fn capture_pass(
    registry: &SerializerRegistry,
    schedule: &[ScheduledTask],
    parallel: bool,
) -> SealedViolations {
    let sink = ViolationSink::new();
    if parallel {
        schedule.par_iter().enumerate().for_each(|(index, task)| {
            sink.record(index, check_task(registry, task));
        });
    } else {
        for (index, task) in schedule.iter().enumerate() {
            sink.record(index, check_task(registry, task));
        }
    }
    sink.seal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ix_state::StateValue;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn registry() -> SerializerRegistry {
        let mut registry = SerializerRegistry::with_defaults();
        registry.register_bean("SomeBean");
        registry
    }

    fn schedule_with_shared_bean() -> Vec<ScheduledTask> {
        // Two tasks of the same type. Task `a` holds one unsupported field
        // through the shared bean class; task `b` holds two.
        let lean = ObjectState::new("SomeBean")
            .with_field("value", StateValue::opaque("Project"));
        let heavy = ObjectState::new("SomeBean")
            .with_field("value", StateValue::opaque("Project"))
            .with_field("owner", StateValue::opaque("BuildRegistry"));

        vec![
            ScheduledTask::new("a", ObjectState::new("SomeTask").with_field("bean", lean)),
            ScheduledTask::new("b", ObjectState::new("SomeTask").with_field("bean", heavy)),
        ]
    }

    #[test]
    fn occurrences_sum_across_instances() {
        let registry = registry();
        let sealed = capture_pass(&registry, &schedule_with_shared_bean(), false);
        assert_eq!(sealed.len(), 3);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let registry = registry();
        let schedule = schedule_with_shared_bean();

        let sequential = capture_pass(&registry, &schedule, false);
        let parallel = capture_pass(&registry, &schedule, true);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn schedule_order_precedes_discovery_order() {
        let registry = SerializerRegistry::with_defaults();
        let schedule = vec![
            ScheduledTask::new(
                "first",
                ObjectState::new("AlphaTask").with_field("x", StateValue::opaque("X")),
            ),
            ScheduledTask::new(
                "second",
                ObjectState::new("BetaTask").with_field("y", StateValue::opaque("Y")),
            ),
        ];

        let sealed = capture_pass(&registry, &schedule, true);
        let owners: Vec<&str> = sealed.iter().map(|v| v.owner.as_str()).collect();
        assert_eq!(owners, ["AlphaTask", "BetaTask"]);
    }

    #[test]
    fn clean_schedule_seals_empty() {
        let registry = SerializerRegistry::with_defaults();
        let schedule = vec![ScheduledTask::new(
            "ok",
            ObjectState::new("CopyTask").with_field("from", "src"),
        )];
        assert!(capture_pass(&registry, &schedule, true).is_empty());
    }

    #[test]
    fn bean_shared_between_tasks_reports_per_instance() {
        let mut reg = SerializerRegistry::with_defaults();
        reg.register_bean("SomeBean");
        let shared = Arc::new(
            ObjectState::new("SomeBean").with_field("value", StateValue::opaque("Project")),
        );

        let schedule = vec![
            ScheduledTask::new(
                "a",
                ObjectState::new("SomeTask").with_field("bean", Arc::clone(&shared)),
            ),
            ScheduledTask::new(
                "b",
                ObjectState::new("SomeTask").with_field("bean", shared),
            ),
        ];

        // The visited guard is per task, so the same instance is reported
        // once for each task that reaches it.
        let sealed = capture_pass(&reg, &schedule, false);
        assert_eq!(sealed.len(), 2);
    }

    #[test]
    fn task_accessors_expose_schedule_metadata() {
        let task = ScheduledTask::new(
            "compileJava",
            ObjectState::new("JavaCompile").with_field("source", "src/main/java"),
        )
        .with_extras(ExtraProperties::new().with("springVersion", "3.1.0.RELEASE"));

        assert_eq!(task.name(), "compileJava");
        assert_eq!(task.type_name(), "JavaCompile");
        assert_eq!(task.extras().get_str("springVersion"), Some("3.1.0.RELEASE"));
        assert_eq!(task.capture().fields().len(), 1);
    }
}
