//! Count enablement gate
//!
//! Two flags decide whether a parent's counters may be trusted and mutated:
//! the global switch (may change between restarts) and the snapshot flag on
//! the parent (fixed when the parent was created).
//!
//! | global | snapshot | result |
//! |--------|----------|--------|
//! | T      | T        | T      |
//! | T      | F        | F      |
//! | F      | T        | F      |
//! | F      | F        | F      |
//!
//! A parent created while counting was off was never incremented, so turning
//! the global switch on later must not make its counters look valid. A parent
//! created while counting was on stops being trusted as soon as the switch is
//! turned off, since nothing keeps its counters current from then on.

use crate::config::CountingPolicy;
use crate::model::{AsCountingExecution, AsCountingTask, ExecutionCounts, TaskCounts};

/// Combines the global counting switches with per-entity snapshot flags
pub struct EnablementResolver<'a, P: ?Sized> {
    policy: &'a P,
}

impl<P: ?Sized> Clone for EnablementResolver<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for EnablementResolver<'_, P> {}

impl<'a, P: CountingPolicy + ?Sized> EnablementResolver<'a, P> {
    pub fn new(policy: &'a P) -> Self {
        Self { policy }
    }

    pub fn is_execution_counting_enabled_globally(&self) -> bool {
        self.policy.execution_counting_enabled()
    }

    pub fn is_task_counting_enabled_globally(&self) -> bool {
        self.policy.task_counting_enabled()
    }

    /// Global execution switch AND the facet's snapshot; `None` is disabled
    pub fn is_execution_counting_enabled(&self, counts: Option<&ExecutionCounts>) -> bool {
        counts.is_some_and(|c| {
            self.is_execution_counting_enabled_globally() && c.is_count_enabled()
        })
    }

    /// Global task switch AND the facet's snapshot; `None` is disabled
    pub fn is_task_counting_enabled(&self, counts: Option<&TaskCounts>) -> bool {
        counts.is_some_and(|c| self.is_task_counting_enabled_globally() && c.is_count_enabled())
    }

    pub fn is_execution_entity_counting_enabled<E: AsCountingExecution + ?Sized>(
        &self,
        execution: &E,
    ) -> bool {
        self.is_execution_counting_enabled(execution.as_counting())
    }

    pub fn is_task_entity_counting_enabled<T: AsCountingTask + ?Sized>(&self, task: &T) -> bool {
        self.is_task_counting_enabled(task.as_counting())
    }
}
