use serde::{Deserialize, Serialize};

use super::counter::ExecutionCounter;
use crate::config::CountingPolicy;

/// Counting facet of an execution
///
/// `count_enabled` is a snapshot of the global execution switch taken when
/// the execution was created. It has no setter: an execution created while
/// counting was off was never incremented, so its counters can never be
/// trusted later on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionCounts {
    count_enabled: bool,
    pub variable_count: i32,
    pub event_subscription_count: i32,
    pub task_count: i32,
    pub job_count: i32,
    pub timer_job_count: i32,
    pub suspended_job_count: i32,
    pub dead_letter_job_count: i32,
    pub external_worker_job_count: i32,
    pub identity_link_count: i32,
}

impl ExecutionCounts {
    /// Create a zeroed facet with the given snapshot flag
    pub fn new(count_enabled: bool) -> Self {
        Self {
            count_enabled,
            ..Self::default()
        }
    }

    pub fn is_count_enabled(&self) -> bool {
        self.count_enabled
    }

    /// Read a counter by name
    pub fn get(&self, counter: ExecutionCounter) -> i32 {
        match counter {
            ExecutionCounter::Variable => self.variable_count,
            ExecutionCounter::EventSubscription => self.event_subscription_count,
            ExecutionCounter::Task => self.task_count,
            ExecutionCounter::Job => self.job_count,
            ExecutionCounter::TimerJob => self.timer_job_count,
            ExecutionCounter::SuspendedJob => self.suspended_job_count,
            ExecutionCounter::DeadLetterJob => self.dead_letter_job_count,
            ExecutionCounter::ExternalWorkerJob => self.external_worker_job_count,
            ExecutionCounter::IdentityLink => self.identity_link_count,
        }
    }

    fn slot_mut(&mut self, counter: ExecutionCounter) -> &mut i32 {
        match counter {
            ExecutionCounter::Variable => &mut self.variable_count,
            ExecutionCounter::EventSubscription => &mut self.event_subscription_count,
            ExecutionCounter::Task => &mut self.task_count,
            ExecutionCounter::Job => &mut self.job_count,
            ExecutionCounter::TimerJob => &mut self.timer_job_count,
            ExecutionCounter::SuspendedJob => &mut self.suspended_job_count,
            ExecutionCounter::DeadLetterJob => &mut self.dead_letter_job_count,
            ExecutionCounter::ExternalWorkerJob => &mut self.external_worker_job_count,
            ExecutionCounter::IdentityLink => &mut self.identity_link_count,
        }
    }

    /// Add `delta` to a counter and return the new value
    ///
    /// No lower bound is enforced; unpaired deletes drive the value negative.
    /// Values loaded at the `i32` limits wrap instead of failing.
    pub fn adjust(&mut self, counter: ExecutionCounter, delta: i32) -> i32 {
        let slot = self.slot_mut(counter);
        *slot = slot.wrapping_add(delta);
        *slot
    }
}

/// Capability to expose an execution counting facet
///
/// Parents that cannot count return `None`; callers treat that exactly like
/// a disabled flag.
pub trait AsCountingExecution {
    fn as_counting(&self) -> Option<&ExecutionCounts>;
    fn as_counting_mut(&mut self) -> Option<&mut ExecutionCounts>;
}

/// Execution - a node in the process execution tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionEntity {
    pub id: String,

    /// Root execution of the process instance this execution belongs to
    pub process_instance_id: Option<String>,

    counting: Option<ExecutionCounts>,
}

impl ExecutionEntity {
    /// Create a counting-capable execution, snapshotting the global switch
    pub fn create<P: CountingPolicy + ?Sized>(id: String, policy: &P) -> Self {
        Self::from_parts(
            id,
            Some(ExecutionCounts::new(policy.execution_counting_enabled())),
        )
    }

    /// Create an execution that carries no counting facet at all
    pub fn without_counting(id: String) -> Self {
        Self::from_parts(id, None)
    }

    /// Rehydrate an execution with a facet loaded from storage
    pub fn from_parts(id: String, counting: Option<ExecutionCounts>) -> Self {
        Self {
            id,
            process_instance_id: None,
            counting,
        }
    }

    pub fn with_process_instance_id(mut self, process_instance_id: String) -> Self {
        self.process_instance_id = Some(process_instance_id);
        self
    }
}

impl AsCountingExecution for ExecutionEntity {
    fn as_counting(&self) -> Option<&ExecutionCounts> {
        self.counting.as_ref()
    }

    fn as_counting_mut(&mut self) -> Option<&mut ExecutionCounts> {
        self.counting.as_mut()
    }
}
