use serde::{Deserialize, Serialize};

use crate::config::CountingPolicy;

/// Counting facet of a task
///
/// Same snapshot semantics as `ExecutionCounts`, driven by the task switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    count_enabled: bool,
    pub variable_count: i32,
}

impl TaskCounts {
    pub fn new(count_enabled: bool) -> Self {
        Self {
            count_enabled,
            variable_count: 0,
        }
    }

    pub fn is_count_enabled(&self) -> bool {
        self.count_enabled
    }
}

/// Capability to expose a task counting facet
pub trait AsCountingTask {
    fn as_counting(&self) -> Option<&TaskCounts>;
    fn as_counting_mut(&mut self) -> Option<&mut TaskCounts>;
}

/// Task - a unit of human or service work, optionally attached to an execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntity {
    pub id: String,
    pub execution_id: Option<String>,
    counting: Option<TaskCounts>,
}

impl TaskEntity {
    /// Create a counting-capable task, snapshotting the global task switch
    pub fn create<P: CountingPolicy + ?Sized>(id: String, policy: &P) -> Self {
        Self::from_parts(id, Some(TaskCounts::new(policy.task_counting_enabled())))
    }

    pub fn without_counting(id: String) -> Self {
        Self::from_parts(id, None)
    }

    pub fn from_parts(id: String, counting: Option<TaskCounts>) -> Self {
        Self {
            id,
            execution_id: None,
            counting,
        }
    }

    pub fn with_execution_id(mut self, execution_id: String) -> Self {
        self.execution_id = Some(execution_id);
        self
    }
}

impl AsCountingTask for TaskEntity {
    fn as_counting(&self) -> Option<&TaskCounts> {
        self.counting.as_ref()
    }

    fn as_counting_mut(&mut self) -> Option<&mut TaskCounts> {
        self.counting.as_mut()
    }
}
