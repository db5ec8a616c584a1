use std::collections::HashMap;

use super::ParentRepository;
use crate::model::{ExecutionEntity, TaskEntity};

/// In-memory store for executions and tasks
///
/// HashMap-based parent storage for embedders and tests that have no
/// storage engine. Not thread-safe (no Arc/RwLock) - designed for use inside
/// a single unit of work.
#[derive(Debug, Clone, Default)]
pub struct Store {
    executions: HashMap<String, ExecutionEntity>,
    tasks: HashMap<String, TaskEntity>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an execution
    pub fn insert_execution(&mut self, execution: ExecutionEntity) {
        self.executions.insert(execution.id.clone(), execution);
    }

    /// Insert or replace a task
    pub fn insert_task(&mut self, task: TaskEntity) {
        self.tasks.insert(task.id.clone(), task);
    }

    pub fn get_execution(&self, id: &str) -> Option<&ExecutionEntity> {
        self.executions.get(id)
    }

    pub fn get_task(&self, id: &str) -> Option<&TaskEntity> {
        self.tasks.get(id)
    }
}

impl ParentRepository for Store {
    type Execution = ExecutionEntity;
    type Task = TaskEntity;

    fn find_task_by_id(&mut self, task_id: &str) -> Option<&mut TaskEntity> {
        self.tasks.get_mut(task_id)
    }

    fn find_execution_by_id(&mut self, execution_id: &str) -> Option<&mut ExecutionEntity> {
        self.executions.get_mut(execution_id)
    }
}
