use serde::{Deserialize, Serialize};

use super::counter::ExecutionCounter;

/// Kinds of execution-owned children besides variables and event subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildKind {
    Task,
    Job,
    TimerJob,
    SuspendedJob,
    DeadLetterJob,
    ExternalWorkerJob,
    IdentityLink,
}

impl ChildKind {
    /// Counter on the owning execution that tracks this kind
    pub fn counter(&self) -> ExecutionCounter {
        match self {
            ChildKind::Task => ExecutionCounter::Task,
            ChildKind::Job => ExecutionCounter::Job,
            ChildKind::TimerJob => ExecutionCounter::TimerJob,
            ChildKind::SuspendedJob => ExecutionCounter::SuspendedJob,
            ChildKind::DeadLetterJob => ExecutionCounter::DeadLetterJob,
            ChildKind::ExternalWorkerJob => ExecutionCounter::ExternalWorkerJob,
            ChildKind::IdentityLink => ExecutionCounter::IdentityLink,
        }
    }
}

/// A counted child row: only its identity, kind and owner matter here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionChild {
    pub id: String,
    pub kind: ChildKind,
    pub execution_id: Option<String>,
}

impl ExecutionChild {
    pub fn new(id: String, kind: ChildKind, execution_id: Option<String>) -> Self {
        Self {
            id,
            kind,
            execution_id,
        }
    }
}
