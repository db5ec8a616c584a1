use serde::{Deserialize, Serialize};

/// Names one of the relationship counters carried by an execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionCounter {
    Variable,
    EventSubscription,
    Task,
    Job,
    TimerJob,
    SuspendedJob,
    DeadLetterJob,
    ExternalWorkerJob,
    IdentityLink,
}

impl ExecutionCounter {
    /// Every counter, in declaration order
    pub const ALL: [ExecutionCounter; 9] = [
        ExecutionCounter::Variable,
        ExecutionCounter::EventSubscription,
        ExecutionCounter::Task,
        ExecutionCounter::Job,
        ExecutionCounter::TimerJob,
        ExecutionCounter::SuspendedJob,
        ExecutionCounter::DeadLetterJob,
        ExecutionCounter::ExternalWorkerJob,
        ExecutionCounter::IdentityLink,
    ];

    /// Field name used in structured logs
    pub fn field_name(&self) -> &'static str {
        match self {
            ExecutionCounter::Variable => "variable_count",
            ExecutionCounter::EventSubscription => "event_subscription_count",
            ExecutionCounter::Task => "task_count",
            ExecutionCounter::Job => "job_count",
            ExecutionCounter::TimerJob => "timer_job_count",
            ExecutionCounter::SuspendedJob => "suspended_job_count",
            ExecutionCounter::DeadLetterJob => "dead_letter_job_count",
            ExecutionCounter::ExternalWorkerJob => "external_worker_job_count",
            ExecutionCounter::IdentityLink => "identity_link_count",
        }
    }
}
