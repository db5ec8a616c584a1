//! Read-side counter accessors
//!
//! Every accessor returns the stored counter when the parent exposes a
//! counting facet and 0 otherwise. They never check the enablement gate:
//! callers decide through `EnablementResolver` whether the value can be
//! trusted or a real query is needed.

use serde::Serialize;

use crate::model::{AsCountingExecution, AsCountingTask, ExecutionCounter};

/// Value of one counter, 0 when the execution cannot count
pub fn counter_value<E: AsCountingExecution + ?Sized>(
    execution: &E,
    counter: ExecutionCounter,
) -> i32 {
    execution.as_counting().map_or(0, |c| c.get(counter))
}

pub fn event_subscription_count<E: AsCountingExecution + ?Sized>(execution: &E) -> i32 {
    counter_value(execution, ExecutionCounter::EventSubscription)
}

pub fn task_count<E: AsCountingExecution + ?Sized>(execution: &E) -> i32 {
    counter_value(execution, ExecutionCounter::Task)
}

pub fn job_count<E: AsCountingExecution + ?Sized>(execution: &E) -> i32 {
    counter_value(execution, ExecutionCounter::Job)
}

pub fn timer_job_count<E: AsCountingExecution + ?Sized>(execution: &E) -> i32 {
    counter_value(execution, ExecutionCounter::TimerJob)
}

pub fn suspended_job_count<E: AsCountingExecution + ?Sized>(execution: &E) -> i32 {
    counter_value(execution, ExecutionCounter::SuspendedJob)
}

pub fn dead_letter_job_count<E: AsCountingExecution + ?Sized>(execution: &E) -> i32 {
    counter_value(execution, ExecutionCounter::DeadLetterJob)
}

pub fn external_worker_job_count<E: AsCountingExecution + ?Sized>(execution: &E) -> i32 {
    counter_value(execution, ExecutionCounter::ExternalWorkerJob)
}

pub fn variable_count<E: AsCountingExecution + ?Sized>(execution: &E) -> i32 {
    counter_value(execution, ExecutionCounter::Variable)
}

pub fn identity_link_count<E: AsCountingExecution + ?Sized>(execution: &E) -> i32 {
    counter_value(execution, ExecutionCounter::IdentityLink)
}

/// Variable counter of a task, 0 when the task cannot count
pub fn task_variable_count<T: AsCountingTask + ?Sized>(task: &T) -> i32 {
    task.as_counting().map_or(0, |c| c.variable_count)
}

/// All execution counters read at once, for diagnostics output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionCountSnapshot {
    pub count_enabled: bool,
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

impl ExecutionCountSnapshot {
    /// Read every counter; an execution without facet yields all zeros and
    /// `count_enabled = false`
    pub fn of<E: AsCountingExecution + ?Sized>(execution: &E) -> Self {
        Self {
            count_enabled: execution.as_counting().is_some_and(|c| c.is_count_enabled()),
            variable_count: variable_count(execution),
            event_subscription_count: event_subscription_count(execution),
            task_count: task_count(execution),
            job_count: job_count(execution),
            timer_job_count: timer_job_count(execution),
            suspended_job_count: suspended_job_count(execution),
            dead_letter_job_count: dead_letter_job_count(execution),
            external_worker_job_count: external_worker_job_count(execution),
            identity_link_count: identity_link_count(execution),
        }
    }
}
