//! Insert/delete hooks that keep parent counters current
//!
//! The persistence layer calls a hook right after inserting or deleting a
//! child row. Each hook routes the child to its owning parent, consults the
//! enablement gate, and adjusts one counter in place. Flushing the parent
//! back to storage is the caller's business.

pub mod event_subscription;
pub mod execution_child;
pub mod variable;

pub use event_subscription::EventSubscriptionCountMutator;
pub use execution_child::ExecutionChildCountMutator;
pub use variable::VariableCountMutator;

use crate::config::{CountingConfig, CountingPolicy};
use crate::enablement::EnablementResolver;
use crate::events::EventDispatcher;
use crate::model::{AsCountingExecution, AsCountingTask, ExecutionCounter};
use crate::repository::ParentRepository;

/// Collaborators shared by every hook within one unit of work
#[derive(Clone, Copy)]
pub struct CountingContext<'a> {
    policy: &'a dyn CountingPolicy,
    dispatcher: &'a dyn EventDispatcher,
    engine_key: &'a str,
}

impl<'a> CountingContext<'a> {
    pub fn new(
        policy: &'a dyn CountingPolicy,
        dispatcher: &'a dyn EventDispatcher,
        engine_key: &'a str,
    ) -> Self {
        Self {
            policy,
            dispatcher,
            engine_key,
        }
    }

    /// Use the config both as counting policy and as source of the engine key
    pub fn from_config(config: &'a CountingConfig, dispatcher: &'a dyn EventDispatcher) -> Self {
        Self::new(config, dispatcher, &config.engine_key)
    }

    pub fn resolver(&self) -> EnablementResolver<'a, dyn CountingPolicy + 'a> {
        EnablementResolver::new(self.policy)
    }

    pub fn dispatcher(&self) -> &'a dyn EventDispatcher {
        self.dispatcher
    }

    pub fn engine_key(&self) -> &'a str {
        self.engine_key
    }
}

/// Adjust one counter on the execution `execution_id`
///
/// Returns whether the counter changed. A missing execution, a missing
/// facet, or a closed gate all leave it untouched.
pub(crate) fn adjust_execution_counter<R, P>(
    resolver: &EnablementResolver<'_, P>,
    repository: &mut R,
    execution_id: &str,
    counter: ExecutionCounter,
    delta: i32,
    op: &'static str,
) -> bool
where
    R: ParentRepository + ?Sized,
    P: CountingPolicy + ?Sized,
{
    let Some(execution) = repository.find_execution_by_id(execution_id) else {
        tracing::debug!(
            component = module_path!(),
            op = op,
            execution_id = execution_id,
            counter = counter.field_name(),
            "owning execution not found, counter left unchanged"
        );
        return false;
    };

    if !resolver.is_execution_entity_counting_enabled(&*execution) {
        tracing::debug!(
            component = module_path!(),
            op = op,
            execution_id = execution_id,
            counter = counter.field_name(),
            "counting disabled for execution, counter left unchanged"
        );
        return false;
    }

    let Some(counts) = execution.as_counting_mut() else {
        return false;
    };
    let value = counts.adjust(counter, delta);
    tracing::debug!(
        component = module_path!(),
        op = op,
        execution_id = execution_id,
        counter = counter.field_name(),
        value = value,
        "counter adjusted"
    );
    true
}

/// Adjust the variable counter on the task `task_id`
pub(crate) fn adjust_task_variable_count<R, P>(
    resolver: &EnablementResolver<'_, P>,
    repository: &mut R,
    task_id: &str,
    delta: i32,
    op: &'static str,
) -> bool
where
    R: ParentRepository + ?Sized,
    P: CountingPolicy + ?Sized,
{
    let Some(task) = repository.find_task_by_id(task_id) else {
        tracing::debug!(
            component = module_path!(),
            op = op,
            task_id = task_id,
            "owning task not found, counter left unchanged"
        );
        return false;
    };

    if !resolver.is_task_entity_counting_enabled(&*task) {
        tracing::debug!(
            component = module_path!(),
            op = op,
            task_id = task_id,
            counter = "variable_count",
            "counting disabled for task, counter left unchanged"
        );
        return false;
    }

    let Some(counts) = task.as_counting_mut() else {
        return false;
    };
    counts.variable_count = counts.variable_count.wrapping_add(delta);
    tracing::debug!(
        component = module_path!(),
        op = op,
        task_id = task_id,
        counter = "variable_count",
        value = counts.variable_count,
        "counter adjusted"
    );
    true
}
