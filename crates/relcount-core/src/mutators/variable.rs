//! Variable counter hooks
//!
//! A variable counts against exactly one parent, chosen in priority order:
//! 1. its task, when it has a `task_id` and task counting is on globally
//! 2. its execution, when it has an `execution_id` and execution counting
//!    is on globally
//! 3. the execution named by `sub_scope_id`, when its scope type is a
//!    dependent scope and execution counting is on globally (insert only)
//!
//! The first rule whose guard matches wins, even if the lookup that follows
//! finds nothing. Deleting a dependent-scope variable never decrements: the
//! sub-scope rule only exists on the insert path.

use crate::config::CountingPolicy;
use crate::enablement::EnablementResolver;
use crate::errors::Result;
use crate::events::EngineEvent;
use crate::model::{ExecutionCounter, VariableInstance};
use crate::repository::ParentRepository;
use crate::{log_op_end, log_op_error, log_op_start};

use super::{adjust_execution_counter, adjust_task_variable_count, CountingContext};

const OP_INSERT: &str = "variable_insert";
const OP_DELETE: &str = "variable_delete";
const OP_NOTIFY_DELETE: &str = "variable_delete_notify";

/// Parent selected to absorb a variable count adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VariableOwner<'v> {
    Task(&'v str),
    Execution(&'v str),
    SubScopeExecution(&'v str),
    Unowned,
}

fn resolve_owner<'v, P: CountingPolicy + ?Sized>(
    resolver: &EnablementResolver<'_, P>,
    variable: &'v VariableInstance,
    include_sub_scope: bool,
) -> VariableOwner<'v> {
    if let Some(task_id) = variable.task_id.as_deref() {
        if resolver.is_task_counting_enabled_globally() {
            return VariableOwner::Task(task_id);
        }
    }

    if let Some(execution_id) = variable.execution_id.as_deref() {
        if resolver.is_execution_counting_enabled_globally() {
            return VariableOwner::Execution(execution_id);
        }
    }

    if include_sub_scope
        && variable.is_in_dependent_scope()
        && resolver.is_execution_counting_enabled_globally()
    {
        return variable
            .sub_scope_id
            .as_deref()
            .map_or(VariableOwner::Unowned, VariableOwner::SubScopeExecution);
    }

    VariableOwner::Unowned
}

/// Keeps task and execution variable counters current
pub struct VariableCountMutator<'a, R> {
    ctx: CountingContext<'a>,
    repository: &'a mut R,
}

impl<'a, R: ParentRepository> VariableCountMutator<'a, R> {
    pub fn new(ctx: CountingContext<'a>, repository: &'a mut R) -> Self {
        Self { ctx, repository }
    }

    pub fn repository(&self) -> &R {
        &*self.repository
    }

    /// Count a freshly inserted variable against its owner
    pub fn handle_insert(&mut self, variable: &VariableInstance) {
        let owner = resolve_owner(&self.ctx.resolver(), variable, true);
        self.apply(owner, 1, OP_INSERT, &variable.id);
    }

    /// Uncount a deleted variable and optionally notify listeners
    ///
    /// When `fire_delete_event` is set and the dispatcher is enabled, the
    /// entity-deleted event is dispatched first, then the variable-deleted
    /// event.
    ///
    /// # Errors
    ///
    /// Returns the dispatcher's error unchanged. The counter has already
    /// been adjusted at that point and no further event is sent.
    pub fn handle_delete(
        &mut self,
        variable: &VariableInstance,
        fire_delete_event: bool,
    ) -> Result<()> {
        let owner = resolve_owner(&self.ctx.resolver(), variable, false);
        self.apply(owner, -1, OP_DELETE, &variable.id);

        if !fire_delete_event || !self.ctx.dispatcher().is_enabled() {
            return Ok(());
        }

        log_op_start!(OP_NOTIFY_DELETE, variable_id = variable.id.as_str());
        let start = std::time::Instant::now();

        self.dispatch_delete_events(variable).map_err(|e| {
            log_op_error!(
                OP_NOTIFY_DELETE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                variable_id = variable.id.as_str()
            );
            e
        })?;

        log_op_end!(
            OP_NOTIFY_DELETE,
            duration_ms = start.elapsed().as_millis() as u64,
            variable_id = variable.id.as_str()
        );
        Ok(())
    }

    fn dispatch_delete_events(&self, variable: &VariableInstance) -> Result<()> {
        let dispatcher = self.ctx.dispatcher();
        let engine_key = self.ctx.engine_key();
        dispatcher.dispatch(EngineEvent::entity_deleted(variable), engine_key)?;
        dispatcher.dispatch(EngineEvent::variable_deleted(variable), engine_key)
    }

    fn apply(
        &mut self,
        owner: VariableOwner<'_>,
        delta: i32,
        op: &'static str,
        variable_id: &str,
    ) -> bool {
        let resolver = self.ctx.resolver();
        match owner {
            VariableOwner::Task(task_id) => {
                adjust_task_variable_count(&resolver, &mut *self.repository, task_id, delta, op)
            }
            VariableOwner::Execution(execution_id)
            | VariableOwner::SubScopeExecution(execution_id) => adjust_execution_counter(
                &resolver,
                &mut *self.repository,
                execution_id,
                ExecutionCounter::Variable,
                delta,
                op,
            ),
            VariableOwner::Unowned => {
                tracing::debug!(
                    component = module_path!(),
                    op = op,
                    variable_id = variable_id,
                    "variable has no countable owner"
                );
                false
            }
        }
    }
}
