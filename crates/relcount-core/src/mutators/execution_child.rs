//! Counter hooks for the remaining execution-owned children
//!
//! Tasks, the job family and identity links follow the same rule as event
//! subscriptions: count against the owning execution when the gate is open.

use crate::model::ExecutionChild;
use crate::repository::ParentRepository;

use super::{adjust_execution_counter, CountingContext};

const OP_INSERT: &str = "execution_child_insert";
const OP_DELETE: &str = "execution_child_delete";

/// Keeps task, job and identity-link counters on executions current
pub struct ExecutionChildCountMutator<'a, R> {
    ctx: CountingContext<'a>,
    repository: &'a mut R,
}

impl<'a, R: ParentRepository> ExecutionChildCountMutator<'a, R> {
    pub fn new(ctx: CountingContext<'a>, repository: &'a mut R) -> Self {
        Self { ctx, repository }
    }

    pub fn repository(&self) -> &R {
        &*self.repository
    }

    pub fn handle_insert(&mut self, child: &ExecutionChild) {
        self.adjust(child, 1, OP_INSERT);
    }

    pub fn handle_delete(&mut self, child: &ExecutionChild) {
        self.adjust(child, -1, OP_DELETE);
    }

    fn adjust(&mut self, child: &ExecutionChild, delta: i32, op: &'static str) {
        let resolver = self.ctx.resolver();
        match child.execution_id.as_deref() {
            Some(execution_id) if resolver.is_execution_counting_enabled_globally() => {
                adjust_execution_counter(
                    &resolver,
                    &mut *self.repository,
                    execution_id,
                    child.kind.counter(),
                    delta,
                    op,
                );
            }
            _ => {
                tracing::debug!(
                    component = module_path!(),
                    op = op,
                    child_id = child.id.as_str(),
                    counter = child.kind.counter().field_name(),
                    "child not counted"
                );
            }
        }
    }
}
