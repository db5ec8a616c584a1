//! Event subscription counter hooks
//!
//! Subscriptions only ever count against their own execution. No
//! notifications are raised here.

use crate::model::{EventSubscription, ExecutionCounter};
use crate::repository::ParentRepository;

use super::{adjust_execution_counter, CountingContext};

const OP_INSERT: &str = "event_subscription_insert";
const OP_DELETE: &str = "event_subscription_delete";

/// Keeps `event_subscription_count` on executions current
pub struct EventSubscriptionCountMutator<'a, R> {
    ctx: CountingContext<'a>,
    repository: &'a mut R,
}

impl<'a, R: ParentRepository> EventSubscriptionCountMutator<'a, R> {
    pub fn new(ctx: CountingContext<'a>, repository: &'a mut R) -> Self {
        Self { ctx, repository }
    }

    pub fn repository(&self) -> &R {
        &*self.repository
    }

    pub fn handle_insert(&mut self, subscription: &EventSubscription) {
        self.adjust(subscription, 1, OP_INSERT);
    }

    pub fn handle_delete(&mut self, subscription: &EventSubscription) {
        self.adjust(subscription, -1, OP_DELETE);
    }

    fn adjust(&mut self, subscription: &EventSubscription, delta: i32, op: &'static str) {
        let resolver = self.ctx.resolver();
        let Some(execution_id) = subscription.execution_id.as_deref() else {
            tracing::debug!(
                component = module_path!(),
                op = op,
                subscription_id = subscription.id.as_str(),
                "subscription has no execution, nothing to count"
            );
            return;
        };
        if !resolver.is_execution_counting_enabled_globally() {
            return;
        }

        adjust_execution_counter(
            &resolver,
            &mut *self.repository,
            execution_id,
            ExecutionCounter::EventSubscription,
            delta,
            op,
        );
    }
}
