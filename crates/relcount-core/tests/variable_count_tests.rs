//! Variable Counter Tests
//!
//! ## Scenarios Covered
//!
//! 1. Task-owned variables count against the task
//! 2. Execution-owned variables count against the execution
//! 3. Dependent-scope variables count against their sub-scope execution on
//!    insert only
//! 4. Closed gates and missing parents leave counters untouched
//! 5. Delete notifications: order, engine key, suppression, failure
//! 6. Stored counters at the i32 limits wrap

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use relcount_core::accessor::{task_variable_count, variable_count};
use relcount_core::{
    CountingContext, EngineEvent, EngineEventType, ExecutionCounts, ExecutionEntity,
    NoopEventDispatcher, RelCountError, Store, TaskCounts, TaskEntity, VariableCountMutator,
};
use relcount_core_types::ScopeType;

mod common;

use common::{FailingEventDispatcher, RecordingEventDispatcher};

fn execution_variables(store: &Store, id: &str) -> i32 {
    variable_count(store.get_execution(id).unwrap())
}

fn task_variables(store: &Store, id: &str) -> i32 {
    task_variable_count(store.get_task(id).unwrap())
}

#[test]
fn test_task_variable_counts_against_task() {
    // GIVEN a counting task and a counting execution
    let mut store = Store::new();
    let task_id = common::seed_task(&mut store, true);
    let execution_id = common::seed_execution(&mut store, true);
    let config = common::config(true, true);
    let dispatcher = NoopEventDispatcher;

    // WHEN a variable owned by both is inserted
    let variable = common::variable("amount")
        .with_task_id(task_id.clone())
        .with_execution_id(execution_id.clone());
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_insert(&variable);

    // THEN only the task counter moves
    assert_eq!(task_variables(&store, &task_id), 1);
    assert_eq!(execution_variables(&store, &execution_id), 0);
}

#[test]
fn test_execution_variable_counts_against_execution() {
    let mut store = Store::new();
    let execution_id = common::seed_execution(&mut store, true);
    let config = common::config(true, false);
    let dispatcher = NoopEventDispatcher;

    let variable = common::variable("amount").with_execution_id(execution_id.clone());
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_insert(&variable);
    mutator.handle_insert(&common::variable("other").with_execution_id(execution_id.clone()));

    assert_eq!(execution_variables(mutator.repository(), &execution_id), 2);
}

#[test]
fn test_task_switch_off_falls_back_to_execution() {
    // GIVEN task counting off but execution counting on
    let mut store = Store::new();
    let task_id = common::seed_task(&mut store, true);
    let execution_id = common::seed_execution(&mut store, true);
    let config = common::config(true, false);
    let dispatcher = NoopEventDispatcher;

    let variable = common::variable("amount")
        .with_task_id(task_id.clone())
        .with_execution_id(execution_id.clone());
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_insert(&variable);

    assert_eq!(task_variables(&store, &task_id), 0);
    assert_eq!(execution_variables(&store, &execution_id), 1);
}

#[test]
fn test_matched_task_rule_stops_even_when_task_missing() {
    // GIVEN a variable naming a task that is not in the repository
    let mut store = Store::new();
    let execution_id = common::seed_execution(&mut store, true);
    let config = common::config(true, true);
    let dispatcher = NoopEventDispatcher;

    let variable = common::variable("amount")
        .with_task_id(common::new_id())
        .with_execution_id(execution_id.clone());
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_insert(&variable);

    // THEN the execution is not used as a fallback
    assert_eq!(execution_variables(&store, &execution_id), 0);
}

#[test]
fn test_disabled_task_snapshot_does_not_fall_through() {
    let mut store = Store::new();
    let task_id = common::seed_task(&mut store, false);
    let execution_id = common::seed_execution(&mut store, true);
    let config = common::config(true, true);
    let dispatcher = NoopEventDispatcher;

    let variable = common::variable("amount")
        .with_task_id(task_id.clone())
        .with_execution_id(execution_id.clone());
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_insert(&variable);

    assert_eq!(task_variables(&store, &task_id), 0);
    assert_eq!(execution_variables(&store, &execution_id), 0);
}

#[test]
fn test_sub_scope_insert_counts_but_delete_does_not() {
    // GIVEN an external worker variable hanging off an execution
    let mut store = Store::new();
    let execution_id = common::seed_execution(&mut store, true);
    let config = common::config(true, true);
    let dispatcher = NoopEventDispatcher;

    let variable = common::variable("payload").with_scope(
        ScopeType::ExternalWorker,
        common::new_id(),
        Some(execution_id.clone()),
    );
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);

    // WHEN it is inserted and then deleted
    mutator.handle_insert(&variable);
    assert_eq!(execution_variables(mutator.repository(), &execution_id), 1);
    mutator.handle_delete(&variable, false).unwrap();

    // THEN the increment is not undone
    assert_eq!(execution_variables(&store, &execution_id), 1);
}

#[test]
fn test_non_dependent_scope_is_not_counted() {
    let mut store = Store::new();
    let execution_id = common::seed_execution(&mut store, true);
    let config = common::config(true, true);
    let dispatcher = NoopEventDispatcher;

    let variable = common::variable("decision").with_scope(
        ScopeType::Dmn,
        common::new_id(),
        Some(execution_id.clone()),
    );
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_insert(&variable);

    assert_eq!(execution_variables(&store, &execution_id), 0);
}

#[test]
fn test_global_switches_off_mutate_nothing() {
    let mut store = Store::new();
    let task_id = common::seed_task(&mut store, true);
    let execution_id = common::seed_execution(&mut store, true);
    let config = common::config(false, false);
    let dispatcher = NoopEventDispatcher;

    let variables = [
        common::variable("a").with_task_id(task_id.clone()),
        common::variable("b").with_execution_id(execution_id.clone()),
        common::variable("c").with_scope(
            ScopeType::Task,
            common::new_id(),
            Some(execution_id.clone()),
        ),
    ];
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    for variable in &variables {
        mutator.handle_insert(variable);
        mutator.handle_delete(variable, true).unwrap();
        mutator.handle_delete(variable, true).unwrap();
    }

    assert_eq!(task_variables(&store, &task_id), 0);
    assert_eq!(execution_variables(&store, &execution_id), 0);
}

#[test]
fn test_legacy_execution_is_left_alone() {
    let mut store = Store::new();
    let execution_id = common::seed_legacy_execution(&mut store);
    let config = common::config(true, true);
    let dispatcher = NoopEventDispatcher;

    let variable = common::variable("amount").with_execution_id(execution_id.clone());
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_insert(&variable);

    assert_eq!(execution_variables(&store, &execution_id), 0);
}

#[test]
fn test_unpaired_delete_goes_negative() {
    let mut store = Store::new();
    let execution_id = common::seed_execution(&mut store, true);
    let config = common::config(true, false);
    let dispatcher = NoopEventDispatcher;

    let variable = common::variable("amount").with_execution_id(execution_id.clone());
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_delete(&variable, false).unwrap();

    assert_eq!(execution_variables(&store, &execution_id), -1);
}

#[test]
fn test_insert_at_i32_max_wraps() {
    // GIVEN an execution whose stored counter sits at the upper limit
    let mut counts = ExecutionCounts::new(true);
    counts.variable_count = i32::MAX;
    let execution_id = common::new_id();
    let mut store = Store::new();
    store.insert_execution(ExecutionEntity::from_parts(execution_id.clone(), Some(counts)));
    let config = common::config(true, false);
    let dispatcher = NoopEventDispatcher;

    // WHEN another variable is counted against it
    let variable = common::variable("amount").with_execution_id(execution_id.clone());
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_insert(&variable);

    // THEN the counter wraps instead of failing
    assert_eq!(execution_variables(&store, &execution_id), i32::MIN);
}

#[test]
fn test_task_delete_at_i32_min_wraps() {
    let mut counts = TaskCounts::new(true);
    counts.variable_count = i32::MIN;
    let task_id = common::new_id();
    let mut store = Store::new();
    store.insert_task(TaskEntity::from_parts(task_id.clone(), Some(counts)));
    let config = common::config(false, true);
    let dispatcher = NoopEventDispatcher;

    let variable = common::variable("amount").with_task_id(task_id.clone());
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_delete(&variable, false).unwrap();

    assert_eq!(task_variables(&store, &task_id), i32::MAX);
}

#[test]
fn test_delete_dispatches_entity_then_variable_event() {
    // GIVEN an enabled dispatcher and a custom engine key
    let mut store = Store::new();
    let execution_id = common::seed_execution(&mut store, true);
    let mut config = common::config(true, false);
    config.engine_key = "orders".to_string();
    let dispatcher = RecordingEventDispatcher::enabled();

    let variable = common::variable("amount")
        .with_value(serde_json::json!({"total": 12}))
        .with_execution_id(execution_id.clone());
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);

    // WHEN the variable is deleted with notification requested
    mutator.handle_insert(&variable);
    mutator.handle_delete(&variable, true).unwrap();

    // THEN exactly two events arrive, entity first
    let received = dispatcher.received();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].0.event_type(), EngineEventType::EntityDeleted);
    assert_eq!(received[1].0.event_type(), EngineEventType::VariableDeleted);
    assert!(received.iter().all(|(_, key)| key == "orders"));

    // AND the variable event carries the variable's identity and value
    match &received[1].0 {
        EngineEvent::VariableDeleted {
            variable_id,
            variable_name,
            variable_value,
            execution_id: event_execution_id,
            ..
        } => {
            assert_eq!(variable_id, &variable.id);
            assert_eq!(variable_name, "amount");
            assert_eq!(variable_value["total"], 12);
            assert_eq!(event_execution_id.as_deref(), Some(execution_id.as_str()));
        }
        other => panic!("unexpected event {:?}", other),
    }

    // AND the counter is back to zero
    assert_eq!(execution_variables(&store, &execution_id), 0);
}

#[test]
fn test_delete_without_fire_flag_dispatches_nothing() {
    let mut store = Store::new();
    let execution_id = common::seed_execution(&mut store, true);
    let config = common::config(true, false);
    let dispatcher = RecordingEventDispatcher::enabled();

    let variable = common::variable("amount").with_execution_id(execution_id);
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_delete(&variable, false).unwrap();

    assert!(dispatcher.received().is_empty());
}

#[test]
fn test_disabled_dispatcher_receives_nothing() {
    let mut store = Store::new();
    let config = common::config(false, false);
    let dispatcher = RecordingEventDispatcher::disabled();

    let variable = common::variable("amount");
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_delete(&variable, true).unwrap();

    assert!(dispatcher.received().is_empty());
}

#[test]
fn test_notification_does_not_depend_on_counting() {
    // Counting off globally, dispatcher on: the events still go out
    let mut store = Store::new();
    let config = common::config(false, false);
    let dispatcher = RecordingEventDispatcher::enabled();

    let variable = common::variable("amount").with_task_id(common::new_id());
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_delete(&variable, true).unwrap();

    assert_eq!(dispatcher.received().len(), 2);
}

#[test]
fn test_dispatch_failure_propagates_after_decrement() {
    // GIVEN a dispatcher whose listeners reject everything
    let mut store = Store::new();
    let execution_id = common::seed_execution(&mut store, true);
    let config = common::config(true, false);
    let dispatcher = FailingEventDispatcher::new();

    let variable = common::variable("amount").with_execution_id(execution_id.clone());
    let mut mutator =
        VariableCountMutator::new(CountingContext::from_config(&config, &dispatcher), &mut store);
    mutator.handle_insert(&variable);

    // WHEN the variable is deleted with notification
    let result = mutator.handle_delete(&variable, true);

    // THEN the dispatcher's error comes back unchanged
    match result {
        Err(RelCountError::DispatchFailed {
            event_type,
            entity_id,
            ..
        }) => {
            assert_eq!(event_type, "ENTITY_DELETED");
            assert_eq!(entity_id, variable.id);
        }
        other => panic!("expected DispatchFailed, got {:?}", other),
    }

    // AND the second event was never attempted
    assert_eq!(dispatcher.attempts(), 1);

    // AND the decrement already happened
    assert_eq!(execution_variables(&store, &execution_id), 0);
}

proptest! {
    #[test]
    fn prop_balanced_inserts_and_deletes_return_to_zero(n in 0usize..40, on_task in any::<bool>()) {
        let mut store = Store::new();
        let task_id = common::seed_task(&mut store, true);
        let execution_id = common::seed_execution(&mut store, true);
        let config = common::config(true, true);
        let dispatcher = NoopEventDispatcher;

        let variables: Vec<_> = (0..n)
            .map(|i| {
                let v = common::variable(&format!("var{}", i));
                if on_task {
                    v.with_task_id(task_id.clone())
                } else {
                    v.with_execution_id(execution_id.clone())
                }
            })
            .collect();

        let mut mutator = VariableCountMutator::new(
            CountingContext::from_config(&config, &dispatcher),
            &mut store,
        );
        for variable in &variables {
            mutator.handle_insert(variable);
        }
        let peak = if on_task {
            task_variables(mutator.repository(), &task_id)
        } else {
            execution_variables(mutator.repository(), &execution_id)
        };
        prop_assert_eq!(peak, n as i32);

        for variable in &variables {
            mutator.handle_delete(variable, false).unwrap();
        }
        prop_assert_eq!(task_variables(&store, &task_id), 0);
        prop_assert_eq!(execution_variables(&store, &execution_id), 0);
    }
}
