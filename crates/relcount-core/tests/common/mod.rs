use std::sync::Mutex;

use relcount_core::{
    CountingConfig, EngineEvent, EventDispatcher, ExecutionEntity, PerformanceSettings,
    RelCountError, Result, Store, TaskEntity, VariableInstance,
};
use uuid::Uuid;

/// Config with the given global switches and the default engine key
#[allow(dead_code)]
pub fn config(execution: bool, task: bool) -> CountingConfig {
    CountingConfig::with_performance(PerformanceSettings::new(execution, task))
}

#[allow(dead_code)]
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

/// Insert a process instance root whose snapshot flag is `count_enabled`
#[allow(dead_code)]
pub fn seed_execution(store: &mut Store, count_enabled: bool) -> String {
    let id = new_id();
    let creation_policy = PerformanceSettings::new(count_enabled, false);
    store.insert_execution(
        ExecutionEntity::create(id.clone(), &creation_policy).with_process_instance_id(id.clone()),
    );
    id
}

/// Insert an execution that carries no counting facet
#[allow(dead_code)]
pub fn seed_legacy_execution(store: &mut Store) -> String {
    let id = new_id();
    store.insert_execution(ExecutionEntity::without_counting(id.clone()));
    id
}

/// Insert a task whose snapshot flag is `count_enabled`
#[allow(dead_code)]
pub fn seed_task(store: &mut Store, count_enabled: bool) -> String {
    let id = new_id();
    let creation_policy = PerformanceSettings::new(false, count_enabled);
    store.insert_task(TaskEntity::create(id.clone(), &creation_policy));
    id
}

#[allow(dead_code)]
pub fn variable(name: &str) -> VariableInstance {
    VariableInstance::new(new_id(), name.to_string())
}

/// Dispatcher that records every event it receives
#[allow(dead_code)]
pub struct RecordingEventDispatcher {
    enabled: bool,
    received: Mutex<Vec<(EngineEvent, String)>>,
}

#[allow(dead_code)]
impl RecordingEventDispatcher {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<(EngineEvent, String)> {
        self.received.lock().unwrap().clone()
    }
}

impl EventDispatcher for RecordingEventDispatcher {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn dispatch(&self, event: EngineEvent, engine_key: &str) -> Result<()> {
        self.received
            .lock()
            .unwrap()
            .push((event, engine_key.to_string()));
        Ok(())
    }
}

/// Enabled dispatcher whose listeners reject every event
#[allow(dead_code)]
pub struct FailingEventDispatcher {
    attempts: Mutex<usize>,
}

#[allow(dead_code)]
impl FailingEventDispatcher {
    pub fn new() -> Self {
        Self {
            attempts: Mutex::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl EventDispatcher for FailingEventDispatcher {
    fn is_enabled(&self) -> bool {
        true
    }

    fn dispatch(&self, event: EngineEvent, _engine_key: &str) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;
        Err(RelCountError::DispatchFailed {
            event_type: event.event_type().to_string(),
            entity_id: event.entity_id().to_string(),
            reason: "listener rejected event".to_string(),
        })
    }
}
