//! Deletion notifications
//!
//! Deleting a variable may notify listeners twice: once with the generic
//! entity-deleted event and once with the variable-specific event. Delivery
//! belongs to the embedder's `EventDispatcher`.

use relcount_core_types::ScopeType;
use serde::Serialize;

use crate::errors::Result;
use crate::model::VariableInstance;

/// Event type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineEventType {
    EntityDeleted,
    VariableDeleted,
}

impl EngineEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineEventType::EntityDeleted => "ENTITY_DELETED",
            EngineEventType::VariableDeleted => "VARIABLE_DELETED",
        }
    }
}

impl std::fmt::Display for EngineEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event handed to the dispatcher
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineEvent {
    /// Generic lifecycle event carrying the deleted entity itself
    EntityDeleted { entity: VariableInstance },

    /// Variable-specific event carrying the variable's identity, value and owners
    VariableDeleted {
        variable_id: String,
        variable_name: String,
        variable_value: serde_json::Value,
        execution_id: Option<String>,
        process_instance_id: Option<String>,
        task_id: Option<String>,
        scope_id: Option<String>,
        sub_scope_id: Option<String>,
        scope_type: Option<ScopeType>,
    },
}

impl EngineEvent {
    /// Build the generic entity-deleted event for a variable
    pub fn entity_deleted(variable: &VariableInstance) -> Self {
        EngineEvent::EntityDeleted {
            entity: variable.clone(),
        }
    }

    /// Build the variable-deleted event
    pub fn variable_deleted(variable: &VariableInstance) -> Self {
        EngineEvent::VariableDeleted {
            variable_id: variable.id.clone(),
            variable_name: variable.name.clone(),
            variable_value: variable.value.clone(),
            execution_id: variable.execution_id.clone(),
            process_instance_id: variable.process_instance_id.clone(),
            task_id: variable.task_id.clone(),
            scope_id: variable.scope_id.clone(),
            sub_scope_id: variable.sub_scope_id.clone(),
            scope_type: variable.scope_type,
        }
    }

    pub fn event_type(&self) -> EngineEventType {
        match self {
            EngineEvent::EntityDeleted { .. } => EngineEventType::EntityDeleted,
            EngineEvent::VariableDeleted { .. } => EngineEventType::VariableDeleted,
        }
    }

    /// Id of the entity the event is about
    pub fn entity_id(&self) -> &str {
        match self {
            EngineEvent::EntityDeleted { entity } => &entity.id,
            EngineEvent::VariableDeleted { variable_id, .. } => variable_id,
        }
    }
}

/// Delivers engine events to listeners
pub trait EventDispatcher {
    /// Whether any delivery should be attempted at all
    fn is_enabled(&self) -> bool;

    /// Deliver one event tagged with the engine key
    ///
    /// # Errors
    ///
    /// Implementations return `DispatchFailed` when a listener rejects the
    /// event. Callers propagate it unchanged.
    fn dispatch(&self, event: EngineEvent, engine_key: &str) -> Result<()>;
}

/// Dispatcher used when no listeners are configured: disabled, drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventDispatcher;

impl EventDispatcher for NoopEventDispatcher {
    fn is_enabled(&self) -> bool {
        false
    }

    fn dispatch(&self, _event: EngineEvent, _engine_key: &str) -> Result<()> {
        Ok(())
    }
}
