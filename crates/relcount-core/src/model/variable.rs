use relcount_core_types::ScopeType;
use serde::{Deserialize, Serialize};

/// Variable instance - a named value owned by a task, an execution, or a
/// dependent scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableInstance {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub value: serde_json::Value,

    pub task_id: Option<String>,
    pub execution_id: Option<String>,
    pub process_instance_id: Option<String>,

    /// Secondary scope this variable was created in, if any
    pub scope_type: Option<ScopeType>,
    pub scope_id: Option<String>,

    /// For dependent scopes: the execution the scope hangs off
    pub sub_scope_id: Option<String>,
}

impl VariableInstance {
    /// Create an unattached variable with a null value
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            value: serde_json::Value::Null,
            task_id: None,
            execution_id: None,
            process_instance_id: None,
            scope_type: None,
            scope_id: None,
            sub_scope_id: None,
        }
    }

    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = value;
        self
    }

    pub fn with_task_id(mut self, task_id: String) -> Self {
        self.task_id = Some(task_id);
        self
    }

    pub fn with_execution_id(mut self, execution_id: String) -> Self {
        self.execution_id = Some(execution_id);
        self
    }

    pub fn with_process_instance_id(mut self, process_instance_id: String) -> Self {
        self.process_instance_id = Some(process_instance_id);
        self
    }

    /// Attach this variable to a secondary scope
    pub fn with_scope(
        mut self,
        scope_type: ScopeType,
        scope_id: String,
        sub_scope_id: Option<String>,
    ) -> Self {
        self.scope_type = Some(scope_type);
        self.scope_id = Some(scope_id);
        self.sub_scope_id = sub_scope_id;
        self
    }

    /// Whether the scope tag marks this variable as owned by an execution
    /// through `sub_scope_id`
    pub fn is_in_dependent_scope(&self) -> bool {
        self.scope_type.is_some_and(|s| s.is_bpmn_dependent())
    }
}
