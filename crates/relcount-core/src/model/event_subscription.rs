use serde::{Deserialize, Serialize};

/// Event subscription - a message, signal or compensation listener
/// registered on behalf of an execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSubscription {
    pub id: String,

    /// Subscription kind, e.g. "message", "signal", "compensate"
    pub event_type: String,
    pub event_name: Option<String>,
    pub execution_id: Option<String>,
    pub process_instance_id: Option<String>,
}

impl EventSubscription {
    pub fn new(id: String, event_type: String) -> Self {
        Self {
            id,
            event_type,
            event_name: None,
            execution_id: None,
            process_instance_id: None,
        }
    }

    pub fn with_event_name(mut self, event_name: String) -> Self {
        self.event_name = Some(event_name);
        self
    }

    pub fn with_execution_id(mut self, execution_id: String) -> Self {
        self.execution_id = Some(execution_id);
        self
    }
}
