//! Scope type tags for variables
//!
//! A variable normally belongs to a task or an execution directly. Variables
//! created for a secondary scope (an external worker job, a standalone task
//! scope) instead carry a `scope_type` tag and point back at the owning
//! execution through their `sub_scope_id`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of scope a variable was created in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScopeType {
    Bpmn,
    Cmmn,
    Dmn,
    Task,
    ExternalWorker,
}

/// Scopes whose variables are owned by a process execution via `sub_scope_id`
pub const BPMN_DEPENDENT: &[ScopeType] = &[ScopeType::ExternalWorker, ScopeType::Task];

impl ScopeType {
    /// Stable string tag as persisted by the storage layer
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeType::Bpmn => "bpmn",
            ScopeType::Cmmn => "cmmn",
            ScopeType::Dmn => "dmn",
            ScopeType::Task => "task",
            ScopeType::ExternalWorker => "externalWorker",
        }
    }

    /// Parse a persisted tag; unknown tags yield `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bpmn" => Some(ScopeType::Bpmn),
            "cmmn" => Some(ScopeType::Cmmn),
            "dmn" => Some(ScopeType::Dmn),
            "task" => Some(ScopeType::Task),
            "externalWorker" => Some(ScopeType::ExternalWorker),
            _ => None,
        }
    }

    /// Whether variables of this scope count against a process execution
    pub fn is_bpmn_dependent(&self) -> bool {
        BPMN_DEPENDENT.contains(self)
    }
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
