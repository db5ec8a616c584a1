//! relcount core - denormalized relationship counters for execution and task parents
//!
//! Parent entities (executions, tasks) carry cached counts of their children
//! so callers can answer "does this execution still have jobs?" without
//! querying the child tables. This crate provides:
//! - The two-level enablement gate (global switch AND per-entity snapshot)
//! - Insert/delete hooks that route a child to its owning parent and adjust
//!   the matching counter
//! - Read accessors that degrade to zero when a parent cannot count
//! - The collaborator seams (policy, repository, event dispatcher) plus an
//!   in-memory repository for embedders without a storage engine

pub mod accessor;
pub mod config;
pub mod enablement;
pub mod errors;
pub mod events;
pub mod logging_facility;
pub mod model;
pub mod mutators;
pub mod repository;

// Re-export commonly used types
pub use config::{CountingConfig, CountingPolicy, PerformanceSettings};
pub use enablement::EnablementResolver;
pub use errors::{ExError, ExErrorKind, RelCountError, Result};
pub use events::{EngineEvent, EngineEventType, EventDispatcher, NoopEventDispatcher};
pub use model::{
    AsCountingExecution, AsCountingTask, ChildKind, EventSubscription, ExecutionChild,
    ExecutionCounter, ExecutionCounts, ExecutionEntity, TaskCounts, TaskEntity, VariableInstance,
};
pub use mutators::{
    CountingContext, EventSubscriptionCountMutator, ExecutionChildCountMutator,
    VariableCountMutator,
};
pub use repository::{ParentRepository, Store};
