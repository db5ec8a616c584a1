pub mod child;
pub mod counter;
pub mod event_subscription;
pub mod execution;
pub mod task;
pub mod variable;

pub use child::{ChildKind, ExecutionChild};
pub use counter::ExecutionCounter;
pub use event_subscription::EventSubscription;
pub use execution::{AsCountingExecution, ExecutionCounts, ExecutionEntity};
pub use task::{AsCountingTask, TaskCounts, TaskEntity};
pub use variable::VariableInstance;
