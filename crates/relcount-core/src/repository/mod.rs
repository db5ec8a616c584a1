//! Parent lookup seam
//!
//! The counting hooks never own parents: they borrow them from a repository
//! for the duration of one adjustment. Real storage engines implement
//! `ParentRepository` over their own session cache; `Store` is an in-memory
//! implementation.

pub mod store;

pub use store::Store;

use crate::model::{AsCountingExecution, AsCountingTask};

/// Lookup of parent entities by id within the current unit of work
///
/// A missing parent is `None`, never an error: the hooks treat it as
/// "nothing to count".
pub trait ParentRepository {
    type Execution: AsCountingExecution;
    type Task: AsCountingTask;

    fn find_task_by_id(&mut self, task_id: &str) -> Option<&mut Self::Task>;

    fn find_execution_by_id(&mut self, execution_id: &str) -> Option<&mut Self::Execution>;
}
