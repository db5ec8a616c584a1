//! Core types shared across relcount crates
//!
//! This crate provides the small vocabulary that both the counting kernel
//! and its embedders agree on:
//!
//! - **Schema constants**: canonical structured-log field keys and event names
//! - **Scope types**: the tag carried by variables that live in a secondary
//!   scope, and the set of scopes whose variables count against an execution

pub mod schema;
pub mod scope;

pub use scope::{ScopeType, BPMN_DEPENDENT};
