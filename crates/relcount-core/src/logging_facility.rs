//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`) for
//!   the operations that can fail
//! - `tracing::debug!` for every counter adjustment or skip, with `op`,
//!   `counter` and parent id fields
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use relcount_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
