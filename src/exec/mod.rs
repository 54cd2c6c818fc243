// src/exec/mod.rs

//! Process execution seam.
//!
//! - [`runner`] provides the `CommandRunner` trait that code under test
//!   depends on, plus `SystemRunner`, the implementation that runs real
//!   programs. The responders in [`crate::responder`] are the fake
//!   implementations.
//! - [`handle`] wraps the not-yet-started process every runner returns.

pub mod handle;
pub mod runner;

pub use handle::ExecutableHandle;
pub use runner::{CommandRunner, SystemRunner};
