// src/responder/mod.rs

//! Fake [`CommandRunner`](crate::exec::CommandRunner) implementations.
//!
//! - [`SingleResponder`] always answers with the same scripted invocation.
//! - [`SequenceResponder`] walks an ordered script and keeps repeating the
//!   last entry once it gets there.
//!
//! Both check the command line they were called with against the script and
//! panic on a mismatch: a wrong command line is a bug in the test, not a
//! condition the code under test should see as an error.

pub mod invocation;
pub mod sequence;
pub mod single;

pub use invocation::{InvocationSpec, command_line};
pub use sequence::SequenceResponder;
pub use single::SingleResponder;
