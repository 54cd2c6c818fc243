// src/exec/runner.rs

//! Pluggable command runner abstraction.
//!
//! Code that shells out takes a `CommandRunner` instead of building
//! `std::process::Command` itself. Production wiring passes
//! [`SystemRunner`]; tests pass a [`SingleResponder`] or
//! [`SequenceResponder`] and get scripted fake processes back.
//!
//! [`SingleResponder`]: crate::responder::SingleResponder
//! [`SequenceResponder`]: crate::responder::SequenceResponder

use std::process::Command;

use tracing::trace;

use super::handle::ExecutableHandle;

/// Builds an unstarted process for `command args...`.
pub trait CommandRunner {
    fn run(&mut self, command: &str, args: &[&str]) -> ExecutableHandle;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, command: &str, args: &[&str]) -> ExecutableHandle {
        (**self).run(command, args)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&mut self, command: &str, args: &[&str]) -> ExecutableHandle {
        (**self).run(command, args)
    }
}

/// Runs the real program.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &str, args: &[&str]) -> ExecutableHandle {
        trace!(command, ?args, "building real process handle");
        let mut cmd = Command::new(command);
        cmd.args(args);
        ExecutableHandle::new(cmd)
    }
}
