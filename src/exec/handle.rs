// src/exec/handle.rs

//! Deferred process handle returned by every [`CommandRunner`].
//!
//! Nothing runs until the owner calls one of the executing methods. Sync
//! callers use [`ExecutableHandle::output`] / [`ExecutableHandle::status`];
//! async callers convert with [`ExecutableHandle::into_tokio`] or use
//! [`ExecutableHandle::output_async`]. Waiting, timeouts and killing are the
//! owner's business.
//!
//! [`CommandRunner`]: crate::exec::CommandRunner

use std::ffi::OsStr;
use std::process::{Child, Command, ExitStatus, Output, Stdio};

use anyhow::Context;
use tracing::debug;

use crate::errors::Result;

#[derive(Debug)]
pub struct ExecutableHandle {
    command: Command,
}

impl ExecutableHandle {
    pub fn new(command: Command) -> Self {
        Self { command }
    }

    pub fn program(&self) -> &OsStr {
        self.command.get_program()
    }

    pub fn args(&self) -> Vec<&OsStr> {
        self.command.get_args().collect()
    }

    /// Value explicitly set for `key` on this handle, if any.
    pub fn env(&self, key: &str) -> Option<&OsStr> {
        self.command
            .get_envs()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v)
    }

    /// Start the process and collect its exit status and output.
    pub fn output(mut self) -> Result<Output> {
        debug!(program = ?self.program(), "running handle to completion");
        let output = self
            .command
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("running {:?}", self.command.get_program()))?;
        Ok(output)
    }

    /// Start the process with inherited stdio and wait for it.
    pub fn status(mut self) -> Result<ExitStatus> {
        let status = self
            .command
            .status()
            .with_context(|| format!("running {:?}", self.command.get_program()))?;
        Ok(status)
    }

    /// Start the process without waiting.
    pub fn spawn(mut self) -> Result<Child> {
        let child = self
            .command
            .spawn()
            .with_context(|| format!("spawning {:?}", self.command.get_program()))?;
        Ok(child)
    }

    pub fn into_std(self) -> Command {
        self.command
    }

    /// Convert into a `tokio` command; the child is killed if dropped.
    pub fn into_tokio(self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::from(self.command);
        cmd.kill_on_drop(true);
        cmd
    }

    /// Async counterpart of [`ExecutableHandle::output`].
    pub async fn output_async(self) -> Result<Output> {
        let program = self.program().to_owned();
        let output = self
            .into_tokio()
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("running {program:?}"))?;
        Ok(output)
    }
}

impl From<Command> for ExecutableHandle {
    fn from(command: Command) -> Self {
        Self::new(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_program_args_and_env() {
        let mut cmd = Command::new("prog");
        cmd.args(["a", "b"]).env("KEY", "value");
        let handle = ExecutableHandle::from(cmd);

        assert_eq!(handle.program(), "prog");
        assert_eq!(handle.args(), vec![OsStr::new("a"), OsStr::new("b")]);
        assert_eq!(handle.env("KEY"), Some(OsStr::new("value")));
        assert_eq!(handle.env("MISSING"), None);
    }

    #[test]
    fn spawning_a_missing_program_is_an_error() {
        let handle = ExecutableHandle::new(Command::new("/no/such/program/fakerun-test"));
        assert!(handle.output().is_err());
    }
}
