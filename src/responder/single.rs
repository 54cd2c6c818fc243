// src/responder/single.rs

use std::process::Command;

use tracing::debug;

use crate::config::{
    ACTIVATION_ENV, ACTIVATION_VALUE, HELPER_MARKER, HELPER_SEPARATOR, HelperProgram,
};
use crate::errors::ScriptingError;
use crate::exec::{CommandRunner, ExecutableHandle};

use super::invocation::{InvocationSpec, command_line};

/// Answers every call with the same scripted fake process.
///
/// Immutable after construction, so it can be called any number of times.
///
/// Without [`SingleResponder::with_helper`] the helper host is located on
/// each call (see [`HelperProgram::locate`]); failing to find one panics.
#[derive(Debug, Clone)]
pub struct SingleResponder {
    spec: InvocationSpec,
    helper: Option<HelperProgram>,
}

impl SingleResponder {
    /// `expected_cmdline = None` skips the command line check.
    pub fn new(expected_cmdline: Option<&str>, output: impl Into<String>, exit_code: i32) -> Self {
        Self::from_spec(InvocationSpec::new(expected_cmdline, output, exit_code))
    }

    pub fn from_spec(spec: InvocationSpec) -> Self {
        Self::with_parts(spec, None)
    }

    pub(crate) fn with_parts(spec: InvocationSpec, helper: Option<HelperProgram>) -> Self {
        Self { spec, helper }
    }

    pub fn with_helper(mut self, helper: HelperProgram) -> Self {
        self.helper = Some(helper);
        self
    }

    pub fn spec(&self) -> &InvocationSpec {
        &self.spec
    }

    /// Helper host pinned with [`SingleResponder::with_helper`], if any.
    pub fn helper(&self) -> Option<&HelperProgram> {
        self.helper.as_ref()
    }

    /// Check the command line and build the fake process handle.
    ///
    /// # Panics
    ///
    /// If an expected command line is scripted and `command args...` does
    /// not match it exactly, or if no helper host was given and none can be
    /// located.
    pub fn respond(&self, command: &str, args: &[&str]) -> ExecutableHandle {
        let actual = command_line(command, args);

        if let Some(expected) = &self.spec.expected_cmdline {
            if actual != *expected {
                panic!(
                    "{}",
                    ScriptingError::CommandLineMismatch {
                        actual,
                        expected: expected.clone(),
                    }
                );
            }
        }

        debug!(
            cmdline = %actual,
            exit_code = self.spec.exit_code,
            output_len = self.spec.output.len(),
            "building fake process handle"
        );

        let helper = match &self.helper {
            Some(helper) => helper.clone(),
            None => HelperProgram::locate_required(),
        };

        let mut cmd = Command::new(helper.path());
        cmd.arg(HELPER_MARKER)
            .arg(HELPER_SEPARATOR)
            .arg(self.spec.exit_code.to_string())
            .arg(&self.spec.output)
            .env_clear()
            .env(ACTIVATION_ENV, ACTIVATION_VALUE);

        ExecutableHandle::new(cmd)
    }
}

impl CommandRunner for SingleResponder {
    fn run(&mut self, command: &str, args: &[&str]) -> ExecutableHandle {
        self.respond(command, args)
    }
}
