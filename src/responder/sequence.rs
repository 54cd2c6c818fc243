// src/responder/sequence.rs

use tracing::debug;

use crate::config::HelperProgram;
use crate::errors::{Result, ScriptingError};
use crate::exec::{CommandRunner, ExecutableHandle};

use super::invocation::InvocationSpec;
use super::single::SingleResponder;

/// Answers calls from an ordered script.
///
/// Internally three parallel lists (command lines, outputs, exit codes) and a
/// cursor. Each call uses the entry at the cursor and then moves on, except
/// on the last entry, which is repeated for every further call. A one-entry
/// script therefore means "always answer like this".
#[derive(Debug, Clone)]
pub struct SequenceResponder {
    cmdlines: Vec<Option<String>>,
    outputs: Vec<String>,
    exit_codes: Vec<i32>,
    cursor: usize,
    helper: Option<HelperProgram>,
}

impl SequenceResponder {
    /// Build from three parallel lists.
    ///
    /// # Panics
    ///
    /// If the lists differ in length or are empty.
    pub fn new<S, O>(
        cmdlines: impl IntoIterator<Item = Option<S>>,
        outputs: impl IntoIterator<Item = O>,
        exit_codes: impl IntoIterator<Item = i32>,
    ) -> Self
    where
        S: Into<String>,
        O: Into<String>,
    {
        Self::try_new(cmdlines, outputs, exit_codes).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Fallible form of [`SequenceResponder::new`], for scripts that come
    /// from outside the test source (e.g. fixture files).
    pub fn try_new<S, O>(
        cmdlines: impl IntoIterator<Item = Option<S>>,
        outputs: impl IntoIterator<Item = O>,
        exit_codes: impl IntoIterator<Item = i32>,
    ) -> Result<Self>
    where
        S: Into<String>,
        O: Into<String>,
    {
        let cmdlines: Vec<Option<String>> =
            cmdlines.into_iter().map(|c| c.map(Into::into)).collect();
        let outputs: Vec<String> = outputs.into_iter().map(Into::into).collect();
        let exit_codes: Vec<i32> = exit_codes.into_iter().collect();

        check_lengths(cmdlines.len(), outputs.len(), exit_codes.len())?;

        Ok(Self {
            cmdlines,
            outputs,
            exit_codes,
            cursor: 0,
            helper: None,
        })
    }

    /// Build from whole invocation specs, in call order.
    ///
    /// # Panics
    ///
    /// If `specs` is empty.
    pub fn from_specs(specs: impl IntoIterator<Item = InvocationSpec>) -> Self {
        Self::try_from_specs(specs).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Fallible form of [`SequenceResponder::from_specs`].
    pub fn try_from_specs(specs: impl IntoIterator<Item = InvocationSpec>) -> Result<Self> {
        let (cmdlines, rest): (Vec<_>, Vec<_>) = specs
            .into_iter()
            .map(|s| (s.expected_cmdline, (s.output, s.exit_code)))
            .unzip();
        let (outputs, exit_codes): (Vec<_>, Vec<_>) = rest.into_iter().unzip();
        Self::try_new(cmdlines, outputs, exit_codes)
    }

    /// Pin the helper host instead of locating it on each call.
    pub fn with_helper(mut self, helper: HelperProgram) -> Self {
        self.helper = Some(helper);
        self
    }

    /// Number of scripted entries.
    pub fn step_count(&self) -> usize {
        self.cmdlines.len()
    }

    /// Index of the entry the next call will use.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// True once every further call repeats the last entry.
    pub fn on_last_step(&self) -> bool {
        self.cursor + 1 >= self.cmdlines.len()
    }

    /// The entry the next call will use.
    pub fn peek(&self) -> InvocationSpec {
        InvocationSpec {
            expected_cmdline: self.cmdlines[self.cursor].clone(),
            output: self.outputs[self.cursor].clone(),
            exit_code: self.exit_codes[self.cursor],
        }
    }

    fn advance(&mut self) -> InvocationSpec {
        let lengths = check_lengths(
            self.cmdlines.len(),
            self.outputs.len(),
            self.exit_codes.len(),
        );
        if let Err(err) = lengths {
            panic!("{err}");
        }

        let step = self.cursor;
        let spec = self.peek();
        if !self.on_last_step() {
            self.cursor += 1;
        }

        debug!(
            step,
            steps = self.cmdlines.len(),
            repeating = step == self.cursor,
            "consumed scripted invocation"
        );
        spec
    }
}

impl CommandRunner for SequenceResponder {
    /// # Panics
    ///
    /// On a command line mismatch with the current entry, or when no helper
    /// host was given and none can be located.
    fn run(&mut self, command: &str, args: &[&str]) -> ExecutableHandle {
        let spec = self.advance();
        SingleResponder::with_parts(spec, self.helper.clone()).respond(command, args)
    }
}

fn check_lengths(
    cmdlines: usize,
    outputs: usize,
    exit_codes: usize,
) -> std::result::Result<(), ScriptingError> {
    if cmdlines != outputs || cmdlines != exit_codes {
        return Err(ScriptingError::LengthMismatch {
            cmdlines,
            outputs,
            exit_codes,
        });
    }
    if cmdlines == 0 {
        return Err(ScriptingError::EmptySequence);
    }
    Ok(())
}
