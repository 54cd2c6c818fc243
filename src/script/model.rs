// src/script/model.rs

use serde::{Deserialize, Serialize};

use crate::config::HelperProgram;
use crate::errors::Result;
use crate::responder::{InvocationSpec, SequenceResponder};

/// Script file as read from TOML, before validation.
///
/// ```toml
/// [[step]]
/// cmdline = "git status --porcelain"
/// output = " M src/lib.rs"
/// exit_code = 0
///
/// [[step]]
/// output = "fatal: not a git repository"
/// exit_code = 128
/// ```
///
/// Steps are answered in file order; the last one repeats.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawScriptFile {
    #[serde(default)]
    pub step: Vec<StepConfig>,
}

impl RawScriptFile {
    /// Render back to TOML, e.g. to write a fixture file.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

/// `[[step]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StepConfig {
    /// Exact command line expected; omitted means "don't check".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmdline: Option<String>,

    /// Printed by the fake process (plus a newline) when non-empty.
    #[serde(default)]
    pub output: String,

    /// Must be within `0..=255`; wider values are truncated by the OS.
    #[serde(default)]
    pub exit_code: i32,
}

impl From<StepConfig> for InvocationSpec {
    fn from(step: StepConfig) -> Self {
        InvocationSpec {
            expected_cmdline: step.cmdline,
            output: step.output,
            exit_code: step.exit_code,
        }
    }
}

/// A validated script: at least one step, every `cmdline` non-empty, every
/// `exit_code` observable as-is.
///
/// Only obtainable through `TryFrom<RawScriptFile>` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct ScriptFile {
    steps: Vec<StepConfig>,
}

impl ScriptFile {
    pub(crate) fn new_unchecked(steps: Vec<StepConfig>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[StepConfig] {
        &self.steps
    }

    pub fn specs(&self) -> impl Iterator<Item = InvocationSpec> + '_ {
        self.steps.iter().cloned().map(InvocationSpec::from)
    }

    /// Sequence responder answering with this script's steps.
    pub fn into_responder(self, helper: HelperProgram) -> Result<SequenceResponder> {
        let specs = self.steps.into_iter().map(InvocationSpec::from);
        Ok(SequenceResponder::try_from_specs(specs)?.with_helper(helper))
    }
}
