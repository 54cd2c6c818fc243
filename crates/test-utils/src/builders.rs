use fakerun::script::{RawScriptFile, ScriptFile, StepConfig};

/// Builder for script files, so tests don't hand-write TOML.
pub struct ScriptBuilder {
    script: RawScriptFile,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self {
            script: RawScriptFile { step: Vec::new() },
        }
    }

    pub fn with_step(mut self, step: StepConfig) -> Self {
        self.script.step.push(step);
        self
    }

    pub fn build(self) -> ScriptFile {
        ScriptFile::try_from(self.script).expect("Failed to build valid script from builder")
    }

    /// TOML text of the script, for tests that go through the loader.
    pub fn to_toml(&self) -> String {
        self.script
            .to_toml_string()
            .expect("script serializes to TOML")
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single `[[step]]`.
pub struct StepBuilder {
    step: StepConfig,
}

impl StepBuilder {
    pub fn new() -> Self {
        Self {
            step: StepConfig::default(),
        }
    }

    pub fn cmdline(mut self, cmdline: &str) -> Self {
        self.step.cmdline = Some(cmdline.to_string());
        self
    }

    pub fn output(mut self, output: &str) -> Self {
        self.step.output = output.to_string();
        self
    }

    pub fn exit_code(mut self, code: i32) -> Self {
        self.step.exit_code = code;
        self
    }

    pub fn build(self) -> StepConfig {
        self.step
    }
}

impl Default for StepBuilder {
    fn default() -> Self {
        Self::new()
    }
}
