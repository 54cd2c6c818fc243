// src/script/validate.rs

use std::ops::RangeInclusive;

use crate::errors::{FakerunError, Result};
use crate::script::model::{RawScriptFile, ScriptFile};

impl TryFrom<RawScriptFile> for ScriptFile {
    type Error = FakerunError;

    fn try_from(raw: RawScriptFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_script(&raw)?;
        Ok(ScriptFile::new_unchecked(raw.step))
    }
}

/// Exit codes a parent process reads back unchanged.
const OBSERVABLE_EXIT_CODES: RangeInclusive<i32> = 0..=255;

fn validate_raw_script(script: &RawScriptFile) -> Result<()> {
    ensure_has_steps(script)?;
    validate_cmdlines(script)?;
    validate_exit_codes(script)?;
    Ok(())
}

fn ensure_has_steps(script: &RawScriptFile) -> Result<()> {
    if script.step.is_empty() {
        return Err(FakerunError::ScriptError(
            "script must contain at least one [[step]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_cmdlines(script: &RawScriptFile) -> Result<()> {
    for (index, step) in script.step.iter().enumerate() {
        if step.cmdline.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(FakerunError::ScriptError(format!(
                "step {index} has an empty `cmdline`; omit it to accept any command line"
            )));
        }
    }
    Ok(())
}

fn validate_exit_codes(script: &RawScriptFile) -> Result<()> {
    for (index, step) in script.step.iter().enumerate() {
        if !OBSERVABLE_EXIT_CODES.contains(&step.exit_code) {
            return Err(FakerunError::ScriptError(format!(
                "step {index} has exit_code {}; it must be within 0..=255",
                step.exit_code
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::model::StepConfig;

    #[test]
    fn empty_script_is_rejected() {
        let err = ScriptFile::try_from(RawScriptFile::default()).unwrap_err();
        match err {
            FakerunError::ScriptError(msg) => assert!(msg.contains("at least one")),
            other => panic!("expected ScriptError, got {other:?}"),
        }
    }

    #[test]
    fn blank_cmdline_is_rejected() {
        let raw = RawScriptFile {
            step: vec![
                StepConfig::default(),
                StepConfig {
                    cmdline: Some("  ".to_string()),
                    ..StepConfig::default()
                },
            ],
        };
        let err = ScriptFile::try_from(raw).unwrap_err();
        assert!(err.to_string().contains("step 1"));
    }

    #[test]
    fn exit_codes_outside_a_byte_are_rejected() {
        for code in [256, -1] {
            let raw = RawScriptFile {
                step: vec![StepConfig {
                    exit_code: code,
                    ..StepConfig::default()
                }],
            };
            let err = ScriptFile::try_from(raw).unwrap_err();
            assert!(err.to_string().contains(&format!("exit_code {code}")));
        }
    }

    #[test]
    fn byte_range_bounds_are_accepted() {
        let raw = RawScriptFile {
            step: vec![
                StepConfig::default(),
                StepConfig {
                    exit_code: 255,
                    ..StepConfig::default()
                },
            ],
        };
        assert_eq!(ScriptFile::try_from(raw).unwrap().steps().len(), 2);
    }
}
