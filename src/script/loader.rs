// src/script/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::script::model::{RawScriptFile, ScriptFile};

/// Read and deserialize a script file without validating it.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawScriptFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let script: RawScriptFile = toml::from_str(&contents)?;
    debug!(path = ?path, steps = script.step.len(), "loaded script file");

    Ok(script)
}

/// Load a script file and validate it. This is the entry point tests use.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ScriptFile> {
    let raw = load_from_path(path)?;
    ScriptFile::try_from(raw)
}

/// Same as [`load_and_validate`] for inline TOML.
pub fn parse_and_validate(contents: &str) -> Result<ScriptFile> {
    let raw: RawScriptFile = toml::from_str(contents)?;
    ScriptFile::try_from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FakerunError;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let script = parse_and_validate(
            r#"
[[step]]
cmdline = "make"

[[step]]
exit_code = 2
"#,
        )
        .unwrap();

        let steps = script.steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].cmdline.as_deref(), Some("make"));
        assert_eq!(steps[0].output, "");
        assert_eq!(steps[0].exit_code, 0);
        assert_eq!(steps[1].cmdline, None);
        assert_eq!(steps[1].exit_code, 2);
    }

    #[test]
    fn unknown_keys_are_a_toml_error() {
        let err = parse_and_validate("[[step]]\ncommand = \"ls\"\n").unwrap_err();
        assert!(matches!(err, FakerunError::TomlError(_)));
    }

    #[test]
    fn out_of_range_exit_code_is_a_toml_error() {
        let err = parse_and_validate("[[step]]\nexit_code = 4294967296\n").unwrap_err();
        assert!(matches!(err, FakerunError::TomlError(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_and_validate("/no/such/dir/script.toml").unwrap_err();
        assert!(matches!(err, FakerunError::IoError(_)));
    }
}
