// src/helper.rs

//! The fake process itself.
//!
//! Handles built by the responders re-run a helper host (normally the
//! `fakerun` binary) as
//!
//! ```text
//! <host> helper-process -- <exit code> <output>
//! ```
//!
//! with `NEED_FAKERUN_HELPER_PROCESS=1` as the only environment variable. The
//! host calls [`run_if_activated`] before anything else in `main`; when both
//! the variable and the marker argument are present it prints the scripted
//! output and exits with the scripted code. Otherwise it returns and the host
//! carries on as normal.
//!
//! The helper never logs: its stdout must contain the scripted output and
//! nothing else.

use std::ffi::OsStr;
use std::io::Write;

use crate::config::{ACTIVATION_ENV, ACTIVATION_VALUE, HELPER_MARKER};

/// Exit code used when the scripted exit code cannot be parsed.
pub const MALFORMED_EXIT_CODE: i32 = 1;

/// What an activated helper does: optionally print one line, then exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperInvocation {
    pub exit_code: i32,
    pub line: Option<String>,
}

impl HelperInvocation {
    /// Decode the helper's full argv (including the program name).
    ///
    /// - `argv[3]` is the exit code; missing or malformed means
    ///   [`MALFORMED_EXIT_CODE`].
    /// - `argv[4]` is printed when argv has exactly five entries and it is
    ///   non-empty.
    pub fn from_args<S: AsRef<str>>(argv: &[S]) -> Self {
        let exit_code = argv
            .get(3)
            .and_then(|raw| raw.as_ref().parse::<i32>().ok())
            .unwrap_or(MALFORMED_EXIT_CODE);

        let line = match argv {
            [_, _, _, _, output] if !output.as_ref().is_empty() => {
                Some(output.as_ref().to_string())
            }
            _ => None,
        };

        Self { exit_code, line }
    }

    /// Print the line (if any) to stdout and exit the process.
    pub fn emit_and_exit(self) -> ! {
        if let Some(line) = &self.line {
            let mut stdout = std::io::stdout().lock();
            // Nobody to report a broken pipe to; the exit code still matters.
            let _ = writeln!(stdout, "{line}");
            let _ = stdout.flush();
        }
        std::process::exit(self.exit_code)
    }
}

/// True when `value` is the activation signal.
pub fn is_activation_value(value: Option<&OsStr>) -> bool {
    value == Some(OsStr::new(ACTIVATION_VALUE))
}

/// True when this process was started as a fake process.
pub fn is_activated() -> bool {
    is_activation_value(std::env::var_os(ACTIVATION_ENV).as_deref())
}

/// Decide from the environment value and argv whether to act as the helper.
pub fn helper_invocation<S: AsRef<str>>(
    activation: Option<&OsStr>,
    argv: &[S],
) -> Option<HelperInvocation> {
    if !is_activation_value(activation) {
        return None;
    }
    let marker: Option<&str> = argv.get(1).map(|arg| arg.as_ref());
    if marker != Some(HELPER_MARKER) {
        return None;
    }
    Some(HelperInvocation::from_args(argv))
}

/// Entry hook for helper hosts.
///
/// Does not return when activated. Call it first in `main`.
pub fn run_if_activated() {
    let activation = std::env::var_os(ACTIVATION_ENV);
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    if let Some(invocation) = helper_invocation(activation.as_deref(), &argv) {
        invocation.emit_and_exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(rest: &[&str]) -> Vec<String> {
        ["host", "helper-process", "--"]
            .iter()
            .chain(rest)
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn parses_exit_code_and_output() {
        let inv = HelperInvocation::from_args(&argv(&["0", "file.txt"]));
        assert_eq!(inv.exit_code, 0);
        assert_eq!(inv.line.as_deref(), Some("file.txt"));
    }

    #[test]
    fn negative_and_signed_codes_parse() {
        assert_eq!(HelperInvocation::from_args(&argv(&["-2", ""])).exit_code, -2);
        assert_eq!(HelperInvocation::from_args(&argv(&["+4", ""])).exit_code, 4);
    }

    #[test]
    fn malformed_exit_code_falls_back_to_one() {
        let inv = HelperInvocation::from_args(&argv(&["not-a-number"]));
        assert_eq!(inv, HelperInvocation { exit_code: 1, line: None });
    }

    #[test]
    fn missing_exit_code_falls_back_to_one() {
        assert_eq!(HelperInvocation::from_args(&argv(&[])).exit_code, MALFORMED_EXIT_CODE);
    }

    #[test]
    fn empty_output_prints_nothing() {
        assert_eq!(HelperInvocation::from_args(&argv(&["3", ""])).line, None);
    }

    #[test]
    fn extra_arguments_suppress_output() {
        let inv = HelperInvocation::from_args(&argv(&["5", "a", "b"]));
        assert_eq!(inv, HelperInvocation { exit_code: 5, line: None });
    }

    #[test]
    fn requires_activation_value() {
        let args = argv(&["0", "x"]);
        assert!(helper_invocation(None, &args).is_none());
        assert!(helper_invocation(Some(OsStr::new("0")), &args).is_none());
        assert!(helper_invocation(Some(OsStr::new("1")), &args).is_some());
    }

    #[test]
    fn requires_marker_argument() {
        let args = vec!["host".to_string(), "check".to_string(), "--".to_string(), "0".to_string()];
        assert!(helper_invocation(Some(OsStr::new("1")), &args).is_none());
    }
}
