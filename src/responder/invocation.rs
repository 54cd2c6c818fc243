// src/responder/invocation.rs

/// One scripted fake process: what it must be called with, what it prints,
/// and how it exits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvocationSpec {
    /// Exact command line the caller must use; `None` accepts anything.
    pub expected_cmdline: Option<String>,
    pub output: String,
    /// Passed to `std::process::exit` by the helper. On Unix the parent only
    /// sees the low 8 bits, so `256` reads back as `0` and `-1` as `255`.
    pub exit_code: i32,
}

impl InvocationSpec {
    pub fn new(
        expected_cmdline: Option<&str>,
        output: impl Into<String>,
        exit_code: i32,
    ) -> Self {
        Self {
            expected_cmdline: expected_cmdline.map(str::to_string),
            output: output.into(),
            exit_code,
        }
    }

    /// Accept any command line.
    pub fn any(output: impl Into<String>, exit_code: i32) -> Self {
        Self::new(None, output, exit_code)
    }
}

/// `command` and `args` joined by single spaces.
///
/// This is the form `expected_cmdline` is compared against, byte for byte.
pub fn command_line(command: &str, args: &[&str]) -> String {
    std::iter::once(command)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_spaces() {
        assert_eq!(command_line("ls", &["-la", "/tmp"]), "ls -la /tmp");
    }

    #[test]
    fn bare_command_has_no_trailing_space() {
        assert_eq!(command_line("a", &[]), "a");
    }

    #[test]
    fn empty_arguments_are_kept() {
        assert_eq!(command_line("echo", &["", "x"]), "echo  x");
    }
}
