// src/config/mod.rs

//! Fixed names shared between responders, the helper entrypoint and the CLI.
//!
//! - Protocol constants (activation variable, argv marker + separator).
//! - Environment variables the crate reads.
//! - [`HelperProgram`] resolution (`locate.rs`).

pub mod locate;

pub use locate::HelperProgram;

/// Environment variable that switches the helper entrypoint on.
///
/// Handles built by responders carry `NEED_FAKERUN_HELPER_PROCESS=1` and
/// nothing else in their environment.
pub const ACTIVATION_ENV: &str = "NEED_FAKERUN_HELPER_PROCESS";

/// Value [`ACTIVATION_ENV`] must hold for the helper to act.
pub const ACTIVATION_VALUE: &str = "1";

/// First positional argument of a helper invocation; selects the helper
/// routine (it is also the hidden CLI subcommand name).
pub const HELPER_MARKER: &str = "helper-process";

/// Second positional argument of a helper invocation.
pub const HELPER_SEPARATOR: &str = "--";

/// Log level override for the `fakerun` binary.
pub const LOG_ENV: &str = "FAKERUN_LOG";

/// Explicit path to the executable hosting the helper entrypoint.
pub const HELPER_BIN_ENV: &str = "FAKERUN_HELPER_BIN";

/// File name (without platform suffix) of the bundled helper host.
pub const HELPER_BIN_NAME: &str = "fakerun";
