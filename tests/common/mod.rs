#![allow(dead_code)]

use std::process::Output;

use fakerun::config::HelperProgram;

pub use fakerun_test_utils::builders;
pub use fakerun_test_utils::{init_tracing, with_timeout};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// The `fakerun` binary built for this test run.
pub fn helper() -> HelperProgram {
    HelperProgram::new(env!("CARGO_BIN_EXE_fakerun"))
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
