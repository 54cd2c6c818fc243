// src/errors.rs

//! Crate-wide error types.
//!
//! Two families live here:
//! - [`ScriptingError`]: mistakes in how a test scripted its fake processes.
//!   Responders never return these; they panic with them, because the failure
//!   belongs to the test author and cannot be reported through the caller's
//!   own result type.
//! - [`FakerunError`]: ordinary recoverable errors (loading script files,
//!   locating the helper program, spawning handles).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptingError {
    #[error("Command line '{actual}' does not match expected '{expected}'.")]
    CommandLineMismatch { actual: String, expected: String },

    #[error(
        "scripted sequences are not of the same length \
         (cmdlines = {cmdlines}, outputs = {outputs}, exit_codes = {exit_codes})"
    )]
    LengthMismatch {
        cmdlines: usize,
        outputs: usize,
        exit_codes: usize,
    },

    #[error("scripted sequences must contain at least one entry")]
    EmptySequence,
}

#[derive(Error, Debug)]
pub enum FakerunError {
    #[error("Script error: {0}")]
    ScriptError(String),

    #[error(transparent)]
    Scripting(#[from] ScriptingError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("helper program not found: {0}")]
    HelperNotFound(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FakerunError>;
