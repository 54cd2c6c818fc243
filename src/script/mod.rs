// src/script/mod.rs

//! Scripted invocation fixtures kept in TOML files.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a script file from disk (`loader.rs`).
//! - Validate it before it turns into a responder (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_and_validate};
pub use model::{RawScriptFile, ScriptFile, StepConfig};
