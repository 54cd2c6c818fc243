// src/lib.rs

//! Scripted fake subprocesses for tests.
//!
//! Code that shells out takes a [`exec::CommandRunner`]. In production that
//! is [`exec::SystemRunner`]; in tests it is a [`responder::SingleResponder`]
//! or [`responder::SequenceResponder`], which check the command line they
//! are given and hand back a process that prints scripted output and exits
//! with a scripted code. See [`helper`] for how the fake process runs.

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod helper;
pub mod logging;
pub mod responder;
pub mod script;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::HelperProgram;
use crate::exec::CommandRunner;
use crate::script::{ScriptFile, load_and_validate};

pub use crate::config::{ACTIVATION_ENV, HELPER_MARKER};
pub use crate::exec::{ExecutableHandle, SystemRunner};
pub use crate::responder::{InvocationSpec, SequenceResponder, SingleResponder};

/// High-level entry point used by `main.rs`.
pub async fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Check { script } => {
            let script = load_script(&script)?;
            print_dry_run(&script);
            Ok(())
        }
        Command::Replay { script, calls } => {
            let script = load_script(&script)?;
            replay(script, calls).await
        }
        Command::HelperProcess { args } => {
            // Reaching this point means the activation variable was absent.
            debug!(?args, "helper-process invoked without activation; nothing to do");
            Ok(())
        }
    }
}

fn load_script(path: &Path) -> Result<ScriptFile> {
    load_and_validate(path).with_context(|| format!("loading script {}", path.display()))
}

/// Run every scripted call through a sequence responder hosted by this very
/// binary and report what each fake process did.
async fn replay(script: ScriptFile, calls: Option<usize>) -> Result<()> {
    let calls = calls.unwrap_or(script.steps().len());
    let helper = HelperProgram::current_exe()?;
    let mut responder = script.into_responder(helper)?;

    info!(calls, steps = responder.step_count(), "replaying script");

    for call in 0..calls {
        let spec = responder.peek();
        let cmdline = spec
            .expected_cmdline
            .clone()
            .unwrap_or_else(|| "fakerun-replay".to_string());
        let (command, args) = split_cmdline(&cmdline);

        let handle = responder.run(command, &args);
        let output = handle
            .output_async()
            .await
            .with_context(|| format!("running fake process for call {call}"))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        println!(
            "call {call}: `{cmdline}` -> exit {}, stdout {:?}",
            output
                .status
                .code()
                .map_or_else(|| "signal".to_string(), |c| c.to_string()),
            stdout
        );
    }

    Ok(())
}

/// Inverse of [`responder::command_line`]: splitting on single spaces and
/// re-joining yields the original string exactly.
fn split_cmdline(cmdline: &str) -> (&str, Vec<&str>) {
    let mut parts = cmdline.split(' ');
    let command = parts.next().unwrap_or_default();
    (command, parts.collect())
}

/// Simple dry-run output: print every step.
fn print_dry_run(script: &ScriptFile) {
    println!("fakerun script");
    println!("steps ({}):", script.steps().len());
    for (index, step) in script.steps().iter().enumerate() {
        println!("  - step {index}");
        match &step.cmdline {
            Some(cmdline) => println!("      cmdline: {cmdline}"),
            None => println!("      cmdline: <any>"),
        }
        if !step.output.is_empty() {
            println!("      output: {:?}", step.output);
        }
        println!("      exit_code: {}", step.exit_code);
    }
    println!("the last step repeats for any further calls");

    debug!("dry-run complete (no execution)");
}
