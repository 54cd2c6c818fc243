// tests/single_responder.rs

mod common;
use crate::common::{TestResult, helper, init_tracing, stdout_of};

use anyhow::Context;
use fakerun::SingleResponder;
use fakerun::exec::CommandRunner;

/// Stand-in for production code that shells out through an injected runner.
fn current_branch(runner: &mut impl CommandRunner) -> anyhow::Result<String> {
    let output = runner
        .run("git", &["rev-parse", "--abbrev-ref", "HEAD"])
        .output()?;
    if !output.status.success() {
        anyhow::bail!("git exited with {:?}", output.status.code());
    }
    let branch = String::from_utf8(output.stdout).context("branch name is not UTF-8")?;
    Ok(branch.trim_end().to_string())
}

#[test]
fn matching_command_line_prints_output_and_exits_with_code() -> TestResult {
    init_tracing();

    let mut responder = SingleResponder::new(Some("ls -la"), "file.txt", 0).with_helper(helper());
    let output = responder.run("ls", &["-la"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "file.txt\n");
    assert!(output.stderr.is_empty());
    Ok(())
}

#[test]
fn empty_output_prints_nothing() -> TestResult {
    init_tracing();

    let responder = SingleResponder::new(None, "", 3).with_helper(helper());
    let output = responder.respond("make", &["check"]).output()?;

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout_of(&output), "");
    Ok(())
}

#[test]
fn output_with_spaces_and_newlines_is_verbatim() -> TestResult {
    init_tracing();

    let text = "line one\n  line two";
    let responder = SingleResponder::new(None, text, 0).with_helper(helper());
    let output = responder.respond("cat", &["notes"]).output()?;

    assert_eq!(stdout_of(&output), format!("{text}\n"));
    Ok(())
}

#[test]
fn same_behaviour_on_every_call() -> TestResult {
    init_tracing();

    let mut responder = SingleResponder::new(Some("true"), "", 42).with_helper(helper());
    for _ in 0..3 {
        let output = responder.run("true", &[]).output()?;
        assert_eq!(output.status.code(), Some(42));
    }
    Ok(())
}

#[test]
fn injected_into_code_under_test() -> TestResult {
    init_tracing();

    let mut ok = SingleResponder::new(Some("git rev-parse --abbrev-ref HEAD"), "main", 0)
        .with_helper(helper());
    assert_eq!(current_branch(&mut ok)?, "main");

    let mut failing = SingleResponder::new(None, "", 128).with_helper(helper());
    let err = current_branch(&mut failing).unwrap_err();
    assert!(err.to_string().contains("128"));
    Ok(())
}

#[test]
#[should_panic(expected = "Command line 'ls -l' does not match expected 'ls -la'.")]
fn mismatched_command_line_panics_before_any_process_starts() {
    let mut responder = SingleResponder::new(Some("ls -la"), "file.txt", 0).with_helper(helper());
    responder.run("ls", &["-l"]);
}

#[tokio::test]
async fn handles_can_run_concurrently() -> TestResult {
    common::with_timeout(async {
        init_tracing();

        let handles = (0..4).map(|code| {
            SingleResponder::new(None, format!("worker {code}"), code)
                .with_helper(helper())
                .respond("worker", &[])
        });

        let mut tasks = Vec::new();
        for handle in handles {
            tasks.push(tokio::spawn(handle.output_async()));
        }

        for (code, task) in tasks.into_iter().enumerate() {
            let output = task.await??;
            assert_eq!(output.status.code(), Some(code as i32));
            assert_eq!(stdout_of(&output), format!("worker {code}\n"));
        }
        Ok(())
    })
    .await
}
