// src/logging.rs

//! Diagnostics for the `fakerun` CLI.
//!
//! The level comes from `--log-level`, else from `FAKERUN_LOG`, else `info`.
//! Output goes to stderr; stdout carries the replay report and, on the helper
//! path, the scripted output, which never passes through here.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;
use crate::config::LOG_ENV;

const DEFAULT_LEVEL: Level = Level::INFO;

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Install the stderr subscriber for the CLI.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let from_env = std::env::var(LOG_ENV).ok();
    let level = resolve_level(cli_level, from_env.as_deref());

    fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

/// Pick the effective level. Unknown `FAKERUN_LOG` values fall back to the
/// default instead of failing startup.
pub(crate) fn resolve_level(cli_level: Option<LogLevel>, from_env: Option<&str>) -> Level {
    if let Some(level) = cli_level {
        return level.into();
    }

    from_env
        .map(str::trim)
        .and_then(|raw| {
            if raw.eq_ignore_ascii_case("warning") {
                Some(Level::WARN)
            } else {
                Level::from_str(raw).ok()
            }
        })
        .unwrap_or(DEFAULT_LEVEL)
}
