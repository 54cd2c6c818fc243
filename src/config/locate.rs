// src/config/locate.rs

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{HELPER_BIN_ENV, HELPER_BIN_NAME};
use crate::errors::{FakerunError, Result};

/// Executable that hosts the helper entrypoint.
///
/// Any binary that calls [`crate::helper::run_if_activated`] first thing in
/// `main` qualifies; the crate ships one (`fakerun`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperProgram {
    path: PathBuf,
}

impl HelperProgram {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The currently running executable (self re-entry).
    pub fn current_exe() -> Result<Self> {
        Ok(Self::new(std::env::current_exe()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve the helper host.
    ///
    /// Resolution order:
    /// 1. `FAKERUN_HELPER_BIN`, which must point at an existing file.
    /// 2. A `fakerun` executable in the cargo target dir of the running test
    ///    binary (tests live in `target/<profile>/deps/`, binaries one level up).
    ///
    /// The running executable itself is never a candidate: a libtest binary
    /// would read the helper arguments as test filters.
    pub fn locate() -> Result<Self> {
        let current = std::env::current_exe()?;
        let from_env = std::env::var_os(HELPER_BIN_ENV);
        locate_from(from_env.as_deref(), &current)
    }

    /// [`HelperProgram::locate`] for responders that were not given a helper.
    ///
    /// # Panics
    ///
    /// When no helper host can be found. Crates other than this one do not
    /// get the `fakerun` binary built into their target dir, so they must set
    /// `FAKERUN_HELPER_BIN` or pin a helper with `with_helper`.
    pub fn locate_required() -> Self {
        Self::locate().unwrap_or_else(|err| {
            panic!("{err}; set {HELPER_BIN_ENV} or call `with_helper` on the responder")
        })
    }
}

fn locate_from(from_env: Option<&OsStr>, current_exe: &Path) -> Result<HelperProgram> {
    if let Some(explicit) = from_env.filter(|v| !v.is_empty()) {
        let path = PathBuf::from(explicit);
        if !path.is_file() {
            return Err(FakerunError::HelperNotFound(format!(
                "{HELPER_BIN_ENV} points at {path:?}, which is not a file"
            )));
        }
        debug!(path = ?path, "helper program from environment");
        return Ok(HelperProgram::new(path));
    }

    let bin_file = format!("{HELPER_BIN_NAME}{}", std::env::consts::EXE_SUFFIX);
    let candidates = current_exe
        .parent()
        .into_iter()
        .flat_map(|dir| {
            let up = dir
                .file_name()
                .filter(|name| *name == "deps")
                .and_then(|_| dir.parent());
            [Some(dir), up]
        })
        .flatten()
        .map(|dir| dir.join(&bin_file));

    for candidate in candidates {
        if candidate.is_file() {
            debug!(path = ?candidate, "helper program found next to current executable");
            return Ok(HelperProgram::new(candidate));
        }
    }

    Err(FakerunError::HelperNotFound(format!(
        "no `{bin_file}` next to {current_exe:?} and {HELPER_BIN_ENV} is not set"
    )))
}
