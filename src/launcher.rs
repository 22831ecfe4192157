use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use tracing::{debug, info};

use crate::dashboard;
use crate::error::{Error, Result};
use crate::venv::VirtualEnv;
use crate::workdir;

/// The sequential launch procedure: anchor directory, venv precondition,
/// then a foreground dashboard process whose exit status becomes ours.
#[derive(Debug)]
pub struct Launcher {
    root: PathBuf,
    venv: VirtualEnv,
}

impl Launcher {
    /// Launcher anchored at the executable's own directory.
    pub fn from_executable() -> Result<Self> {
        Self::at(workdir::executable_dir()?)
    }

    /// Launcher anchored at an explicit root directory.
    ///
    /// Fails when `root` holds no `venv` directory; the dashboard is never
    /// invoked in that case.
    pub fn at(root: PathBuf) -> Result<Self> {
        let venv = VirtualEnv::discover(&root)?;
        Ok(Self { root, venv })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Runs the dashboard in the foreground and returns its exit code.
    ///
    /// The child inherits stdio, uses the launcher's directory as its working
    /// directory and resolves `streamlit` through the activated environment.
    /// Anything that goes wrong past the spawn (missing entry point, port in
    /// use, a crash) is the dashboard's own failure and is passed through
    /// unchanged.
    pub fn run(&self) -> Result<i32> {
        let mut cmd = dashboard::command(&self.root);
        self.venv.activate(&mut cmd)?;
        debug!(
            command = dashboard::DASHBOARD_COMMAND,
            root = %self.root.display(),
            "invoking dashboard"
        );

        let status = cmd.status().map_err(|e| Error::Launch {
            command: dashboard::DASHBOARD_COMMAND.to_string(),
            source: e,
        })?;
        info!(%status, "dashboard exited");

        Ok(exit_code(status))
    }
}

/// Maps the child's exit status to the code this process exits with.
/// Signal death on Unix follows the shell convention of 128 + signal number.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
