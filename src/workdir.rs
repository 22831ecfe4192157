use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

/// Returns the directory containing the running executable.
///
/// Everything the launcher touches (`venv`, `app.py`) is resolved against
/// this directory, so invocation behaves the same from any caller working
/// directory. Symlinks are resolved first so a linked binary still anchors
/// at its real install location.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe()?.canonicalize()?;
    match exe.parent() {
        Some(dir) => {
            debug!(dir = %dir.display(), "resolved launcher directory");
            Ok(dir.to_path_buf())
        }
        None => Err(Error::LauncherDirUnavailable(exe)),
    }
}
